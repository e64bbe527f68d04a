use bsrflow::platform::{
    Builder,
    Platform,
};

use crate::model::create_sqlite_backend;

pub async fn create_sqlite_platform() -> anyhow::Result<Platform> {
    let platform = Builder::new()
        .platform(create_sqlite_backend().await?)
        .build();
    Ok(platform)
}
