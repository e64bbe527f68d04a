use bsrcore::platform::PlatformUrl;
use sqlx::{
    Pool,
    sqlite::SqlitePool
};
use std::sync::Arc;

pub enum MigrationProfile {
    Bsrflow,
}

#[derive(Clone)]
pub struct Backend<T> {
    pub(crate) pool: Arc<T>,
    pub(crate) url: String,
}

impl<T> PlatformUrl for Backend<T> {
    fn url(&self) -> &str {
        self.url.as_ref()
    }
}

impl<DB: sqlx::Database> Backend<Pool<DB>> {
    pub async fn from_url(url: &str) -> Result<Self, sqlx::Error> {
        let pool = Pool::<DB>::connect(url).await?;
        Ok(Self {
            pool: Arc::new(pool),
            url: url.to_string(),
        })
    }

    pub async fn run_migration_profile(
        self,
        profile: MigrationProfile
    ) -> Result<Self, sqlx::Error>
    where
        <DB as sqlx::Database>::Connection: sqlx::migrate::Migrate,
    {
        match profile {
            MigrationProfile::Bsrflow => {
                sqlx::migrate!("migrations/bsrflow").run(&*self.pool).await?;
            }
        }
        Ok(self)
    }
}

pub type SqliteBackend = Backend<SqlitePool>;
