use async_trait::async_trait;
use bsrcore::{
    error::BackendError,
    settings::{
        LibrarySettings,
        traits::SettingsBackend,
    },
};
use sqlx::Row;

use crate::{
    backend::db::SqliteBackend,
};

async fn get_settings_sqlite(
    backend: &SqliteBackend,
) -> Result<Option<LibrarySettings>, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    default_librarian,
    default_library_convener
FROM
    library_settings
WHERE
    id = 1
        "#,
    )
    .map(|row: sqlx::sqlite::SqliteRow| LibrarySettings {
        default_librarian: row.get("default_librarian"),
        default_library_convener: row.get("default_library_convener"),
    })
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(result)
}

async fn put_settings_sqlite(
    backend: &SqliteBackend,
    settings: &LibrarySettings,
) -> Result<(), BackendError> {
    sqlx::query(
        r#"
INSERT INTO library_settings (
    id,
    default_librarian,
    default_library_convener
)
VALUES ( 1, ?1, ?2 )
ON CONFLICT(id)
DO UPDATE SET
    default_librarian = ?1,
    default_library_convener = ?2
        "#,
    )
    .bind(&settings.default_librarian)
    .bind(&settings.default_library_convener)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

#[async_trait]
impl SettingsBackend for SqliteBackend {
    async fn get_settings(
        &self,
    ) -> Result<Option<LibrarySettings>, BackendError> {
        get_settings_sqlite(&self).await
    }

    async fn put_settings(
        &self,
        settings: &LibrarySettings,
    ) -> Result<(), BackendError> {
        put_settings_sqlite(&self, settings).await
    }
}
