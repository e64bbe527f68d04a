use bsrmodel::backend::db::{
    MigrationProfile,
    SqliteBackend,
};

pub async fn create_sqlite_backend() -> anyhow::Result<SqliteBackend> {
    Ok(SqliteBackend::from_url("sqlite::memory:")
        .await?
        .run_migration_profile(MigrationProfile::Bsrflow)
        .await?)
}
