use async_trait::async_trait;
use crate::error::BackendError;
use super::LibrarySettings;

#[async_trait]
pub trait SettingsBackend {
    /// The settings record, or None when it was never configured.
    async fn get_settings(
        &self,
    ) -> Result<Option<LibrarySettings>, BackendError>;
    /// Create or replace the settings record.
    async fn put_settings(
        &self,
        settings: &LibrarySettings,
    ) -> Result<(), BackendError>;
}
