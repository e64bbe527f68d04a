use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] bsrcore::error::BackendError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("please configure 'Library Settings' first")]
    Missing,
}
