use async_trait::async_trait;
use enumset::EnumSet;
use crate::error::BackendError;
use super::{
    Permit,
    Shares,
};

#[async_trait]
pub trait ShareBackend {
    /// Create or update the share for the user on the request; the
    /// permits replace whatever set was previously granted.  Returns
    /// true when a new share record was created.
    async fn grant_share(
        &self,
        request_id: i64,
        user: &str,
        permits: EnumSet<Permit>,
    ) -> Result<bool, BackendError>;
    /// Remove the user's share on the request.  Returns false when
    /// there was nothing to remove.
    async fn revoke_share(
        &self,
        request_id: i64,
        user: &str,
    ) -> Result<bool, BackendError>;
    async fn get_shares_for_request(
        &self,
        request_id: i64,
    ) -> Result<Shares, BackendError>;
}
