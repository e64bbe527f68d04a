use async_trait::async_trait;
use crate::{
    error::BackendError,
    workflow::State,
};
use super::{
    Approver,
    Request,
    Requests,
};

#[async_trait]
pub trait RequestBackend {
    async fn add_request(
        &self,
        title: &str,
        requested_by: Option<&str>,
    ) -> Result<i64, BackendError>;
    async fn get_request(
        &self,
        id: i64,
    ) -> Result<Request, BackendError>;
    async fn list_requests(
        &self,
    ) -> Result<Requests, BackendError>;
    async fn set_approver(
        &self,
        id: i64,
        slot: Approver,
        user: Option<&str>,
    ) -> Result<(), BackendError>;
    async fn set_workflow_state(
        &self,
        id: i64,
        state: State,
    ) -> Result<(), BackendError>;
    async fn set_submitted(
        &self,
        id: i64,
    ) -> Result<(), BackendError>;
}
