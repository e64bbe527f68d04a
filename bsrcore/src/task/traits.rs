use async_trait::async_trait;
use crate::error::BackendError;
use super::Tasks;

#[async_trait]
pub trait TaskBackend {
    async fn has_open_task(
        &self,
        request_id: i64,
        user: &str,
    ) -> Result<bool, BackendError>;
    async fn add_task(
        &self,
        request_id: i64,
        assigned_to: &str,
        description: &str,
    ) -> Result<i64, BackendError>;
    /// Close every open task the user holds for the request, stamping
    /// the closing time.  Returns the number of tasks closed.
    async fn close_open_tasks(
        &self,
        request_id: i64,
        user: &str,
    ) -> Result<i64, BackendError>;
    async fn get_tasks_for_request(
        &self,
        request_id: i64,
    ) -> Result<Tasks, BackendError>;
}
