use bsrcore::{
    request::{
        self,
        Approver,
    },
    share::Shares,
    task::Tasks,
    workflow::State,
};

use crate::{
    Platform,
    dispatch::Dispatch,
    error::Error,
};
use super::Request;

impl<'a> Request<'a> {
    pub(crate) fn new(
        platform: &'a Platform,
        request: request::Request,
    ) -> Self {
        Self {
            platform,
            request,
        }
    }

    pub fn id(&self) -> i64 {
        self.request.id
    }

    pub fn title(&'a self) -> &'a str {
        self.request.title.as_ref()
    }

    pub fn workflow_state(&self) -> State {
        self.request.workflow_state
    }

    pub fn approver(&'a self, slot: Approver) -> Option<&'a str> {
        self.request.approver(slot)
    }

    pub fn into_inner(self) -> request::Request {
        self.request
    }

    /// Submit the request for approval.
    ///
    /// The handle keeps the field values read when it was acquired;
    /// re-acquire it to observe the effects.
    pub async fn submit(&self) -> Result<Dispatch, Error> {
        self.platform.submit_request(self.request.id).await
    }

    /// Move the request to the given workflow state.
    pub async fn transition_to(&self, state: State) -> Result<Dispatch, Error> {
        self.platform.transition_request(self.request.id, state).await
    }

    pub async fn shares(&self) -> Result<Shares, Error> {
        Ok(self.platform.platform()
            .get_shares_for_request(self.request.id)
            .await?)
    }

    pub async fn tasks(&self) -> Result<Tasks, Error> {
        Ok(self.platform.platform()
            .get_tasks_for_request(self.request.id)
            .await?)
    }
}
