use bsrcore::{
    platform::WFPlatform,
    request::{
        Approver,
        Requests,
    },
    settings::LibrarySettings,
    workflow::{
        State,
        transition::StateTransitions,
    },
};

use crate::{
    dispatch::{
        Dispatch,
        dispatch_transition,
    },
    error::{
        Error,
        SettingsError,
    },
    request::Request,
};

#[derive(Default)]
pub struct Builder {
    // platform
    platform: Option<Box<dyn WFPlatform>>,
    // replaces the built-in approval chain when set
    transitions: Option<StateTransitions>,
}

pub struct Platform {
    platform: Box<dyn WFPlatform>,
    transitions: StateTransitions,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(mut self, val: impl WFPlatform + 'static) -> Self {
        self.platform = Some(Box::new(val));
        self
    }

    pub fn boxed_platform(mut self, val: Box<dyn WFPlatform>) -> Self {
        self.platform = Some(val);
        self
    }

    pub fn transitions(mut self, val: StateTransitions) -> Self {
        self.transitions = Some(val);
        self
    }

    pub fn build(self) -> Platform {
        Platform {
            platform: self.platform
                .expect("missing required argument platform"),
            transitions: self.transitions
                .unwrap_or_default(),
        }
    }
}

impl Platform {
    pub(crate) fn platform(&self) -> &dyn WFPlatform {
        self.platform.as_ref()
    }

    pub fn transitions(&self) -> &StateTransitions {
        &self.transitions
    }
}

// Settings management.

impl Platform {
    /// The settings record naming the default approvers.
    ///
    /// Errs with `SettingsError::Missing` when the record was never
    /// configured, which aborts whichever operation needed it.
    pub async fn get_settings(&self) -> Result<LibrarySettings, Error> {
        Ok(self.platform.get_settings().await?
            .ok_or(SettingsError::Missing)?)
    }

    pub async fn put_settings(
        &self,
        settings: &LibrarySettings,
    ) -> Result<(), Error> {
        Ok(self.platform.put_settings(settings).await?)
    }
}

// Request management.

impl<'a> Platform {
    pub async fn create_request(
        &'a self,
        title: &str,
        requested_by: Option<&str>,
        hod: Option<&str>,
    ) -> Result<Request<'a>, Error> {
        let id = self.platform.add_request(title, requested_by).await?;
        if let Some(hod) = hod {
            self.platform.set_approver(id, Approver::Hod, Some(hod)).await?;
        }
        self.apply_default_approvers(id).await?;
        self.get_request(id).await
    }

    pub async fn get_request(
        &'a self,
        id: i64,
    ) -> Result<Request<'a>, Error> {
        let request = self.platform.get_request(id).await?;
        Ok(Request::new(self, request))
    }

    pub async fn list_requests(&self) -> Result<Requests, Error> {
        Ok(self.platform.list_requests().await?)
    }

    /// Assign the institution-wide approver slots from settings.
    ///
    /// Runs before validation on every create and submit, so whatever
    /// the slots held previously is replaced.
    async fn apply_default_approvers(&self, id: i64) -> Result<(), Error> {
        let settings = self.get_settings().await?;
        self.platform.set_approver(
            id,
            Approver::Librarian,
            Some(&settings.default_librarian),
        ).await?;
        self.platform.set_approver(
            id,
            Approver::LibraryConvener,
            Some(&settings.default_library_convener),
        ).await?;
        Ok(())
    }
}

// Workflow dispatch.

impl Platform {
    /// Submit the request, dispatching the entry into its current
    /// (initial) state.
    pub async fn submit_request(&self, id: i64) -> Result<Dispatch, Error> {
        self.apply_default_approvers(id).await?;
        self.platform.set_submitted(id).await?;
        let request = self.platform.get_request(id).await?;
        dispatch_transition(
            self.platform.as_ref(),
            &self.transitions,
            None,
            &request,
        ).await
    }

    /// Move the request to the given workflow state.
    ///
    /// The state stored before this call is the snapshot the dispatch
    /// compares against; a save that does not change the state performs
    /// no side effects.
    pub async fn transition_request(
        &self,
        id: i64,
        state: State,
    ) -> Result<Dispatch, Error> {
        let previous = self.platform.get_request(id).await?.workflow_state;
        if previous == state {
            return Ok(Dispatch::Unchanged);
        }
        self.platform.set_workflow_state(id, state).await?;
        let request = self.platform.get_request(id).await?;
        dispatch_transition(
            self.platform.as_ref(),
            &self.transitions,
            Some(previous),
            &request,
        ).await
    }
}
