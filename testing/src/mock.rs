use async_trait::async_trait;
use enumset::EnumSet;
use mockall::mock;
use bsrcore::{
    error::BackendError,
    platform::{
        DefaultWFPlatform,
        PlatformUrl,
    },
    request::{
        Approver,
        Request,
        Requests,
        traits::RequestBackend,
    },
    settings::{
        LibrarySettings,
        traits::SettingsBackend,
    },
    share::{
        Permit,
        Shares,
        traits::ShareBackend,
    },
    task::{
        Tasks,
        traits::TaskBackend,
    },
    workflow::State,
};

mock! {
    pub Platform {
        // the request methods take owned optional strings as the
        // borrowed form in the trait cannot be mocked directly; the
        // manual trait impl below adapts the arguments
        pub async fn request_insert(
            &self,
            title: &str,
            requested_by: Option<String>,
        ) -> Result<i64, BackendError>;
        pub async fn request_get_id(
            &self,
            id: i64,
        ) -> Result<Request, BackendError>;
        pub async fn request_list(
            &self,
        ) -> Result<Requests, BackendError>;
        pub async fn request_set_approver(
            &self,
            id: i64,
            slot: Approver,
            user: Option<String>,
        ) -> Result<(), BackendError>;
        pub async fn request_set_workflow_state(
            &self,
            id: i64,
            state: State,
        ) -> Result<(), BackendError>;
        pub async fn request_set_submitted(
            &self,
            id: i64,
        ) -> Result<(), BackendError>;
    }

    #[async_trait]
    impl SettingsBackend for Platform {
        async fn get_settings(
            &self,
        ) -> Result<Option<LibrarySettings>, BackendError>;
        async fn put_settings(
            &self,
            settings: &LibrarySettings,
        ) -> Result<(), BackendError>;
    }

    #[async_trait]
    impl ShareBackend for Platform {
        async fn grant_share(
            &self,
            request_id: i64,
            user: &str,
            permits: EnumSet<Permit>,
        ) -> Result<bool, BackendError>;
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

    #[async_trait]
    impl TaskBackend for Platform {
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

    impl PlatformUrl for Platform {
        fn url(&self) -> &str;
    }
}

#[async_trait]
impl RequestBackend for MockPlatform {
    async fn add_request(
        &self,
        title: &str,
        requested_by: Option<&str>,
    ) -> Result<i64, BackendError> {
        self.request_insert(title, requested_by.map(str::to_string)).await
    }
    async fn get_request(
        &self,
        id: i64,
    ) -> Result<Request, BackendError> {
        self.request_get_id(id).await
    }
    async fn list_requests(
        &self,
    ) -> Result<Requests, BackendError> {
        self.request_list().await
    }
    async fn set_approver(
        &self,
        id: i64,
        slot: Approver,
        user: Option<&str>,
    ) -> Result<(), BackendError> {
        self.request_set_approver(id, slot, user.map(str::to_string)).await
    }
    async fn set_workflow_state(
        &self,
        id: i64,
        state: State,
    ) -> Result<(), BackendError> {
        self.request_set_workflow_state(id, state).await
    }
    async fn set_submitted(
        &self,
        id: i64,
    ) -> Result<(), BackendError> {
        self.request_set_submitted(id).await
    }
}

impl DefaultWFPlatform for MockPlatform {}
