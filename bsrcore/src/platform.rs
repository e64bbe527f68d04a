use crate::{
    request::traits::RequestBackend,
    settings::traits::SettingsBackend,
    share::traits::ShareBackend,
    task::traits::TaskBackend,
};

pub trait PlatformUrl {
    fn url(&self) -> &str;
}

/// WFPlatform - Workflow Platform
///
/// This platform is used to persist the requests, shares and tasks that
/// the approval workflow acts on.
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
pub trait WFPlatform: RequestBackend
    + SettingsBackend
    + ShareBackend
    + TaskBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn WFPlatform;
}

pub trait DefaultWFPlatform: WFPlatform {}

impl<P: RequestBackend
    + SettingsBackend
    + ShareBackend
    + TaskBackend

    + PlatformUrl

    + DefaultWFPlatform

    + Send
    + Sync
> WFPlatform for P {
    fn as_dyn(&self) -> &(dyn WFPlatform) {
        self
    }
}
