pub mod dispatch;
pub mod error;
pub mod platform;
pub mod request;

pub use platform::Platform;
