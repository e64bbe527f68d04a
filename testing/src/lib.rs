#[cfg(feature = "flow")]
pub mod flow;
pub mod mock;
#[cfg(feature = "model")]
pub mod model;
