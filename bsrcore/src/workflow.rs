use serde::{Deserialize, Serialize};

mod impls;
pub mod transition;
pub use transition::Transition;

/// Position of a suggestion request within the approval chain.
///
/// The string form of each state is the label stored with the request,
/// so the conversions in this module round-trip through those labels.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum State {
    // catch-all when infallable conversion is required
    #[default]
    Unknown,
    DuplicationCheck,
    HodApproval,
    ConvenerApproval,
    Approved,
    Rejected,
}
