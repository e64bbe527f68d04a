use serde::{Deserialize, Serialize};

use crate::workflow::State;

mod impls;
pub mod traits;

/// A book purchase suggestion moving through the approval chain.
///
/// The three approver fields hold plain user names; resolution of those
/// names to actual identities belongs to the surrounding system.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Request {
    pub id: i64,
    pub title: String,
    pub requested_by: Option<String>,
    pub librarian: Option<String>,
    pub hod: Option<String>,
    pub library_convener: Option<String>,
    pub workflow_state: State,
    pub submitted_ts: Option<i64>,
    pub created_ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Requests(Vec<Request>);

/// The request fields that may hold an approver identity.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Approver {
    Librarian,
    Hod,
    LibraryConvener,
}
