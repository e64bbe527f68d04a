use serde::{Deserialize, Serialize};

pub mod traits;

/// The single global settings record naming the default approvers.
///
/// The librarian and library convener are institution-wide appointments
/// assigned to every request; the HOD is set per request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LibrarySettings {
    pub default_librarian: String,
    pub default_library_convener: String,
}
