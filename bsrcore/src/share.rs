use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

mod impls;
pub mod traits;

/// A single permission that a share may carry.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permit {
    Read,
    Write,
    Submit,
    Share,
}

/// Access granted on a request
///
/// Represents the access granted on a request.  The share associates
/// the user with the set of permits they hold for the request, stored
/// as one flag column per permit.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Share {
    pub id: i64,
    pub request_id: i64,
    pub user: String,
    pub read: i64,
    pub write: i64,
    pub submit: i64,
    pub share: i64,
    pub created_ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Shares(Vec<Share>);
