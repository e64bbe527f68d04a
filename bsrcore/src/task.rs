use num_enum::FromPrimitive;
use serde::{Deserialize, Serialize};

mod impls;
pub mod traits;

/// Reminder assigned to an approver whose action a request awaits.
///
/// Tasks are closed when the approver's turn ends, never deleted, so
/// the record doubles as an audit trail of who was asked to act.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Task {
    pub id: i64,
    pub request_id: i64,
    pub assigned_to: String,
    pub description: String,
    pub status: i64,
    pub created_ts: i64,
    pub closed_ts: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Tasks(Vec<Task>);

#[derive(Debug, PartialEq, FromPrimitive)]
#[repr(i64)]
pub enum TaskStatus {
    Open,
    Closed,
    #[num_enum(default)]
    Unknown = -1,
}
