use enumset::EnumSet;
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;

use crate::{
    request::Approver,
    share::Permit,
    workflow::State,
};

/// The side effects applied upon entry into a workflow state.
///
/// A state without an assignee is terminal for the approval chain; a
/// state without a revokee is the entry point of the chain.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transition {
    /// The approver slot that gains access at this state
    pub assignee: Option<Approver>,
    /// Subject of the reminder task created for the assignee
    pub task_description: Option<String>,
    /// The permits granted to the assignee
    pub permits: EnumSet<Permit>,
    /// The approver slot whose access is withdrawn at this state
    pub revokee: Option<Approver>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StateTransitions(HashMap<State, Transition>);

mod impls;
