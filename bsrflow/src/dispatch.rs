use bsrcore::{
    platform::WFPlatform,
    request::Request,
    workflow::{
        State,
        transition::StateTransitions,
    },
};

use crate::error::Error;

/// What a state change did, reported back to the caller.
#[derive(Debug, PartialEq)]
pub enum Dispatch {
    /// The workflow state did not change; nothing was touched.
    Unchanged,
    /// No rule covers the new state; nothing was touched.
    NoRule,
    Effects {
        revocation: Revocation,
        grant: Grant,
    },
}

/// Outcome of withdrawing the previous approver's access.
///
/// The withdrawal is best effort: a failure is reported here and logged
/// but never aborts the save that triggered the transition, so callers
/// (and tests) can still tell "nothing to revoke" from "the attempt
/// errored".
#[derive(Debug, PartialEq)]
pub enum Revocation {
    /// The rule names no revokee, or the slot holds no user.
    Skipped,
    /// The user held no share and no open task.
    NothingShared { user: String },
    Revoked { user: String, tasks_closed: i64 },
    Failed { user: String },
}

/// Outcome of handing the request to the next approver.
#[derive(Debug, PartialEq)]
pub enum Grant {
    /// The rule names no assignee, or the slot holds no user.
    Skipped,
    Granted { user: String, task_created: bool },
}

/// Apply the side effects of entering `request.workflow_state`.
///
/// `old_state` is the state snapshot taken before the save that brought
/// the request here; `None` marks the first dispatch for the request.
pub async fn dispatch_transition(
    platform: &dyn WFPlatform,
    transitions: &StateTransitions,
    old_state: Option<State>,
    request: &Request,
) -> Result<Dispatch, Error> {
    if old_state == Some(request.workflow_state) {
        return Ok(Dispatch::Unchanged);
    }
    let rule = match transitions.get(request.workflow_state) {
        Some(rule) => rule,
        None => return Ok(Dispatch::NoRule),
    };

    let revocation = match rule.revokee.and_then(|slot| request.approver(slot)) {
        Some(user) => revoke_access(platform, request.id, user).await,
        None => Revocation::Skipped,
    };

    let grant = match rule.assignee.and_then(|slot| request.approver(slot)) {
        Some(user) => {
            platform.grant_share(request.id, user, rule.permits).await?;
            let task_created = if platform.has_open_task(request.id, user).await? {
                false
            } else {
                let description = format!(
                    "Please review for {}: {}",
                    rule.task_description.as_deref().unwrap_or_default(),
                    request.id,
                );
                platform.add_task(request.id, user, &description).await?;
                true
            };
            Grant::Granted {
                user: user.to_string(),
                task_created,
            }
        }
        None => Grant::Skipped,
    };

    Ok(Dispatch::Effects { revocation, grant })
}

async fn revoke_access(
    platform: &dyn WFPlatform,
    request_id: i64,
    user: &str,
) -> Revocation {
    let removed = match platform.revoke_share(request_id, user).await {
        Ok(removed) => removed,
        Err(e) => {
            log::warn!(
                "failed to revoke the share on request {request_id} from {user}: {e}");
            return Revocation::Failed { user: user.to_string() };
        }
    };
    let tasks_closed = match platform.close_open_tasks(request_id, user).await {
        Ok(count) => count,
        Err(e) => {
            log::warn!(
                "failed to close the tasks on request {request_id} for {user}: {e}");
            return Revocation::Failed { user: user.to_string() };
        }
    };
    if removed || tasks_closed > 0 {
        Revocation::Revoked {
            user: user.to_string(),
            tasks_closed,
        }
    } else {
        Revocation::NothingShared { user: user.to_string() }
    }
}
