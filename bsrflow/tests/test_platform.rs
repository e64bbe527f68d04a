use bsrcore::{
    request::Approver,
    settings::LibrarySettings,
    share::Permit,
    task::TaskStatus,
    workflow::State,
};
use bsrflow::{
    Platform,
    dispatch::{
        Dispatch,
        Grant,
        Revocation,
    },
    error::{
        Error,
        SettingsError,
    },
};

use test_bsr::flow::create_sqlite_platform;

async fn configured_platform() -> anyhow::Result<Platform> {
    let platform = create_sqlite_platform().await?;
    platform.put_settings(&LibrarySettings {
        default_librarian: "lib_user".to_string(),
        default_library_convener: "convener".to_string(),
    }).await?;
    Ok(platform)
}

#[async_std::test]
async fn missing_settings_blocks_creation() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    assert!(matches!(
        platform.create_request("Dune", None, None).await,
        Err(Error::Settings(SettingsError::Missing)),
    ));
    Ok(())
}

#[async_std::test]
async fn approval_chain_walkthrough() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request(
        "Dune",
        Some("paul"),
        Some("hod_user"),
    ).await?;
    let id = request.id();
    assert_eq!(request.workflow_state(), State::DuplicationCheck);
    assert_eq!(request.approver(Approver::Librarian), Some("lib_user"));
    assert_eq!(request.approver(Approver::Hod), Some("hod_user"));
    assert_eq!(request.approver(Approver::LibraryConvener), Some("convener"));

    // nothing shared until submission
    assert!(request.shares().await?.is_empty());
    assert!(request.tasks().await?.is_empty());

    let outcome = request.submit().await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Skipped,
        grant: Grant::Granted {
            user: "lib_user".to_string(),
            task_created: true,
        },
    });

    let request = platform.get_request(id).await?;
    let shares = request.shares().await?;
    assert_eq!(shares.len(), 1);
    assert_eq!(
        shares.for_user("lib_user").unwrap().permits(),
        Permit::Read | Permit::Write | Permit::Submit | Permit::Share,
    );
    let tasks = request.tasks().await?;
    assert_eq!(tasks.len(), 1);
    assert_eq!(
        tasks[0].description,
        format!("Please review for Duplication Check: {id}"),
    );

    // the librarian passes the request on
    let outcome = platform.transition_request(id, State::HodApproval).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Revoked {
            user: "lib_user".to_string(),
            tasks_closed: 1,
        },
        grant: Grant::Granted {
            user: "hod_user".to_string(),
            task_created: true,
        },
    });
    let request = platform.get_request(id).await?;
    let shares = request.shares().await?;
    assert_eq!(shares.len(), 1);
    assert_eq!(
        shares.for_user("hod_user").unwrap().permits(),
        Permit::Read | Permit::Submit | Permit::Share,
    );
    // the librarian's reminder is closed, not deleted
    let tasks = request.tasks().await?;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.open_for("lib_user").count(), 0);
    assert_eq!(tasks.open_for("hod_user").count(), 1);
    assert_eq!(
        tasks.open_for("hod_user").next().unwrap().description,
        format!("Please review for HOD Approval: {id}"),
    );

    // on to the convener
    let outcome = platform.transition_request(id, State::ConvenerApproval).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Revoked {
            user: "hod_user".to_string(),
            tasks_closed: 1,
        },
        grant: Grant::Granted {
            user: "convener".to_string(),
            task_created: true,
        },
    });

    // final approval leaves nobody with access
    let outcome = platform.transition_request(id, State::Approved).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Revoked {
            user: "convener".to_string(),
            tasks_closed: 1,
        },
        grant: Grant::Skipped,
    });
    let request = platform.get_request(id).await?;
    assert_eq!(request.workflow_state(), State::Approved);
    assert!(request.shares().await?.is_empty());
    let tasks = request.tasks().await?;
    assert_eq!(tasks.len(), 3);
    assert!(tasks.iter().all(|task| task.status() == TaskStatus::Closed));
    Ok(())
}

#[async_std::test]
async fn resubmission_is_idempotent() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request("Dune", None, None).await?;
    let id = request.id();

    request.submit().await?;
    let outcome = platform.submit_request(id).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Skipped,
        grant: Grant::Granted {
            user: "lib_user".to_string(),
            // the open reminder from the first submission is reused
            task_created: false,
        },
    });

    let request = platform.get_request(id).await?;
    assert_eq!(request.shares().await?.len(), 1);
    assert_eq!(request.tasks().await?.len(), 1);
    Ok(())
}

#[async_std::test]
async fn unchanged_state_is_inert() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request("Dune", None, None).await?;
    let id = request.id();
    request.submit().await?;

    let outcome = platform.transition_request(id, State::DuplicationCheck).await?;
    assert_eq!(outcome, Dispatch::Unchanged);

    let request = platform.get_request(id).await?;
    assert_eq!(request.shares().await?.len(), 1);
    assert_eq!(request.tasks().await?.len(), 1);
    Ok(())
}

#[async_std::test]
async fn revoking_the_never_granted_is_benign() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request(
        "Dune",
        None,
        Some("hod_user"),
    ).await?;
    let id = request.id();
    request.submit().await?;

    // jumping straight past the HOD revokes a user who never held a
    // share; everyone else's records stay put
    let outcome = platform.transition_request(id, State::ConvenerApproval).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::NothingShared {
            user: "hod_user".to_string(),
        },
        grant: Grant::Granted {
            user: "convener".to_string(),
            task_created: true,
        },
    });

    let request = platform.get_request(id).await?;
    let shares = request.shares().await?;
    assert_eq!(shares.len(), 2);
    assert!(shares.for_user("lib_user").is_some());
    assert!(shares.for_user("convener").is_some());
    assert_eq!(request.tasks().await?.open_for("lib_user").count(), 1);
    Ok(())
}

#[async_std::test]
async fn empty_hod_slot_grants_nothing() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request("Dune", None, None).await?;
    let id = request.id();
    request.submit().await?;

    let outcome = platform.transition_request(id, State::HodApproval).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Revoked {
            user: "lib_user".to_string(),
            tasks_closed: 1,
        },
        grant: Grant::Skipped,
    });
    let request = platform.get_request(id).await?;
    assert!(request.shares().await?.is_empty());
    Ok(())
}

#[async_std::test]
async fn rejection_revokes_the_convener() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request(
        "Dune",
        None,
        Some("hod_user"),
    ).await?;
    let id = request.id();
    request.submit().await?;
    platform.transition_request(id, State::HodApproval).await?;
    platform.transition_request(id, State::ConvenerApproval).await?;

    let outcome = platform.transition_request(id, State::Rejected).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Revoked {
            user: "convener".to_string(),
            tasks_closed: 1,
        },
        grant: Grant::Skipped,
    });
    let request = platform.get_request(id).await?;
    assert_eq!(request.workflow_state(), State::Rejected);
    assert!(request.shares().await?.is_empty());
    assert!(request.tasks().await?.iter().all(|task| !task.is_open()));
    Ok(())
}

#[async_std::test]
async fn unknown_state_has_no_rule() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request("Dune", None, None).await?;
    let id = request.id();
    request.submit().await?;

    let outcome = platform.transition_request(id, State::Unknown).await?;
    assert_eq!(outcome, Dispatch::NoRule);

    // the share and reminder from the submission are untouched
    let request = platform.get_request(id).await?;
    assert_eq!(request.workflow_state(), State::Unknown);
    assert_eq!(request.shares().await?.len(), 1);
    assert_eq!(request.tasks().await?.open_for("lib_user").count(), 1);
    Ok(())
}

#[async_std::test]
async fn defaults_reapplied_on_submit() -> anyhow::Result<()> {
    let platform = configured_platform().await?;
    let request = platform.create_request("Dune", None, None).await?;
    let id = request.id();

    // the settings change between creation and submission
    platform.put_settings(&LibrarySettings {
        default_librarian: "new_lib".to_string(),
        default_library_convener: "convener".to_string(),
    }).await?;
    let outcome = platform.submit_request(id).await?;
    assert_eq!(outcome, Dispatch::Effects {
        revocation: Revocation::Skipped,
        grant: Grant::Granted {
            user: "new_lib".to_string(),
            task_created: true,
        },
    });
    let request = platform.get_request(id).await?;
    assert_eq!(request.approver(Approver::Librarian), Some("new_lib"));
    Ok(())
}
