use async_trait::async_trait;
#[cfg(not(test))]
use chrono::Utc;
#[cfg(test)]
use crate::test::Utc;
use bsrcore::{
    error::BackendError,
    request::{
        Approver,
        Request,
        Requests,
        traits::RequestBackend,
    },
    workflow::State,
};
use sqlx::{
    Row,
    sqlite::SqliteRow,
};
use std::str::FromStr;

use crate::{
    backend::db::SqliteBackend,
};

fn request_from_row(row: SqliteRow) -> Request {
    Request {
        id: row.get("id"),
        title: row.get("title"),
        requested_by: row.get("requested_by"),
        librarian: row.get("librarian"),
        hod: row.get("hod"),
        library_convener: row.get("library_convener"),
        workflow_state: State::from_str(row.get::<&str, _>("workflow_state"))
            .unwrap_or_default(),
        submitted_ts: row.get("submitted_ts"),
        created_ts: row.get("created_ts"),
    }
}

async fn add_request_sqlite(
    backend: &SqliteBackend,
    title: &str,
    requested_by: Option<&str>,
) -> Result<i64, BackendError> {
    let created_ts = Utc::now().timestamp();
    // a fresh request always enters the chain at the first state
    let state = <&'static str>::from(State::DuplicationCheck);
    let id = sqlx::query(
        r#"
INSERT INTO request (
    title,
    requested_by,
    workflow_state,
    created_ts
)
VALUES ( ?1, ?2, ?3, ?4 )
        "#,
    )
    .bind(title)
    .bind(requested_by)
    .bind(state)
    .bind(created_ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_request_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Request, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    title,
    requested_by,
    librarian,
    hod,
    library_convener,
    workflow_state,
    submitted_ts,
    created_ts
FROM
    request
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .map(request_from_row)
    .fetch_one(&*backend.pool)
    .await?;
    Ok(result)
}

async fn list_requests_sqlite(
    backend: &SqliteBackend,
) -> Result<Requests, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    title,
    requested_by,
    librarian,
    hod,
    library_convener,
    workflow_state,
    submitted_ts,
    created_ts
FROM
    request
ORDER BY
    id
        "#,
    )
    .map(request_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(result.into())
}

async fn set_approver_sqlite(
    backend: &SqliteBackend,
    id: i64,
    slot: Approver,
    user: Option<&str>,
) -> Result<(), BackendError> {
    // slot names a fixed column; identifiers cannot be bound
    let query = match slot {
        Approver::Librarian =>
            "UPDATE request SET librarian = ?1 WHERE id = ?2",
        Approver::Hod =>
            "UPDATE request SET hod = ?1 WHERE id = ?2",
        Approver::LibraryConvener =>
            "UPDATE request SET library_convener = ?1 WHERE id = ?2",
        _ => unreachable!("unknown Approver variant"),
    };
    sqlx::query(query)
        .bind(user)
        .bind(id)
        .execute(&*backend.pool)
        .await?;
    Ok(())
}

async fn set_workflow_state_sqlite(
    backend: &SqliteBackend,
    id: i64,
    state: State,
) -> Result<(), BackendError> {
    let state = <&'static str>::from(state);
    sqlx::query(
        r#"
UPDATE
    request
SET
    workflow_state = ?1
WHERE
    id = ?2
        "#,
    )
    .bind(state)
    .bind(id)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

async fn set_submitted_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<(), BackendError> {
    let submitted_ts = Utc::now().timestamp();
    sqlx::query(
        r#"
UPDATE
    request
SET
    submitted_ts = ?1
WHERE
    id = ?2
        "#,
    )
    .bind(submitted_ts)
    .bind(id)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

#[async_trait]
impl RequestBackend for SqliteBackend {
    async fn add_request(
        &self,
        title: &str,
        requested_by: Option<&str>,
    ) -> Result<i64, BackendError> {
        add_request_sqlite(&self, title, requested_by).await
    }

    async fn get_request(
        &self,
        id: i64,
    ) -> Result<Request, BackendError> {
        get_request_sqlite(&self, id).await
    }

    async fn list_requests(
        &self,
    ) -> Result<Requests, BackendError> {
        list_requests_sqlite(&self).await
    }

    async fn set_approver(
        &self,
        id: i64,
        slot: Approver,
        user: Option<&str>,
    ) -> Result<(), BackendError> {
        set_approver_sqlite(&self, id, slot, user).await
    }

    async fn set_workflow_state(
        &self,
        id: i64,
        state: State,
    ) -> Result<(), BackendError> {
        set_workflow_state_sqlite(&self, id, state).await
    }

    async fn set_submitted(
        &self,
        id: i64,
    ) -> Result<(), BackendError> {
        set_submitted_sqlite(&self, id).await
    }
}

#[cfg(test)]
mod tests {
    use bsrcore::{
        request::{
            Approver,
            traits::RequestBackend,
        },
        workflow::State,
    };
    use crate::backend::db::{
        MigrationProfile,
        SqliteBackend,
    };

    async fn backend() -> anyhow::Result<SqliteBackend> {
        Ok(SqliteBackend::from_url("sqlite::memory:")
            .await?
            .run_migration_profile(MigrationProfile::Bsrflow)
            .await?)
    }

    #[async_std::test]
    async fn test_request_lifecycle_fields() -> anyhow::Result<()> {
        let backend = backend().await?;
        let id = backend.add_request("Dune", None).await?;

        backend.set_approver(id, Approver::Librarian, Some("lib_user")).await?;
        backend.set_approver(id, Approver::Hod, Some("hod_user")).await?;
        backend.set_approver(id, Approver::LibraryConvener, Some("convener")).await?;
        let request = backend.get_request(id).await?;
        assert_eq!(request.librarian.as_deref(), Some("lib_user"));
        assert_eq!(request.hod.as_deref(), Some("hod_user"));
        assert_eq!(request.library_convener.as_deref(), Some("convener"));
        assert_eq!(request.submitted_ts, None);

        // clearing a slot
        backend.set_approver(id, Approver::Hod, None).await?;
        let request = backend.get_request(id).await?;
        assert_eq!(request.hod, None);

        backend.set_submitted(id).await?;
        backend.set_workflow_state(id, State::HodApproval).await?;
        let request = backend.get_request(id).await?;
        assert_eq!(request.submitted_ts, Some(1234567890));
        assert_eq!(request.workflow_state, State::HodApproval);
        Ok(())
    }

    #[async_std::test]
    async fn test_list_requests() -> anyhow::Result<()> {
        let backend = backend().await?;
        assert!(backend.list_requests().await?.is_empty());
        backend.add_request("Dune", Some("paul")).await?;
        backend.add_request("Emma", Some("jane")).await?;
        let requests = backend.list_requests().await?;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].title, "Dune");
        assert_eq!(requests[1].title, "Emma");
        Ok(())
    }

    #[async_std::test]
    async fn test_get_request_missing() -> anyhow::Result<()> {
        let backend = backend().await?;
        assert!(backend.get_request(42).await.is_err());
        Ok(())
    }
}
