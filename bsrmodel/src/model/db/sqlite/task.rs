use async_trait::async_trait;
#[cfg(not(test))]
use chrono::Utc;
#[cfg(test)]
use crate::test::Utc;
use bsrcore::{
    error::BackendError,
    task::{
        Task,
        Tasks,
        TaskStatus,
        traits::TaskBackend,
    },
};
use sqlx::Row;

use crate::{
    backend::db::SqliteBackend,
};

async fn has_open_task_sqlite(
    backend: &SqliteBackend,
    request_id: i64,
    user: &str,
) -> Result<bool, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id
FROM
    task
WHERE
    request_id = ?1 AND
    assigned_to = ?2 AND
    status = ?3
LIMIT 1
        "#,
    )
    .bind(request_id)
    .bind(user)
    .bind(TaskStatus::Open as i64)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(result.is_some())
}

async fn add_task_sqlite(
    backend: &SqliteBackend,
    request_id: i64,
    assigned_to: &str,
    description: &str,
) -> Result<i64, BackendError> {
    let created_ts = Utc::now().timestamp();
    let id = sqlx::query(
        r#"
INSERT INTO task (
    request_id,
    assigned_to,
    description,
    status,
    created_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5 )
        "#,
    )
    .bind(request_id)
    .bind(assigned_to)
    .bind(description)
    .bind(TaskStatus::Open as i64)
    .bind(created_ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn close_open_tasks_sqlite(
    backend: &SqliteBackend,
    request_id: i64,
    user: &str,
) -> Result<i64, BackendError> {
    let closed_ts = Utc::now().timestamp();
    let result = sqlx::query(
        r#"
UPDATE
    task
SET
    status = ?1,
    closed_ts = ?2
WHERE
    request_id = ?3 AND
    assigned_to = ?4 AND
    status = ?5
        "#,
    )
    .bind(TaskStatus::Closed as i64)
    .bind(closed_ts)
    .bind(request_id)
    .bind(user)
    .bind(TaskStatus::Open as i64)
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(result as i64)
}

async fn get_tasks_for_request_sqlite(
    backend: &SqliteBackend,
    request_id: i64,
) -> Result<Tasks, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    request_id,
    assigned_to,
    description,
    status,
    created_ts,
    closed_ts
FROM
    task
WHERE
    request_id = ?1
ORDER BY
    id
        "#,
    )
    .bind(request_id)
    .map(|row: sqlx::sqlite::SqliteRow| Task {
        id: row.get("id"),
        request_id: row.get("request_id"),
        assigned_to: row.get("assigned_to"),
        description: row.get("description"),
        status: row.get("status"),
        created_ts: row.get("created_ts"),
        closed_ts: row.get("closed_ts"),
    })
    .fetch_all(&*backend.pool)
    .await?;
    Ok(result.into())
}

#[async_trait]
impl TaskBackend for SqliteBackend {
    async fn has_open_task(
        &self,
        request_id: i64,
        user: &str,
    ) -> Result<bool, BackendError> {
        has_open_task_sqlite(&self, request_id, user).await
    }

    async fn add_task(
        &self,
        request_id: i64,
        assigned_to: &str,
        description: &str,
    ) -> Result<i64, BackendError> {
        add_task_sqlite(&self, request_id, assigned_to, description).await
    }

    async fn close_open_tasks(
        &self,
        request_id: i64,
        user: &str,
    ) -> Result<i64, BackendError> {
        close_open_tasks_sqlite(&self, request_id, user).await
    }

    async fn get_tasks_for_request(
        &self,
        request_id: i64,
    ) -> Result<Tasks, BackendError> {
        get_tasks_for_request_sqlite(&self, request_id).await
    }
}
