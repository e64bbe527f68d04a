use async_trait::async_trait;
#[cfg(not(test))]
use chrono::Utc;
#[cfg(test)]
use crate::test::Utc;
use bsrcore::{
    error::BackendError,
    share::{
        Permit,
        Share,
        Shares,
        traits::ShareBackend,
    },
};
use enumset::EnumSet;
use sqlx::Row;

use crate::{
    backend::db::SqliteBackend,
};

async fn grant_share_sqlite(
    backend: &SqliteBackend,
    request_id: i64,
    user: &str,
    permits: EnumSet<Permit>,
) -> Result<bool, BackendError> {
    let read = permits.contains(Permit::Read) as i64;
    let write = permits.contains(Permit::Write) as i64;
    let submit = permits.contains(Permit::Submit) as i64;
    let share = permits.contains(Permit::Share) as i64;
    let created_ts = Utc::now().timestamp();
    match sqlx::query(
        r#"
INSERT INTO share (
    request_id,
    user,
    read,
    write,
    submit,
    share,
    created_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7 )
        "#,
    )
    .bind(request_id)
    .bind(user)
    .bind(read)
    .bind(write)
    .bind(submit)
    .bind(share)
    .bind(created_ts)
    .execute(&*backend.pool)
    .await {
        Ok(_) => Ok(true),
        Err(e) => {
            match e.as_database_error() {
                // already shared - the permits replace the old set
                Some(db_e) if db_e.is_unique_violation() => {
                    sqlx::query(
                        r#"
UPDATE
    share
SET
    read = ?3,
    write = ?4,
    submit = ?5,
    share = ?6
WHERE
    request_id = ?1 AND
    user = ?2
                        "#,
                    )
                    .bind(request_id)
                    .bind(user)
                    .bind(read)
                    .bind(write)
                    .bind(submit)
                    .bind(share)
                    .execute(&*backend.pool)
                    .await?;
                    Ok(false)
                }
                _ => Err(e)?,
            }
        }
    }
}

async fn revoke_share_sqlite(
    backend: &SqliteBackend,
    request_id: i64,
    user: &str,
) -> Result<bool, BackendError> {
    Ok(sqlx::query(
        r#"
DELETE FROM
    share
WHERE
    request_id = ?1 AND
    user = ?2
        "#,
    )
    .bind(request_id)
    .bind(user)
    .execute(&*backend.pool)
    .await?
    .rows_affected() > 0)
}

async fn get_shares_for_request_sqlite(
    backend: &SqliteBackend,
    request_id: i64,
) -> Result<Shares, BackendError> {
    let result = sqlx::query(
        r#"
SELECT
    id,
    request_id,
    user,
    read,
    write,
    submit,
    share,
    created_ts
FROM
    share
WHERE
    request_id = ?1
ORDER BY
    id
        "#,
    )
    .map(|row: sqlx::sqlite::SqliteRow| Share {
        id: row.get("id"),
        request_id: row.get("request_id"),
        user: row.get("user"),
        read: row.get("read"),
        write: row.get("write"),
        submit: row.get("submit"),
        share: row.get("share"),
        created_ts: row.get("created_ts"),
    })
    .fetch_all(&*backend.pool)
    .await?;
    Ok(result.into())
}

#[async_trait]
impl ShareBackend for SqliteBackend {
    async fn grant_share(
        &self,
        request_id: i64,
        user: &str,
        permits: EnumSet<Permit>,
    ) -> Result<bool, BackendError> {
        grant_share_sqlite(&self, request_id, user, permits).await
    }

    async fn revoke_share(
        &self,
        request_id: i64,
        user: &str,
    ) -> Result<bool, BackendError> {
        revoke_share_sqlite(&self, request_id, user).await
    }

    async fn get_shares_for_request(
        &self,
        request_id: i64,
    ) -> Result<Shares, BackendError> {
        get_shares_for_request_sqlite(&self, request_id).await
    }
}
