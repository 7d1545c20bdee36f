use crate::Result as DbErrorResult;

use courier_core::RevokedToken;

use sqlx::SqlitePool;

pub struct RevokedTokenRepository {
    pool: SqlitePool,
}

impl RevokedTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Revoking the same token twice is a no-op.
    pub async fn insert(&self, token: &RevokedToken) -> DbErrorResult<()> {
        let expires_at = token.expires_at.timestamp();
        let revoked_at = token.revoked_at.timestamp();

        sqlx::query(
            r#"
              INSERT OR IGNORE INTO courier_revoked_tokens (token, expires_at, revoked_at)
              VALUES (?, ?, ?)
              "#,
        )
        .bind(&token.token)
        .bind(expires_at)
        .bind(revoked_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn contains(&self, token: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM courier_revoked_tokens WHERE token = ?",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Drops entries whose token has expired on its own; they can no longer
    /// pass signature validation, so the blacklist gains nothing by keeping them.
    pub async fn purge_expired(&self, now: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM courier_revoked_tokens WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
