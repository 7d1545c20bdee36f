use crate::Result as DbErrorResult;

use courier_core::{Channel, PendingOtp, User};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    login_name: String,
    channel: String,
    email: Option<String>,
    phone: Option<String>,
    password_hash: String,
    email_verified: bool,
    phone_verified: bool,
    otp_code: Option<String>,
    otp_expires_at: Option<i64>,
    otp_version: i64,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: Uuid::parse_str(&self.id).unwrap(),
            login_name: self.login_name,
            channel: self.channel.parse().unwrap(),
            email: self.email,
            phone: self.phone,
            password_hash: self.password_hash,
            email_verified: self.email_verified,
            phone_verified: self.phone_verified,
            otp: match (self.otp_code, self.otp_expires_at) {
                (Some(code), Some(ts)) => Some(PendingOtp {
                    code,
                    expires_at: DateTime::from_timestamp(ts, 0).unwrap(),
                }),
                _ => None,
            },
            otp_version: self.otp_version,
            created_at: DateTime::from_timestamp(self.created_at, 0).unwrap(),
            updated_at: DateTime::from_timestamp(self.updated_at, 0).unwrap(),
        }
    }
}

const USER_COLUMNS: &str = r#"
    id, login_name, channel, email, phone, password_hash,
    email_verified, phone_verified,
    otp_code, otp_expires_at, otp_version,
    created_at, updated_at
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let channel = user.channel.as_str();
        let otp_code = user.otp.as_ref().map(|o| o.code.clone());
        let otp_expires_at = user.otp.as_ref().map(|o| o.expires_at.timestamp());
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO courier_users (
                  id, login_name, channel, email, phone, password_hash,
                  email_verified, phone_verified,
                  otp_code, otp_expires_at, otp_version,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(&user.login_name)
        .bind(channel)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.email_verified)
        .bind(user.phone_verified)
        .bind(otp_code)
        .bind(otp_expires_at)
        .bind(user.otp_version)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_login(&self, login_name: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM courier_users WHERE login_name = ?"
        ))
        .bind(login_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM courier_users WHERE id = ?"
        ))
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    /// Stores a fresh pending code, guarded by the version the caller read.
    /// Returns false when another writer got there first.
    pub async fn set_pending_otp(
        &self,
        id: Uuid,
        otp: &PendingOtp,
        expected_version: i64,
    ) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let expires_at = otp.expires_at.timestamp();
        let updated_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              UPDATE courier_users
              SET otp_code = ?, otp_expires_at = ?,
                  otp_version = otp_version + 1, updated_at = ?
              WHERE id = ? AND otp_version = ?
              "#,
        )
        .bind(&otp.code)
        .bind(expires_at)
        .bind(updated_at)
        .bind(id_str)
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clears the pending code and marks the channel verified in one guarded
    /// update, so a validated code can never be replayed.
    pub async fn consume_otp(
        &self,
        id: Uuid,
        channel: Channel,
        expected_version: i64,
    ) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let updated_at = Utc::now().timestamp();

        let sql = match channel {
            Channel::Email => {
                r#"
                  UPDATE courier_users
                  SET otp_code = NULL, otp_expires_at = NULL, email_verified = 1,
                      otp_version = otp_version + 1, updated_at = ?
                  WHERE id = ? AND otp_version = ? AND otp_code IS NOT NULL
                  "#
            }
            Channel::Phone => {
                r#"
                  UPDATE courier_users
                  SET otp_code = NULL, otp_expires_at = NULL, phone_verified = 1,
                      otp_version = otp_version + 1, updated_at = ?
                  WHERE id = ? AND otp_version = ? AND otp_code IS NOT NULL
                  "#
            }
        };

        let result = sqlx::query(sql)
            .bind(updated_at)
            .bind(id_str)
            .bind(expected_version)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Full-row update. OTP fields are excluded; those go through the
    /// guarded set_pending_otp/consume_otp paths only.
    pub async fn save(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let channel = user.channel.as_str();
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              UPDATE courier_users
              SET login_name = ?, channel = ?, email = ?, phone = ?,
                  password_hash = ?, email_verified = ?, phone_verified = ?,
                  updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.login_name)
        .bind(channel)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.email_verified)
        .bind(user.phone_verified)
        .bind(updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> DbErrorResult<()> {
        let id_str = id.to_string();
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              UPDATE courier_users
              SET password_hash = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(password_hash)
        .bind(updated_at)
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
