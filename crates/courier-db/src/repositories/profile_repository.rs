use crate::Result as DbErrorResult;

use courier_core::Profile;

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: String,
    first_name: String,
    last_name: Option<String>,
    dob: Option<String>,
    postal_code: Option<String>,
    locality: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    about_me: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            user_id: Uuid::parse_str(&self.user_id).unwrap(),
            first_name: self.first_name,
            last_name: self.last_name,
            dob: self.dob.and_then(|d| d.parse().ok()),
            postal_code: self.postal_code,
            locality: self.locality,
            address: self.address,
            city: self.city,
            state: self.state,
            about_me: self.about_me,
            created_at: DateTime::from_timestamp(self.created_at, 0).unwrap(),
            updated_at: DateTime::from_timestamp(self.updated_at, 0).unwrap(),
        }
    }
}

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, profile: &Profile) -> DbErrorResult<()> {
        let user_id = profile.user_id.to_string();
        let dob = profile.dob.map(|d| d.to_string());
        let created_at = profile.created_at.timestamp();
        let updated_at = profile.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO courier_profiles (
                  user_id, first_name, last_name, dob,
                  postal_code, locality, address, city, state, about_me,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT (user_id) DO UPDATE SET
                  first_name = excluded.first_name,
                  last_name = excluded.last_name,
                  dob = excluded.dob,
                  postal_code = excluded.postal_code,
                  locality = excluded.locality,
                  address = excluded.address,
                  city = excluded.city,
                  state = excluded.state,
                  about_me = excluded.about_me,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(user_id)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(dob)
        .bind(&profile.postal_code)
        .bind(&profile.locality)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.about_me)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<Profile>> {
        let user_id_str = user_id.to_string();

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT user_id, first_name, last_name, dob,
                     postal_code, locality, address, city, state, about_me,
                     created_at, updated_at
              FROM courier_profiles
              WHERE user_id = ?
              "#,
        )
        .bind(user_id_str)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }
}
