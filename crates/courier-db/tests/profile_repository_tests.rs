mod common;

use common::{create_test_pool, create_test_profile, create_test_user};

use courier_db::{ProfileRepository, UserRepository};

use chrono::NaiveDate;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_new_profile_when_upserted_then_can_be_found_by_user() {
    // Given: A stored user
    let pool = create_test_pool().await;
    let user = create_test_user("rider@example.com");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = ProfileRepository::new(pool);
    let mut profile = create_test_profile(user.id);
    profile.dob = NaiveDate::from_ymd_opt(1990, 4, 20);

    // When: Upserting the profile
    repo.upsert(&profile).await.unwrap();

    // Then: Finding by user returns it
    let found = repo.find_by_user(user.id).await.unwrap().unwrap();
    assert_that!(found.first_name, eq(&profile.first_name));
    assert_that!(found.last_name, eq(&profile.last_name));
    assert_that!(found.dob, eq(profile.dob));
    assert_that!(found.city, eq(&profile.city));
}

#[tokio::test]
async fn given_existing_profile_when_upserted_again_then_fields_are_replaced() {
    // Given: A stored profile
    let pool = create_test_pool().await;
    let user = create_test_user("rider@example.com");
    UserRepository::new(pool.clone()).create(&user).await.unwrap();

    let repo = ProfileRepository::new(pool);
    let mut profile = create_test_profile(user.id);
    repo.upsert(&profile).await.unwrap();

    // When: Upserting changed fields for the same user
    profile.first_name = "Updated".to_string();
    profile.about_me = Some("Moves parcels".to_string());
    repo.upsert(&profile).await.unwrap();

    // Then: The single row reflects the changes
    let found = repo.find_by_user(user.id).await.unwrap().unwrap();
    assert_that!(found.first_name, eq("Updated"));
    assert_that!(found.about_me, some(eq("Moves parcels")));
}

#[tokio::test]
async fn given_no_profile_when_finding_by_user_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool);

    // When: Finding a profile that doesn't exist
    let result = repo.find_by_user(Uuid::new_v4()).await.unwrap();

    // Then: Returns None
    assert_that!(result, none());
}
