mod common;

use common::{create_test_pool, create_test_revoked_token};

use courier_core::RevokedToken;
use courier_db::RevokedTokenRepository;

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[tokio::test]
async fn given_revoked_token_when_checked_then_contains_returns_true() {
    // Given: An empty blacklist
    let pool = create_test_pool().await;
    let repo = RevokedTokenRepository::new(pool);
    let token = create_test_revoked_token("token-a");

    // When: Revoking the token
    repo.insert(&token).await.unwrap();

    // Then: The blacklist reports it
    assert_that!(repo.contains("token-a").await.unwrap(), eq(true));
}

#[tokio::test]
async fn given_empty_blacklist_when_checking_unknown_token_then_returns_false() {
    // Given: An empty blacklist
    let pool = create_test_pool().await;
    let repo = RevokedTokenRepository::new(pool);

    // When / Then: An unknown token is not blacklisted
    assert_that!(repo.contains("never-seen").await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_revoked_token_when_revoked_again_then_insert_is_a_noop() {
    // Given: A token already on the blacklist
    let pool = create_test_pool().await;
    let repo = RevokedTokenRepository::new(pool);
    let token = create_test_revoked_token("token-a");
    repo.insert(&token).await.unwrap();

    // When: Revoking it again
    let result = repo.insert(&token).await;

    // Then: No error, still blacklisted
    assert_that!(result, ok(anything()));
    assert_that!(repo.contains("token-a").await.unwrap(), eq(true));
}

#[tokio::test]
async fn given_mixed_entries_when_purging_then_only_expired_tokens_are_removed() {
    // Given: One expired and one live entry
    let pool = create_test_pool().await;
    let repo = RevokedTokenRepository::new(pool);
    let expired = RevokedToken::new("stale".to_string(), Utc::now() - Duration::hours(2));
    let live = create_test_revoked_token("live");
    repo.insert(&expired).await.unwrap();
    repo.insert(&live).await.unwrap();

    // When: Purging at the current time
    let removed = repo.purge_expired(Utc::now().timestamp()).await.unwrap();

    // Then: The expired entry is gone, the live one remains
    assert_that!(removed, eq(1));
    assert_that!(repo.contains("stale").await.unwrap(), eq(false));
    assert_that!(repo.contains("live").await.unwrap(), eq(true));
}
