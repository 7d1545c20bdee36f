use crate::{AuthError, Claims, TokenIssuer};

use std::time::Duration;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn create_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

#[test]
fn given_issued_token_when_verified_then_returns_claims() {
    let issuer = TokenIssuer::new(SECRET);
    let user_id = Uuid::new_v4();

    let token = issuer.issue(user_id, Duration::from_secs(3600)).unwrap();
    let claims = issuer.verify(&token).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert!(claims.exp > claims.iat);
}

#[test]
fn given_expired_token_when_verified_then_returns_token_expired_error() {
    let issuer = TokenIssuer::new(SECRET);
    let mut claims = Claims::new(Uuid::new_v4(), Duration::from_secs(3600));
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_token(&claims, SECRET);

    let result = issuer.verify(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_verified_then_returns_decode_error() {
    let issuer = TokenIssuer::new(b"wrong-secret-key-at-least-32-by");
    let claims = Claims::new(Uuid::new_v4(), Duration::from_secs(3600));
    let token = create_token(&claims, SECRET);

    let result = issuer.verify(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_expired_token_when_decoding_expiry_then_returns_expiry_claim() {
    let issuer = TokenIssuer::new(SECRET);
    let mut claims = Claims::new(Uuid::new_v4(), Duration::from_secs(3600));
    claims.exp = chrono::Utc::now().timestamp() - 60;
    let token = create_token(&claims, SECRET);

    // Verification rejects it, revocation can still read the expiry.
    assert!(issuer.verify(&token).is_err());
    assert_eq!(issuer.decode_expiry(&token), Some(claims.exp));
}

#[test]
fn given_garbage_token_when_decoding_expiry_then_returns_none() {
    let issuer = TokenIssuer::new(SECRET);

    assert_eq!(issuer.decode_expiry("not-a-token"), None);
    assert_eq!(issuer.decode_expiry(""), None);
}

#[test]
fn given_forged_token_when_decoding_expiry_then_returns_none() {
    let issuer = TokenIssuer::new(SECRET);
    let claims = Claims::new(Uuid::new_v4(), Duration::from_secs(3600));
    let forged = create_token(&claims, b"attacker-controlled-secret-value");

    assert_eq!(issuer.decode_expiry(&forged), None);
}
