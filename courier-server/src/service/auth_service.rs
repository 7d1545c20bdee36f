//! Authentication flows
//!
//! Every flow is a tagged-result method consumed exactly once by its
//! handler. Handlers never touch the user repository directly.

use super::error::{AuthFlowError, FieldViolation, Result};
use crate::notifier::OtpDelivery;
use crate::state::{AppState, AuthPolicy};

use courier_auth::{Classification, CredentialHasher, TokenIssuer, classify, otp};
use courier_core::{Channel, PendingOtp, Profile, RevokedToken, User};
use courier_db::{DbError, ProfileRepository, RevokedTokenRepository, UserRepository};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use uuid::Uuid;

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Whether a one-time code reached its destination. Delivery failure is
/// never fatal to the flow that issued the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Failed => "failed",
        }
    }
}

pub struct Registered {
    pub user_id: Uuid,
    pub channel: Channel,
    pub delivery: DeliveryStatus,
}

pub enum LoginOutcome {
    /// Channel verified: a session token plus the merged profile view.
    Verified {
        token: String,
        user: User,
        profile: Option<Profile>,
    },
    /// Channel not yet verified: a fresh code was issued instead.
    NotVerified {
        user_id: Uuid,
        delivery: DeliveryStatus,
    },
}

pub struct VerifiedOtp {
    pub token: String,
    pub channel: Channel,
}

pub struct AuthService {
    users: UserRepository,
    revoked: RevokedTokenRepository,
    profiles: ProfileRepository,
    issuer: Arc<TokenIssuer>,
    hasher: Arc<CredentialHasher>,
    delivery: Arc<OtpDelivery>,
    policy: AuthPolicy,
}

impl AuthService {
    pub fn new(state: &AppState) -> Self {
        Self {
            users: UserRepository::new(state.pool.clone()),
            revoked: RevokedTokenRepository::new(state.pool.clone()),
            profiles: ProfileRepository::new(state.pool.clone()),
            issuer: state.token_issuer.clone(),
            hasher: state.hasher.clone(),
            delivery: state.delivery.clone(),
            policy: state.policy,
        }
    }

    pub async fn register(&self, identifier: &str, password: &str) -> Result<Registered> {
        let channel = validate_credentials(identifier, password)?;

        if !self.delivery.supports(channel) {
            return Err(AuthFlowError::ChannelUnsupported { channel });
        }

        if self.users.find_by_login(identifier).await?.is_some() {
            return Err(AuthFlowError::DuplicateUser);
        }

        let hash = self.hash_password(password).await?;
        let mut user = User::new(identifier.to_string(), channel, hash);
        let code = otp::generate(self.policy.otp_length);
        user.otp = Some(PendingOtp {
            code: code.clone(),
            expires_at: Utc::now() + self.policy.otp_ttl,
        });

        if let Err(e) = self.users.create(&user).await {
            // A concurrent registration can slip past the find above.
            if is_unique_violation(&e) {
                return Err(AuthFlowError::DuplicateUser);
            }
            return Err(e.into());
        }

        let delivery = self.deliver_code(&user, &code).await;

        Ok(Registered {
            user_id: user.id,
            channel,
            delivery,
        })
    }

    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginOutcome> {
        let user = self
            .users
            .find_by_login(identifier)
            .await?
            .ok_or(AuthFlowError::InvalidCredentials)?;

        if !self.verify_password(&user.password_hash, password).await? {
            return Err(AuthFlowError::InvalidCredentials);
        }

        if user.channel_verified() {
            let token = self.issuer.issue(user.id, self.policy.session_ttl)?;
            let profile = self.profiles.find_by_user(user.id).await?;
            return Ok(LoginOutcome::Verified {
                token,
                user,
                profile,
            });
        }

        // Unverified channel: re-issue a code instead of a session.
        if !self.delivery.supports(user.channel) {
            return Err(AuthFlowError::ChannelUnsupported {
                channel: user.channel,
            });
        }
        let code = self.issue_otp(&user).await?;
        let delivery = self.deliver_code(&user, &code).await;

        Ok(LoginOutcome::NotVerified {
            user_id: user.id,
            delivery,
        })
    }

    /// Re-issues and redelivers a code. Unknown user, missing address and
    /// unsupported channel all collapse into one generic outcome so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn resend_otp(&self, identifier: &str) -> Result<()> {
        if classify(identifier) == Classification::Invalid {
            return Err(AuthFlowError::Validation {
                violations: vec![identifier_violation()],
            });
        }

        let Some(user) = self.users.find_by_login(identifier).await? else {
            return Err(AuthFlowError::Undeliverable);
        };
        if user.otp_destination().is_none() || !self.delivery.supports(user.channel) {
            return Err(AuthFlowError::Undeliverable);
        }

        let code = self.issue_otp(&user).await?;
        // Failure is logged inside; the acknowledgment stays generic.
        self.deliver_code(&user, &code).await;

        Ok(())
    }

    pub async fn verify_otp(&self, identifier: &str, code: &str) -> Result<VerifiedOtp> {
        let user = self
            .users
            .find_by_login(identifier)
            .await?
            .ok_or(AuthFlowError::NotFound)?;

        self.check_pending_otp(&user, code)?;

        let applied = self
            .users
            .consume_otp(user.id, user.channel, user.otp_version)
            .await?;
        if !applied {
            return Err(AuthFlowError::Conflict);
        }

        let token = self.issuer.issue(user.id, self.policy.verify_ttl)?;

        Ok(VerifiedOtp {
            token,
            channel: user.channel,
        })
    }

    /// Always succeeds. A decodable token lands on the blacklist with its
    /// own expiry; anything else is a no-op.
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token else {
            return;
        };
        let Some(exp) = self.issuer.decode_expiry(token) else {
            debug!("Logout with undecodable token ignored");
            return;
        };
        let Some(expires_at) = DateTime::from_timestamp(exp, 0) else {
            return;
        };

        let revoked = RevokedToken::new(token.to_string(), expires_at);
        if let Err(e) = self.revoked.insert(&revoked).await {
            warn!("Failed to blacklist token on logout: {e}");
        }
    }

    /// Changing the password requires proving channel ownership with a
    /// valid, unexpired code. The code is consumed in the same flow.
    pub async fn reset_password(
        &self,
        identifier: &str,
        code: &str,
        new_password: &str,
    ) -> Result<()> {
        validate_credentials(identifier, new_password)?;

        let user = self
            .users
            .find_by_login(identifier)
            .await?
            .ok_or(AuthFlowError::NotFound)?;

        self.check_pending_otp(&user, code)?;

        let applied = self
            .users
            .consume_otp(user.id, user.channel, user.otp_version)
            .await?;
        if !applied {
            return Err(AuthFlowError::Conflict);
        }

        let hash = self.hash_password(new_password).await?;
        self.users.update_password(user.id, &hash).await?;

        Ok(())
    }

    /// Blacklist hit and signature/expiry failure are indistinguishable
    /// from the outside.
    pub async fn authenticate(&self, token: &str) -> Result<Uuid> {
        if self.revoked.contains(token).await? {
            return Err(AuthFlowError::InvalidToken);
        }

        let claims = self
            .issuer
            .verify(token)
            .map_err(|_| AuthFlowError::InvalidToken)?;

        claims.user_id().map_err(|_| AuthFlowError::InvalidToken)
    }

    fn check_pending_otp(&self, user: &User, code: &str) -> Result<()> {
        let pending = user.otp.as_ref().ok_or(AuthFlowError::InvalidOtp)?;
        match otp::validate(pending, code, Utc::now()) {
            Ok(()) => Ok(()),
            Err(courier_auth::OtpError::Mismatch) => Err(AuthFlowError::InvalidOtp),
            Err(courier_auth::OtpError::Expired) => Err(AuthFlowError::OtpExpired),
        }
    }

    async fn issue_otp(&self, user: &User) -> Result<String> {
        let code = otp::generate(self.policy.otp_length);
        let pending = PendingOtp {
            code: code.clone(),
            expires_at: Utc::now() + self.policy.otp_ttl,
        };

        let applied = self
            .users
            .set_pending_otp(user.id, &pending, user.otp_version)
            .await?;
        if !applied {
            return Err(AuthFlowError::Conflict);
        }

        Ok(code)
    }

    async fn deliver_code(&self, user: &User, code: &str) -> DeliveryStatus {
        let Some(destination) = user.otp_destination() else {
            warn!("User {} has no deliverable {} address", user.id, user.channel);
            return DeliveryStatus::Failed;
        };

        match self.delivery.send(user.channel, destination, code).await {
            Ok(()) => DeliveryStatus::Sent,
            Err(e) => {
                warn!("OTP delivery for user {} failed: {e}", user.id);
                DeliveryStatus::Failed
            }
        }
    }

    async fn hash_password(&self, password: &str) -> Result<String> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthFlowError::internal(format!("hash task failed: {e}")))?
            .map_err(AuthFlowError::from)
    }

    async fn verify_password(&self, hash: &str, password: &str) -> Result<bool> {
        let hasher = self.hasher.clone();
        let hash = hash.to_string();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthFlowError::internal(format!("verify task failed: {e}")))?
            .map_err(AuthFlowError::from)
    }
}

/// Classifies the identifier and checks the password policy, collecting
/// every violation before failing.
fn validate_credentials(identifier: &str, password: &str) -> Result<Channel> {
    let mut violations = Vec::new();

    let channel = match classify(identifier).channel() {
        Some(channel) => Some(channel),
        None => {
            violations.push(identifier_violation());
            None
        }
    };

    if password.len() < MIN_PASSWORD_LEN {
        violations.push(FieldViolation {
            field: "password",
            message: format!("must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }

    match channel {
        Some(channel) if violations.is_empty() => Ok(channel),
        _ => Err(AuthFlowError::Validation { violations }),
    }
}

fn identifier_violation() -> FieldViolation {
    FieldViolation {
        field: "identifier",
        message: "must be an email address or a 10-digit phone number".to_string(),
    }
}

fn is_unique_violation(e: &DbError) -> bool {
    match e {
        DbError::Sqlx {
            source: sqlx::Error::Database(db),
            ..
        } => db.is_unique_violation(),
        _ => false,
    }
}
