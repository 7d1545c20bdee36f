use crate::AuthConfig;

fn valid() -> AuthConfig {
    AuthConfig {
        jwt_secret: Some("0123456789abcdef0123456789abcdef".into()),
        ..AuthConfig::default()
    }
}

#[test]
fn default_auth_config_has_no_secret_and_fails_validation() {
    let config = AuthConfig::default();

    assert!(config.jwt_secret.is_none());
    assert!(config.validate().is_err());
}

#[test]
fn short_secret_fails_validation() {
    let config = AuthConfig {
        jwt_secret: Some("too-short".into()),
        ..AuthConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn valid_config_passes() {
    assert!(valid().validate().is_ok());
}

#[test]
fn zero_ttls_fail_validation() {
    let mut config = valid();
    config.session_ttl_secs = 0;
    assert!(config.validate().is_err());

    let mut config = valid();
    config.verify_ttl_secs = 0;
    assert!(config.validate().is_err());

    let mut config = valid();
    config.otp_ttl_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn otp_length_is_bounded() {
    let mut config = valid();
    config.otp_length = 3;
    assert!(config.validate().is_err());

    config.otp_length = 11;
    assert!(config.validate().is_err());

    config.otp_length = 6;
    assert!(config.validate().is_ok());
}

#[test]
fn default_ttls_match_policy() {
    let config = AuthConfig::default();

    assert_eq!(config.session_ttl_secs, 1000 * 60 * 60);
    assert_eq!(config.verify_ttl_secs, 10 * 60 * 60);
    assert_eq!(config.otp_length, 4);
    assert_eq!(config.otp_ttl_secs, 600);
}
