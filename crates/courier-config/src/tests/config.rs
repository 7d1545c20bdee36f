use crate::Config;

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.server.port, 8080);
    assert!(config.auth.jwt_secret.is_none());
    assert!(config.delivery.smtp.is_none());
}

#[test]
fn full_toml_round_trips_into_config() {
    let config: Config = toml::from_str(
        r#"
        [server]
        host = "0.0.0.0"
        port = 9000

        [database]
        path = "auth.db"

        [auth]
        jwt_secret = "0123456789abcdef0123456789abcdef"
        otp_length = 6

        [delivery]
        timeout_secs = 5

        [delivery.smtp]
        host = "smtp.example.com"
        username = "mailer"
        password = "hunter2"
        from_email = "noreply@example.com"

        [logging]
        level = "debug"
        colored = false
        "#,
    )
    .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.database.path, "auth.db");
    assert_eq!(config.auth.otp_length, 6);
    assert_eq!(config.delivery.timeout_secs, 5);

    let smtp = config.delivery.smtp.unwrap();
    assert_eq!(smtp.host, "smtp.example.com");
    assert_eq!(smtp.port, 587); // default
    assert!(!config.logging.colored);

    // With a secret present the whole config validates.
    let config: Config = toml::from_str(
        r#"
        [auth]
        jwt_secret = "0123456789abcdef0123456789abcdef"
        "#,
    )
    .unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn absolute_database_path_fails_validation() {
    let config: Config = toml::from_str(
        r#"
        [database]
        path = "/etc/courier.db"

        [auth]
        jwt_secret = "0123456789abcdef0123456789abcdef"
        "#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}
