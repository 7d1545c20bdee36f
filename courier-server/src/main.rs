use courier_server::logger;
use courier_server::notifier::{OtpDelivery, OtpSender, SmtpSender, TwilioSmsSender};
use courier_server::routes::build_router;
use courier_server::state::{AppState, AuthPolicy};

use courier_auth::{CredentialHasher, TokenIssuer};
use courier_db::RevokedTokenRepository;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = courier_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = courier_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting courier-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/courier-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Naturally expired tokens can no longer pass verification; the
    // blacklist only needs entries revoked before their expiry.
    let purged = RevokedTokenRepository::new(pool.clone())
        .purge_expired(chrono::Utc::now().timestamp())
        .await?;
    if purged > 0 {
        info!("Purged {purged} expired revoked tokens");
    }

    // Token issuer from the validated signing secret
    let Some(ref secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };
    let token_issuer = Arc::new(TokenIssuer::new(secret.as_bytes()));
    info!("JWT: HS256 token issuer initialized");

    let hasher = Arc::new(CredentialHasher::new()?);

    // Wire up OTP delivery from the configured channels
    let email_sender: Option<Arc<dyn OtpSender>> = match config.delivery.smtp {
        Some(ref smtp) => {
            info!("SMTP delivery configured: {}:{}", smtp.host, smtp.port);
            Some(Arc::new(SmtpSender::new(smtp)?))
        }
        None => None,
    };
    let sms_sender: Option<Arc<dyn OtpSender>> = match config.delivery.sms {
        Some(ref sms) => {
            info!("SMS delivery configured");
            Some(Arc::new(TwilioSmsSender::new(sms)))
        }
        None => None,
    };
    let delivery = Arc::new(OtpDelivery::new(
        email_sender,
        sms_sender,
        Duration::from_secs(config.delivery.timeout_secs),
    ));

    // Build application state and router
    let state = AppState {
        pool,
        token_issuer,
        hasher,
        delivery,
        policy: AuthPolicy::from_config(&config.auth),
    };
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
