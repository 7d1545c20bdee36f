use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] courier_config::ConfigError),

    #[error("Delivery setup error: {message}")]
    Delivery { message: String },

    #[error("Logging setup error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
