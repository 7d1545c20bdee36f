mod auth;
mod config;
mod log_level;
