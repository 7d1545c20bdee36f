//! fern-backed logging setup.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use courier_config::LogLevel;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Wire the `log` facade to stdout or a log file.
///
/// Colors only apply to the stdout target; a log file always gets the
/// plain format. Chatty dependency crates are capped at warn so debug
/// runs stay readable.
pub fn initialize(
    level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let filter = level.to_filter();

    let dispatch = Dispatch::new()
        .level(filter)
        .level_for("sqlx", filter.min(LevelFilter::Warn))
        .level_for("hyper", filter.min(LevelFilter::Warn))
        .level_for("reqwest", filter.min(LevelFilter::Warn));

    let dispatch = match log_file {
        Some(ref path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logging {
                message: format!("Failed to open log file {}: {e}", path.display()),
            })?;
            dispatch.format(render_plain).chain(file)
        }
        None if colored => {
            let palette = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            dispatch
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{} {:>5} {} > {message}",
                        timestamp(),
                        palette.color(record.level()),
                        record.target(),
                    ))
                })
                .chain(io::stdout())
        }
        None => dispatch.format(render_plain).chain(io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logging {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    // axum and tower emit through tracing; route those into log
    tracing_log::LogTracer::init().ok();

    match log_file {
        Some(path) => info!("Logging at {level} to {}", path.display()),
        None => info!("Logging at {level} to stdout"),
    }

    Ok(())
}

fn render_plain(out: FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "{} {:>5} {} > {message}",
        timestamp(),
        record.level(),
        record.target(),
    ))
}

fn timestamp() -> humantime::Rfc3339Timestamp {
    humantime::format_rfc3339_seconds(SystemTime::now())
}
