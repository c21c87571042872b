// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to install the global subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the filter for a configured level.
///
/// `http` keeps the service at `info` and enables the per-request lines
/// emitted under the `http` target.
pub(crate) fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = if level == "http" {
        "info,http=debug"
    } else {
        level
    };

    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Size-rotated appender writing `logs.log` under `write_path`.
///
/// `write_max_files` counts the current file, so `5` keeps `logs.log` and
/// `logs.log.{1,2,3,4}`.
pub(crate) fn file_appender(config: &LogConfig) -> Result<BasicRollingFileAppender, LoggingError> {
    std::fs::create_dir_all(&config.write_path)?;

    let log_file_path = PathBuf::from(&config.write_path).join("logs.log");
    let rotated_files_count = config.write_max_files.saturating_sub(1);
    let appender = BasicRollingFileAppender::new(
        log_file_path,
        RollingConditionBasic::new().max_size(config.write_max_file_size),
        rotated_files_count,
    )?;

    Ok(appender)
}

/// Install the global tracing subscriber described by `config`.
///
/// Console output is always on. When `config.write` is set the same events
/// also go to a rotated file, never with ANSI colors. The returned guard
/// flushes the file writer and must be held for the life of the process.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = filter(&config.level)?;

    let console = if config.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi)
            .boxed()
    };

    let (file, guard) = if config.write {
        let (writer, guard) = tracing_appender::non_blocking(file_appender(config)?);
        let layer = if config.json {
            fmt::layer().json().with_writer(writer).boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(writer)
                .boxed()
        };
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_level_enables_request_target() {
        let filter = filter("http").unwrap();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_invalid_level() {
        let err = filter("http=verbose").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLogLevel { .. }));
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            write: true,
            write_path: dir.path().join("nested").to_string_lossy().into_owned(),
            ..Default::default()
        };

        file_appender(&config).unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
