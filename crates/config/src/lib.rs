// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Service configuration, read from `SXJ_`-prefixed environment variables.
//!
//! Variables are flat (`SXJ_EXPRESS_PORT`, `SXJ_LOG_LEVEL`, ...) and grouped
//! into per-concern sections after loading. Each section validates itself.

mod args;
mod error;
mod express;
mod log;

pub use args::Args;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "SXJ_";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
}

/// Flat view of the environment as `envy` sees it.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_port")]
    express_port: u16,
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_request_limit")]
    express_request_limit: usize,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,
}

impl From<EnvConfig> for AppConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                port: env.express_port,
                bind_host: env.express_bind_host,
                request_limit: env.express_request_limit,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Same as [`AppConfig::from_env`] over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Loads `env_file` into the process environment when it exists, then
    /// reads the configuration. Variables already set take precedence.
    pub fn load(env_file: &str) -> Result<Self, ConfigError> {
        if Path::new(env_file).exists() {
            dotenv::from_path(env_file).map_err(|source| ConfigError::EnvFileError {
                path: env_file.to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = AppConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.express.bind_host, "127.0.0.1");
        assert_eq!(config.log.write_max_file_size, 5_242_880);
    }

    #[test]
    fn test_prefixed_variables_are_grouped() {
        let config = AppConfig::from_vars(vars(&[
            ("SXJ_EXPRESS_PORT", "9000"),
            ("SXJ_EXPRESS_BIND_HOST", "0.0.0.0"),
            ("SXJ_LOG_LEVEL", "debug"),
            ("SXJ_LOG_JSON", "true"),
            ("SXJ_LOG_WRITE", "true"),
            ("SXJ_LOG_WRITE_MAX_FILES", "3"),
            ("EXPRESS_PORT", "1"),
        ]))
        .unwrap();

        assert_eq!(config.express.port, 9000);
        assert_eq!(config.express.bind_host, "0.0.0.0");
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert!(config.log.write);
        assert_eq!(config.log.write_max_files, 3);
    }

    #[test]
    fn test_unparsable_value() {
        let err = AppConfig::from_vars(vars(&[("SXJ_EXPRESS_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_validation_runs_after_loading() {
        let err = AppConfig::from_vars(vars(&[("SXJ_LOG_LEVEL", "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::ValidateError(_)));
    }

    #[test]
    #[serial]
    fn test_load_reads_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SXJ_EXPRESS_PORT=9123").unwrap();
        writeln!(file, "SXJ_LOG_STRIP_ANSI=true").unwrap();

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();

        unsafe {
            std::env::remove_var("SXJ_EXPRESS_PORT");
            std::env::remove_var("SXJ_LOG_STRIP_ANSI");
        }

        assert_eq!(config.express.port, 9123);
        assert!(config.log.strip_ansi);
    }

    #[test]
    #[serial]
    fn test_process_environment_wins_over_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SXJ_EXPRESS_PORT=9123").unwrap();

        unsafe {
            std::env::set_var("SXJ_EXPRESS_PORT", "7000");
        }
        let config = AppConfig::load(file.path().to_str().unwrap());
        unsafe {
            std::env::remove_var("SXJ_EXPRESS_PORT");
        }

        assert_eq!(config.unwrap().express.port, 7000);
    }

    #[test]
    #[serial]
    fn test_missing_env_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(".env.absent");
        let config = AppConfig::load(missing.to_str().unwrap()).unwrap();
        assert_eq!(config.express.port, 8080);
    }
}
