// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Port to bind the HTTP server to
    ///
    /// Env: SXJ_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Interface to bind the HTTP server to
    ///
    /// Env: SXJ_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Maximum accepted request body, in bytes
    ///
    /// Env: SXJ_EXPRESS_REQUEST_LIMIT
    /// Default: 512000
    pub request_limit: usize,
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_request_limit() -> usize {
    512_000
}

fn is_valid_host(host: &str) -> bool {
    if IpAddr::from_str(host).is_ok() {
        return true;
    }

    // RFC 1123 hostname
    if host.is_empty() || host.len() > 253 {
        return false;
    }

    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if !is_valid_host(&self.bind_host) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid express bind host '{}'",
                self.bind_host
            )));
        }

        if self.request_limit == 0 {
            return Err(ConfigError::ValidateError(
                "Express request limit cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_host: default_bind_host(),
            request_limit: default_request_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_express_config() {
        let config = ExpressConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.request_limit, 512_000);
    }

    #[test]
    fn test_validate_port_zero() {
        let config = ExpressConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_port_valid() {
        let config = ExpressConfig {
            port: 3000,
            ..Default::default()
        };
        assert!(config.validate().is_ok())
    }

    #[test]
    fn test_validate_hosts() {
        for host in ["0.0.0.0", "::1", "localhost", "xdr.internal"] {
            let config = ExpressConfig {
                bind_host: host.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Host {} should be valid", host);
        }

        for host in ["", "-bad.host", "under_score", "a..b"] {
            let config = ExpressConfig {
                bind_host: host.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "Host {} should be invalid", host);
        }
    }

    #[test]
    fn test_validate_request_limit_zero() {
        let config = ExpressConfig {
            request_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
