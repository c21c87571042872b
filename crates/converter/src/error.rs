// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types for XDR conversion and typed-value construction.

use thiserror::Error;

use crate::address::AddressError;

/// Result alias used throughout the converter.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Every failure the converter can report.
///
/// Conversions fail fast: the first error aborts the whole call and is
/// returned unchanged to the caller. Nothing is retried or defaulted.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A discriminant outside the set this converter handles.
    #[error("Unsupported {type_name} variant '{tag}'")]
    UnsupportedVariant { type_name: &'static str, tag: String },

    /// Not a base-10 integer of the required sign class.
    #[error("Malformed number '{literal}'")]
    MalformedNumber { literal: String },

    #[error("Malformed {tag} literal '{literal}'")]
    MalformedLiteral { tag: &'static str, literal: String },

    #[error("Malformed hex literal '{literal}': {source}")]
    MalformedHex {
        literal: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Malformed vector item '{item}', expected <type>@<value>")]
    MalformedVectorItem { item: String },

    #[error("Unknown type tag '{tag}'")]
    UnknownTypeTag { tag: String },

    #[error("Literal '{literal}' does not fit in {tag}")]
    Overflow { tag: &'static str, literal: String },

    #[error("Invalid address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    /// Failure reported by the address codec while encoding keys.
    #[error("Address codec failure: {0}")]
    Collaborator(#[from] AddressError),

    #[error("Unknown XDR kind '{0}'")]
    UnknownXdrKind(String),

    #[error("XDR error: {0}")]
    Xdr(#[from] stellar_xdr::curr::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn unsupported(type_name: &'static str, tag: impl Into<String>) -> Self {
        Self::UnsupportedVariant {
            type_name,
            tag: tag.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_variant_message() {
        let err = ConvertError::unsupported("ScVal", "Map");
        assert_eq!(err.to_string(), "Unsupported ScVal variant 'Map'");
    }

    #[test]
    fn test_collaborator_error_is_forwarded() {
        let err: ConvertError = AddressError::Encode("boom".to_string()).into();
        assert!(matches!(err, ConvertError::Collaborator(AddressError::Encode(_))));
    }
}
