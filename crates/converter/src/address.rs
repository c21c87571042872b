// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checksum address encoding.
//!
//! The converter never builds strkeys itself. Every key and address goes
//! through an [`AddressCodec`], which may fail; failures are surfaced to the
//! caller as [`crate::ConvertError::Collaborator`] during conversion or
//! [`crate::ConvertError::InvalidAddress`] while building values.

use stellar_strkey::{Contract, HashX, PreAuthTx, ed25519};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("failed to encode {0}")]
    Encode(String),

    #[error("failed to decode '{0}'")]
    Decode(String),

    /// Decoded fine, but the key kind cannot be used as an `ScAddress`.
    #[error("unsupported address kind in '{0}'")]
    Unsupported(String),
}

/// Raw key material recovered from an address literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedAddress {
    Account([u8; 32]),
    Contract([u8; 32]),
}

/// Encodes raw key material into textual addresses and back.
pub trait AddressCodec {
    fn encode_account_id(&self, key: &[u8; 32]) -> Result<String, AddressError>;

    fn encode_muxed_account(&self, key: &[u8; 32], id: u64) -> Result<String, AddressError>;

    fn encode_contract(&self, hash: &[u8; 32]) -> Result<String, AddressError>;

    fn encode_pre_auth_tx(&self, hash: &[u8; 32]) -> Result<String, AddressError>;

    fn encode_hash_x(&self, hash: &[u8; 32]) -> Result<String, AddressError>;

    fn encode_signed_payload(&self, key: &[u8; 32], payload: &[u8])
    -> Result<String, AddressError>;

    /// Parse an account (`G…`) or contract (`C…`) address.
    fn decode_address(&self, address: &str) -> Result<DecodedAddress, AddressError>;
}

/// [`AddressCodec`] backed by `stellar-strkey`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrkeyCodec;

impl AddressCodec for StrkeyCodec {
    fn encode_account_id(&self, key: &[u8; 32]) -> Result<String, AddressError> {
        Ok(ed25519::PublicKey(*key).to_string())
    }

    fn encode_muxed_account(&self, key: &[u8; 32], id: u64) -> Result<String, AddressError> {
        Ok(ed25519::MuxedAccount {
            ed25519: *key,
            id,
        }
        .to_string())
    }

    fn encode_contract(&self, hash: &[u8; 32]) -> Result<String, AddressError> {
        Ok(Contract(*hash).to_string())
    }

    fn encode_pre_auth_tx(&self, hash: &[u8; 32]) -> Result<String, AddressError> {
        Ok(PreAuthTx(*hash).to_string())
    }

    fn encode_hash_x(&self, hash: &[u8; 32]) -> Result<String, AddressError> {
        Ok(HashX(*hash).to_string())
    }

    fn encode_signed_payload(
        &self,
        key: &[u8; 32],
        payload: &[u8],
    ) -> Result<String, AddressError> {
        // Signed payloads carry at most 64 bytes.
        if payload.len() > 64 {
            return Err(AddressError::Encode(format!(
                "signed payload of {} bytes",
                payload.len()
            )));
        }
        Ok(ed25519::SignedPayload {
            ed25519: *key,
            payload: payload.to_vec(),
        }
        .to_string())
    }

    fn decode_address(&self, address: &str) -> Result<DecodedAddress, AddressError> {
        match address.as_bytes().first() {
            Some(b'G') => ed25519::PublicKey::from_string(address)
                .map(|key| DecodedAddress::Account(key.0))
                .map_err(|_| AddressError::Decode(address.to_string())),
            Some(b'C') => Contract::from_string(address)
                .map(|contract| DecodedAddress::Contract(contract.0))
                .map_err(|_| AddressError::Decode(address.to_string())),
            Some(b'M' | b'T' | b'X' | b'P' | b'S') => {
                Err(AddressError::Unsupported(address.to_string()))
            }
            _ => Err(AddressError::Decode(address.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Strkey test vectors from SEP-0023.
    const ACCOUNT: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";
    const CONTRACT: &str = "CA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAXE";

    #[test]
    fn test_account_round_trip() {
        let codec = StrkeyCodec;
        let DecodedAddress::Account(key) = codec.decode_address(ACCOUNT).unwrap() else {
            panic!("expected an account");
        };
        assert_eq!(codec.encode_account_id(&key).unwrap(), ACCOUNT);
    }

    #[test]
    fn test_contract_round_trip() {
        let codec = StrkeyCodec;
        let DecodedAddress::Contract(hash) = codec.decode_address(CONTRACT).unwrap() else {
            panic!("expected a contract");
        };
        assert_eq!(codec.encode_contract(&hash).unwrap(), CONTRACT);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = StrkeyCodec;
        assert!(matches!(
            codec.decode_address("not-an-address"),
            Err(AddressError::Decode(_))
        ));
        assert!(matches!(
            codec.decode_address("GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGA"),
            Err(AddressError::Decode(_))
        ));
        assert!(matches!(codec.decode_address(""), Err(AddressError::Decode(_))));
    }

    #[test]
    fn test_muxed_account_is_not_an_sc_address() {
        let codec = StrkeyCodec;
        let muxed = codec.encode_muxed_account(&[7u8; 32], 42).unwrap();
        assert!(muxed.starts_with('M'));
        assert!(matches!(
            codec.decode_address(&muxed),
            Err(AddressError::Unsupported(_))
        ));
    }

    #[test]
    fn test_prefixes() {
        let codec = StrkeyCodec;
        let key = [1u8; 32];
        assert!(codec.encode_pre_auth_tx(&key).unwrap().starts_with('T'));
        assert!(codec.encode_hash_x(&key).unwrap().starts_with('X'));
        assert!(codec.encode_signed_payload(&key, &[9, 9]).unwrap().starts_with('P'));
        assert!(matches!(
            codec.encode_signed_payload(&key, &[0u8; 65]),
            Err(AddressError::Encode(_))
        ));
    }
}
