// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variant converters from decoded XDR into [`crate::types`] records.
//!
//! Each union has one method with an exhaustive `match` over its arms.
//! Sequences are converted in order and the first failure aborts the call.

mod account;
mod asset;
mod contract;
mod ledger;
mod meta;
mod result;
mod transaction;

use stellar_xdr::curr as xdr;

use crate::address::{AddressCodec, StrkeyCodec};
use crate::error::Result;
use crate::types::HexBytes;

/// Converts decoded XDR values into output records.
///
/// Holds the address codec used for every account, contract and signer key
/// in the graph. The converter itself keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Converter<A = StrkeyCodec> {
    codec: A,
}

impl Converter<StrkeyCodec> {
    /// Converter backed by the `stellar-strkey` codec.
    pub fn strkey() -> Self {
        Self::default()
    }
}

impl<A: AddressCodec> Converter<A> {
    pub fn new(codec: A) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &A {
        &self.codec
    }

    /// `G…` address of an account id.
    pub fn account_id(&self, id: &xdr::AccountId) -> Result<String> {
        let xdr::PublicKey::PublicKeyTypeEd25519(key) = &id.0;
        self.ed25519(key)
    }

    pub(crate) fn ed25519(&self, key: &xdr::Uint256) -> Result<String> {
        Ok(self.codec.encode_account_id(&key.0)?)
    }

    pub(crate) fn contract_id(&self, hash: &xdr::Hash) -> Result<String> {
        Ok(self.codec.encode_contract(&hash.0)?)
    }
}

/// Convert each item in order, stopping at the first failure.
pub(crate) fn convert_all<T, U>(
    items: &[T],
    convert: impl FnMut(&T) -> Result<U>,
) -> Result<Vec<U>> {
    items.iter().map(convert).collect()
}

/// Text of a length-bounded XDR string. Invalid UTF-8 is replaced.
pub(crate) fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub(crate) fn hex_bytes(bytes: &[u8]) -> HexBytes {
    HexBytes::from(bytes)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::address::{AddressError, DecodedAddress};

    /// Deterministic codec that renders keys as `<prefix>:<hex>`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct PlainCodec;

    impl AddressCodec for PlainCodec {
        fn encode_account_id(&self, key: &[u8; 32]) -> std::result::Result<String, AddressError> {
            Ok(format!("G:{}", hex::encode(key)))
        }

        fn encode_muxed_account(
            &self,
            key: &[u8; 32],
            id: u64,
        ) -> std::result::Result<String, AddressError> {
            Ok(format!("M:{}:{id}", hex::encode(key)))
        }

        fn encode_contract(&self, hash: &[u8; 32]) -> std::result::Result<String, AddressError> {
            Ok(format!("C:{}", hex::encode(hash)))
        }

        fn encode_pre_auth_tx(&self, hash: &[u8; 32]) -> std::result::Result<String, AddressError> {
            Ok(format!("T:{}", hex::encode(hash)))
        }

        fn encode_hash_x(&self, hash: &[u8; 32]) -> std::result::Result<String, AddressError> {
            Ok(format!("X:{}", hex::encode(hash)))
        }

        fn encode_signed_payload(
            &self,
            key: &[u8; 32],
            payload: &[u8],
        ) -> std::result::Result<String, AddressError> {
            Ok(format!("P:{}:{}", hex::encode(key), hex::encode(payload)))
        }

        fn decode_address(&self, address: &str) -> std::result::Result<DecodedAddress, AddressError> {
            Err(AddressError::Decode(address.to_string()))
        }
    }

    pub fn converter() -> Converter<PlainCodec> {
        Converter::new(PlainCodec)
    }

    pub fn account(byte: u8) -> xdr::AccountId {
        xdr::AccountId(xdr::PublicKey::PublicKeyTypeEd25519(xdr::Uint256([byte; 32])))
    }
}
