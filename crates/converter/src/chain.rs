// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Versioned extension chains.
//!
//! Many ledger records end in an `ext` union: arm `0` carries nothing, arm
//! `N` carries a version-`N` record which in turn ends in its own `ext`.
//! On output every level is explicit. A missing level is rendered as its
//! version tag plus a default payload, so consumers always see the same
//! shape regardless of which protocol version produced the record.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use stellar_xdr::curr as xdr;

use crate::error::Result;

/// Output payload that can sit at one level of a chain.
pub trait ExtensionLevel: Default + Serialize {
    /// Version tag of the arm that carries this payload.
    const VERSION: i32;
    /// Field name the payload is emitted under.
    const KEY: &'static str;
}

/// Version tag of a decoded `ext` union.
pub trait Versioned {
    fn version(&self) -> i32;
}

/// Decoded `ext` union with one payload-bearing arm.
pub trait ExtensionChain: Versioned {
    type Next;

    fn next(&self) -> Option<&Self::Next>;
}

/// One resolved level: `{ "v": <version>, "<KEY>": <payload> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension<T> {
    pub v: i32,
    pub payload: T,
}

impl<T: ExtensionLevel> Extension<T> {
    /// Level whose next record is missing on the wire.
    pub fn absent(v: i32) -> Self {
        Self {
            v,
            payload: T::default(),
        }
    }

    pub fn present(payload: T) -> Self {
        Self {
            v: T::VERSION,
            payload,
        }
    }
}

impl<T: ExtensionLevel> Default for Extension<T> {
    fn default() -> Self {
        Self::absent(0)
    }
}

impl<T: ExtensionLevel> Serialize for Extension<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("v", &self.v)?;
        map.serialize_entry(T::KEY, &self.payload)?;
        map.end()
    }
}

/// Resolve one level of a chain, converting the next record when present.
///
/// `convert` is expected to resolve the trailing `ext` of the record it
/// converts, so a single call walks the chain to its end. The first failure
/// at any depth aborts the whole chain.
pub fn resolve<E, T, F>(ext: &E, convert: F) -> Result<Extension<T>>
where
    E: ExtensionChain,
    T: ExtensionLevel,
    F: FnOnce(&E::Next) -> Result<T>,
{
    match ext.next() {
        Some(next) => Ok(Extension {
            v: ext.version(),
            payload: convert(next)?,
        }),
        None => Ok(Extension::absent(ext.version())),
    }
}

/// Terminal level with no payload arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionPoint {
    pub v: i32,
}

impl ExtensionPoint {
    pub fn of<E: Versioned>(ext: &E) -> Self {
        Self { v: ext.version() }
    }
}

macro_rules! terminal_ext {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Versioned for xdr::$ty {
                fn version(&self) -> i32 {
                    match self {
                        Self::V0 => 0,
                    }
                }
            }
        )*
    };
}

terminal_ext!(
    ExtensionPoint,
    TrustLineEntryExtensionV2Ext,
    ClaimableBalanceEntryExtensionV1Ext,
    OfferEntryExt,
    DataEntryExt,
    LedgerEntryExtensionV1Ext,
    TransactionResultExt,
    InnerTransactionResultExt,
    TransactionV0Ext,
    FeeBumpTransactionExt,
);

macro_rules! chain_ext {
    ($($ty:ident => $arm:ident($next:ident) = $v:literal),* $(,)?) => {
        $(
            impl Versioned for xdr::$ty {
                fn version(&self) -> i32 {
                    match self {
                        Self::V0 => 0,
                        Self::$arm(_) => $v,
                    }
                }
            }

            impl ExtensionChain for xdr::$ty {
                type Next = xdr::$next;

                fn next(&self) -> Option<&Self::Next> {
                    match self {
                        Self::V0 => None,
                        Self::$arm(next) => Some(next),
                    }
                }
            }
        )*
    };
}

chain_ext!(
    AccountEntryExt => V1(AccountEntryExtensionV1) = 1,
    AccountEntryExtensionV1Ext => V2(AccountEntryExtensionV2) = 2,
    AccountEntryExtensionV2Ext => V3(AccountEntryExtensionV3) = 3,
    TrustLineEntryExt => V1(TrustLineEntryV1) = 1,
    TrustLineEntryV1Ext => V2(TrustLineEntryExtensionV2) = 2,
    ClaimableBalanceEntryExt => V1(ClaimableBalanceEntryExtensionV1) = 1,
    ContractCodeEntryExt => V1(ContractCodeEntryV1) = 1,
    LedgerEntryExt => V1(LedgerEntryExtensionV1) = 1,
    TransactionExt => V1(SorobanTransactionData) = 1,
    SorobanTransactionMetaExt => V1(SorobanTransactionMetaExtV1) = 1,
);
