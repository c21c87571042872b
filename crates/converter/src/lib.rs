// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion of decoded Stellar XDR into JSON-ready records.
//!
//! [`Converter`] turns ledger entries, transaction envelopes, results,
//! metadata, contract events and contract values into plain
//! `serde::Serialize` records. Tagged unions become a `type` (or `code`)
//! discriminant with one populated slot, versioned `ext` chains are
//! expanded to every level, and wide integers are exposed both as words and
//! as exact decimals. The [`builder`] goes the other way, from a
//! `(type, literal)` pair to a contract value.

pub mod address;
pub mod builder;
pub mod chain;
mod convert;
pub mod error;
mod facade;
mod info;
pub mod json;
pub mod types;
pub mod wide;

pub use address::{AddressCodec, AddressError, DecodedAddress, StrkeyCodec};
pub use builder::{TypeTag, build, build_with};
pub use convert::Converter;
pub use error::{ConvertError, Result};
pub use json::{
    XdrKind, marshal_json_contract_event_xdr, marshal_json_envelope_xdr,
    marshal_json_ledger_entry_xdr, marshal_json_result_meta_xdr, marshal_json_result_xdr,
    marshal_json_sc_val_xdr,
};
pub use wide::{decimal_to_i128, decimal_to_i256, decimal_to_u128, decimal_to_u256};

/// Re-export of the XDR schema this crate converts from.
pub use stellar_xdr::curr as xdr;
