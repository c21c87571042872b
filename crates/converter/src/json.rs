// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decode-convert-serialize entry points for raw and base64 XDR.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use stellar_xdr::curr::{Limits, ReadXdr};

use crate::address::AddressCodec;
use crate::convert::Converter;
use crate::error::{ConvertError, Result};

/// Top-level XDR entities accepted by the JSON entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XdrKind {
    Envelope,
    Result,
    ResultMeta,
    ContractEvent,
    LedgerEntry,
    ScVal,
}

impl XdrKind {
    pub const ALL: [XdrKind; 6] = [
        XdrKind::Envelope,
        XdrKind::Result,
        XdrKind::ResultMeta,
        XdrKind::ContractEvent,
        XdrKind::LedgerEntry,
        XdrKind::ScVal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            XdrKind::Envelope => "envelope",
            XdrKind::Result => "result",
            XdrKind::ResultMeta => "result-meta",
            XdrKind::ContractEvent => "contract-event",
            XdrKind::LedgerEntry => "ledger-entry",
            XdrKind::ScVal => "sc-val",
        }
    }
}

impl FromStr for XdrKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        XdrKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConvertError::UnknownXdrKind(s.to_string()))
    }
}

impl fmt::Display for XdrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: AddressCodec> Converter<A> {
    /// Decode raw XDR of the given kind and convert it to a JSON value.
    pub fn xdr_to_json(&self, kind: XdrKind, bytes: &[u8]) -> Result<Value> {
        tracing::debug!(kind = %kind, len = bytes.len(), "converting XDR");
        match kind {
            XdrKind::Envelope => to_value(self.transaction_envelope(&decode(bytes)?)?),
            XdrKind::Result => to_value(self.transaction_result_pair(&decode(bytes)?)?),
            XdrKind::ResultMeta => to_value(self.transaction_result_meta(&decode(bytes)?)?),
            XdrKind::ContractEvent => to_value(self.contract_event(&decode(bytes)?)?),
            XdrKind::LedgerEntry => to_value(self.ledger_entry(&decode(bytes)?)?),
            XdrKind::ScVal => to_value(self.sc_val(&decode(bytes)?)?),
        }
    }

    /// Same as [`Self::xdr_to_json`] for base64 input.
    pub fn base64_to_json(&self, kind: XdrKind, encoded: &str) -> Result<Value> {
        tracing::debug!(kind = %kind, len = encoded.len(), "converting base64 XDR");
        match kind {
            XdrKind::Envelope => to_value(self.transaction_envelope(&decode_base64(encoded)?)?),
            XdrKind::Result => to_value(self.transaction_result_pair(&decode_base64(encoded)?)?),
            XdrKind::ResultMeta => {
                to_value(self.transaction_result_meta(&decode_base64(encoded)?)?)
            }
            XdrKind::ContractEvent => to_value(self.contract_event(&decode_base64(encoded)?)?),
            XdrKind::LedgerEntry => to_value(self.ledger_entry(&decode_base64(encoded)?)?),
            XdrKind::ScVal => to_value(self.sc_val(&decode_base64(encoded)?)?),
        }
    }
}

pub fn marshal_json_envelope_xdr(bytes: &[u8]) -> Result<String> {
    marshal(XdrKind::Envelope, bytes)
}

pub fn marshal_json_result_xdr(bytes: &[u8]) -> Result<String> {
    marshal(XdrKind::Result, bytes)
}

pub fn marshal_json_result_meta_xdr(bytes: &[u8]) -> Result<String> {
    marshal(XdrKind::ResultMeta, bytes)
}

pub fn marshal_json_contract_event_xdr(bytes: &[u8]) -> Result<String> {
    marshal(XdrKind::ContractEvent, bytes)
}

pub fn marshal_json_ledger_entry_xdr(bytes: &[u8]) -> Result<String> {
    marshal(XdrKind::LedgerEntry, bytes)
}

pub fn marshal_json_sc_val_xdr(bytes: &[u8]) -> Result<String> {
    marshal(XdrKind::ScVal, bytes)
}

fn marshal(kind: XdrKind, bytes: &[u8]) -> Result<String> {
    let value = Converter::strkey().xdr_to_json(kind, bytes)?;
    Ok(serde_json::to_string(&value)?)
}

fn decode<T: ReadXdr>(bytes: &[u8]) -> Result<T> {
    Ok(T::from_xdr(bytes, Limits::none())?)
}

fn decode_base64<T: ReadXdr>(encoded: &str) -> Result<T> {
    Ok(T::from_xdr_base64(encoded, Limits::none())?)
}

fn to_value<T: Serialize>(record: T) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}
