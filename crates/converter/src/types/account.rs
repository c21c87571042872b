// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::HexBytes;
use crate::chain::{Extension, ExtensionLevel, ExtensionPoint};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntry {
    pub account_id: String,
    pub balance: i64,
    pub seq_num: i64,
    pub num_sub_entries: u32,
    pub inflation_dest: Option<String>,
    pub flags: u32,
    pub home_domain: String,
    pub thresholds: HexBytes,
    pub signers: Vec<Signer>,
    pub ext: Extension<AccountEntryExtensionV1>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Liabilities {
    pub buying: i64,
    pub selling: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountEntryExtensionV1 {
    pub liabilities: Liabilities,
    pub ext: Extension<AccountEntryExtensionV2>,
}

impl ExtensionLevel for AccountEntryExtensionV1 {
    const VERSION: i32 = 1;
    const KEY: &'static str = "v1";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntryExtensionV2 {
    pub num_sponsored: u32,
    pub num_sponsoring: u32,
    /// One slot per signer; `None` when the signer has no sponsor.
    pub signer_sponsoring_ids: Vec<Option<String>>,
    pub ext: Extension<AccountEntryExtensionV3>,
}

impl ExtensionLevel for AccountEntryExtensionV2 {
    const VERSION: i32 = 2;
    const KEY: &'static str = "v2";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntryExtensionV3 {
    pub ext: ExtensionPoint,
    pub seq_ledger: u32,
    pub seq_time: u64,
}

impl ExtensionLevel for AccountEntryExtensionV3 {
    const VERSION: i32 = 3;
    const KEY: &'static str = "v3";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

/// Signer key rendered as its strkey (`G…`, `T…`, `X…` or `P…`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignerKey {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub address: String,
}

/// Plain (`G…`) or multiplexed (`M…`) account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuxedAccount {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Underlying `G…` account of a multiplexed address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecoratedSignature {
    pub hint: HexBytes,
    pub signature: HexBytes,
}
