// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{
    AccountEntry, ClaimableBalanceEntry, ClaimableBalanceId, ContractCodeEntry,
    ContractDataEntry, HexBytes, LiquidityPoolEntry, OfferEntry, ScAddress, ScVal,
    TrustLineAsset, TrustLineEntry,
};
use crate::chain::{Extension, ExtensionLevel, ExtensionPoint};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub last_modified_ledger_seq: u32,
    pub data: LedgerEntryData,
    pub ext: Extension<LedgerEntryExtensionV1>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryExtensionV1 {
    pub sponsoring_id: Option<String>,
    pub ext: ExtensionPoint,
}

impl ExtensionLevel for LedgerEntryExtensionV1 {
    const VERSION: i32 = 1;
    const KEY: &'static str = "v1";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_line: Option<TrustLineEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<OfferEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimable_balance: Option<ClaimableBalanceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_pool: Option<LiquidityPoolEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_data: Option<ContractDataEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_code: Option<ContractCodeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_setting: Option<ConfigSettingEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<TtlEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEntry {
    pub account_id: String,
    pub data_name: String,
    pub data_value: HexBytes,
    pub ext: ExtensionPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TtlEntry {
    pub key_hash: HexBytes,
    pub live_until_ledger_seq: u32,
}

/// Network configuration entry.
///
/// `setting` is the structured payload of the active arm as produced by the
/// XDR schema's own serde representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSettingEntry {
    pub config_setting_id: &'static str,
    pub setting: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKey {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<LedgerKeyAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_line: Option<LedgerKeyTrustLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<LedgerKeyOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LedgerKeyData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimable_balance: Option<LedgerKeyClaimableBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_pool: Option<LedgerKeyLiquidityPool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_data: Option<LedgerKeyContractData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_code: Option<LedgerKeyContractCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_setting: Option<LedgerKeyConfigSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<LedgerKeyTtl>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyAccount {
    pub account_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyTrustLine {
    pub account_id: String,
    pub asset: TrustLineAsset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyOffer {
    pub seller_id: String,
    pub offer_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyData {
    pub account_id: String,
    pub data_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyClaimableBalance {
    pub balance_id: ClaimableBalanceId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyLiquidityPool {
    pub liquidity_pool_id: HexBytes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerKeyContractData {
    pub contract: ScAddress,
    pub key: ScVal,
    pub durability: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerKeyContractCode {
    pub hash: HexBytes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyConfigSetting {
    pub config_setting_id: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKeyTtl {
    pub key_hash: HexBytes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerFootprint {
    pub read_only: Vec<LedgerKey>,
    pub read_write: Vec<LedgerKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerEntryChange {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<LedgerEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<LedgerEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<LedgerKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LedgerEntry>,
}
