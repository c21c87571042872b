// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use stellar_xdr::curr as xdr;

use super::asset::claimable_balance_id;
use super::contract::durability;
use super::{Converter, convert_all, hex_bytes, text};
use crate::address::AddressCodec;
use crate::chain::{ExtensionPoint, resolve};
use crate::error::Result;
use crate::types::{
    ConfigSettingEntry, DataEntry, HexBytes, LedgerEntry, LedgerEntryChange, LedgerEntryData,
    LedgerEntryExtensionV1, LedgerFootprint, LedgerKey, LedgerKeyAccount,
    LedgerKeyClaimableBalance, LedgerKeyConfigSetting, LedgerKeyContractCode,
    LedgerKeyContractData, LedgerKeyData, LedgerKeyLiquidityPool, LedgerKeyOffer, LedgerKeyTrustLine,
    LedgerKeyTtl, TtlEntry,
};

impl<A: AddressCodec> Converter<A> {
    pub fn ledger_entry(&self, entry: &xdr::LedgerEntry) -> Result<LedgerEntry> {
        Ok(LedgerEntry {
            last_modified_ledger_seq: entry.last_modified_ledger_seq,
            data: self.ledger_entry_data(&entry.data)?,
            ext: resolve(&entry.ext, |v1| {
                Ok(LedgerEntryExtensionV1 {
                    sponsoring_id: v1
                        .sponsoring_id
                        .0
                        .as_ref()
                        .map(|id| self.account_id(id))
                        .transpose()?,
                    ext: ExtensionPoint::of(&v1.ext),
                })
            })?,
        })
    }

    pub fn ledger_entry_data(&self, data: &xdr::LedgerEntryData) -> Result<LedgerEntryData> {
        let data = match data {
            xdr::LedgerEntryData::Account(entry) => LedgerEntryData {
                kind: "account",
                account: Some(self.account_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::Trustline(entry) => LedgerEntryData {
                kind: "trustline",
                trust_line: Some(self.trust_line_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::Offer(entry) => LedgerEntryData {
                kind: "offer",
                offer: Some(self.offer_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::Data(entry) => LedgerEntryData {
                kind: "data",
                data: Some(DataEntry {
                    account_id: self.account_id(&entry.account_id)?,
                    data_name: text(entry.data_name.0.as_slice()),
                    data_value: hex_bytes(entry.data_value.0.as_slice()),
                    ext: ExtensionPoint::of(&entry.ext),
                }),
                ..Default::default()
            },
            xdr::LedgerEntryData::ClaimableBalance(entry) => LedgerEntryData {
                kind: "claimable_balance",
                claimable_balance: Some(self.claimable_balance_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::LiquidityPool(entry) => LedgerEntryData {
                kind: "liquidity_pool",
                liquidity_pool: Some(self.liquidity_pool_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::ContractData(entry) => LedgerEntryData {
                kind: "contract_data",
                contract_data: Some(self.contract_data_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::ContractCode(entry) => LedgerEntryData {
                kind: "contract_code",
                contract_code: Some(self.contract_code_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::ConfigSetting(entry) => LedgerEntryData {
                kind: "config_setting",
                config_setting: Some(config_setting(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryData::Ttl(entry) => LedgerEntryData {
                kind: "ttl",
                ttl: Some(TtlEntry {
                    key_hash: HexBytes::from(&entry.key_hash),
                    live_until_ledger_seq: entry.live_until_ledger_seq,
                }),
                ..Default::default()
            },
        };
        Ok(data)
    }

    pub fn ledger_key(&self, key: &xdr::LedgerKey) -> Result<LedgerKey> {
        let key = match key {
            xdr::LedgerKey::Account(key) => LedgerKey {
                kind: "account",
                account: Some(LedgerKeyAccount {
                    account_id: self.account_id(&key.account_id)?,
                }),
                ..Default::default()
            },
            xdr::LedgerKey::Trustline(key) => LedgerKey {
                kind: "trustline",
                trust_line: Some(LedgerKeyTrustLine {
                    account_id: self.account_id(&key.account_id)?,
                    asset: self.trust_line_asset(&key.asset)?,
                }),
                ..Default::default()
            },
            xdr::LedgerKey::Offer(key) => LedgerKey {
                kind: "offer",
                offer: Some(LedgerKeyOffer {
                    seller_id: self.account_id(&key.seller_id)?,
                    offer_id: key.offer_id,
                }),
                ..Default::default()
            },
            xdr::LedgerKey::Data(key) => LedgerKey {
                kind: "data",
                data: Some(LedgerKeyData {
                    account_id: self.account_id(&key.account_id)?,
                    data_name: text(key.data_name.0.as_slice()),
                }),
                ..Default::default()
            },
            xdr::LedgerKey::ClaimableBalance(key) => LedgerKey {
                kind: "claimable_balance",
                claimable_balance: Some(LedgerKeyClaimableBalance {
                    balance_id: claimable_balance_id(&key.balance_id),
                }),
                ..Default::default()
            },
            xdr::LedgerKey::LiquidityPool(key) => LedgerKey {
                kind: "liquidity_pool",
                liquidity_pool: Some(LedgerKeyLiquidityPool {
                    liquidity_pool_id: HexBytes::from(&key.liquidity_pool_id.0),
                }),
                ..Default::default()
            },
            xdr::LedgerKey::ContractData(key) => LedgerKey {
                kind: "contract_data",
                contract_data: Some(LedgerKeyContractData {
                    contract: self.sc_address(&key.contract)?,
                    key: self.sc_val(&key.key)?,
                    durability: durability(key.durability),
                }),
                ..Default::default()
            },
            xdr::LedgerKey::ContractCode(key) => LedgerKey {
                kind: "contract_code",
                contract_code: Some(LedgerKeyContractCode {
                    hash: HexBytes::from(&key.hash),
                }),
                ..Default::default()
            },
            xdr::LedgerKey::ConfigSetting(key) => LedgerKey {
                kind: "config_setting",
                config_setting: Some(LedgerKeyConfigSetting {
                    config_setting_id: key.config_setting_id.name(),
                }),
                ..Default::default()
            },
            xdr::LedgerKey::Ttl(key) => LedgerKey {
                kind: "ttl",
                ttl: Some(LedgerKeyTtl {
                    key_hash: HexBytes::from(&key.key_hash),
                }),
                ..Default::default()
            },
        };
        Ok(key)
    }

    pub fn ledger_footprint(&self, footprint: &xdr::LedgerFootprint) -> Result<LedgerFootprint> {
        Ok(LedgerFootprint {
            read_only: convert_all(&footprint.read_only, |key| self.ledger_key(key))?,
            read_write: convert_all(&footprint.read_write, |key| self.ledger_key(key))?,
        })
    }

    pub fn ledger_entry_change(&self, change: &xdr::LedgerEntryChange) -> Result<LedgerEntryChange> {
        let change = match change {
            xdr::LedgerEntryChange::Created(entry) => LedgerEntryChange {
                kind: "created",
                created: Some(self.ledger_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryChange::Updated(entry) => LedgerEntryChange {
                kind: "updated",
                updated: Some(self.ledger_entry(entry)?),
                ..Default::default()
            },
            xdr::LedgerEntryChange::Removed(key) => LedgerEntryChange {
                kind: "removed",
                removed: Some(self.ledger_key(key)?),
                ..Default::default()
            },
            xdr::LedgerEntryChange::State(entry) => LedgerEntryChange {
                kind: "state",
                state: Some(self.ledger_entry(entry)?),
                ..Default::default()
            },
        };
        Ok(change)
    }

    pub(crate) fn ledger_entry_changes(
        &self,
        changes: &xdr::LedgerEntryChanges,
    ) -> Result<Vec<LedgerEntryChange>> {
        convert_all(&changes.0, |change| self.ledger_entry_change(change))
    }
}

/// Network settings are passed through with the schema's own field layout.
fn config_setting(entry: &xdr::ConfigSettingEntry) -> Result<ConfigSettingEntry> {
    Ok(ConfigSettingEntry {
        config_setting_id: entry.discriminant().name(),
        setting: serde_json::to_value(entry)?,
    })
}
