// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{ContractEvent, DiagnosticEvent, LedgerEntryChange, ScVal, TransactionResultPair};
use crate::chain::{Extension, ExtensionLevel, ExtensionPoint};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResultMeta {
    pub result: TransactionResultPair,
    pub fee_processing: Vec<LedgerEntryChange>,
    pub tx_apply_processing: TransactionMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionMeta {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v0: Option<Vec<OperationMeta>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<TransactionMetaV1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2: Option<TransactionMetaV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3: Option<TransactionMetaV3>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationMeta {
    pub changes: Vec<LedgerEntryChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetaV1 {
    pub tx_changes: Vec<LedgerEntryChange>,
    pub operations: Vec<OperationMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetaV2 {
    pub tx_changes_before: Vec<LedgerEntryChange>,
    pub operations: Vec<OperationMeta>,
    pub tx_changes_after: Vec<LedgerEntryChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetaV3 {
    pub ext: ExtensionPoint,
    pub tx_changes_before: Vec<LedgerEntryChange>,
    pub operations: Vec<OperationMeta>,
    pub tx_changes_after: Vec<LedgerEntryChange>,
    pub soroban_meta: Option<SorobanTransactionMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanTransactionMeta {
    pub ext: Extension<SorobanTransactionMetaExtV1>,
    pub events: Vec<ContractEvent>,
    pub return_value: ScVal,
    pub diagnostic_events: Vec<DiagnosticEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanTransactionMetaExtV1 {
    pub ext: ExtensionPoint,
    pub total_non_refundable_resource_fee_charged: i64,
    pub total_refundable_resource_fee_charged: i64,
    pub rent_fee_charged: i64,
}

impl ExtensionLevel for SorobanTransactionMetaExtV1 {
    const VERSION: i32 = 1;
    const KEY: &'static str = "v1";
}
