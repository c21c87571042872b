// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Result records.
//!
//! Result unions are mostly bare codes, so they carry a `code` (the arm name
//! as spelled by the XDR schema, e.g. `TxSuccess`, `Underfunded`) instead of
//! a `type`, plus slots for the few arms that carry data.

use serde::Serialize;

use super::{
    Asset, ClaimableBalanceId, HexBytes, InflationPayout, ManageOfferSuccessResult,
    PathPaymentResultSuccess,
};
use crate::chain::ExtensionPoint;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResultPair {
    pub transaction_hash: HexBytes,
    pub result: TransactionResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    pub fee_charged: i64,
    pub result: TransactionResultResult,
    pub ext: ExtensionPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResultResult {
    pub code: &'static str,
    /// Set for the two fee-bump arms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_result_pair: Option<InnerTransactionResultPair>,
    /// Set for `TxSuccess` and `TxFailed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<OperationResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerTransactionResultPair {
    pub transaction_hash: HexBytes,
    pub result: InnerTransactionResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerTransactionResult {
    pub fee_charged: i64,
    pub result: InnerTransactionResultResult,
    pub ext: ExtensionPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InnerTransactionResultResult {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<OperationResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr: Option<OperationResultTr>,
}

/// Per-operation result. `type` matches the operation's body `type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResultTr {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_payment_success: Option<PathPaymentResultSuccess>,
    /// Asset whose issuer is missing, for path payment `NoIssuer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_issuer: Option<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_success: Option<ManageOfferSuccessResult>,
    /// Balance moved by a successful account merge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_account_balance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflation_payouts: Option<Vec<InflationPayout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_id: Option<ClaimableBalanceId>,
    /// Hash of the invocation's return value and events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoke_host_function_success: Option<HexBytes>,
}
