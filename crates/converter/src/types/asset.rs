// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{HexBytes, Liabilities};
use crate::chain::{Extension, ExtensionLevel, ExtensionPoint};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Asset {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustLineAsset {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_pool_id: Option<HexBytes>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTrustAsset {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_pool: Option<LiquidityPoolParameters>,
}

/// Bare asset code, as used by `AllowTrust`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetCode {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolParameters {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_product: Option<LiquidityPoolConstantProductParameters>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolConstantProductParameters {
    pub asset_a: Asset,
    pub asset_b: Asset,
    pub fee: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolEntry {
    pub liquidity_pool_id: HexBytes,
    pub body: LiquidityPoolEntryBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolEntryBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_product: Option<LiquidityPoolEntryConstantProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolEntryConstantProduct {
    pub params: LiquidityPoolConstantProductParameters,
    pub reserve_a: i64,
    pub reserve_b: i64,
    pub total_pool_shares: i64,
    pub pool_shares_trust_line_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustLineEntry {
    pub account_id: String,
    pub asset: TrustLineAsset,
    pub balance: i64,
    pub limit: i64,
    pub flags: u32,
    pub ext: Extension<TrustLineEntryV1>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrustLineEntryV1 {
    pub liabilities: Liabilities,
    pub ext: Extension<TrustLineEntryExtensionV2>,
}

impl ExtensionLevel for TrustLineEntryV1 {
    const VERSION: i32 = 1;
    const KEY: &'static str = "v1";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustLineEntryExtensionV2 {
    pub liquidity_pool_use_count: i32,
    pub ext: ExtensionPoint,
}

impl ExtensionLevel for TrustLineEntryExtensionV2 {
    const VERSION: i32 = 2;
    const KEY: &'static str = "v2";
}

/// Condition under which a claimable balance may be claimed.
///
/// Exactly one of the slots matching `type` is set; `unconditional` carries
/// none. `not` may also carry none when the wire value holds no inner
/// predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPredicate {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and_predicates: Option<Vec<ClaimPredicate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or_predicates: Option<Vec<ClaimPredicate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_predicate: Option<Box<ClaimPredicate>>,
    /// RFC 3339 rendering of `abs_before_epoch`, when representable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abs_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abs_before_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel_before: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Claimant {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v0: Option<ClaimantV0>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimantV0 {
    pub destination: String,
    pub predicate: ClaimPredicate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimableBalanceId {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v0: Option<HexBytes>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimableBalanceEntry {
    pub balance_id: ClaimableBalanceId,
    pub claimants: Vec<Claimant>,
    pub asset: Asset,
    pub amount: i64,
    pub ext: Extension<ClaimableBalanceEntryExtensionV1>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimableBalanceEntryExtensionV1 {
    pub ext: ExtensionPoint,
    pub flags: u32,
}

impl ExtensionLevel for ClaimableBalanceEntryExtensionV1 {
    const VERSION: i32 = 1;
    const KEY: &'static str = "v1";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferEntry {
    pub seller_id: String,
    pub offer_id: i64,
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub flags: u32,
    pub ext: ExtensionPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAtom {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v0: Option<ClaimOfferAtomV0>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_book: Option<ClaimOfferAtom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_pool: Option<ClaimLiquidityAtom>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimOfferAtomV0 {
    pub seller_ed25519: String,
    pub offer_id: i64,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimOfferAtom {
    pub seller_id: String,
    pub offer_id: i64,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimLiquidityAtom {
    pub liquidity_pool_id: HexBytes,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimplePaymentResult {
    pub destination: String,
    pub asset: Asset,
    pub amount: i64,
}

/// Success payload shared by both path payment flavours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathPaymentResultSuccess {
    pub offers: Vec<ClaimAtom>,
    pub last: SimplePaymentResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageOfferSuccessResult {
    pub offers_claimed: Vec<ClaimAtom>,
    pub offer: ManageOfferSuccessResultOffer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManageOfferSuccessResultOffer {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<OfferEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InflationPayout {
    pub destination: String,
    pub amount: i64,
}
