// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{
    Asset, AssetCode, ChangeTrustAsset, ClaimableBalanceId, Claimant, DecoratedSignature,
    HexBytes, HostFunction, LedgerKey, MuxedAccount, Price, Signer, SignerKey,
    SorobanAuthorizationEntry, SorobanTransactionData,
};
use crate::chain::{Extension, ExtensionPoint};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v0: Option<TransactionV0Envelope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<TransactionV1Envelope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_bump: Option<FeeBumpTransactionEnvelope>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionV0Envelope {
    pub tx: TransactionV0,
    pub signatures: Vec<DecoratedSignature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionV1Envelope {
    pub tx: Transaction,
    pub signatures: Vec<DecoratedSignature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeeBumpTransactionEnvelope {
    pub tx: FeeBumpTransaction,
    pub signatures: Vec<DecoratedSignature>,
}

/// Pre-protocol-13 transaction with a bare ed25519 source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionV0 {
    pub source_account_ed25519: String,
    pub fee: u32,
    pub seq_num: i64,
    pub time_bounds: Option<TimeBounds>,
    pub memo: Memo,
    pub operations: Vec<Operation>,
    pub ext: ExtensionPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub source_account: MuxedAccount,
    pub fee: u32,
    pub seq_num: i64,
    pub cond: Preconditions,
    pub memo: Memo,
    pub operations: Vec<Operation>,
    pub ext: Extension<SorobanTransactionData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBumpTransaction {
    pub fee_source: MuxedAccount,
    pub fee: i64,
    pub inner_tx: FeeBumpTransactionInnerTx,
    pub ext: ExtensionPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeeBumpTransactionInnerTx {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<TransactionV1Envelope>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBounds {
    pub min_ledger: u32,
    pub max_ledger: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preconditions {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_bounds: Option<TimeBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2: Option<PreconditionsV2>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreconditionsV2 {
    pub time_bounds: Option<TimeBounds>,
    pub ledger_bounds: Option<LedgerBounds>,
    pub min_seq_num: Option<i64>,
    pub min_seq_age: u64,
    pub min_seq_ledger_gap: u32,
    pub extra_signers: Vec<SignerKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<HexBytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ret_hash: Option<HexBytes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

/// One operation. `inflation` and `end_sponsoring_future_reserves` carry no
/// slot; every other `type` sets the slot of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_account: Option<CreateAccountOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_payment_strict_receive: Option<PathPaymentStrictReceiveOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_sell_offer: Option<ManageSellOfferOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_passive_sell_offer: Option<CreatePassiveSellOfferOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_options: Option<SetOptionsOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_trust: Option<ChangeTrustOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_trust: Option<AllowTrustOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_merge: Option<MuxedAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_data: Option<ManageDataOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bump_sequence: Option<BumpSequenceOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_buy_offer: Option<ManageBuyOfferOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_payment_strict_send: Option<PathPaymentStrictSendOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_claimable_balance: Option<CreateClaimableBalanceOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_claimable_balance: Option<ClaimClaimableBalanceOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_sponsoring_future_reserves: Option<BeginSponsoringFutureReservesOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_sponsorship: Option<RevokeSponsorshipOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clawback: Option<ClawbackOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clawback_claimable_balance: Option<ClawbackClaimableBalanceOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_trust_line_flags: Option<SetTrustLineFlagsOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_pool_deposit: Option<LiquidityPoolDepositOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_pool_withdraw: Option<LiquidityPoolWithdrawOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoke_host_function: Option<InvokeHostFunctionOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_footprint_ttl: Option<ExtendFootprintTtlOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_footprint: Option<RestoreFootprintOp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountOp {
    pub destination: String,
    pub starting_balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentOp {
    pub destination: MuxedAccount,
    pub asset: Asset,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPaymentStrictReceiveOp {
    pub send_asset: Asset,
    pub send_max: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_amount: i64,
    pub path: Vec<Asset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPaymentStrictSendOp {
    pub send_asset: Asset,
    pub send_amount: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_min: i64,
    pub path: Vec<Asset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageBuyOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub buy_amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePassiveSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOptionsOp {
    pub inflation_dest: Option<String>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub med_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String>,
    pub signer: Option<Signer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeTrustOp {
    pub line: ChangeTrustAsset,
    pub limit: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllowTrustOp {
    pub trustor: String,
    pub asset: AssetCode,
    pub authorize: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageDataOp {
    pub data_name: String,
    pub data_value: Option<HexBytes>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BumpSequenceOp {
    pub bump_to: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateClaimableBalanceOp {
    pub asset: Asset,
    pub amount: i64,
    pub claimants: Vec<Claimant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginSponsoringFutureReservesOp {
    pub sponsored_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeSponsorshipOp {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_key: Option<LedgerKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer: Option<RevokeSponsorshipOpSigner>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeSponsorshipOpSigner {
    pub account_id: String,
    pub signer_key: SignerKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClawbackOp {
    pub asset: Asset,
    pub from: MuxedAccount,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClawbackClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTrustLineFlagsOp {
    pub trustor: String,
    pub asset: Asset,
    pub clear_flags: u32,
    pub set_flags: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolDepositOp {
    pub liquidity_pool_id: HexBytes,
    pub max_amount_a: i64,
    pub max_amount_b: i64,
    pub min_price: Price,
    pub max_price: Price,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPoolWithdrawOp {
    pub liquidity_pool_id: HexBytes,
    pub amount: i64,
    pub min_amount_a: i64,
    pub min_amount_b: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeHostFunctionOp {
    pub host_function: HostFunction,
    pub auth: Vec<SorobanAuthorizationEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendFootprintTtlOp {
    pub ext: ExtensionPoint,
    pub extend_to: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RestoreFootprintOp {
    pub ext: ExtensionPoint,
}
