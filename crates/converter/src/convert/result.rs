// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Result unions. Every arm is rendered by its schema name under `code`;
//! arms that carry data also fill their slot.

use stellar_xdr::curr as xdr;

use super::asset::claimable_balance_id;
use super::{Converter, convert_all};
use crate::address::AddressCodec;
use crate::chain::ExtensionPoint;
use crate::error::Result;
use crate::types::{
    HexBytes, InnerTransactionResult, InnerTransactionResultPair, InnerTransactionResultResult,
    OperationResult, OperationResultTr, TransactionResult, TransactionResultPair,
    TransactionResultResult,
};

impl<A: AddressCodec> Converter<A> {
    pub fn transaction_result_pair(
        &self,
        pair: &xdr::TransactionResultPair,
    ) -> Result<TransactionResultPair> {
        Ok(TransactionResultPair {
            transaction_hash: HexBytes::from(&pair.transaction_hash),
            result: self.transaction_result(&pair.result)?,
        })
    }

    pub fn transaction_result(&self, result: &xdr::TransactionResult) -> Result<TransactionResult> {
        use xdr::TransactionResultResult as R;

        let code = result.result.name();
        let converted = match &result.result {
            R::TxFeeBumpInnerSuccess(pair) | R::TxFeeBumpInnerFailed(pair) => {
                TransactionResultResult {
                    code,
                    inner_result_pair: Some(self.inner_result_pair(pair)?),
                    results: None,
                }
            }
            R::TxSuccess(results) | R::TxFailed(results) => TransactionResultResult {
                code,
                inner_result_pair: None,
                results: Some(self.operation_results(results)?),
            },
            R::TxTooEarly
            | R::TxTooLate
            | R::TxMissingOperation
            | R::TxBadSeq
            | R::TxBadAuth
            | R::TxInsufficientBalance
            | R::TxNoAccount
            | R::TxInsufficientFee
            | R::TxBadAuthExtra
            | R::TxInternalError
            | R::TxNotSupported
            | R::TxBadSponsorship
            | R::TxBadMinSeqAgeOrGap
            | R::TxMalformed
            | R::TxSorobanInvalid => TransactionResultResult {
                code,
                ..Default::default()
            },
        };

        Ok(TransactionResult {
            fee_charged: result.fee_charged,
            result: converted,
            ext: ExtensionPoint::of(&result.ext),
        })
    }

    fn inner_result_pair(
        &self,
        pair: &xdr::InnerTransactionResultPair,
    ) -> Result<InnerTransactionResultPair> {
        use xdr::InnerTransactionResultResult as R;

        let code = pair.result.result.name();
        let results = match &pair.result.result {
            R::TxSuccess(results) | R::TxFailed(results) => Some(self.operation_results(results)?),
            R::TxTooEarly
            | R::TxTooLate
            | R::TxMissingOperation
            | R::TxBadSeq
            | R::TxBadAuth
            | R::TxInsufficientBalance
            | R::TxNoAccount
            | R::TxInsufficientFee
            | R::TxBadAuthExtra
            | R::TxInternalError
            | R::TxNotSupported
            | R::TxBadSponsorship
            | R::TxBadMinSeqAgeOrGap
            | R::TxMalformed
            | R::TxSorobanInvalid => None,
        };

        Ok(InnerTransactionResultPair {
            transaction_hash: HexBytes::from(&pair.transaction_hash),
            result: InnerTransactionResult {
                fee_charged: pair.result.fee_charged,
                result: InnerTransactionResultResult { code, results },
                ext: ExtensionPoint::of(&pair.result.ext),
            },
        })
    }

    fn operation_results(&self, results: &[xdr::OperationResult]) -> Result<Vec<OperationResult>> {
        convert_all(results, |result| self.operation_result(result))
    }

    pub fn operation_result(&self, result: &xdr::OperationResult) -> Result<OperationResult> {
        Ok(OperationResult {
            code: result.name(),
            tr: match result {
                xdr::OperationResult::OpInner(tr) => Some(self.operation_result_tr(tr)?),
                xdr::OperationResult::OpBadAuth
                | xdr::OperationResult::OpNoAccount
                | xdr::OperationResult::OpNotSupported
                | xdr::OperationResult::OpTooManySubentries
                | xdr::OperationResult::OpExceededWorkLimit
                | xdr::OperationResult::OpTooManySponsoring => None,
            },
        })
    }

    pub fn operation_result_tr(&self, tr: &xdr::OperationResultTr) -> Result<OperationResultTr> {
        use xdr::OperationResultTr as Tr;

        let converted = match tr {
            Tr::CreateAccount(r) => coded("create_account", r.name()),
            Tr::Payment(r) => coded("payment", r.name()),
            Tr::PathPaymentStrictReceive(r) => {
                let mut out = coded("path_payment_strict_receive", r.name());
                match r {
                    xdr::PathPaymentStrictReceiveResult::Success(success) => {
                        out.path_payment_success =
                            Some(self.path_payment_success(&success.offers, &success.last)?);
                    }
                    xdr::PathPaymentStrictReceiveResult::NoIssuer(asset) => {
                        out.no_issuer = Some(self.asset(asset)?);
                    }
                    xdr::PathPaymentStrictReceiveResult::Malformed
                    | xdr::PathPaymentStrictReceiveResult::Underfunded
                    | xdr::PathPaymentStrictReceiveResult::SrcNoTrust
                    | xdr::PathPaymentStrictReceiveResult::SrcNotAuthorized
                    | xdr::PathPaymentStrictReceiveResult::NoDestination
                    | xdr::PathPaymentStrictReceiveResult::NoTrust
                    | xdr::PathPaymentStrictReceiveResult::NotAuthorized
                    | xdr::PathPaymentStrictReceiveResult::LineFull
                    | xdr::PathPaymentStrictReceiveResult::TooFewOffers
                    | xdr::PathPaymentStrictReceiveResult::OfferCrossSelf
                    | xdr::PathPaymentStrictReceiveResult::OverSendmax => {}
                }
                out
            }
            Tr::ManageSellOffer(r) => self.manage_sell_offer_result("manage_sell_offer", r)?,
            Tr::CreatePassiveSellOffer(r) => {
                self.manage_sell_offer_result("create_passive_sell_offer", r)?
            }
            Tr::SetOptions(r) => coded("set_options", r.name()),
            Tr::ChangeTrust(r) => coded("change_trust", r.name()),
            Tr::AllowTrust(r) => coded("allow_trust", r.name()),
            Tr::AccountMerge(r) => {
                let mut out = coded("account_merge", r.name());
                if let xdr::AccountMergeResult::Success(balance) = r {
                    out.source_account_balance = Some(*balance);
                }
                out
            }
            Tr::Inflation(r) => {
                let mut out = coded("inflation", r.name());
                if let xdr::InflationResult::Success(payouts) = r {
                    out.inflation_payouts =
                        Some(convert_all(payouts, |payout| self.inflation_payout(payout))?);
                }
                out
            }
            Tr::ManageData(r) => coded("manage_data", r.name()),
            Tr::BumpSequence(r) => coded("bump_sequence", r.name()),
            Tr::ManageBuyOffer(r) => {
                let mut out = coded("manage_buy_offer", r.name());
                if let xdr::ManageBuyOfferResult::Success(success) = r {
                    out.offer_success = Some(self.manage_offer_success_result(success)?);
                }
                out
            }
            Tr::PathPaymentStrictSend(r) => {
                let mut out = coded("path_payment_strict_send", r.name());
                match r {
                    xdr::PathPaymentStrictSendResult::Success(success) => {
                        out.path_payment_success =
                            Some(self.path_payment_success(&success.offers, &success.last)?);
                    }
                    xdr::PathPaymentStrictSendResult::NoIssuer(asset) => {
                        out.no_issuer = Some(self.asset(asset)?);
                    }
                    xdr::PathPaymentStrictSendResult::Malformed
                    | xdr::PathPaymentStrictSendResult::Underfunded
                    | xdr::PathPaymentStrictSendResult::SrcNoTrust
                    | xdr::PathPaymentStrictSendResult::SrcNotAuthorized
                    | xdr::PathPaymentStrictSendResult::NoDestination
                    | xdr::PathPaymentStrictSendResult::NoTrust
                    | xdr::PathPaymentStrictSendResult::NotAuthorized
                    | xdr::PathPaymentStrictSendResult::LineFull
                    | xdr::PathPaymentStrictSendResult::TooFewOffers
                    | xdr::PathPaymentStrictSendResult::OfferCrossSelf
                    | xdr::PathPaymentStrictSendResult::UnderDestmin => {}
                }
                out
            }
            Tr::CreateClaimableBalance(r) => {
                let mut out = coded("create_claimable_balance", r.name());
                if let xdr::CreateClaimableBalanceResult::Success(id) = r {
                    out.balance_id = Some(claimable_balance_id(id));
                }
                out
            }
            Tr::ClaimClaimableBalance(r) => coded("claim_claimable_balance", r.name()),
            Tr::BeginSponsoringFutureReserves(r) => {
                coded("begin_sponsoring_future_reserves", r.name())
            }
            Tr::EndSponsoringFutureReserves(r) => coded("end_sponsoring_future_reserves", r.name()),
            Tr::RevokeSponsorship(r) => coded("revoke_sponsorship", r.name()),
            Tr::Clawback(r) => coded("clawback", r.name()),
            Tr::ClawbackClaimableBalance(r) => coded("clawback_claimable_balance", r.name()),
            Tr::SetTrustLineFlags(r) => coded("set_trust_line_flags", r.name()),
            Tr::LiquidityPoolDeposit(r) => coded("liquidity_pool_deposit", r.name()),
            Tr::LiquidityPoolWithdraw(r) => coded("liquidity_pool_withdraw", r.name()),
            Tr::InvokeHostFunction(r) => {
                let mut out = coded("invoke_host_function", r.name());
                if let xdr::InvokeHostFunctionResult::Success(hash) = r {
                    out.invoke_host_function_success = Some(HexBytes::from(hash));
                }
                out
            }
            Tr::ExtendFootprintTtl(r) => coded("extend_footprint_ttl", r.name()),
            Tr::RestoreFootprint(r) => coded("restore_footprint", r.name()),
        };
        Ok(converted)
    }

    fn manage_sell_offer_result(
        &self,
        kind: &'static str,
        result: &xdr::ManageSellOfferResult,
    ) -> Result<OperationResultTr> {
        let mut out = coded(kind, result.name());
        if let xdr::ManageSellOfferResult::Success(success) = result {
            out.offer_success = Some(self.manage_offer_success_result(success)?);
        }
        Ok(out)
    }
}

fn coded(kind: &'static str, code: &'static str) -> OperationResultTr {
    OperationResultTr {
        kind,
        code,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::test_support::{account, converter};

    fn pair(result: xdr::TransactionResultResult) -> xdr::TransactionResultPair {
        xdr::TransactionResultPair {
            transaction_hash: xdr::Hash([0xAA; 32]),
            result: xdr::TransactionResult {
                fee_charged: 100,
                result,
                ext: xdr::TransactionResultExt::V0,
            },
        }
    }

    #[test]
    fn test_success_with_payment() {
        let results = vec![xdr::OperationResult::OpInner(xdr::OperationResultTr::Payment(
            xdr::PaymentResult::Success,
        ))];
        let converted = converter()
            .transaction_result_pair(&pair(xdr::TransactionResultResult::TxSuccess(
                results.try_into().unwrap(),
            )))
            .unwrap();

        assert_eq!(converted.transaction_hash.to_string(), "aa".repeat(32));
        assert_eq!(converted.result.result.code, "TxSuccess");
        let ops = converted.result.result.results.unwrap();
        assert_eq!(ops[0].code, "OpInner");
        let tr = ops[0].tr.as_ref().unwrap();
        assert_eq!(tr.kind, "payment");
        assert_eq!(tr.code, "Success");
    }

    #[test]
    fn test_code_only_transaction_result() {
        let converted = converter()
            .transaction_result_pair(&pair(xdr::TransactionResultResult::TxBadSeq))
            .unwrap();
        let json = serde_json::to_value(&converted).unwrap();
        assert_eq!(json["result"]["result"], serde_json::json!({ "code": "TxBadSeq" }));
    }

    #[test]
    fn test_operation_level_failure_has_no_tr() {
        let converted = converter()
            .operation_result(&xdr::OperationResult::OpNoAccount)
            .unwrap();
        assert_eq!(converted.code, "OpNoAccount");
        assert!(converted.tr.is_none());
    }

    #[test]
    fn test_account_merge_balance() {
        let tr = xdr::OperationResultTr::AccountMerge(xdr::AccountMergeResult::Success(42));
        let converted = converter().operation_result_tr(&tr).unwrap();
        assert_eq!(converted.source_account_balance, Some(42));
    }

    #[test]
    fn test_path_payment_no_issuer() {
        let asset = xdr::Asset::CreditAlphanum4(xdr::AlphaNum4 {
            asset_code: xdr::AssetCode4(*b"EUR\0"),
            issuer: account(7),
        });
        let tr = xdr::OperationResultTr::PathPaymentStrictSend(
            xdr::PathPaymentStrictSendResult::NoIssuer(asset),
        );
        let converted = converter().operation_result_tr(&tr).unwrap();
        assert_eq!(converted.code, "NoIssuer");
        assert_eq!(converted.no_issuer.unwrap().code.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_fee_bump_inner_pair() {
        let inner = xdr::InnerTransactionResultPair {
            transaction_hash: xdr::Hash([1; 32]),
            result: xdr::InnerTransactionResult {
                fee_charged: 50,
                result: xdr::InnerTransactionResultResult::TxFailed(
                    vec![xdr::OperationResult::OpBadAuth].try_into().unwrap(),
                ),
                ext: xdr::InnerTransactionResultExt::V0,
            },
        };
        let converted = converter()
            .transaction_result_pair(&pair(xdr::TransactionResultResult::TxFeeBumpInnerFailed(
                inner,
            )))
            .unwrap();
        let inner = converted.result.result.inner_result_pair.unwrap();
        assert_eq!(inner.result.result.code, "TxFailed");
        assert_eq!(inner.result.result.results.unwrap()[0].code, "OpBadAuth");
    }

    #[test]
    fn test_code_only_path_payment_arms_fill_no_slot() {
        let receive = xdr::OperationResultTr::PathPaymentStrictReceive(
            xdr::PathPaymentStrictReceiveResult::OverSendmax,
        );
        let send = xdr::OperationResultTr::PathPaymentStrictSend(
            xdr::PathPaymentStrictSendResult::UnderDestmin,
        );

        for (tr, kind, code) in [
            (receive, "path_payment_strict_receive", "OverSendmax"),
            (send, "path_payment_strict_send", "UnderDestmin"),
        ] {
            let converted = converter().operation_result_tr(&tr).unwrap();
            assert_eq!(converted.kind, kind);
            assert_eq!(converted.code, code);
            assert!(converted.path_payment_success.is_none());
            assert!(converted.no_issuer.is_none());
        }
    }

    #[test]
    fn test_code_only_inner_result() {
        let inner = xdr::InnerTransactionResultPair {
            transaction_hash: xdr::Hash([1; 32]),
            result: xdr::InnerTransactionResult {
                fee_charged: 10,
                result: xdr::InnerTransactionResultResult::TxSorobanInvalid,
                ext: xdr::InnerTransactionResultExt::V0,
            },
        };
        let converted = converter()
            .transaction_result_pair(&pair(xdr::TransactionResultResult::TxFeeBumpInnerFailed(
                inner,
            )))
            .unwrap();
        let inner = converted.result.result.inner_result_pair.unwrap();
        assert_eq!(inner.result.result.code, "TxSorobanInvalid");
        assert!(inner.result.result.results.is_none());
    }
}
