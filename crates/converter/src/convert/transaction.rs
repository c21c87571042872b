// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use stellar_xdr::curr as xdr;

use super::account::decorated_signature;
use super::asset::{asset_code, claimable_balance_id, price};
use super::{Converter, convert_all, hex_bytes, text};
use crate::address::AddressCodec;
use crate::chain::{ExtensionPoint, resolve};
use crate::error::Result;
use crate::types::{
    AllowTrustOp, BeginSponsoringFutureReservesOp, BumpSequenceOp, ChangeTrustOp,
    ClaimClaimableBalanceOp, ClawbackClaimableBalanceOp, ClawbackOp, CreateAccountOp,
    CreateClaimableBalanceOp, CreatePassiveSellOfferOp, ExtendFootprintTtlOp, FeeBumpTransaction,
    FeeBumpTransactionEnvelope, FeeBumpTransactionInnerTx, HexBytes, InvokeHostFunctionOp,
    LedgerBounds, LiquidityPoolDepositOp, LiquidityPoolWithdrawOp, ManageBuyOfferOp, ManageDataOp,
    ManageSellOfferOp, Memo, Operation, OperationBody, PathPaymentStrictReceiveOp,
    PathPaymentStrictSendOp, PaymentOp, Preconditions, PreconditionsV2, RestoreFootprintOp,
    RevokeSponsorshipOp, RevokeSponsorshipOpSigner, SetOptionsOp, SetTrustLineFlagsOp,
    TimeBounds, Transaction, TransactionEnvelope, TransactionV0, TransactionV0Envelope,
    TransactionV1Envelope,
};

impl<A: AddressCodec> Converter<A> {
    pub fn transaction_envelope(
        &self,
        envelope: &xdr::TransactionEnvelope,
    ) -> Result<TransactionEnvelope> {
        match envelope {
            xdr::TransactionEnvelope::TxV0(v0) => Ok(TransactionEnvelope {
                kind: "tx_v0",
                v0: Some(TransactionV0Envelope {
                    tx: self.transaction_v0(&v0.tx)?,
                    signatures: v0.signatures.iter().map(decorated_signature).collect(),
                }),
                ..Default::default()
            }),
            xdr::TransactionEnvelope::Tx(v1) => Ok(TransactionEnvelope {
                kind: "tx",
                v1: Some(self.transaction_v1_envelope(v1)?),
                ..Default::default()
            }),
            xdr::TransactionEnvelope::TxFeeBump(fee_bump) => Ok(TransactionEnvelope {
                kind: "tx_fee_bump",
                fee_bump: Some(FeeBumpTransactionEnvelope {
                    tx: self.fee_bump_transaction(&fee_bump.tx)?,
                    signatures: fee_bump.signatures.iter().map(decorated_signature).collect(),
                }),
                ..Default::default()
            }),
        }
    }

    fn transaction_v1_envelope(
        &self,
        envelope: &xdr::TransactionV1Envelope,
    ) -> Result<TransactionV1Envelope> {
        Ok(TransactionV1Envelope {
            tx: self.transaction(&envelope.tx)?,
            signatures: envelope.signatures.iter().map(decorated_signature).collect(),
        })
    }

    pub fn transaction_v0(&self, tx: &xdr::TransactionV0) -> Result<TransactionV0> {
        Ok(TransactionV0 {
            source_account_ed25519: self.ed25519(&tx.source_account_ed25519)?,
            fee: tx.fee,
            seq_num: tx.seq_num.0,
            time_bounds: tx.time_bounds.as_ref().map(time_bounds),
            memo: memo(&tx.memo),
            operations: convert_all(&tx.operations, |op| self.operation(op))?,
            ext: ExtensionPoint::of(&tx.ext),
        })
    }

    pub fn transaction(&self, tx: &xdr::Transaction) -> Result<Transaction> {
        Ok(Transaction {
            source_account: self.muxed_account(&tx.source_account)?,
            fee: tx.fee,
            seq_num: tx.seq_num.0,
            cond: self.preconditions(&tx.cond)?,
            memo: memo(&tx.memo),
            operations: convert_all(&tx.operations, |op| self.operation(op))?,
            ext: resolve(&tx.ext, |data| self.soroban_transaction_data(data))?,
        })
    }

    pub fn fee_bump_transaction(&self, tx: &xdr::FeeBumpTransaction) -> Result<FeeBumpTransaction> {
        let inner_tx = match &tx.inner_tx {
            xdr::FeeBumpTransactionInnerTx::Tx(envelope) => FeeBumpTransactionInnerTx {
                kind: "tx",
                v1: Some(self.transaction_v1_envelope(envelope)?),
            },
        };

        Ok(FeeBumpTransaction {
            fee_source: self.muxed_account(&tx.fee_source)?,
            fee: tx.fee,
            inner_tx,
            ext: ExtensionPoint::of(&tx.ext),
        })
    }

    pub fn preconditions(&self, cond: &xdr::Preconditions) -> Result<Preconditions> {
        match cond {
            xdr::Preconditions::None => Ok(Preconditions {
                kind: "none",
                ..Default::default()
            }),
            xdr::Preconditions::Time(bounds) => Ok(Preconditions {
                kind: "time",
                time_bounds: Some(time_bounds(bounds)),
                ..Default::default()
            }),
            xdr::Preconditions::V2(v2) => Ok(Preconditions {
                kind: "v2",
                v2: Some(PreconditionsV2 {
                    time_bounds: v2.time_bounds.as_ref().map(time_bounds),
                    ledger_bounds: v2.ledger_bounds.as_ref().map(|bounds| LedgerBounds {
                        min_ledger: bounds.min_ledger,
                        max_ledger: bounds.max_ledger,
                    }),
                    min_seq_num: v2.min_seq_num.as_ref().map(|seq| seq.0),
                    min_seq_age: v2.min_seq_age.0,
                    min_seq_ledger_gap: v2.min_seq_ledger_gap,
                    extra_signers: convert_all(&v2.extra_signers, |key| self.signer_key(key))?,
                }),
                ..Default::default()
            }),
        }
    }

    pub fn operation(&self, op: &xdr::Operation) -> Result<Operation> {
        Ok(Operation {
            source_account: op
                .source_account
                .as_ref()
                .map(|account| self.muxed_account(account))
                .transpose()?,
            body: self.operation_body(&op.body)?,
        })
    }

    pub fn operation_body(&self, body: &xdr::OperationBody) -> Result<OperationBody> {
        use xdr::OperationBody as Body;

        let body = match body {
            Body::CreateAccount(op) => OperationBody {
                kind: "create_account",
                create_account: Some(CreateAccountOp {
                    destination: self.account_id(&op.destination)?,
                    starting_balance: op.starting_balance,
                }),
                ..Default::default()
            },
            Body::Payment(op) => OperationBody {
                kind: "payment",
                payment: Some(PaymentOp {
                    destination: self.muxed_account(&op.destination)?,
                    asset: self.asset(&op.asset)?,
                    amount: op.amount,
                }),
                ..Default::default()
            },
            Body::PathPaymentStrictReceive(op) => OperationBody {
                kind: "path_payment_strict_receive",
                path_payment_strict_receive: Some(PathPaymentStrictReceiveOp {
                    send_asset: self.asset(&op.send_asset)?,
                    send_max: op.send_max,
                    destination: self.muxed_account(&op.destination)?,
                    dest_asset: self.asset(&op.dest_asset)?,
                    dest_amount: op.dest_amount,
                    path: convert_all(&op.path, |asset| self.asset(asset))?,
                }),
                ..Default::default()
            },
            Body::ManageSellOffer(op) => OperationBody {
                kind: "manage_sell_offer",
                manage_sell_offer: Some(ManageSellOfferOp {
                    selling: self.asset(&op.selling)?,
                    buying: self.asset(&op.buying)?,
                    amount: op.amount,
                    price: price(&op.price),
                    offer_id: op.offer_id,
                }),
                ..Default::default()
            },
            Body::CreatePassiveSellOffer(op) => OperationBody {
                kind: "create_passive_sell_offer",
                create_passive_sell_offer: Some(CreatePassiveSellOfferOp {
                    selling: self.asset(&op.selling)?,
                    buying: self.asset(&op.buying)?,
                    amount: op.amount,
                    price: price(&op.price),
                }),
                ..Default::default()
            },
            Body::SetOptions(op) => OperationBody {
                kind: "set_options",
                set_options: Some(self.set_options(op)?),
                ..Default::default()
            },
            Body::ChangeTrust(op) => OperationBody {
                kind: "change_trust",
                change_trust: Some(ChangeTrustOp {
                    line: self.change_trust_asset(&op.line)?,
                    limit: op.limit,
                }),
                ..Default::default()
            },
            Body::AllowTrust(op) => OperationBody {
                kind: "allow_trust",
                allow_trust: Some(AllowTrustOp {
                    trustor: self.account_id(&op.trustor)?,
                    asset: asset_code(&op.asset),
                    authorize: op.authorize,
                }),
                ..Default::default()
            },
            Body::AccountMerge(destination) => OperationBody {
                kind: "account_merge",
                account_merge: Some(self.muxed_account(destination)?),
                ..Default::default()
            },
            Body::Inflation => OperationBody {
                kind: "inflation",
                ..Default::default()
            },
            Body::ManageData(op) => OperationBody {
                kind: "manage_data",
                manage_data: Some(ManageDataOp {
                    data_name: text(op.data_name.0.as_slice()),
                    data_value: op
                        .data_value
                        .as_ref()
                        .map(|value| hex_bytes(value.0.as_slice())),
                }),
                ..Default::default()
            },
            Body::BumpSequence(op) => OperationBody {
                kind: "bump_sequence",
                bump_sequence: Some(BumpSequenceOp {
                    bump_to: op.bump_to.0,
                }),
                ..Default::default()
            },
            Body::ManageBuyOffer(op) => OperationBody {
                kind: "manage_buy_offer",
                manage_buy_offer: Some(ManageBuyOfferOp {
                    selling: self.asset(&op.selling)?,
                    buying: self.asset(&op.buying)?,
                    buy_amount: op.buy_amount,
                    price: price(&op.price),
                    offer_id: op.offer_id,
                }),
                ..Default::default()
            },
            Body::PathPaymentStrictSend(op) => OperationBody {
                kind: "path_payment_strict_send",
                path_payment_strict_send: Some(PathPaymentStrictSendOp {
                    send_asset: self.asset(&op.send_asset)?,
                    send_amount: op.send_amount,
                    destination: self.muxed_account(&op.destination)?,
                    dest_asset: self.asset(&op.dest_asset)?,
                    dest_min: op.dest_min,
                    path: convert_all(&op.path, |asset| self.asset(asset))?,
                }),
                ..Default::default()
            },
            Body::CreateClaimableBalance(op) => OperationBody {
                kind: "create_claimable_balance",
                create_claimable_balance: Some(CreateClaimableBalanceOp {
                    asset: self.asset(&op.asset)?,
                    amount: op.amount,
                    claimants: convert_all(&op.claimants, |claimant| self.claimant(claimant))?,
                }),
                ..Default::default()
            },
            Body::ClaimClaimableBalance(op) => OperationBody {
                kind: "claim_claimable_balance",
                claim_claimable_balance: Some(ClaimClaimableBalanceOp {
                    balance_id: claimable_balance_id(&op.balance_id),
                }),
                ..Default::default()
            },
            Body::BeginSponsoringFutureReserves(op) => OperationBody {
                kind: "begin_sponsoring_future_reserves",
                begin_sponsoring_future_reserves: Some(BeginSponsoringFutureReservesOp {
                    sponsored_id: self.account_id(&op.sponsored_id)?,
                }),
                ..Default::default()
            },
            Body::EndSponsoringFutureReserves => OperationBody {
                kind: "end_sponsoring_future_reserves",
                ..Default::default()
            },
            Body::RevokeSponsorship(op) => OperationBody {
                kind: "revoke_sponsorship",
                revoke_sponsorship: Some(self.revoke_sponsorship(op)?),
                ..Default::default()
            },
            Body::Clawback(op) => OperationBody {
                kind: "clawback",
                clawback: Some(ClawbackOp {
                    asset: self.asset(&op.asset)?,
                    from: self.muxed_account(&op.from)?,
                    amount: op.amount,
                }),
                ..Default::default()
            },
            Body::ClawbackClaimableBalance(op) => OperationBody {
                kind: "clawback_claimable_balance",
                clawback_claimable_balance: Some(ClawbackClaimableBalanceOp {
                    balance_id: claimable_balance_id(&op.balance_id),
                }),
                ..Default::default()
            },
            Body::SetTrustLineFlags(op) => OperationBody {
                kind: "set_trust_line_flags",
                set_trust_line_flags: Some(SetTrustLineFlagsOp {
                    trustor: self.account_id(&op.trustor)?,
                    asset: self.asset(&op.asset)?,
                    clear_flags: op.clear_flags,
                    set_flags: op.set_flags,
                }),
                ..Default::default()
            },
            Body::LiquidityPoolDeposit(op) => OperationBody {
                kind: "liquidity_pool_deposit",
                liquidity_pool_deposit: Some(LiquidityPoolDepositOp {
                    liquidity_pool_id: HexBytes::from(&op.liquidity_pool_id.0),
                    max_amount_a: op.max_amount_a,
                    max_amount_b: op.max_amount_b,
                    min_price: price(&op.min_price),
                    max_price: price(&op.max_price),
                }),
                ..Default::default()
            },
            Body::LiquidityPoolWithdraw(op) => OperationBody {
                kind: "liquidity_pool_withdraw",
                liquidity_pool_withdraw: Some(LiquidityPoolWithdrawOp {
                    liquidity_pool_id: HexBytes::from(&op.liquidity_pool_id.0),
                    amount: op.amount,
                    min_amount_a: op.min_amount_a,
                    min_amount_b: op.min_amount_b,
                }),
                ..Default::default()
            },
            Body::InvokeHostFunction(op) => OperationBody {
                kind: "invoke_host_function",
                invoke_host_function: Some(InvokeHostFunctionOp {
                    host_function: self.host_function(&op.host_function)?,
                    auth: convert_all(&op.auth, |entry| self.soroban_authorization_entry(entry))?,
                }),
                ..Default::default()
            },
            Body::ExtendFootprintTtl(op) => OperationBody {
                kind: "extend_footprint_ttl",
                extend_footprint_ttl: Some(ExtendFootprintTtlOp {
                    ext: ExtensionPoint::of(&op.ext),
                    extend_to: op.extend_to,
                }),
                ..Default::default()
            },
            Body::RestoreFootprint(op) => OperationBody {
                kind: "restore_footprint",
                restore_footprint: Some(RestoreFootprintOp {
                    ext: ExtensionPoint::of(&op.ext),
                }),
                ..Default::default()
            },
        };
        Ok(body)
    }

    fn set_options(&self, op: &xdr::SetOptionsOp) -> Result<SetOptionsOp> {
        Ok(SetOptionsOp {
            inflation_dest: op
                .inflation_dest
                .as_ref()
                .map(|dest| self.account_id(dest))
                .transpose()?,
            clear_flags: op.clear_flags,
            set_flags: op.set_flags,
            master_weight: op.master_weight,
            low_threshold: op.low_threshold,
            med_threshold: op.med_threshold,
            high_threshold: op.high_threshold,
            home_domain: op
                .home_domain
                .as_ref()
                .map(|domain| text(domain.0.as_slice())),
            signer: op
                .signer
                .as_ref()
                .map(|signer| self.signer(signer))
                .transpose()?,
        })
    }

    fn revoke_sponsorship(&self, op: &xdr::RevokeSponsorshipOp) -> Result<RevokeSponsorshipOp> {
        match op {
            xdr::RevokeSponsorshipOp::LedgerEntry(key) => Ok(RevokeSponsorshipOp {
                kind: "ledger_entry",
                ledger_key: Some(self.ledger_key(key)?),
                signer: None,
            }),
            xdr::RevokeSponsorshipOp::Signer(signer) => Ok(RevokeSponsorshipOp {
                kind: "signer",
                ledger_key: None,
                signer: Some(RevokeSponsorshipOpSigner {
                    account_id: self.account_id(&signer.account_id)?,
                    signer_key: self.signer_key(&signer.signer_key)?,
                }),
            }),
        }
    }
}

fn time_bounds(bounds: &xdr::TimeBounds) -> TimeBounds {
    TimeBounds {
        min_time: bounds.min_time.0,
        max_time: bounds.max_time.0,
    }
}

pub(crate) fn memo(memo: &xdr::Memo) -> Memo {
    match memo {
        xdr::Memo::None => Memo {
            kind: "none",
            ..Default::default()
        },
        xdr::Memo::Text(t) => Memo {
            kind: "text",
            text: Some(text(t.as_slice())),
            ..Default::default()
        },
        xdr::Memo::Id(id) => Memo {
            kind: "id",
            id: Some(*id),
            ..Default::default()
        },
        xdr::Memo::Hash(hash) => Memo {
            kind: "hash",
            hash: Some(HexBytes::from(hash)),
            ..Default::default()
        },
        xdr::Memo::Return(hash) => Memo {
            kind: "return",
            ret_hash: Some(HexBytes::from(hash)),
            ..Default::default()
        },
    }
}
