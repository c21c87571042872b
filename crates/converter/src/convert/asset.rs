// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::{DateTime, SecondsFormat};
use stellar_xdr::curr as xdr;

use super::account::liabilities;
use super::{Converter, convert_all};
use crate::address::AddressCodec;
use crate::chain::{ExtensionPoint, resolve};
use crate::error::Result;
use crate::types::{
    Asset, AssetCode, ChangeTrustAsset, ClaimAtom, ClaimLiquidityAtom, ClaimOfferAtom,
    ClaimOfferAtomV0, ClaimPredicate, ClaimableBalanceEntry, ClaimableBalanceEntryExtensionV1,
    ClaimableBalanceId, Claimant, ClaimantV0, HexBytes, InflationPayout,
    LiquidityPoolConstantProductParameters, LiquidityPoolEntry, LiquidityPoolEntryBody,
    LiquidityPoolEntryConstantProduct, LiquidityPoolParameters, ManageOfferSuccessResult,
    ManageOfferSuccessResultOffer, OfferEntry, PathPaymentResultSuccess, Price,
    SimplePaymentResult, TrustLineAsset, TrustLineEntry, TrustLineEntryExtensionV2,
    TrustLineEntryV1,
};

impl<A: AddressCodec> Converter<A> {
    pub fn asset(&self, asset: &xdr::Asset) -> Result<Asset> {
        match asset {
            xdr::Asset::Native => Ok(Asset {
                kind: "native",
                ..Default::default()
            }),
            xdr::Asset::CreditAlphanum4(credit) => Ok(Asset {
                kind: "alphanum4",
                code: Some(asset_code_text(&credit.asset_code.0)),
                issuer: Some(self.account_id(&credit.issuer)?),
            }),
            xdr::Asset::CreditAlphanum12(credit) => Ok(Asset {
                kind: "alphanum12",
                code: Some(asset_code_text(&credit.asset_code.0)),
                issuer: Some(self.account_id(&credit.issuer)?),
            }),
        }
    }

    pub fn trust_line_asset(&self, asset: &xdr::TrustLineAsset) -> Result<TrustLineAsset> {
        let (kind, code, issuer) = match asset {
            xdr::TrustLineAsset::Native => ("native", None, None),
            xdr::TrustLineAsset::CreditAlphanum4(credit) => (
                "alphanum4",
                Some(asset_code_text(&credit.asset_code.0)),
                Some(self.account_id(&credit.issuer)?),
            ),
            xdr::TrustLineAsset::CreditAlphanum12(credit) => (
                "alphanum12",
                Some(asset_code_text(&credit.asset_code.0)),
                Some(self.account_id(&credit.issuer)?),
            ),
            xdr::TrustLineAsset::PoolShare(pool_id) => {
                return Ok(TrustLineAsset {
                    kind: "poolshare",
                    liquidity_pool_id: Some(HexBytes::from(&pool_id.0)),
                    ..Default::default()
                });
            }
        };
        Ok(TrustLineAsset {
            kind,
            code,
            issuer,
            liquidity_pool_id: None,
        })
    }

    pub fn change_trust_asset(&self, asset: &xdr::ChangeTrustAsset) -> Result<ChangeTrustAsset> {
        let (kind, code, issuer) = match asset {
            xdr::ChangeTrustAsset::Native => ("native", None, None),
            xdr::ChangeTrustAsset::CreditAlphanum4(credit) => (
                "alphanum4",
                Some(asset_code_text(&credit.asset_code.0)),
                Some(self.account_id(&credit.issuer)?),
            ),
            xdr::ChangeTrustAsset::CreditAlphanum12(credit) => (
                "alphanum12",
                Some(asset_code_text(&credit.asset_code.0)),
                Some(self.account_id(&credit.issuer)?),
            ),
            xdr::ChangeTrustAsset::PoolShare(params) => {
                return Ok(ChangeTrustAsset {
                    kind: "poolshare",
                    liquidity_pool: Some(self.liquidity_pool_parameters(params)?),
                    ..Default::default()
                });
            }
        };
        Ok(ChangeTrustAsset {
            kind,
            code,
            issuer,
            liquidity_pool: None,
        })
    }

    pub fn liquidity_pool_parameters(
        &self,
        params: &xdr::LiquidityPoolParameters,
    ) -> Result<LiquidityPoolParameters> {
        match params {
            xdr::LiquidityPoolParameters::LiquidityPoolConstantProduct(product) => {
                Ok(LiquidityPoolParameters {
                    kind: "constant_product",
                    constant_product: Some(self.constant_product_parameters(product)?),
                })
            }
        }
    }

    fn constant_product_parameters(
        &self,
        params: &xdr::LiquidityPoolConstantProductParameters,
    ) -> Result<LiquidityPoolConstantProductParameters> {
        Ok(LiquidityPoolConstantProductParameters {
            asset_a: self.asset(&params.asset_a)?,
            asset_b: self.asset(&params.asset_b)?,
            fee: params.fee,
        })
    }

    pub fn liquidity_pool_entry(&self, entry: &xdr::LiquidityPoolEntry) -> Result<LiquidityPoolEntry> {
        let body = match &entry.body {
            xdr::LiquidityPoolEntryBody::LiquidityPoolConstantProduct(product) => {
                LiquidityPoolEntryBody {
                    kind: "constant_product",
                    constant_product: Some(LiquidityPoolEntryConstantProduct {
                        params: self.constant_product_parameters(&product.params)?,
                        reserve_a: product.reserve_a,
                        reserve_b: product.reserve_b,
                        total_pool_shares: product.total_pool_shares,
                        pool_shares_trust_line_count: product.pool_shares_trust_line_count,
                    }),
                }
            }
        };

        Ok(LiquidityPoolEntry {
            liquidity_pool_id: HexBytes::from(&entry.liquidity_pool_id.0),
            body,
        })
    }

    pub fn trust_line_entry(&self, entry: &xdr::TrustLineEntry) -> Result<TrustLineEntry> {
        Ok(TrustLineEntry {
            account_id: self.account_id(&entry.account_id)?,
            asset: self.trust_line_asset(&entry.asset)?,
            balance: entry.balance,
            limit: entry.limit,
            flags: entry.flags,
            ext: resolve(&entry.ext, |v1| {
                Ok(TrustLineEntryV1 {
                    liabilities: liabilities(&v1.liabilities),
                    ext: resolve(&v1.ext, |v2| {
                        Ok(TrustLineEntryExtensionV2 {
                            liquidity_pool_use_count: v2.liquidity_pool_use_count,
                            ext: ExtensionPoint::of(&v2.ext),
                        })
                    })?,
                })
            })?,
        })
    }

    /// Convert a claim predicate tree, preserving its exact shape.
    pub fn claim_predicate(&self, predicate: &xdr::ClaimPredicate) -> ClaimPredicate {
        match predicate {
            xdr::ClaimPredicate::Unconditional => ClaimPredicate {
                kind: "unconditional",
                ..Default::default()
            },
            xdr::ClaimPredicate::And(predicates) => ClaimPredicate {
                kind: "and",
                and_predicates: Some(predicates.iter().map(|p| self.claim_predicate(p)).collect()),
                ..Default::default()
            },
            xdr::ClaimPredicate::Or(predicates) => ClaimPredicate {
                kind: "or",
                or_predicates: Some(predicates.iter().map(|p| self.claim_predicate(p)).collect()),
                ..Default::default()
            },
            xdr::ClaimPredicate::Not(inner) => ClaimPredicate {
                kind: "not",
                not_predicate: inner
                    .as_deref()
                    .map(|p| Box::new(self.claim_predicate(p))),
                ..Default::default()
            },
            xdr::ClaimPredicate::BeforeAbsoluteTime(epoch) => ClaimPredicate {
                kind: "before_absolute_time",
                abs_before: DateTime::from_timestamp(*epoch, 0)
                    .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true)),
                abs_before_epoch: Some(*epoch),
                ..Default::default()
            },
            xdr::ClaimPredicate::BeforeRelativeTime(seconds) => ClaimPredicate {
                kind: "before_relative_time",
                rel_before: Some(*seconds),
                ..Default::default()
            },
        }
    }

    pub fn claimant(&self, claimant: &xdr::Claimant) -> Result<Claimant> {
        match claimant {
            xdr::Claimant::ClaimantTypeV0(v0) => Ok(Claimant {
                kind: "v0",
                v0: Some(ClaimantV0 {
                    destination: self.account_id(&v0.destination)?,
                    predicate: self.claim_predicate(&v0.predicate),
                }),
            }),
        }
    }

    pub fn claimable_balance_entry(
        &self,
        entry: &xdr::ClaimableBalanceEntry,
    ) -> Result<ClaimableBalanceEntry> {
        Ok(ClaimableBalanceEntry {
            balance_id: claimable_balance_id(&entry.balance_id),
            claimants: convert_all(&entry.claimants, |c| self.claimant(c))?,
            asset: self.asset(&entry.asset)?,
            amount: entry.amount,
            ext: resolve(&entry.ext, |v1| {
                Ok(ClaimableBalanceEntryExtensionV1 {
                    ext: ExtensionPoint::of(&v1.ext),
                    flags: v1.flags,
                })
            })?,
        })
    }

    pub fn offer_entry(&self, entry: &xdr::OfferEntry) -> Result<OfferEntry> {
        Ok(OfferEntry {
            seller_id: self.account_id(&entry.seller_id)?,
            offer_id: entry.offer_id,
            selling: self.asset(&entry.selling)?,
            buying: self.asset(&entry.buying)?,
            amount: entry.amount,
            price: price(&entry.price),
            flags: entry.flags,
            ext: ExtensionPoint::of(&entry.ext),
        })
    }

    pub fn claim_atom(&self, atom: &xdr::ClaimAtom) -> Result<ClaimAtom> {
        match atom {
            xdr::ClaimAtom::V0(v0) => Ok(ClaimAtom {
                kind: "v0",
                v0: Some(ClaimOfferAtomV0 {
                    seller_ed25519: self.ed25519(&v0.seller_ed25519)?,
                    offer_id: v0.offer_id,
                    asset_sold: self.asset(&v0.asset_sold)?,
                    amount_sold: v0.amount_sold,
                    asset_bought: self.asset(&v0.asset_bought)?,
                    amount_bought: v0.amount_bought,
                }),
                ..Default::default()
            }),
            xdr::ClaimAtom::OrderBook(offer) => Ok(ClaimAtom {
                kind: "order_book",
                order_book: Some(ClaimOfferAtom {
                    seller_id: self.account_id(&offer.seller_id)?,
                    offer_id: offer.offer_id,
                    asset_sold: self.asset(&offer.asset_sold)?,
                    amount_sold: offer.amount_sold,
                    asset_bought: self.asset(&offer.asset_bought)?,
                    amount_bought: offer.amount_bought,
                }),
                ..Default::default()
            }),
            xdr::ClaimAtom::LiquidityPool(pool) => Ok(ClaimAtom {
                kind: "liquidity_pool",
                liquidity_pool: Some(ClaimLiquidityAtom {
                    liquidity_pool_id: HexBytes::from(&pool.liquidity_pool_id.0),
                    asset_sold: self.asset(&pool.asset_sold)?,
                    amount_sold: pool.amount_sold,
                    asset_bought: self.asset(&pool.asset_bought)?,
                    amount_bought: pool.amount_bought,
                }),
                ..Default::default()
            }),
        }
    }

    pub(crate) fn path_payment_success(
        &self,
        offers: &[xdr::ClaimAtom],
        last: &xdr::SimplePaymentResult,
    ) -> Result<PathPaymentResultSuccess> {
        Ok(PathPaymentResultSuccess {
            offers: convert_all(offers, |atom| self.claim_atom(atom))?,
            last: SimplePaymentResult {
                destination: self.account_id(&last.destination)?,
                asset: self.asset(&last.asset)?,
                amount: last.amount,
            },
        })
    }

    pub fn manage_offer_success_result(
        &self,
        result: &xdr::ManageOfferSuccessResult,
    ) -> Result<ManageOfferSuccessResult> {
        let offer = match &result.offer {
            xdr::ManageOfferSuccessResultOffer::Created(offer) => ManageOfferSuccessResultOffer {
                kind: "created",
                offer: Some(self.offer_entry(offer)?),
            },
            xdr::ManageOfferSuccessResultOffer::Updated(offer) => ManageOfferSuccessResultOffer {
                kind: "updated",
                offer: Some(self.offer_entry(offer)?),
            },
            xdr::ManageOfferSuccessResultOffer::Deleted => ManageOfferSuccessResultOffer {
                kind: "deleted",
                offer: None,
            },
        };

        Ok(ManageOfferSuccessResult {
            offers_claimed: convert_all(&result.offers_claimed, |atom| self.claim_atom(atom))?,
            offer,
        })
    }

    pub(crate) fn inflation_payout(&self, payout: &xdr::InflationPayout) -> Result<InflationPayout> {
        Ok(InflationPayout {
            destination: self.account_id(&payout.destination)?,
            amount: payout.amount,
        })
    }
}

pub(crate) fn claimable_balance_id(id: &xdr::ClaimableBalanceId) -> ClaimableBalanceId {
    match id {
        xdr::ClaimableBalanceId::ClaimableBalanceIdTypeV0(hash) => ClaimableBalanceId {
            kind: "v0",
            v0: Some(HexBytes::from(hash)),
        },
    }
}

pub(crate) fn asset_code(code: &xdr::AssetCode) -> AssetCode {
    match code {
        xdr::AssetCode::CreditAlphanum4(code) => AssetCode {
            kind: "alphanum4",
            code: asset_code_text(&code.0),
        },
        xdr::AssetCode::CreditAlphanum12(code) => AssetCode {
            kind: "alphanum12",
            code: asset_code_text(&code.0),
        },
    }
}

pub(crate) fn price(price: &xdr::Price) -> Price {
    Price {
        n: price.n,
        d: price.d,
    }
}

/// Asset codes are NUL-padded to their fixed width.
fn asset_code_text(code: &[u8]) -> String {
    let end = code.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    super::text(&code[..end])
}
