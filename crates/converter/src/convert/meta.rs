// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use stellar_xdr::curr as xdr;

use super::{Converter, convert_all};
use crate::address::AddressCodec;
use crate::chain::{ExtensionPoint, resolve};
use crate::error::Result;
use crate::types::{
    OperationMeta, SorobanTransactionMeta, SorobanTransactionMetaExtV1, TransactionMeta,
    TransactionMetaV1, TransactionMetaV2, TransactionMetaV3, TransactionResultMeta,
};

impl<A: AddressCodec> Converter<A> {
    pub fn transaction_result_meta(
        &self,
        meta: &xdr::TransactionResultMeta,
    ) -> Result<TransactionResultMeta> {
        Ok(TransactionResultMeta {
            result: self.transaction_result_pair(&meta.result)?,
            fee_processing: self.ledger_entry_changes(&meta.fee_processing)?,
            tx_apply_processing: self.transaction_meta(&meta.tx_apply_processing)?,
        })
    }

    pub fn transaction_meta(&self, meta: &xdr::TransactionMeta) -> Result<TransactionMeta> {
        let meta = match meta {
            xdr::TransactionMeta::V0(operations) => TransactionMeta {
                kind: "v0",
                v0: Some(self.operation_metas(operations)?),
                ..Default::default()
            },
            xdr::TransactionMeta::V1(v1) => TransactionMeta {
                kind: "v1",
                v1: Some(TransactionMetaV1 {
                    tx_changes: self.ledger_entry_changes(&v1.tx_changes)?,
                    operations: self.operation_metas(&v1.operations)?,
                }),
                ..Default::default()
            },
            xdr::TransactionMeta::V2(v2) => TransactionMeta {
                kind: "v2",
                v2: Some(TransactionMetaV2 {
                    tx_changes_before: self.ledger_entry_changes(&v2.tx_changes_before)?,
                    operations: self.operation_metas(&v2.operations)?,
                    tx_changes_after: self.ledger_entry_changes(&v2.tx_changes_after)?,
                }),
                ..Default::default()
            },
            xdr::TransactionMeta::V3(v3) => TransactionMeta {
                kind: "v3",
                v3: Some(TransactionMetaV3 {
                    ext: ExtensionPoint::of(&v3.ext),
                    tx_changes_before: self.ledger_entry_changes(&v3.tx_changes_before)?,
                    operations: self.operation_metas(&v3.operations)?,
                    tx_changes_after: self.ledger_entry_changes(&v3.tx_changes_after)?,
                    soroban_meta: v3
                        .soroban_meta
                        .as_ref()
                        .map(|meta| self.soroban_transaction_meta(meta))
                        .transpose()?,
                }),
                ..Default::default()
            },
        };
        Ok(meta)
    }

    fn operation_metas(&self, operations: &[xdr::OperationMeta]) -> Result<Vec<OperationMeta>> {
        convert_all(operations, |op| {
            Ok(OperationMeta {
                changes: self.ledger_entry_changes(&op.changes)?,
            })
        })
    }

    pub fn soroban_transaction_meta(
        &self,
        meta: &xdr::SorobanTransactionMeta,
    ) -> Result<SorobanTransactionMeta> {
        Ok(SorobanTransactionMeta {
            ext: resolve(&meta.ext, |v1| {
                Ok(SorobanTransactionMetaExtV1 {
                    ext: ExtensionPoint::of(&v1.ext),
                    total_non_refundable_resource_fee_charged: v1
                        .total_non_refundable_resource_fee_charged,
                    total_refundable_resource_fee_charged: v1.total_refundable_resource_fee_charged,
                    rent_fee_charged: v1.rent_fee_charged,
                })
            })?,
            events: convert_all(&meta.events, |event| self.contract_event(event))?,
            return_value: self.sc_val(&meta.return_value)?,
            diagnostic_events: convert_all(&meta.diagnostic_events, |event| {
                self.diagnostic_event(event)
            })?,
        })
    }
}
