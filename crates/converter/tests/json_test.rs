// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use converter::xdr::{self, Limits, WriteXdr};
use converter::{
    ConvertError, Converter, XdrKind, marshal_json_contract_event_xdr,
    marshal_json_envelope_xdr, marshal_json_ledger_entry_xdr, marshal_json_result_meta_xdr,
    marshal_json_result_xdr,
};
use serde_json::Value;

fn parse(json: String) -> Value {
    serde_json::from_str(&json).unwrap()
}

fn envelope() -> xdr::TransactionEnvelope {
    xdr::TransactionEnvelope::TxV0(xdr::TransactionV0Envelope {
        tx: xdr::TransactionV0 {
            source_account_ed25519: xdr::Uint256([1; 32]),
            fee: 100,
            seq_num: xdr::SequenceNumber(3),
            time_bounds: Some(xdr::TimeBounds {
                min_time: xdr::TimePoint(0),
                max_time: xdr::TimePoint(1_000),
            }),
            memo: xdr::Memo::Text("hello".try_into().unwrap()),
            operations: vec![xdr::Operation {
                source_account: None,
                body: xdr::OperationBody::BumpSequence(xdr::BumpSequenceOp {
                    bump_to: xdr::SequenceNumber(10),
                }),
            }]
            .try_into()
            .unwrap(),
            ext: xdr::TransactionV0Ext::V0,
        },
        signatures: vec![xdr::DecoratedSignature {
            hint: xdr::SignatureHint([1, 2, 3, 4]),
            signature: xdr::Signature(vec![9; 64].try_into().unwrap()),
        }]
        .try_into()
        .unwrap(),
    })
}

#[test]
fn envelope_entry_point() {
    let bytes = envelope().to_xdr(Limits::none()).unwrap();
    let json = parse(marshal_json_envelope_xdr(&bytes).unwrap());

    assert_eq!(json["type"], "tx_v0");
    let tx = &json["v0"]["tx"];
    assert!(tx["sourceAccountEd25519"].as_str().unwrap().starts_with('G'));
    assert_eq!(tx["timeBounds"]["maxTime"], 1_000);
    assert_eq!(tx["memo"], serde_json::json!({ "type": "text", "text": "hello" }));
    assert_eq!(tx["operations"][0]["body"]["bumpSequence"]["bumpTo"], 10);
    assert_eq!(json["v0"]["signatures"][0]["hint"], "01020304");
}

#[test]
fn result_entry_point() {
    let pair = xdr::TransactionResultPair {
        transaction_hash: xdr::Hash([0; 32]),
        result: xdr::TransactionResult {
            fee_charged: 100,
            result: xdr::TransactionResultResult::TxInsufficientFee,
            ext: xdr::TransactionResultExt::V0,
        },
    };
    let json = parse(marshal_json_result_xdr(&pair.to_xdr(Limits::none()).unwrap()).unwrap());
    assert_eq!(json["result"]["feeCharged"], 100);
    assert_eq!(json["result"]["result"]["code"], "TxInsufficientFee");
    assert_eq!(json["result"]["ext"]["v"], 0);
}

#[test]
fn result_meta_entry_point() {
    let meta = xdr::TransactionResultMeta {
        result: xdr::TransactionResultPair {
            transaction_hash: xdr::Hash([1; 32]),
            result: xdr::TransactionResult {
                fee_charged: 10,
                result: xdr::TransactionResultResult::TxSuccess(Default::default()),
                ext: xdr::TransactionResultExt::V0,
            },
        },
        fee_processing: xdr::LedgerEntryChanges(Default::default()),
        tx_apply_processing: xdr::TransactionMeta::V0(Default::default()),
    };
    let json =
        parse(marshal_json_result_meta_xdr(&meta.to_xdr(Limits::none()).unwrap()).unwrap());
    assert_eq!(json["result"]["result"]["result"]["results"], serde_json::json!([]));
    assert_eq!(json["txApplyProcessing"]["type"], "v0");
    assert_eq!(json["feeProcessing"], serde_json::json!([]));
}

#[test]
fn contract_event_entry_point() {
    let event = xdr::ContractEvent {
        ext: xdr::ExtensionPoint::V0,
        contract_id: Some(xdr::Hash([4; 32])),
        type_: xdr::ContractEventType::Contract,
        body: xdr::ContractEventBody::V0(xdr::ContractEventV0 {
            topics: vec![xdr::ScVal::Symbol(xdr::ScSymbol("transfer".try_into().unwrap()))]
                .try_into()
                .unwrap(),
            data: xdr::ScVal::I128(xdr::Int128Parts { hi: 0, lo: 500 }),
        }),
    };
    let json =
        parse(marshal_json_contract_event_xdr(&event.to_xdr(Limits::none()).unwrap()).unwrap());
    assert_eq!(json["type"], "contract");
    assert!(json["contractId"].as_str().unwrap().starts_with('C'));
    assert_eq!(json["body"]["v0"]["topics"][0]["sym"], "transfer");
    assert_eq!(json["body"]["v0"]["data"]["i128"]["lo"], 500);
}

#[test]
fn ledger_entry_entry_point() {
    let entry = xdr::LedgerEntry {
        last_modified_ledger_seq: 5,
        data: xdr::LedgerEntryData::Ttl(xdr::TtlEntry {
            key_hash: xdr::Hash([0xFF; 32]),
            live_until_ledger_seq: 50,
        }),
        ext: xdr::LedgerEntryExt::V0,
    };
    let json =
        parse(marshal_json_ledger_entry_xdr(&entry.to_xdr(Limits::none()).unwrap()).unwrap());
    assert_eq!(json["data"]["ttl"]["liveUntilLedgerSeq"], 50);
    assert_eq!(json["data"]["ttl"]["keyHash"], "ff".repeat(32));
}

#[test]
fn base64_dispatch_by_kind_name() {
    let encoded = envelope().to_xdr_base64(Limits::none()).unwrap();
    let kind: XdrKind = "envelope".parse().unwrap();
    let json = Converter::strkey().base64_to_json(kind, &encoded).unwrap();
    assert_eq!(json["type"], "tx_v0");

    // Decoding as the wrong kind fails instead of guessing.
    assert!(matches!(
        Converter::strkey().base64_to_json(XdrKind::LedgerEntry, &encoded),
        Err(ConvertError::Xdr(_))
    ));
}
