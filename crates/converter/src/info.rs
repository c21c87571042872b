// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! `{type, value}` projection of contract values.
//!
//! The projection speaks the builder's literal grammar, so a value that can
//! be projected can be rebuilt from its `type` and `value`. Vector items
//! whose literal contains `,` or `@` cannot be written in that grammar and
//! are rejected.

use stellar_xdr::curr as xdr;

use crate::address::AddressCodec;
use crate::builder::TypeTag;
use crate::convert::Converter;
use crate::error::{ConvertError, Result};
use crate::types::ScValInfo;
use crate::wide::{I128Parts, I256Parts, U128Parts, U256Parts};

impl<A: AddressCodec> Converter<A> {
    pub fn sc_val_info(&self, val: &xdr::ScVal) -> Result<ScValInfo> {
        let (tag, value) = self.literal(val)?;
        Ok(ScValInfo {
            kind: tag.as_str(),
            value,
        })
    }

    fn literal(&self, val: &xdr::ScVal) -> Result<(TypeTag, String)> {
        let literal = match val {
            xdr::ScVal::Bool(b) => (TypeTag::Bool, b.to_string()),
            xdr::ScVal::U32(n) => (TypeTag::U32, n.to_string()),
            xdr::ScVal::I32(n) => (TypeTag::I32, n.to_string()),
            xdr::ScVal::U64(n) => (TypeTag::U64, n.to_string()),
            xdr::ScVal::I64(n) => (TypeTag::I64, n.to_string()),
            xdr::ScVal::Timepoint(t) => (TypeTag::Time, t.0.to_string()),
            xdr::ScVal::Duration(d) => (TypeTag::Duration, d.0.to_string()),
            xdr::ScVal::U128(parts) => (TypeTag::U128, U128Parts::from(parts).to_decimal()),
            xdr::ScVal::I128(parts) => (TypeTag::I128, I128Parts::from(parts).to_decimal()),
            xdr::ScVal::U256(parts) => (TypeTag::U256, U256Parts::from(parts).to_decimal()),
            xdr::ScVal::I256(parts) => (TypeTag::I256, I256Parts::from(parts).to_decimal()),
            xdr::ScVal::Bytes(bytes) => (TypeTag::Bytes, hex::encode(bytes.0.as_slice())),
            xdr::ScVal::String(s) => (TypeTag::String, lossy(s.0.as_slice())),
            xdr::ScVal::Symbol(sym) => (TypeTag::Sym, lossy(sym.0.as_slice())),
            xdr::ScVal::LedgerKeyNonce(key) => (TypeTag::Nonce, key.nonce.to_string()),
            xdr::ScVal::Address(address) => (TypeTag::Address, self.address_literal(address)?),
            xdr::ScVal::Vec(items) => {
                let items = items.as_ref().map(|items| items.0.as_slice()).unwrap_or_default();
                (TypeTag::Vec, self.vec_literal(items)?)
            }
            xdr::ScVal::Void
            | xdr::ScVal::Error(_)
            | xdr::ScVal::Map(_)
            | xdr::ScVal::LedgerKeyContractInstance
            | xdr::ScVal::ContractInstance(_) => {
                return Err(ConvertError::unsupported("ScVal", val.name()));
            }
        };
        Ok(literal)
    }

    fn vec_literal(&self, items: &[xdr::ScVal]) -> Result<String> {
        let items = items
            .iter()
            .map(|item| match item {
                xdr::ScVal::Vec(None) => Ok(format!("{}@", TypeTag::Vec)),
                xdr::ScVal::Vec(Some(nested)) if nested.0.is_empty() => {
                    Ok(format!("{}@", TypeTag::Vec))
                }
                xdr::ScVal::Vec(Some(_)) => Err(ConvertError::unsupported("ScVal", item.name())),
                _ => {
                    let (tag, value) = self.literal(item)?;
                    // The vector grammar has no escaping for its separators.
                    if value.contains([',', '@']) {
                        return Err(ConvertError::unsupported("ScVal", item.name()));
                    }
                    Ok(format!("{tag}@{value}"))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(items.join(","))
    }

    fn address_literal(&self, address: &xdr::ScAddress) -> Result<String> {
        match address {
            xdr::ScAddress::Account(id) => self.account_id(id),
            xdr::ScAddress::Contract(hash) => self.contract_id(hash),
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;

    const ACCOUNT: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";
    const CONTRACT: &str = "CA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAXE";

    fn round_trip(tag: &str, literal: &str) {
        let conv = Converter::strkey();
        let built = build(tag, literal).unwrap();
        let info = conv.sc_val_info(&built).unwrap();
        assert_eq!(info.kind, tag);
        assert_eq!(build(info.kind, &info.value).unwrap(), built, "{tag}@{literal}");
    }

    #[test]
    fn test_every_tag_round_trips() {
        let cases = [
            ("bool", "true"),
            ("u32", "7"),
            ("i32", "-7"),
            ("u64", "18446744073709551615"),
            ("i64", "-9223372036854775808"),
            ("time", "1700000000"),
            ("duration", "3600"),
            ("u128", "340282366920938463463374607431768211455"),
            ("i128", "-170141183460469231731687303715884105728"),
            (
                "u256",
                "115792089237316195423570985008687907853269984665640564039457584007913129639935",
            ),
            ("i256", "-1"),
            ("bytes", "deadbeef"),
            ("string", "hello world"),
            ("sym", "transfer"),
            ("nonce", "-42"),
            ("address", ACCOUNT),
            ("address", CONTRACT),
            ("vec", "u32@1,bool@false,sym@x,vec@"),
            ("vec", ""),
        ];
        for (tag, literal) in cases {
            round_trip(tag, literal);
        }
    }

    #[test]
    fn test_info_literal_matches_input() {
        let conv = Converter::strkey();
        let info = conv.sc_val_info(&build("address", ACCOUNT).unwrap()).unwrap();
        assert_eq!(info.value, ACCOUNT);
        let info = conv.sc_val_info(&build("vec", "u32@1,vec@").unwrap()).unwrap();
        assert_eq!(info.value, "u32@1,vec@");
    }

    #[test]
    fn test_values_without_literal_are_unsupported() {
        let conv = Converter::strkey();
        for val in [
            xdr::ScVal::Void,
            xdr::ScVal::Map(None),
            xdr::ScVal::LedgerKeyContractInstance,
            xdr::ScVal::Error(xdr::ScError::Contract(1)),
        ] {
            assert!(matches!(
                conv.sc_val_info(&val),
                Err(ConvertError::UnsupportedVariant { type_name: "ScVal", .. })
            ));
        }
    }

    #[test]
    fn test_non_empty_nested_vec_is_unsupported() {
        let inner = xdr::ScVal::Vec(Some(xdr::ScVec(vec![xdr::ScVal::U32(1)].try_into().unwrap())));
        let outer = xdr::ScVal::Vec(Some(xdr::ScVec(vec![inner].try_into().unwrap())));
        let err = Converter::strkey().sc_val_info(&outer).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported ScVal variant 'Vec'");
    }

    #[test]
    fn test_vec_item_with_separator_is_unsupported() {
        let conv = Converter::strkey();
        for text in ["a,b", "user@host"] {
            let item = xdr::ScVal::String(xdr::ScString(text.try_into().unwrap()));
            let val = xdr::ScVal::Vec(Some(xdr::ScVec(vec![item].try_into().unwrap())));
            let err = conv.sc_val_info(&val).unwrap_err();
            assert_eq!(err.to_string(), "Unsupported ScVal variant 'String'");
        }

        // Outside a vector the same text is a plain literal.
        let val = xdr::ScVal::String(xdr::ScString("a,b".try_into().unwrap()));
        let info = conv.sc_val_info(&val).unwrap();
        assert_eq!(build(info.kind, &info.value).unwrap(), val);
    }
}
