// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed contract values from `(type, literal)` pairs.
//!
//! The literal grammar is deliberately small:
//!
//! - scalars are written in base 10 (`u32`, `i64`, `u256`, ...), `bool`
//!   accepts the usual spellings (`1`, `t`, `true`, `FALSE`, ...)
//! - `bytes` is hex without a prefix
//! - `address` is a `G…` account or `C…` contract strkey
//! - `vec` is a comma separated list of `tag@literal` items, for example
//!   `u32@7,bool@true,string@hello`; `vec@` inside a list is an empty vector
//!
//! Maps cannot be built.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use stellar_xdr::curr as xdr;

use crate::address::{AddressCodec, DecodedAddress, StrkeyCodec};
use crate::error::{ConvertError, Result};
use crate::wide;

/// Type tags understood by [`build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    U32,
    I32,
    U64,
    I64,
    Time,
    Duration,
    U128,
    I128,
    U256,
    I256,
    Bytes,
    String,
    Sym,
    Nonce,
    Vec,
    Address,
}

impl TypeTag {
    pub const ALL: [TypeTag; 17] = [
        TypeTag::Bool,
        TypeTag::U32,
        TypeTag::I32,
        TypeTag::U64,
        TypeTag::I64,
        TypeTag::Time,
        TypeTag::Duration,
        TypeTag::U128,
        TypeTag::I128,
        TypeTag::U256,
        TypeTag::I256,
        TypeTag::Bytes,
        TypeTag::String,
        TypeTag::Sym,
        TypeTag::Nonce,
        TypeTag::Vec,
        TypeTag::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::U32 => "u32",
            TypeTag::I32 => "i32",
            TypeTag::U64 => "u64",
            TypeTag::I64 => "i64",
            TypeTag::Time => "time",
            TypeTag::Duration => "duration",
            TypeTag::U128 => "u128",
            TypeTag::I128 => "i128",
            TypeTag::U256 => "u256",
            TypeTag::I256 => "i256",
            TypeTag::Bytes => "bytes",
            TypeTag::String => "string",
            TypeTag::Sym => "sym",
            TypeTag::Nonce => "nonce",
            TypeTag::Vec => "vec",
            TypeTag::Address => "address",
        }
    }
}

impl FromStr for TypeTag {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ConvertError::UnknownTypeTag { tag: s.to_string() })
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a contract value, decoding addresses with `stellar-strkey`.
pub fn build(tag: &str, literal: &str) -> Result<xdr::ScVal> {
    build_with(&StrkeyCodec, tag, literal)
}

/// Build a contract value, decoding addresses with `codec`.
pub fn build_with<A: AddressCodec>(codec: &A, tag: &str, literal: &str) -> Result<xdr::ScVal> {
    build_tagged(codec, tag.parse()?, literal)
}

fn build_tagged<A: AddressCodec>(codec: &A, tag: TypeTag, literal: &str) -> Result<xdr::ScVal> {
    let val = match tag {
        TypeTag::Bool => xdr::ScVal::Bool(parse_bool(literal)?),
        TypeTag::U32 => xdr::ScVal::U32(parse_int(tag, literal)?),
        TypeTag::I32 => xdr::ScVal::I32(parse_int(tag, literal)?),
        TypeTag::U64 => xdr::ScVal::U64(parse_int(tag, literal)?),
        TypeTag::I64 => xdr::ScVal::I64(parse_int(tag, literal)?),
        TypeTag::Time => xdr::ScVal::Timepoint(xdr::TimePoint(parse_int(tag, literal)?)),
        TypeTag::Duration => xdr::ScVal::Duration(xdr::Duration(parse_int(tag, literal)?)),
        TypeTag::U128 => xdr::ScVal::U128(wide::decimal_to_u128(literal)?.into()),
        TypeTag::I128 => xdr::ScVal::I128(wide::decimal_to_i128(literal)?.into()),
        TypeTag::U256 => xdr::ScVal::U256(wide::decimal_to_u256(literal)?.into()),
        TypeTag::I256 => xdr::ScVal::I256(wide::decimal_to_i256(literal)?.into()),
        TypeTag::Bytes => {
            let bytes = hex::decode(literal).map_err(|source| ConvertError::MalformedHex {
                literal: literal.to_string(),
                source,
            })?;
            xdr::ScVal::Bytes(xdr::ScBytes(
                bytes.try_into().map_err(|_| malformed(tag, literal))?,
            ))
        }
        TypeTag::String => xdr::ScVal::String(xdr::ScString(
            literal.try_into().map_err(|_| malformed(tag, literal))?,
        )),
        TypeTag::Sym => xdr::ScVal::Symbol(xdr::ScSymbol(
            literal.try_into().map_err(|_| malformed(tag, literal))?,
        )),
        TypeTag::Nonce => xdr::ScVal::LedgerKeyNonce(xdr::ScNonceKey {
            nonce: parse_int(tag, literal)?,
        }),
        TypeTag::Vec => {
            let items = build_vec(codec, literal)?;
            xdr::ScVal::Vec(Some(xdr::ScVec(
                items.try_into().map_err(|_| malformed(tag, literal))?,
            )))
        }
        TypeTag::Address => xdr::ScVal::Address(decode_address(codec, literal)?),
    };
    Ok(val)
}

fn build_vec<A: AddressCodec>(codec: &A, literal: &str) -> Result<Vec<xdr::ScVal>> {
    if literal.is_empty() {
        return Ok(Vec::new());
    }

    literal
        .split(',')
        .map(|item| match item.split('@').collect::<Vec<_>>().as_slice() {
            [tag, value] => build_with(codec, tag, value),
            _ => Err(ConvertError::MalformedVectorItem {
                item: item.to_string(),
            }),
        })
        .collect()
}

fn decode_address<A: AddressCodec>(codec: &A, literal: &str) -> Result<xdr::ScAddress> {
    let decoded = codec
        .decode_address(literal)
        .map_err(|source| ConvertError::InvalidAddress {
            address: literal.to_string(),
            source,
        })?;

    Ok(match decoded {
        DecodedAddress::Account(key) => xdr::ScAddress::Account(xdr::AccountId(
            xdr::PublicKey::PublicKeyTypeEd25519(xdr::Uint256(key)),
        )),
        DecodedAddress::Contract(hash) => xdr::ScAddress::Contract(xdr::Hash(hash)),
    })
}

fn parse_bool(literal: &str) -> Result<bool> {
    match literal {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(malformed(TypeTag::Bool, literal)),
    }
}

/// Plain base-10 only. `FromStr` would also take a leading `+`, which the
/// wide integer tags reject.
fn parse_int<T>(tag: TypeTag, literal: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    if literal.starts_with('+') {
        return Err(malformed(tag, literal));
    }

    literal.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertError::Overflow {
            tag: tag.as_str(),
            literal: literal.to_string(),
        },
        _ => malformed(tag, literal),
    })
}

fn malformed(tag: TypeTag, literal: &str) -> ConvertError {
    ConvertError::MalformedLiteral {
        tag: tag.as_str(),
        literal: literal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";
    const CONTRACT: &str = "CA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAXE";

    fn vec_items(val: xdr::ScVal) -> Vec<xdr::ScVal> {
        match val {
            xdr::ScVal::Vec(Some(items)) => items.0.into(),
            other => panic!("expected vec, got {other:?}"),
        }
    }

    #[test]
    fn test_tag_names_round_trip() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_unknown_tags() {
        for tag in ["map", "", "U32", "symbol"] {
            assert!(matches!(
                build(tag, "1"),
                Err(ConvertError::UnknownTypeTag { .. })
            ));
        }
    }

    #[test]
    fn test_bool_tokens() {
        for token in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(build("bool", token).unwrap(), xdr::ScVal::Bool(true));
        }
        for token in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(build("bool", token).unwrap(), xdr::ScVal::Bool(false));
        }
        assert!(matches!(
            build("bool", "yes"),
            Err(ConvertError::MalformedLiteral { tag: "bool", .. })
        ));
    }

    #[test]
    fn test_narrow_integers() {
        assert_eq!(build("u32", "4294967295").unwrap(), xdr::ScVal::U32(u32::MAX));
        assert_eq!(build("i32", "-7").unwrap(), xdr::ScVal::I32(-7));
        assert_eq!(build("i64", "-9223372036854775808").unwrap(), xdr::ScVal::I64(i64::MIN));
        assert_eq!(
            build("time", "1700000000").unwrap(),
            xdr::ScVal::Timepoint(xdr::TimePoint(1_700_000_000))
        );
        assert_eq!(
            build("nonce", "-3").unwrap(),
            xdr::ScVal::LedgerKeyNonce(xdr::ScNonceKey { nonce: -3 })
        );
    }

    #[test]
    fn test_integer_overflow_and_malformed() {
        assert!(matches!(
            build("u32", "4294967296"),
            Err(ConvertError::Overflow { tag: "u32", .. })
        ));
        assert!(matches!(
            build("i32", "-2147483649"),
            Err(ConvertError::Overflow { tag: "i32", .. })
        ));
        assert!(matches!(
            build("u64", "-1"),
            Err(ConvertError::MalformedLiteral { tag: "u64", .. })
        ));
        assert!(matches!(
            build("duration", "abc"),
            Err(ConvertError::MalformedLiteral { tag: "duration", .. })
        ));
    }

    #[test]
    fn test_plus_sign_rejected_at_every_width() {
        for tag in ["u32", "i32", "u64", "i64", "time", "duration", "nonce"] {
            assert!(
                matches!(build(tag, "+5"), Err(ConvertError::MalformedLiteral { .. })),
                "{tag} accepted +5"
            );
        }
        for tag in ["u128", "i128", "u256", "i256"] {
            assert!(
                matches!(build(tag, "+5"), Err(ConvertError::MalformedNumber { .. })),
                "{tag} accepted +5"
            );
        }
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(
            build("i128", "-1").unwrap(),
            xdr::ScVal::I128(xdr::Int128Parts {
                hi: -1,
                lo: u64::MAX
            })
        );
        assert!(matches!(
            build("u128", "340282366920938463463374607431768211456"),
            Err(ConvertError::Overflow { tag: "u128", .. })
        ));
    }

    #[test]
    fn test_bytes() {
        let built = build("bytes", "deadbeef").unwrap();
        assert_eq!(
            built,
            xdr::ScVal::Bytes(xdr::ScBytes(vec![0xDE, 0xAD, 0xBE, 0xEF].try_into().unwrap()))
        );
        assert!(matches!(
            build("bytes", "deadbee"),
            Err(ConvertError::MalformedHex { .. })
        ));
        assert!(matches!(
            build("bytes", "zz"),
            Err(ConvertError::MalformedHex { .. })
        ));
    }

    #[test]
    fn test_symbol_length_limit() {
        assert!(build("sym", &"a".repeat(32)).is_ok());
        assert!(matches!(
            build("sym", &"a".repeat(33)),
            Err(ConvertError::MalformedLiteral { tag: "sym", .. })
        ));
    }

    #[test]
    fn test_addresses() {
        assert!(matches!(
            build("address", ACCOUNT).unwrap(),
            xdr::ScVal::Address(xdr::ScAddress::Account(_))
        ));
        assert!(matches!(
            build("address", CONTRACT).unwrap(),
            xdr::ScVal::Address(xdr::ScAddress::Contract(_))
        ));
        assert!(matches!(
            build("address", "GNOTANADDRESS"),
            Err(ConvertError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_vec_items() {
        let items = vec_items(build("vec", "u32@1,bool@true").unwrap());
        assert_eq!(items, vec![xdr::ScVal::U32(1), xdr::ScVal::Bool(true)]);
    }

    #[test]
    fn test_vec_empty_and_nested_empty() {
        assert!(vec_items(build("vec", "").unwrap()).is_empty());

        let items = vec_items(build("vec", "u32@1,vec@").unwrap());
        assert_eq!(items.len(), 2);
        assert!(vec_items(items[1].clone()).is_empty());
    }

    #[test]
    fn test_vec_malformed_items() {
        for literal in ["u32@1,bool", "u32@1@2", "u32@1,,bool@true"] {
            assert!(
                matches!(
                    build("vec", literal),
                    Err(ConvertError::MalformedVectorItem { .. })
                ),
                "{literal}"
            );
        }
    }

    #[test]
    fn test_vec_item_errors_propagate() {
        assert!(matches!(
            build("vec", "u32@x"),
            Err(ConvertError::MalformedLiteral { tag: "u32", .. })
        ));
        assert!(matches!(
            build("vec", "map@1"),
            Err(ConvertError::UnknownTypeTag { .. })
        ));
    }
}
