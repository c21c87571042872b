// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exact-precision codec between decimal literals and wide integer parts.
//!
//! Wide integers travel as ordered 64-bit words, most significant first. For
//! signed widths the top word is a native `i64` and the lower words are
//! unsigned, so negative values are two's complement across the full width:
//! `-1` becomes `hi = -1, lo = u64::MAX`.
//!
//! Parsing goes through `primitive_types::U256`, but splitting and merging
//! words is done explicitly with shifts, so the word layout does not depend
//! on how that type stores its limbs.

use primitive_types::U256;
use serde::Serialize;
use stellar_xdr::curr as xdr;

use crate::error::{ConvertError, Result};

const WORD_BITS: usize = 64;

/// Unsigned 128-bit value as `(hi, lo)` words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct U128Parts {
    pub hi: u64,
    pub lo: u64,
}

/// Signed 128-bit value; the sign lives in `hi`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct I128Parts {
    pub hi: i64,
    pub lo: u64,
}

/// Unsigned 256-bit value as four words, most significant first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct U256Parts {
    pub hi_hi: u64,
    pub hi_lo: u64,
    pub lo_hi: u64,
    pub lo_lo: u64,
}

/// Signed 256-bit value; the sign lives in `hi_hi`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I256Parts {
    pub hi_hi: i64,
    pub hi_lo: u64,
    pub lo_hi: u64,
    pub lo_lo: u64,
}

/// Parse an unsigned decimal literal into 128-bit parts.
pub fn decimal_to_u128(literal: &str) -> Result<U128Parts> {
    let (_, magnitude) = parse_literal("u128", literal, false)?;
    check_unsigned("u128", literal, magnitude, 128)?;

    let [hi, lo] = split_words::<2>(magnitude);
    Ok(U128Parts { hi, lo })
}

/// Parse a signed decimal literal into two's-complement 128-bit parts.
pub fn decimal_to_i128(literal: &str) -> Result<I128Parts> {
    let (negative, magnitude) = parse_literal("i128", literal, true)?;
    check_signed("i128", literal, negative, magnitude, 128)?;

    let mut words = split_words::<2>(magnitude);
    if negative {
        words = negate_words(words);
    }
    let [hi, lo] = words;
    Ok(I128Parts { hi: hi as i64, lo })
}

/// Parse an unsigned decimal literal into 256-bit parts.
pub fn decimal_to_u256(literal: &str) -> Result<U256Parts> {
    let (_, magnitude) = parse_literal("u256", literal, false)?;

    let [hi_hi, hi_lo, lo_hi, lo_lo] = split_words::<4>(magnitude);
    Ok(U256Parts {
        hi_hi,
        hi_lo,
        lo_hi,
        lo_lo,
    })
}

/// Parse a signed decimal literal into two's-complement 256-bit parts.
pub fn decimal_to_i256(literal: &str) -> Result<I256Parts> {
    let (negative, magnitude) = parse_literal("i256", literal, true)?;
    check_signed("i256", literal, negative, magnitude, 256)?;

    let mut words = split_words::<4>(magnitude);
    if negative {
        words = negate_words(words);
    }
    let [hi_hi, hi_lo, lo_hi, lo_lo] = words;
    Ok(I256Parts {
        hi_hi: hi_hi as i64,
        hi_lo,
        lo_hi,
        lo_lo,
    })
}

impl U128Parts {
    /// Normalized decimal form of the value.
    pub fn to_decimal(&self) -> String {
        merge_words(&[self.hi, self.lo]).to_string()
    }
}

impl I128Parts {
    pub fn to_decimal(&self) -> String {
        signed_decimal([self.hi as u64, self.lo])
    }
}

impl U256Parts {
    pub fn to_decimal(&self) -> String {
        merge_words(&[self.hi_hi, self.hi_lo, self.lo_hi, self.lo_lo]).to_string()
    }
}

impl I256Parts {
    pub fn to_decimal(&self) -> String {
        signed_decimal([self.hi_hi as u64, self.hi_lo, self.lo_hi, self.lo_lo])
    }
}

/// Split off the sign and parse the digits.
///
/// `-0` is normalized to a non-negative zero.
fn parse_literal(tag: &'static str, literal: &str, signed: bool) -> Result<(bool, U256)> {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) if signed => (true, rest),
        _ => (false, literal),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::MalformedNumber {
            literal: literal.to_string(),
        });
    }

    // Digits are already validated, so the only failure left is a value
    // wider than 256 bits.
    let magnitude = U256::from_dec_str(digits).map_err(|_| ConvertError::Overflow {
        tag,
        literal: literal.to_string(),
    })?;

    Ok((negative && !magnitude.is_zero(), magnitude))
}

fn check_unsigned(tag: &'static str, literal: &str, magnitude: U256, bits: usize) -> Result<()> {
    if magnitude.bits() > bits {
        return Err(ConvertError::Overflow {
            tag,
            literal: literal.to_string(),
        });
    }
    Ok(())
}

fn check_signed(
    tag: &'static str,
    literal: &str,
    negative: bool,
    magnitude: U256,
    bits: usize,
) -> Result<()> {
    let limit = U256::one() << (bits - 1);
    let fits = if negative {
        magnitude <= limit
    } else {
        magnitude < limit
    };

    if !fits {
        return Err(ConvertError::Overflow {
            tag,
            literal: literal.to_string(),
        });
    }
    Ok(())
}

/// `word[i] = (value >> 64 * i) & mask64`, returned most significant first.
fn split_words<const N: usize>(value: U256) -> [u64; N] {
    let mut words = [0u64; N];
    for (i, word) in words.iter_mut().rev().enumerate() {
        *word = (value >> (WORD_BITS * i)).low_u64();
    }
    words
}

fn merge_words(words: &[u64]) -> U256 {
    words
        .iter()
        .fold(U256::zero(), |acc, word| (acc << WORD_BITS) | U256::from(*word))
}

/// Two's-complement negation across all words.
fn negate_words<const N: usize>(words: [u64; N]) -> [u64; N] {
    let mut out = words.map(|w| !w);
    for word in out.iter_mut().rev() {
        let (sum, carry) = word.overflowing_add(1);
        *word = sum;
        if !carry {
            break;
        }
    }
    out
}

fn signed_decimal<const N: usize>(words: [u64; N]) -> String {
    if (words[0] as i64) < 0 {
        format!("-{}", merge_words(&negate_words(words)))
    } else {
        merge_words(&words).to_string()
    }
}

impl From<U128Parts> for xdr::UInt128Parts {
    fn from(parts: U128Parts) -> Self {
        Self {
            hi: parts.hi,
            lo: parts.lo,
        }
    }
}

impl From<&xdr::UInt128Parts> for U128Parts {
    fn from(parts: &xdr::UInt128Parts) -> Self {
        Self {
            hi: parts.hi,
            lo: parts.lo,
        }
    }
}

impl From<I128Parts> for xdr::Int128Parts {
    fn from(parts: I128Parts) -> Self {
        Self {
            hi: parts.hi,
            lo: parts.lo,
        }
    }
}

impl From<&xdr::Int128Parts> for I128Parts {
    fn from(parts: &xdr::Int128Parts) -> Self {
        Self {
            hi: parts.hi,
            lo: parts.lo,
        }
    }
}

impl From<U256Parts> for xdr::UInt256Parts {
    fn from(parts: U256Parts) -> Self {
        Self {
            hi_hi: parts.hi_hi,
            hi_lo: parts.hi_lo,
            lo_hi: parts.lo_hi,
            lo_lo: parts.lo_lo,
        }
    }
}

impl From<&xdr::UInt256Parts> for U256Parts {
    fn from(parts: &xdr::UInt256Parts) -> Self {
        Self {
            hi_hi: parts.hi_hi,
            hi_lo: parts.hi_lo,
            lo_hi: parts.lo_hi,
            lo_lo: parts.lo_lo,
        }
    }
}

impl From<I256Parts> for xdr::Int256Parts {
    fn from(parts: I256Parts) -> Self {
        Self {
            hi_hi: parts.hi_hi,
            hi_lo: parts.hi_lo,
            lo_hi: parts.lo_hi,
            lo_lo: parts.lo_lo,
        }
    }
}

impl From<&xdr::Int256Parts> for I256Parts {
    fn from(parts: &xdr::Int256Parts) -> Self {
        Self {
            hi_hi: parts.hi_hi,
            hi_lo: parts.hi_lo,
            lo_hi: parts.lo_hi,
            lo_lo: parts.lo_lo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const U128_MAX: &str = "340282366920938463463374607431768211455";
    const I128_MIN: &str = "-170141183460469231731687303715884105728";
    const I128_MAX: &str = "170141183460469231731687303715884105727";
    const U256_MAX: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";
    const I256_MIN: &str =
        "-57896044618658097711785492504343953926634992332820282019728792003956564819968";

    #[test]
    fn test_u128_max() {
        let parts = decimal_to_u128(U128_MAX).unwrap();
        assert_eq!(parts.hi, 0xFFFF_FFFF_FFFF_FFFF);
        assert_eq!(parts.lo, 0xFFFF_FFFF_FFFF_FFFF);
        assert_eq!(parts.to_decimal(), U128_MAX);
    }

    #[test]
    fn test_i128_minus_one() {
        let parts = decimal_to_i128("-1").unwrap();
        assert_eq!(parts.hi, -1);
        assert_eq!(parts.lo, 0xFFFF_FFFF_FFFF_FFFF);
        assert_eq!(parts.to_decimal(), "-1");
    }

    #[test]
    fn test_i128_bounds() {
        let min = decimal_to_i128(I128_MIN).unwrap();
        assert_eq!(min, I128Parts { hi: i64::MIN, lo: 0 });
        assert_eq!(min.to_decimal(), I128_MIN);

        let max = decimal_to_i128(I128_MAX).unwrap();
        assert_eq!(max, I128Parts { hi: i64::MAX, lo: u64::MAX });

        assert!(matches!(
            decimal_to_i128("170141183460469231731687303715884105728"),
            Err(ConvertError::Overflow { tag: "i128", .. })
        ));
        assert!(matches!(
            decimal_to_i128("-170141183460469231731687303715884105729"),
            Err(ConvertError::Overflow { tag: "i128", .. })
        ));
    }

    #[test]
    fn test_u128_overflow() {
        let result = decimal_to_u128("340282366920938463463374607431768211456");
        assert!(matches!(result, Err(ConvertError::Overflow { tag: "u128", .. })));
    }

    #[test]
    fn test_u256_max_and_overflow() {
        let parts = decimal_to_u256(U256_MAX).unwrap();
        assert_eq!(
            parts,
            U256Parts {
                hi_hi: u64::MAX,
                hi_lo: u64::MAX,
                lo_hi: u64::MAX,
                lo_lo: u64::MAX,
            }
        );
        assert_eq!(parts.to_decimal(), U256_MAX);

        let too_wide = format!("{U256_MAX}0");
        assert!(matches!(
            decimal_to_u256(&too_wide),
            Err(ConvertError::Overflow { tag: "u256", .. })
        ));
    }

    #[test]
    fn test_u256_words_are_most_significant_first() {
        // 2^192 + 2^128 * 2 + 2^64 * 3 + 4
        let value = "6277101735386680764516354157049543343084444891548699590660";
        let parts = decimal_to_u256(value).unwrap();
        assert_eq!(
            parts,
            U256Parts {
                hi_hi: 1,
                hi_lo: 2,
                lo_hi: 3,
                lo_lo: 4,
            }
        );
    }

    #[test]
    fn test_i256_bounds() {
        let min = decimal_to_i256(I256_MIN).unwrap();
        assert_eq!(
            min,
            I256Parts {
                hi_hi: i64::MIN,
                hi_lo: 0,
                lo_hi: 0,
                lo_lo: 0,
            }
        );
        assert_eq!(min.to_decimal(), I256_MIN);

        let minus_two = decimal_to_i256("-2").unwrap();
        assert_eq!(
            minus_two,
            I256Parts {
                hi_hi: -1,
                hi_lo: u64::MAX,
                lo_hi: u64::MAX,
                lo_lo: u64::MAX - 1,
            }
        );

        assert!(matches!(
            decimal_to_i256(&U256_MAX[..]),
            Err(ConvertError::Overflow { tag: "i256", .. })
        ));
    }

    #[test]
    fn test_malformed_literals() {
        for literal in ["", "-", "12a", "0x10", " 1", "+1", "1.5"] {
            assert!(
                matches!(decimal_to_i128(literal), Err(ConvertError::MalformedNumber { .. })),
                "{literal:?} should be malformed"
            );
        }
        assert!(matches!(
            decimal_to_u128("-1"),
            Err(ConvertError::MalformedNumber { .. })
        ));
        assert!(matches!(
            decimal_to_u256("-5"),
            Err(ConvertError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_negative_zero_normalizes() {
        let parts = decimal_to_i128("-0").unwrap();
        assert_eq!(parts, I128Parts { hi: 0, lo: 0 });
        assert_eq!(parts.to_decimal(), "0");
    }

    #[test]
    fn test_leading_zeros_normalize() {
        let parts = decimal_to_u128("000042").unwrap();
        assert_eq!(parts, U128Parts { hi: 0, lo: 42 });
        assert_eq!(parts.to_decimal(), "42");
    }

    #[test]
    fn test_xdr_conversion_preserves_words() {
        let parts = decimal_to_i128("-18446744073709551617").unwrap();
        let wire: xdr::Int128Parts = parts.into();
        assert_eq!(I128Parts::from(&wire), parts);
        assert_eq!(parts.to_decimal(), "-18446744073709551617");
    }

    proptest! {
        #[test]
        fn prop_u128_round_trip(n in any::<u128>()) {
            let parts = decimal_to_u128(&n.to_string()).unwrap();
            prop_assert_eq!(((parts.hi as u128) << 64) | parts.lo as u128, n);
            prop_assert_eq!(parts.to_decimal(), n.to_string());
        }

        #[test]
        fn prop_i128_round_trip(n in any::<i128>()) {
            let parts = decimal_to_i128(&n.to_string()).unwrap();
            prop_assert_eq!(parts.hi, (n >> 64) as i64);
            prop_assert_eq!(parts.lo, n as u64);
            prop_assert_eq!(parts.to_decimal(), n.to_string());
        }

        #[test]
        fn prop_u256_round_trip(words in any::<[u64; 4]>()) {
            let parts = U256Parts { hi_hi: words[0], hi_lo: words[1], lo_hi: words[2], lo_lo: words[3] };
            let reparsed = decimal_to_u256(&parts.to_decimal()).unwrap();
            prop_assert_eq!(reparsed, parts);
        }

        #[test]
        fn prop_i256_round_trip(hi_hi in any::<i64>(), rest in any::<[u64; 3]>()) {
            let parts = I256Parts { hi_hi, hi_lo: rest[0], lo_hi: rest[1], lo_lo: rest[2] };
            let decimal = parts.to_decimal();
            prop_assert_eq!(decimal.starts_with('-'), hi_hi < 0);
            let reparsed = decimal_to_i256(&decimal).unwrap();
            prop_assert_eq!(reparsed, parts);
        }
    }
}
