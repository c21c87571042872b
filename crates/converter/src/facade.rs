// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use stellar_xdr::curr as xdr;

use crate::address::AddressCodec;
use crate::builder;
use crate::convert::Converter;
use crate::error::Result;

impl<A: AddressCodec> Converter<A> {
    /// Build a contract value from a type tag and literal, decoding
    /// addresses with this converter's codec.
    pub fn build_sc_val(&self, tag: &str, literal: &str) -> Result<xdr::ScVal> {
        tracing::debug!(tag, "building contract value");
        builder::build_with(self.codec(), tag, literal)
    }

    /// Convert independent inputs, keeping one result per input.
    ///
    /// Unlike sequences inside a single record, a failing item does not
    /// abort its siblings.
    pub fn batch<'a, T: 'a, U>(
        &self,
        items: impl IntoIterator<Item = &'a T>,
        convert: impl Fn(&Self, &T) -> Result<U>,
    ) -> Vec<Result<U>> {
        let results: Vec<_> = items.into_iter().map(|item| convert(self, item)).collect();
        let failed = results.iter().filter(|result| result.is_err()).count();
        tracing::debug!(items = results.len(), failed, "converted batch");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::test_support::{account, converter};
    use crate::error::ConvertError;

    #[test]
    fn test_batch_keeps_failures_isolated() {
        let vals = [
            xdr::ScVal::U32(1),
            xdr::ScVal::Void,
            xdr::ScVal::Address(xdr::ScAddress::Account(account(1))),
        ];
        let results = converter().batch(&vals, |conv, val| conv.sc_val_info(val));

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().value, "1");
        assert!(matches!(results[1], Err(ConvertError::UnsupportedVariant { .. })));
        assert!(results[2].as_ref().unwrap().value.starts_with("G:"));
    }

    #[test]
    fn test_build_sc_val_uses_codec() {
        let err = converter()
            .build_sc_val("address", "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ")
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidAddress { .. }));

        let built = Converter::strkey()
            .build_sc_val("address", "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ")
            .unwrap();
        assert!(matches!(built, xdr::ScVal::Address(_)));
    }
}
