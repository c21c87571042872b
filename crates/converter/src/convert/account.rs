// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use stellar_xdr::curr as xdr;

use super::{Converter, convert_all, hex_bytes, text};
use crate::address::AddressCodec;
use crate::chain::{ExtensionPoint, resolve};
use crate::error::Result;
use crate::types::{
    AccountEntry, AccountEntryExtensionV1, AccountEntryExtensionV2, AccountEntryExtensionV3,
    DecoratedSignature, Liabilities, MuxedAccount, Signer, SignerKey,
};

impl<A: AddressCodec> Converter<A> {
    pub fn account_entry(&self, entry: &xdr::AccountEntry) -> Result<AccountEntry> {
        Ok(AccountEntry {
            account_id: self.account_id(&entry.account_id)?,
            balance: entry.balance,
            seq_num: entry.seq_num.0,
            num_sub_entries: entry.num_sub_entries,
            inflation_dest: entry
                .inflation_dest
                .as_ref()
                .map(|dest| self.account_id(dest))
                .transpose()?,
            flags: entry.flags,
            home_domain: text(entry.home_domain.0.as_slice()),
            thresholds: hex_bytes(&entry.thresholds.0),
            signers: convert_all(&entry.signers, |signer| self.signer(signer))?,
            ext: resolve(&entry.ext, |v1| self.account_entry_v1(v1))?,
        })
    }

    fn account_entry_v1(&self, v1: &xdr::AccountEntryExtensionV1) -> Result<AccountEntryExtensionV1> {
        Ok(AccountEntryExtensionV1 {
            liabilities: liabilities(&v1.liabilities),
            ext: resolve(&v1.ext, |v2| self.account_entry_v2(v2))?,
        })
    }

    fn account_entry_v2(&self, v2: &xdr::AccountEntryExtensionV2) -> Result<AccountEntryExtensionV2> {
        let signer_sponsoring_ids = convert_all(&v2.signer_sponsoring_i_ds, |sponsor| {
            sponsor.0.as_ref().map(|id| self.account_id(id)).transpose()
        })?;

        Ok(AccountEntryExtensionV2 {
            num_sponsored: v2.num_sponsored,
            num_sponsoring: v2.num_sponsoring,
            signer_sponsoring_ids,
            ext: resolve(&v2.ext, |v3| Ok(account_entry_v3(v3)))?,
        })
    }

    pub fn signer(&self, signer: &xdr::Signer) -> Result<Signer> {
        Ok(Signer {
            key: self.signer_key(&signer.key)?,
            weight: signer.weight,
        })
    }

    pub fn signer_key(&self, key: &xdr::SignerKey) -> Result<SignerKey> {
        let (kind, address) = match key {
            xdr::SignerKey::Ed25519(key) => ("ed25519", self.codec.encode_account_id(&key.0)?),
            xdr::SignerKey::PreAuthTx(hash) => ("pre_auth_tx", self.codec.encode_pre_auth_tx(&hash.0)?),
            xdr::SignerKey::HashX(hash) => ("hash_x", self.codec.encode_hash_x(&hash.0)?),
            xdr::SignerKey::Ed25519SignedPayload(signed) => (
                "ed25519_signed_payload",
                self.codec
                    .encode_signed_payload(&signed.ed25519.0, signed.payload.as_slice())?,
            ),
        };
        Ok(SignerKey { kind, address })
    }

    pub fn muxed_account(&self, account: &xdr::MuxedAccount) -> Result<MuxedAccount> {
        match account {
            xdr::MuxedAccount::Ed25519(key) => Ok(MuxedAccount {
                kind: "ed25519",
                address: self.ed25519(key)?,
                ..Default::default()
            }),
            xdr::MuxedAccount::MuxedEd25519(muxed) => Ok(MuxedAccount {
                kind: "muxed_ed25519",
                address: self
                    .codec
                    .encode_muxed_account(&muxed.ed25519.0, muxed.id)?,
                id: Some(muxed.id),
                account_id: Some(self.ed25519(&muxed.ed25519)?),
            }),
        }
    }
}

fn account_entry_v3(v3: &xdr::AccountEntryExtensionV3) -> AccountEntryExtensionV3 {
    AccountEntryExtensionV3 {
        ext: ExtensionPoint::of(&v3.ext),
        seq_ledger: v3.seq_ledger,
        seq_time: v3.seq_time.0,
    }
}

pub(crate) fn liabilities(liabilities: &xdr::Liabilities) -> Liabilities {
    Liabilities {
        buying: liabilities.buying,
        selling: liabilities.selling,
    }
}

pub(crate) fn decorated_signature(signature: &xdr::DecoratedSignature) -> DecoratedSignature {
    DecoratedSignature {
        hint: hex_bytes(&signature.hint.0),
        signature: hex_bytes(signature.signature.0.as_slice()),
    }
}
