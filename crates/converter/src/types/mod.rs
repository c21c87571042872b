// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON-ready output records.
//!
//! Every record is plain data built fresh per conversion. Unions are
//! rendered as a `type` (or `code`) discriminant plus one optional slot per
//! payload-bearing arm; unused slots are omitted from the JSON.

mod account;
mod asset;
mod bytes;
mod contract;
mod ledger;
mod meta;
mod result;
mod transaction;

pub use account::*;
pub use asset::*;
pub use bytes::HexBytes;
pub use contract::*;
pub use ledger::*;
pub use meta::*;
pub use result::*;
pub use transaction::*;

pub use crate::chain::{Extension, ExtensionPoint};
