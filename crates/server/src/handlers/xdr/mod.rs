// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Base64 XDR to JSON conversion.

mod convert_xdr;

pub use convert_xdr::{XdrRequest, convert_xdr};
