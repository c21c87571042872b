// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod error;
pub mod health;
pub mod scval;
pub mod version;
pub mod xdr;

pub use error::{ApiError, ErrorResponse};
