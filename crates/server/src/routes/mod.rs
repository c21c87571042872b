// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod health;
pub mod registry;
pub mod root;
pub mod scval;
pub mod version;
pub mod xdr;

pub use registry::{API_VERSION, RegisterRoute, RouteRegistry};
