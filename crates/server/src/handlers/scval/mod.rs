// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract value construction and inspection.

mod build;
mod info;

pub use build::{BuildRequest, BuildResponse, build_sc_val};
pub use info::{InfoRequest, sc_val_info};
