// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::post};

use crate::{
    handlers::scval,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/scval/build",
            "post",
            post(scval::build_sc_val),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/scval/info",
            "post",
            post(scval::sc_val_info),
        )
}
