// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root endpoint: service metadata and the list of available routes.

use crate::routes::{RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(registry, "", "/", "get", get(root_handler))
}

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "kinds": converter::XdrKind::ALL.iter().map(|kind| kind.as_str()).collect::<Vec<_>>(),
        "routes": state.route_registry.routes(),
    }))
}
