// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, extract::DefaultBodyLimit, middleware};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

use crate::{
    logging::http_logger_middleware,
    routes::{self, API_VERSION},
    state::AppState,
};

/// Assemble the service: versioned routes under `/v1`, the root listing,
/// request logging, permissive CORS and the configured body limit.
pub fn create_app(state: AppState) -> Router {
    let registry = state.route_registry.clone();
    let request_limit = state.config.express.request_limit;

    let v1 = Router::new()
        .merge(routes::health::routes(&registry))
        .merge(routes::version::routes(&registry))
        .merge(routes::xdr::routes(&registry))
        .merge(routes::scval::routes(&registry));

    Router::new()
        .merge(routes::root::routes(&registry))
        .nest(API_VERSION, v1)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(request_limit))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(http_logger_middleware))
        .with_state(state)
}
