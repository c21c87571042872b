// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use config::AppConfig;
use converter::Converter;

use crate::routes::RouteRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub converter: Converter,
    pub route_registry: RouteRegistry,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            converter: Converter::strkey(),
            route_registry: RouteRegistry::new(),
        }
    }
}
