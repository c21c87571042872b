// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use converter::XdrKind;
use serde::Deserialize;
use serde_json::Value;

/// Request body carrying one base64 XDR value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XdrRequest {
    pub xdr: String,
}

/// Handler for POST /v1/xdr/:kind
///
/// `kind` is one of the names in [`XdrKind::ALL`], e.g. `envelope` or
/// `ledger-entry`. The body is decoded as that kind only.
pub async fn convert_xdr(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(request): Json<XdrRequest>,
) -> Result<Json<Value>, ApiError> {
    let kind: XdrKind = kind.parse().map_err(ApiError::UnknownKind)?;

    let json = state
        .converter
        .base64_to_json(kind, request.xdr.trim())
        .map_err(ApiError::ConversionFailed)?;

    Ok(Json(json))
}
