// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use converter::types::{ScVal, ScValInfo};
use converter::xdr::{Limits, WriteXdr};
use converter::ConvertError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildRequest {
    /// Type tag, e.g. `u128` or `vec`.
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    /// The built value as base64 XDR.
    pub xdr: String,
    pub value: ScVal,
    pub info: ScValInfo,
}

/// Handler for POST /v1/scval/build
pub async fn build_sc_val(
    State(state): State<AppState>,
    Json(request): Json<BuildRequest>,
) -> Result<Json<BuildResponse>, ApiError> {
    let converter = &state.converter;
    let val = converter
        .build_sc_val(&request.kind, &request.value)
        .map_err(ApiError::BuildFailed)?;

    let xdr = val
        .to_xdr_base64(Limits::none())
        .map_err(|err| ApiError::BuildFailed(ConvertError::from(err)))?;
    let value = converter
        .sc_val(&val)
        .map_err(ApiError::ConversionFailed)?;
    let info = converter
        .sc_val_info(&val)
        .map_err(ApiError::ConversionFailed)?;

    Ok(Json(BuildResponse { xdr, value, info }))
}
