// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use converter::types::ScValInfo;
use converter::xdr::{Limits, ReadXdr, ScVal};
use converter::ConvertError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfoRequest {
    /// Base64 XDR of a single contract value.
    pub xdr: String,
}

/// Handler for POST /v1/scval/info
///
/// Returns the `{type, value}` pair that rebuilds the value through
/// `/v1/scval/build`.
pub async fn sc_val_info(
    State(state): State<AppState>,
    Json(request): Json<InfoRequest>,
) -> Result<Json<ScValInfo>, ApiError> {
    let val = ScVal::from_xdr_base64(request.xdr.trim(), Limits::none())
        .map_err(|err| ApiError::ConversionFailed(ConvertError::from(err)))?;

    let info = state
        .converter
        .sc_val_info(&val)
        .map_err(ApiError::ConversionFailed)?;

    Ok(Json(info))
}
