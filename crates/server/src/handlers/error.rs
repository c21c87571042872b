// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, http::StatusCode, response::IntoResponse};
use converter::ConvertError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub error: String,
    pub cause: String,
}

/// Errors surfaced by the conversion endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown XDR kind.")]
    UnknownKind(#[source] ConvertError),

    #[error("Failed to convert XDR.")]
    ConversionFailed(#[source] ConvertError),

    #[error("Failed to build contract value.")]
    BuildFailed(#[source] ConvertError),
}

impl ApiError {
    fn source_error(&self) -> &ConvertError {
        match self {
            ApiError::UnknownKind(err)
            | ApiError::ConversionFailed(err)
            | ApiError::BuildFailed(err) => err,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownKind(_) => StatusCode::NOT_FOUND,
            // Serializing a converted record is not the caller's fault.
            _ if matches!(self.source_error(), ConvertError::Json(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let cause = self.source_error().to_string();
        tracing::warn!(status = status.as_u16(), cause = %cause, "{}", self);

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            error: self.to_string(),
            cause,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let unknown = ApiError::UnknownKind(ConvertError::UnknownXdrKind("block".to_string()));
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let build = ApiError::BuildFailed(ConvertError::UnknownTypeTag {
            tag: "float".to_string(),
        });
        assert_eq!(build.status(), StatusCode::BAD_REQUEST);

        let json = serde_json::from_str::<u8>("x").unwrap_err();
        let internal = ApiError::ConversionFailed(ConvertError::Json(json));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
