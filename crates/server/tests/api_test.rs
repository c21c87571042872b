// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests of the HTTP surface through the full router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use config::AppConfig;
use converter::xdr::{self, Limits, ReadXdr, WriteXdr};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{app::create_app, state::AppState};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppState::new(AppConfig::default()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app(), request).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app(), request).await
}

fn ttl_entry_base64() -> String {
    xdr::LedgerEntry {
        last_modified_ledger_seq: 5,
        data: xdr::LedgerEntryData::Ttl(xdr::TtlEntry {
            key_hash: xdr::Hash([0xAB; 32]),
            live_until_ledger_seq: 50,
        }),
        ext: xdr::LedgerEntryExt::V0,
    }
    .to_xdr_base64(Limits::none())
    .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn version_matches_package() {
    let (status, body) = get("/v1/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn root_lists_registered_routes_and_kinds() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);

    let routes = body["routes"].as_array().unwrap();
    for (path, method) in [
        ("/", "get"),
        ("/v1/health", "get"),
        ("/v1/version", "get"),
        ("/v1/xdr/:kind", "post"),
        ("/v1/scval/build", "post"),
        ("/v1/scval/info", "post"),
    ] {
        assert!(
            routes.contains(&json!({ "path": path, "method": method })),
            "missing {method} {path}"
        );
    }
    assert_eq!(body["kinds"][4], "ledger-entry");
    assert_eq!(body["listen"], "127.0.0.1:8080");
}

#[tokio::test]
async fn converts_ledger_entry() {
    let (status, body) = post("/v1/xdr/ledger-entry", json!({ "xdr": ttl_entry_base64() })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lastModifiedLedgerSeq"], 5);
    assert_eq!(body["data"]["type"], "ttl");
    assert_eq!(body["data"]["ttl"]["keyHash"], "ab".repeat(32));
    assert_eq!(body["data"]["ttl"]["liveUntilLedgerSeq"], 50);
}

#[tokio::test]
async fn unknown_kind_is_not_found() {
    let (status, body) = post("/v1/xdr/block", json!({ "xdr": ttl_entry_base64() })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["error"], "Unknown XDR kind.");
    assert_eq!(body["cause"], "Unknown XDR kind 'block'");
}

#[tokio::test]
async fn undecodable_xdr_is_a_bad_request() {
    let (status, body) = post("/v1/xdr/envelope", json!({ "xdr": "not base64!" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["error"], "Failed to convert XDR.");
    assert!(body["cause"].as_str().unwrap().starts_with("XDR error"));

    // Valid XDR of another kind does not decode as an envelope either.
    let (status, _) = post("/v1/xdr/envelope", json!({ "xdr": ttl_entry_base64() })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn builds_wide_integer() {
    let (status, body) = post(
        "/v1/scval/build",
        json!({ "type": "u128", "value": "18446744073709551617" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["value"], json!({ "type": "u128", "u128": { "hi": 1, "lo": 1 } }));
    assert_eq!(
        body["info"],
        json!({ "type": "u128", "value": "18446744073709551617" })
    );

    let built = xdr::ScVal::from_xdr_base64(body["xdr"].as_str().unwrap(), Limits::none()).unwrap();
    assert_eq!(built, xdr::ScVal::U128(xdr::UInt128Parts { hi: 1, lo: 1 }));
}

#[tokio::test]
async fn build_failures_name_the_cause() {
    let (status, body) = post("/v1/scval/build", json!({ "type": "float", "value": "1.5" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to build contract value.");
    assert_eq!(body["cause"], "Unknown type tag 'float'");

    let (status, body) = post("/v1/scval/build", json!({ "type": "u32", "value": "4294967296" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["cause"], "Literal '4294967296' does not fit in u32");
}

#[tokio::test]
async fn info_round_trips_through_build() {
    let (_, built) = post(
        "/v1/scval/build",
        json!({ "type": "vec", "value": "u32@7,bool@true,string@hello" }),
    )
    .await;

    let (status, info) = post("/v1/scval/info", json!({ "xdr": built["xdr"] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info, built["info"]);
    assert_eq!(info["type"], "vec");
    assert_eq!(info["value"], "u32@7,bool@true,string@hello");
}

#[tokio::test]
async fn info_rejects_values_without_a_literal() {
    let void = xdr::ScVal::Void.to_xdr_base64(Limits::none()).unwrap();
    let (status, body) = post("/v1/scval/info", json!({ "xdr": void })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["cause"], "Unsupported ScVal variant 'Void'");
}

#[tokio::test]
async fn unknown_body_fields_are_rejected() {
    let (status, _) = post(
        "/v1/scval/info",
        json!({ "xdr": "AAAAAQAAAAE=", "format": "json" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oversized_bodies_are_refused() {
    let mut config = AppConfig::default();
    config.express.request_limit = 16;
    let app = create_app(AppState::new(config));

    let body = json!({ "xdr": ttl_entry_base64() }).to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/v1/xdr/ledger-entry")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
