use crate::analytics::MarketAggregator;
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::io::Read;

/// State with the built-in tables and a 64 KiB body limit.
pub fn test_state() -> AppState {
    AppState::new(MarketAggregator::default(), 64 * 1024)
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_raw(path: &str, body: impl Into<Vec<u8>>) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn post_json(path: &str, body: &Value) -> Request {
    post_raw(path, body.to_string())
}

pub fn read_bytes(resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn read_json(resp: Response) -> Value {
    serde_json::from_slice(&read_bytes(resp)).expect("response body is not JSON")
}
