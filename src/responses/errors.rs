use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into a JSON error response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    json_error_response(status, &err.to_string())
}

/// Build a `{"error": ..., "status": ...}` body
pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = json!({ "error": message, "status": status }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
