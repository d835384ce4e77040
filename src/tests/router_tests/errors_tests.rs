use crate::errors::ServerError;
use crate::router::{handle, serve_request, AppState};
use crate::analytics::MarketAggregator;
use crate::tests::utils::{get, post_raw, read_json, test_state};

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    let err = handle(get("/api/nothing-here"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn wrong_method_is_not_found() {
    let state = test_state();
    let err = handle(get("/api/analytics"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn invalid_json_is_a_bad_request() {
    let state = test_state();
    let err = handle(post_raw("/api/analytics", "{ not json"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn empty_body_is_a_bad_request() {
    let state = test_state();
    let err = handle(post_raw("/api/annotate", "  \n"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn wrong_shape_is_a_bad_request() {
    let state = test_state();
    let err = handle(post_raw("/api/analytics", r#"{"properties": 5}"#), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn oversized_body_is_rejected() {
    let state = AppState::new(MarketAggregator::default(), 16);
    let body = r#"{"properties": [], "filters": {}}"#;
    let err = handle(post_raw("/api/analytics", body), &state).unwrap_err();
    assert!(matches!(err, ServerError::PayloadTooLarge(16)));
}

#[test]
fn serve_request_renders_errors_as_json() {
    let state = test_state();

    let resp = serve_request(get("/missing"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.headers()["Content-Type"], "application/json");
    let body = read_json(resp);
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");

    let resp = serve_request(post_raw("/api/analytics", "[1,"), &state);
    assert_eq!(resp.status(), 400);
    assert_eq!(read_json(resp)["status"], 400);
}

#[test]
fn largest_body_limit_still_reads_requests() {
    let state = AppState::new(MarketAggregator::default(), usize::MAX);
    let resp = handle(post_raw("/api/analytics", r#"{"properties": []}"#), &state).unwrap();
    assert_eq!(resp.status(), 200);
}
