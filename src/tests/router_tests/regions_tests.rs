use crate::router::handle;
use crate::tests::utils::{get, post_json, read_json, test_state};
use serde_json::json;

#[test]
fn health_check_reports_ok() {
    let state = test_state();
    let resp = handle(get("/health"), &state).expect("health failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(read_json(resp), json!({ "status": "ok" }));
}

#[test]
fn region_table_is_listed_in_resolution_order() {
    let state = test_state();
    let resp = handle(get("/api/regions"), &state).expect("regions failed");
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    let regions = body.as_array().expect("expected an array");
    assert_eq!(regions[0]["name"], "Dublin");
    assert_eq!(regions[0]["country"], "Ireland");
    assert!(regions[0]["bounds"]["north"].is_number());
    assert!(regions.iter().any(|r| r["name"] == "Greater London"));
}

#[test]
fn resolve_dublin_point() {
    let state = test_state();
    let req = post_json("/api/regions/resolve", &json!({ "coordinates": [-6.30, 53.35] }));
    let resp = handle(req, &state).expect("resolve failed");

    assert_eq!(read_json(resp), json!({ "region": "Dublin" }));
}

#[test]
fn resolve_without_usable_coordinates_is_unknown() {
    let state = test_state();

    for body in [
        json!({ "coordinates": [] }),
        json!({ "coordinates": [-6.30] }),
        json!({ "coordinates": null }),
        json!({ "coordinates": "53.35,-6.30" }),
        json!({}),
    ] {
        let resp = handle(post_json("/api/regions/resolve", &body), &state).unwrap();
        assert_eq!(read_json(resp)["region"], "Unknown", "body: {body}");
    }
}

#[test]
fn resolve_point_outside_every_region_is_unknown() {
    let state = test_state();
    let req = post_json("/api/regions/resolve", &json!({ "coordinates": [2.35, 48.85] }));
    let resp = handle(req, &state).unwrap();

    assert_eq!(read_json(resp)["region"], "Unknown");
}

#[test]
fn resolve_reads_only_the_leading_pair() {
    let state = test_state();
    let req = post_json("/api/regions/resolve", &json!({ "coordinates": [-6.30, 53.35, null] }));
    let resp = handle(req, &state).unwrap();

    assert_eq!(read_json(resp)["region"], "Dublin");
}
