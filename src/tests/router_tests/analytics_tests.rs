use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::{post_json, read_bytes, read_json, test_state};
use serde_json::{json, Value};

fn dublin_and_kent() -> Value {
    json!([
        {
            "numericPrice": 300000,
            "currency": "EUR",
            "location": { "coordinates": [-6.30, 53.35] },
            "source": "daft",
            "propertyType": "House",
            "bedsString": "3",
            "bathString": "2",
            "berRating": "B2",
            "groupObject": { "name": "Sherry FitzGerald" },
            "createdOn": "2024-03-18"
        },
        {
            "numericPrice": "£200,000",
            "currency": "GBP",
            "region": "Kent",
            "source": "rightmove",
            "propertyType": "Flat",
            "bedsString": "Studio",
            "createdOn": 1712000000000i64
        }
    ])
}

#[test]
fn analytics_end_to_end() {
    let state = test_state();
    let req = post_json("/api/analytics", &json!({ "properties": dublin_and_kent() }));
    let resp = handle(req, &state).expect("analytics failed");
    assert_eq!(resp.status(), 200);

    let report = read_json(resp);
    let overview = &report["overview"];
    assert_eq!(overview["totalProperties"], 2);
    assert_eq!(overview["regionCount"], 2);
    assert_eq!(overview["sourceCount"], 2);

    let rows = report["priceByRegion"].as_array().unwrap();
    assert_eq!(rows[0]["region"], "Dublin");
    assert_eq!(rows[0]["averagePrice"], 300000.0);
    assert_eq!(rows[1]["region"], "Kent");
    let kent = rows[1]["averagePrice"].as_f64().unwrap();
    assert!((kent - 230000.0).abs() < 1e-6);

    assert_eq!(report["filters"], json!({ "source": "All", "region": "All", "currency": "All" }));
    assert_eq!(report["priceRangeBuckets"].as_array().unwrap().len(), 5);
    assert_eq!(report["monthlyTrends"].as_array().unwrap().len(), 2);
}

#[test]
fn analytics_applies_filters() {
    let state = test_state();
    let body = json!({
        "properties": dublin_and_kent(),
        "filters": { "region": "Dublin" }
    });
    let report = read_json(handle(post_json("/api/analytics", &body), &state).unwrap());

    assert_eq!(report["overview"]["totalProperties"], 1);
    assert_eq!(report["filters"]["source"], "All");
    assert_eq!(report["filters"]["region"], "Dublin");
    assert_eq!(report["sourceDistribution"][0]["source"], "daft");
    assert_eq!(report["sourceDistribution"][0]["percentage"], 100.0);
}

#[test]
fn analytics_on_nothing_is_an_empty_report() {
    let state = test_state();
    let report = read_json(handle(post_json("/api/analytics", &json!({})), &state).unwrap());

    assert_eq!(report["overview"]["totalProperties"], 0);
    assert_eq!(report["overview"]["averagePrice"], Value::Null);
    assert_eq!(report["priceByRegion"], json!([]));
    assert_eq!(report["health"]["volatility"], Value::Null);
}

#[test]
fn annotate_returns_normalised_listings() {
    let state = test_state();
    let body = json!({ "properties": dublin_and_kent() });
    let resp = handle(post_json("/api/annotate", &body), &state).unwrap();
    let annotated = read_json(resp);

    assert_eq!(annotated["count"], 2);
    let first = &annotated["properties"][0];
    assert_eq!(first["calculatedRegion"], "Dublin");
    assert_eq!(first["propertyType"], "House");
    assert_eq!(first["bedrooms"], 3);
    assert_eq!(first["agent"], "Sherry FitzGerald");
    assert_eq!(first["createdMonth"], "2024-03");

    let second = &annotated["properties"][1];
    assert_eq!(second["calculatedRegion"], "Kent");
    assert_eq!(second["price"], 200000.0);
    assert_eq!(second["bedrooms"], 1);
    assert_eq!(second["agent"], Value::Null);
}

#[test]
fn export_returns_a_workbook() {
    let state = test_state();
    let body = json!({
        "properties": dublin_and_kent(),
        "filters": { "region": "Greater London" }
    });
    let resp = handle(post_json("/api/analytics/export", &body), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], XLSX_CONTENT_TYPE);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"market_Greater_London.xlsx\""
    );
    assert!(read_bytes(resp).starts_with(b"PK"));
}

#[test]
fn badly_typed_listing_keeps_the_rest_of_the_batch() {
    let state = test_state();
    let body = json!({
        "properties": [
            { "numericPrice": 300000, "region": "Kent" },
            { "source": 123, "location": "Dublin", "region": 7, "berRating": 2, "groupObject": "DNG" }
        ]
    });
    let report = read_json(handle(post_json("/api/analytics", &body), &state).unwrap());

    assert_eq!(report["overview"]["totalProperties"], 2);
    let regions: Vec<&str> = report["priceByRegion"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["region"].as_str())
        .collect();
    assert_eq!(regions, ["Kent", "Unknown"]);
}
