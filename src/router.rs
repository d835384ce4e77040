use crate::analytics::{FilterSelection, MarketAggregator};
use crate::domain::{AnnotatedProperty, PropertyRecord};
use crate::errors::ServerError;
use crate::responses::{error_to_response, json_response, ResultResp};
use crate::spreadsheets::export_report_xlsx;
use astra::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use tracing::{info, warn};

/// Read-only state shared by every worker. Requests never write to it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub aggregator: MarketAggregator,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(aggregator: MarketAggregator, max_body_bytes: usize) -> Self {
        Self {
            aggregator,
            max_body_bytes,
        }
    }
}

/// Body of the annotate, analytics and export endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRequest {
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
    #[serde(default)]
    pub filters: FilterSelection,
}

#[derive(Debug, Deserialize)]
struct ResolveRequest {
    coordinates: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ResolveResponse<'a> {
    region: &'a str,
}

#[derive(Debug, Serialize)]
struct AnnotateResponse {
    count: usize,
    properties: Vec<AnnotatedProperty>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Entry point for the server loop: routes, then turns errors into JSON responses.
pub fn serve_request(req: Request, state: &AppState) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    match handle(req, state) {
        Ok(resp) => {
            info!(%method, %path, status = resp.status().as_u16(), "request handled");
            resp
        }
        Err(err) => {
            warn!(%method, %path, status = err.status(), error = %err, "request failed");
            error_to_response(err)
        }
    }
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let aggregator = &state.aggregator;

    match (method.as_str(), path.as_str()) {
        ("GET", "/health") => json_response(&HealthResponse { status: "ok" }),

        ("GET", "/api/regions") => json_response(aggregator.config().regions.regions()),

        ("POST", "/api/regions/resolve") => {
            let body: ResolveRequest = read_json(&mut req, state.max_body_bytes)?;
            let numbers = body.coordinates.as_ref().and_then(number_list);
            let region = aggregator.resolve_region(numbers.as_deref());
            json_response(&ResolveResponse { region })
        }

        ("POST", "/api/annotate") => {
            let body: AnalyticsRequest = read_json(&mut req, state.max_body_bytes)?;
            let properties = aggregator.prepare(&body.properties, &body.filters);
            json_response(&AnnotateResponse {
                count: properties.len(),
                properties,
            })
        }

        ("POST", "/api/analytics") => {
            let body: AnalyticsRequest = read_json(&mut req, state.max_body_bytes)?;
            let report = aggregator.report(&body.properties, &body.filters);
            info!(
                received = body.properties.len(),
                matched = report.overview.total_properties,
                "market report built"
            );
            json_response(&report)
        }

        ("POST", "/api/analytics/export") => {
            let body: AnalyticsRequest = read_json(&mut req, state.max_body_bytes)?;
            let report = aggregator.report(&body.properties, &body.filters);
            export_report_xlsx(&report, &format!("market_{}.xlsx", body.filters.region))
        }

        _ => Err(ServerError::NotFound),
    }
}

/// The leading `[lon, lat]` as numbers; anything else is treated as no coordinates.
fn number_list(value: &Value) -> Option<Vec<f64>> {
    value
        .as_array()
        .and_then(|items| items.iter().take(2).map(Value::as_f64).collect())
}

/// Reads at most `limit` bytes of body and parses them as JSON.
fn read_json<T: DeserializeOwned>(req: &mut Request, limit: usize) -> Result<T, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    if bytes.len() > limit {
        return Err(ServerError::PayloadTooLarge(limit));
    }
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ServerError::BadRequest("request body is empty".into()));
    }

    Ok(serde_json::from_slice(&bytes)?)
}
