//! HTTP API Client
//!
//! Functions for communicating with the F1 Dashboard REST API. One function
//! per backend endpoint; every request and response is logged to the browser
//! console. There is no retry, caching, or de-duplication - any network
//! failure, timeout, or non-2xx status surfaces as a single `String` error
//! that callers show as-is.

use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use crate::types::{PredictRequest, PredictResponse, Race, RaceResults, RaceTelemetry, Standings};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Fixed per-request timeout
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("f1_dashboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Endpoint URLs ============

fn races_url(api_base: &str, season: u16) -> String {
    format!("{}/races/{}", api_base, season)
}

fn race_results_url(api_base: &str, season: u16, round: u32) -> String {
    format!("{}/race/{}/{}/results", api_base, season, round)
}

fn race_telemetry_url(api_base: &str, season: u16, round: u32, lap: Option<u32>) -> String {
    format!(
        "{}/race/{}/{}/telemetry?lap={}",
        api_base,
        season,
        round,
        lap.unwrap_or(1)
    )
}

fn standings_url(api_base: &str, season: u16, round: Option<u32>) -> String {
    match round {
        Some(round) => format!("{}/standings/{}?round={}", api_base, season, round),
        None => format!("{}/standings/{}", api_base, season),
    }
}

/// The health endpoint lives at the server root, outside the API prefix
fn health_url(api_base: &str) -> String {
    format!("{}/health", api_base.trim_end_matches("/api"))
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body shape used by the backend (FastAPI-style `detail`, with a
/// plain `error` field as fallback)
#[derive(Debug, Default, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ============ Transport ============

fn log_request(method: &str, url: &str) {
    web_sys::console::log_1(&format!("API request: {} {}", method, url).into());
}

fn log_response(status: u16, url: &str) {
    web_sys::console::log_1(&format!("API response: {} {}", status, url).into());
}

/// Send a request, racing it against the fixed timeout
async fn send(request: Request) -> Result<Response, String> {
    let url = request.url();
    let fut = request.send();
    futures::pin_mut!(fut);

    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(timeout);

    match futures::future::select(fut, timeout).await {
        futures::future::Either::Left((result, _)) => {
            let response = result.map_err(|e| format!("Network error: {}", e))?;
            log_response(response.status(), &url);
            Ok(response)
        }
        futures::future::Either::Right(_) => {
            Err(format!("Request timed out after {}s", REQUEST_TIMEOUT_MS / 1000))
        }
    }
}

/// Issue a GET and decode the JSON body
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    log_request("GET", url);

    let response = send(Request::get(url).build().map_err(|e| format!("Request build error: {}", e))?).await?;

    if !response.ok() {
        return Err(error_message(&response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Issue a POST with a JSON body and decode the JSON response
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    log_request("POST", url);

    let request = Request::post(url)
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?;
    let response = send(request).await?;

    if !response.ok() {
        return Err(error_message(&response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Extract an error message from a non-2xx response body
async fn error_message(response: &Response) -> String {
    let status = response.status();
    let body: ApiError = response.json().await.unwrap_or_default();
    body.detail
        .or(body.error)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

// ============ API Functions ============

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    get_json(&health_url(&get_api_base())).await
}

/// Fetch the race calendar for a season
pub async fn get_races(season: u16) -> Result<Vec<Race>, String> {
    get_json(&races_url(&get_api_base(), season)).await
}

/// Fetch the classification for one race
pub async fn get_race_results(season: u16, round: u32) -> Result<RaceResults, String> {
    get_json(&race_results_url(&get_api_base(), season, round)).await
}

/// Fetch per-driver telemetry for one race; `lap` defaults to 1
pub async fn get_race_telemetry(
    season: u16,
    round: u32,
    lap: Option<u32>,
) -> Result<RaceTelemetry, String> {
    get_json(&race_telemetry_url(&get_api_base(), season, round, lap)).await
}

/// Fetch championship standings, optionally as of a specific round
pub async fn get_standings(season: u16, round: Option<u32>) -> Result<Standings, String> {
    get_json(&standings_url(&get_api_base(), season, round)).await
}

/// Generate predictions for a qualifying or race session
pub async fn predict(request: &PredictRequest) -> Result<PredictResponse, String> {
    post_json(&format!("{}/predict", get_api_base()), request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000/api";

    #[test]
    fn test_races_url() {
        assert_eq!(races_url(BASE, 2024), "http://localhost:8000/api/races/2024");
    }

    #[test]
    fn test_race_results_url() {
        assert_eq!(
            race_results_url(BASE, 2023, 10),
            "http://localhost:8000/api/race/2023/10/results"
        );
    }

    #[test]
    fn test_race_telemetry_url_defaults_to_lap_1() {
        assert_eq!(
            race_telemetry_url(BASE, 2024, 5, None),
            "http://localhost:8000/api/race/2024/5/telemetry?lap=1"
        );
    }

    #[test]
    fn test_race_telemetry_url_with_explicit_lap() {
        assert_eq!(
            race_telemetry_url(BASE, 2024, 5, Some(32)),
            "http://localhost:8000/api/race/2024/5/telemetry?lap=32"
        );
    }

    #[test]
    fn test_standings_url_omits_round_when_absent() {
        assert_eq!(
            standings_url(BASE, 2024, None),
            "http://localhost:8000/api/standings/2024"
        );
    }

    #[test]
    fn test_standings_url_includes_round_when_present() {
        assert_eq!(
            standings_url(BASE, 2024, Some(3)),
            "http://localhost:8000/api/standings/2024?round=3"
        );
    }

    #[test]
    fn test_health_url_strips_api_prefix() {
        assert_eq!(health_url(BASE), "http://localhost:8000/health");
    }
}
