//! Type Definitions
//!
//! Shared shape declarations for the entities served by the F1 Dashboard
//! API. These are flat, externally-defined records consumed as-is from the
//! backend; the field names are the wire contract. No validation happens
//! client-side - everything here is transient view state, created on fetch
//! and discarded on navigation.

use std::collections::HashMap;

/// A driver entry as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Driver {
    pub driver_id: String,
    pub first_name: String,
    pub last_name: String,
    pub code: String,
    #[serde(default)]
    pub permanent_number: Option<u32>,
    #[serde(default)]
    pub team: Option<String>,
}

impl Driver {
    /// Display name, e.g. "Max Verstappen"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A constructor (team)
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Constructor {
    pub constructor_id: String,
    pub name: String,
    pub nationality: String,
}

/// A race on the calendar. Identity is (season, round).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Race {
    pub season: u16,
    pub round: u32,
    pub race_name: String,
    pub circuit_name: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A single classified finisher in a race
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RaceResult {
    pub position: u32,
    pub driver: Driver,
    pub constructor: Constructor,
    pub points: f64,
    #[serde(default)]
    pub time: Option<String>,
    pub status: String,
    #[serde(default)]
    pub fastest_lap: Option<String>,
    #[serde(default)]
    pub fastest_lap_rank: Option<u32>,
}

/// Full classification for one race
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RaceResults {
    pub race: Race,
    pub results: Vec<RaceResult>,
}

/// One sensor sample along a lap, keyed by distance from the start line
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TelemetryPoint {
    pub distance: f64,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub throttle: Option<f64>,
    // Brake pressure arrives as a float (0.0/1.0), not a boolean
    #[serde(default)]
    pub brake: Option<f64>,
    #[serde(default)]
    pub gear: Option<i32>,
    #[serde(default)]
    pub rpm: Option<f64>,
    #[serde(default)]
    pub drs: Option<bool>,
}

/// One driver's ordered samples for a single lap
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DriverTelemetry {
    pub driver: Driver,
    pub lap_number: u32,
    #[serde(default)]
    pub lap_time: Option<String>,
    pub telemetry: Vec<TelemetryPoint>,
}

impl DriverTelemetry {
    /// Extract (distance, speed) pairs for charting.
    ///
    /// Samples without a speed reading chart as 0 so the trace stays
    /// continuous over the full lap distance.
    pub fn speed_series(&self) -> Vec<(f64, f64)> {
        self.telemetry
            .iter()
            .map(|p| (p.distance.round(), p.speed.unwrap_or(0.0)))
            .collect()
    }
}

/// Telemetry for all covered drivers in one race
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RaceTelemetry {
    pub race: Race,
    pub drivers_telemetry: Vec<DriverTelemetry>,
}

/// A driver's championship position as of a round
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DriverStanding {
    pub position: u32,
    pub driver: Driver,
    pub constructor: Constructor,
    pub points: f64,
    pub wins: u32,
}

/// A constructor's championship position as of a round
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ConstructorStanding {
    pub position: u32,
    pub constructor: Constructor,
    pub points: f64,
    pub wins: u32,
}

/// Ranked cumulative points tables for a season
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Standings {
    pub season: u16,
    pub round: u32,
    pub driver_standings: Vec<DriverStanding>,
    pub constructor_standings: Vec<ConstructorStanding>,
}

/// Form-submitted prediction query
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictRequest {
    pub season: u16,
    pub round: u32,
    pub session_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_temperature: Option<f64>,
}

/// One driver's forecast finishing position
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DriverPrediction {
    pub driver: Driver,
    pub predicted_position: u32,
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Model output for a prediction request
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PredictResponse {
    pub session_type: String,
    pub race_name: String,
    pub circuit_name: String,
    pub predictions: Vec<DriverPrediction>,
    #[serde(default)]
    pub model_info: HashMap<String, serde_json::Value>,
    pub generated_at: String,
}

impl PredictResponse {
    /// Whether predictions arrive sorted by predicted_position, 1..n with no
    /// gaps. The backend contract promises this ordering; the client does
    /// not enforce or re-sort, but tests exercise the check.
    pub fn predictions_in_position_order(&self) -> bool {
        self.predictions
            .iter()
            .enumerate()
            .all(|(i, p)| p.predicted_position == i as u32 + 1)
    }

    /// Model metadata field as a display string, if present
    pub fn model_field(&self, key: &str) -> Option<String> {
        self.model_info
            .get(key)
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
    }

    /// Comma-separated feature names from model metadata, if present
    pub fn feature_list(&self) -> Option<String> {
        let features = self.model_info.get("features")?.as_array()?;
        Some(
            features
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// Format a 0..1 confidence as a percentage, e.g. "87.5%"
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Format a points tally, dropping the fraction for whole numbers
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0}", points)
    } else {
        format!("{:.1}", points)
    }
}

/// Format a race date for display ("Mar 02, 2024"). The backend serializes
/// an ISO datetime ("2024-03-02T00:00:00"); a bare date is accepted too.
/// Unparseable dates pass through unchanged.
pub fn format_race_date(date: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|d| d.date())
        .or_else(|_| chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(code: &str) -> Driver {
        Driver {
            driver_id: code.to_lowercase(),
            first_name: "Max".to_string(),
            last_name: "Verstappen".to_string(),
            code: code.to_string(),
            permanent_number: Some(1),
            team: Some("Red Bull Racing".to_string()),
        }
    }

    fn prediction(position: u32) -> DriverPrediction {
        DriverPrediction {
            driver: driver("VER"),
            predicted_position: position,
            confidence: 0.8,
            reasoning: None,
        }
    }

    #[test]
    fn test_driver_full_name() {
        assert_eq!(driver("VER").full_name(), "Max Verstappen");
    }

    #[test]
    fn test_speed_series_defaults_missing_speed_to_zero() {
        let telemetry = DriverTelemetry {
            driver: driver("VER"),
            lap_number: 1,
            lap_time: None,
            telemetry: vec![
                TelemetryPoint {
                    distance: 10.4,
                    speed: Some(280.0),
                    throttle: None,
                    brake: None,
                    gear: None,
                    rpm: None,
                    drs: None,
                },
                TelemetryPoint {
                    distance: 20.6,
                    speed: None,
                    throttle: None,
                    brake: None,
                    gear: None,
                    rpm: None,
                    drs: None,
                },
            ],
        };

        assert_eq!(telemetry.speed_series(), vec![(10.0, 280.0), (21.0, 0.0)]);
    }

    #[test]
    fn test_predictions_in_position_order() {
        let mut response = PredictResponse {
            session_type: "qualifying".to_string(),
            race_name: "Bahrain Grand Prix".to_string(),
            circuit_name: "Bahrain International Circuit".to_string(),
            predictions: vec![prediction(1), prediction(2), prediction(3)],
            model_info: HashMap::new(),
            generated_at: "2024-03-01T12:00:00Z".to_string(),
        };
        assert!(response.predictions_in_position_order());

        // Out of order
        response.predictions = vec![prediction(2), prediction(1)];
        assert!(!response.predictions_in_position_order());

        // Gap in positions
        response.predictions = vec![prediction(1), prediction(3)];
        assert!(!response.predictions_in_position_order());
    }

    #[test]
    fn test_predict_request_omits_none_optionals() {
        let request = PredictRequest {
            season: 2024,
            round: 1,
            session_type: "qualifying".to_string(),
            weather_condition: None,
            track_temperature: None,
            air_temperature: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("weather_condition"));
        assert!(!json.contains("track_temperature"));
        assert!(json.contains("\"session_type\":\"qualifying\""));
    }

    #[test]
    fn test_telemetry_point_tolerates_missing_optionals() {
        let point: TelemetryPoint = serde_json::from_str(r#"{"distance": 120.5}"#).unwrap();
        assert_eq!(point.distance, 120.5);
        assert_eq!(point.speed, None);
        assert_eq!(point.brake, None);
    }

    #[test]
    fn test_telemetry_point_parses_float_brake() {
        // Brake samples come over the wire as floats
        let point: TelemetryPoint = serde_json::from_str(
            r#"{"distance": 120.5, "speed": 280.0, "brake": 1.0, "drs": false}"#,
        )
        .unwrap();
        assert_eq!(point.brake, Some(1.0));
        assert_eq!(point.drs, Some(false));
    }

    #[test]
    fn test_race_tolerates_missing_time_and_url() {
        let race: Race = serde_json::from_str(
            r#"{"season": 2024, "round": 1, "race_name": "Bahrain Grand Prix",
                "circuit_name": "Bahrain International Circuit", "date": "2024-03-02"}"#,
        )
        .unwrap();
        assert_eq!(race.season, 2024);
        assert_eq!(race.time, None);
        assert_eq!(race.url, None);
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.875), "87.5%");
        assert_eq!(format_confidence(1.0), "100.0%");
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(25.0), "25");
        assert_eq!(format_points(12.5), "12.5");
        assert_eq!(format_points(0.0), "0");
    }

    #[test]
    fn test_format_race_date() {
        // Dates are serialized as ISO datetimes
        assert_eq!(format_race_date("2024-03-02T00:00:00"), "Mar 02, 2024");
        assert_eq!(format_race_date("2024-03-02T14:30:00.500"), "Mar 02, 2024");
        assert_eq!(format_race_date("2024-03-02"), "Mar 02, 2024");
        assert_eq!(format_race_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_feature_list() {
        let mut info = HashMap::new();
        info.insert(
            "features".to_string(),
            serde_json::json!(["grid_position", "recent_form", "track_history"]),
        );

        let response = PredictResponse {
            session_type: "qualifying".to_string(),
            race_name: "Bahrain Grand Prix".to_string(),
            circuit_name: "Bahrain International Circuit".to_string(),
            predictions: Vec::new(),
            model_info: info,
            generated_at: "2024-03-01T12:00:00Z".to_string(),
        };

        assert_eq!(
            response.feature_list().as_deref(),
            Some("grid_position, recent_form, track_history")
        );
    }

    #[test]
    fn test_model_field_renders_strings_and_values() {
        let mut info = HashMap::new();
        info.insert(
            "model_type".to_string(),
            serde_json::Value::String("Random Forest".to_string()),
        );
        info.insert("n_estimators".to_string(), serde_json::json!(100));

        let response = PredictResponse {
            session_type: "race".to_string(),
            race_name: "Monaco Grand Prix".to_string(),
            circuit_name: "Circuit de Monaco".to_string(),
            predictions: Vec::new(),
            model_info: info,
            generated_at: "2024-05-26T13:00:00Z".to_string(),
        };

        assert_eq!(response.model_field("model_type").as_deref(), Some("Random Forest"));
        assert_eq!(response.model_field("n_estimators").as_deref(), Some("100"));
        assert_eq!(response.model_field("missing"), None);
    }
}
