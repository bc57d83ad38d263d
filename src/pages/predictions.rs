//! Predictions Page
//!
//! Form-driven prediction feature: the user configures a session and the
//! page POSTs a single request to the model-serving endpoint on explicit
//! submit.

use leptos::*;

use crate::api;
use crate::components::{Card, Column, Table};
use crate::state::global::GlobalState;
use crate::types::{format_confidence, DriverPrediction, PredictRequest, PredictResponse};

/// Predictions page component
#[component]
pub fn Predictions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (season, set_season) = create_signal(2024u16);
    let (round, set_round) = create_signal(1u32);
    let (session_type, set_session_type) = create_signal("qualifying".to_string());
    let (weather, set_weather) = create_signal("Dry".to_string());
    let (track_temp, set_track_temp) = create_signal(30.0f64);
    let (air_temp, set_air_temp) = create_signal(25.0f64);

    let (prediction, set_prediction) = create_signal(None::<PredictResponse>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = PredictRequest {
            season: season.get(),
            round: round.get(),
            session_type: session_type.get(),
            weather_condition: Some(weather.get()),
            track_temperature: Some(track_temp.get()),
            air_temperature: Some(air_temp.get()),
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::predict(&request).await {
                Ok(response) => {
                    set_prediction.set(Some(response));
                    state_clone.show_success("Prediction generated");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to generate prediction: {}", e).into());
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-white">"AI Predictions"</h1>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                // Prediction form
                <Card title="Prediction Settings" class="lg:col-span-1">
                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-sm font-medium mb-2">"Season"</label>
                            <input
                                type="number"
                                min="2020"
                                max="2024"
                                prop:value=move || season.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).parse() {
                                        set_season.set(v);
                                    }
                                }
                                class="w-full bg-gray-900 text-gray-200 px-3 py-2 rounded border
                                       border-red-900/40 focus:border-red-600 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium mb-2">"Round"</label>
                            <input
                                type="number"
                                min="1"
                                max="24"
                                prop:value=move || round.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).parse() {
                                        set_round.set(v);
                                    }
                                }
                                class="w-full bg-gray-900 text-gray-200 px-3 py-2 rounded border
                                       border-red-900/40 focus:border-red-600 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium mb-2">"Session Type"</label>
                            <select
                                on:change=move |ev| set_session_type.set(event_target_value(&ev))
                                prop:value=move || session_type.get()
                                class="w-full bg-gray-900 text-gray-200 px-3 py-2 rounded border
                                       border-red-900/40 focus:border-red-600 focus:outline-none"
                            >
                                <option value="qualifying">"Qualifying"</option>
                                <option value="race">"Race"</option>
                            </select>
                        </div>

                        <div>
                            <label class="block text-sm font-medium mb-2">"Weather"</label>
                            <select
                                on:change=move |ev| set_weather.set(event_target_value(&ev))
                                prop:value=move || weather.get()
                                class="w-full bg-gray-900 text-gray-200 px-3 py-2 rounded border
                                       border-red-900/40 focus:border-red-600 focus:outline-none"
                            >
                                <option value="Dry">"Dry"</option>
                                <option value="Wet">"Wet"</option>
                                <option value="Intermediate">"Intermediate"</option>
                            </select>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium mb-2">"Track Temp (°C)"</label>
                                <input
                                    type="number"
                                    prop:value=move || track_temp.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(v) = event_target_value(&ev).parse() {
                                            set_track_temp.set(v);
                                        }
                                    }
                                    class="w-full bg-gray-900 text-gray-200 px-3 py-2 rounded border
                                           border-red-900/40 focus:border-red-600 focus:outline-none"
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium mb-2">"Air Temp (°C)"</label>
                                <input
                                    type="number"
                                    prop:value=move || air_temp.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(v) = event_target_value(&ev).parse() {
                                            set_air_temp.set(v);
                                        }
                                    }
                                    class="w-full bg-gray-900 text-gray-200 px-3 py-2 rounded border
                                           border-red-900/40 focus:border-red-600 focus:outline-none"
                                />
                            </div>
                        </div>

                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full bg-red-700 hover:bg-red-600 disabled:bg-red-900
                                   disabled:cursor-not-allowed text-white font-medium py-2 px-4
                                   rounded transition-colors"
                        >
                            {move || if submitting.get() { "Generating..." } else { "Generate Prediction" }}
                        </button>
                    </form>
                </Card>

                // Prediction results
                <Card title="Prediction Results" class="lg:col-span-2">
                    {move || {
                        match prediction.get() {
                            Some(response) => view! {
                                <PredictionResult response=response />
                            }.into_view(),
                            None => view! {
                                <div class="text-center text-gray-400 py-8">
                                    <p>
                                        "Configure your prediction parameters and click \
                                         \"Generate Prediction\" to see AI-powered race forecasts."
                                    </p>
                                </div>
                            }.into_view(),
                        }
                    }}
                </Card>
            </div>
        </div>
    }
}

/// Rendered prediction response: ordered table plus model metadata
#[component]
fn PredictionResult(response: PredictResponse) -> impl IntoView {
    let model_type = response
        .model_field("model_type")
        .unwrap_or_else(|| "Unknown".to_string());
    let version = response
        .model_field("version")
        .unwrap_or_else(|| "Unknown".to_string());
    let features = response.feature_list();

    view! {
        <div>
            <div class="mb-6">
                <h3 class="text-lg font-medium">{response.race_name.clone()}</h3>
                <p class="text-gray-400 mb-2">{response.circuit_name.clone()}</p>
                <div class="flex items-center space-x-4 text-sm text-gray-400">
                    <span>"Session: " {response.session_type.clone()}</span>
                    <span>"Generated: " {response.generated_at.clone()}</span>
                </div>
            </div>

            <Table columns=prediction_columns() rows=response.predictions.clone() />

            <div class="mt-6 p-4 bg-gray-900/50 rounded-lg">
                <h4 class="font-medium mb-2">"Model Information"</h4>
                <div class="text-sm text-gray-400 space-y-1">
                    <p>"Type: " {model_type}</p>
                    <p>"Version: " {version}</p>
                    {features.map(|f| view! { <p>"Features: " {f}</p> })}
                </div>
            </div>
        </div>
    }
}

/// Columns for the prediction table
fn prediction_columns() -> Vec<Column<DriverPrediction>> {
    vec![
        Column { label: "Pos", cell: |p| p.predicted_position.to_string() },
        Column { label: "Driver", cell: |p| p.driver.full_name() },
        Column {
            label: "Team",
            cell: |p| p.driver.team.clone().unwrap_or_else(|| "Unknown".to_string()),
        },
        Column { label: "Confidence", cell: |p| format_confidence(p.confidence) },
        Column {
            label: "Notes",
            cell: |p| p.reasoning.clone().unwrap_or_else(|| "—".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Driver;

    fn sample_prediction() -> DriverPrediction {
        DriverPrediction {
            driver: Driver {
                driver_id: "norris".to_string(),
                first_name: "Lando".to_string(),
                last_name: "Norris".to_string(),
                code: "NOR".to_string(),
                permanent_number: Some(4),
                team: Some("McLaren".to_string()),
            },
            predicted_position: 1,
            confidence: 0.725,
            reasoning: Some("Strong recent form".to_string()),
        }
    }

    #[test]
    fn test_prediction_columns_render_documented_cells() {
        let columns = prediction_columns();
        let prediction = sample_prediction();

        let cells: Vec<String> = columns.iter().map(|c| (c.cell)(&prediction)).collect();
        assert_eq!(
            cells,
            vec!["1", "Lando Norris", "McLaren", "72.5%", "Strong recent form"]
        );
    }

    #[test]
    fn test_prediction_columns_fall_back_for_missing_optionals() {
        let columns = prediction_columns();
        let mut prediction = sample_prediction();
        prediction.driver.team = None;
        prediction.reasoning = None;

        let cells: Vec<String> = columns.iter().map(|c| (c.cell)(&prediction)).collect();
        assert_eq!(cells[2], "Unknown");
        assert_eq!(cells[4], "—");
    }
}
