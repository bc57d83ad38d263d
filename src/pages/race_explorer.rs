//! Race Explorer Page
//!
//! Browse a season's races, then drill into results and telemetry for a
//! selected race. Results and telemetry are fetched concurrently and settle
//! independently, so a telemetry failure still shows results (and vice
//! versa).

use leptos::*;

use crate::api;
use crate::components::{Card, Column, LineChart, Loading, Table};
use crate::state::global::{GlobalState, SEASONS};
use crate::types::{format_points, format_race_date, Race, RaceResult, RaceResults, RaceTelemetry};

/// How many drivers' telemetry traces to chart
const MAX_TELEMETRY_CHARTS: usize = 4;

/// Whether a response belongs to a fetch that has been superseded.
/// Late responses are discarded instead of clobbering newer state.
fn is_stale(issued: u64, latest: u64) -> bool {
    issued != latest
}

/// Race explorer page component
#[component]
pub fn RaceExplorer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (races, set_races) = create_signal(Vec::<Race>::new());
    let (selected_race, set_selected_race) = create_signal(None::<u32>);
    let (race_results, set_race_results) = create_signal(None::<RaceResults>);
    let (telemetry, set_telemetry) = create_signal(None::<RaceTelemetry>);

    // Bumped on every fetch; responses carrying an older value are stale
    let fetch_seq = create_rw_signal(0u64);

    // Fetch the race list on mount and whenever the season changes
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let season = state_for_effect.selected_season.get();
        let state = state_for_effect.clone();

        let seq = fetch_seq.get_untracked() + 1;
        fetch_seq.set_untracked(seq);

        spawn_local(async move {
            state.loading.set(true);

            let result = api::get_races(season).await;

            if is_stale(seq, fetch_seq.get_untracked()) {
                return;
            }

            match result {
                Ok(data) => {
                    set_races.set(data);
                    // Selection belongs to the previous season
                    set_selected_race.set(None);
                    set_race_results.set(None);
                    set_telemetry.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch races: {}", e).into());
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    // Fetch results + telemetry for a selected race
    let state_for_select = state.clone();
    let on_select_race = move |round: u32| {
        let state = state_for_select.clone();
        let season = state.selected_season.get_untracked();

        set_selected_race.set(Some(round));

        let seq = fetch_seq.get_untracked() + 1;
        fetch_seq.set_untracked(seq);

        spawn_local(async move {
            state.loading.set(true);

            // Issued in parallel; each side settles independently
            let (results, telemetry_result) = futures::join!(
                api::get_race_results(season, round),
                api::get_race_telemetry(season, round, None)
            );

            if is_stale(seq, fetch_seq.get_untracked()) {
                return;
            }

            match results {
                Ok(data) => set_race_results.set(Some(data)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch results: {}", e).into());
                }
            }

            match telemetry_result {
                Ok(data) => set_telemetry.set(Some(data)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch telemetry: {}", e).into());
                }
            }

            state.loading.set(false);
        });
    };

    let selected_season = state.selected_season;
    let loading = state.loading;
    view! {
        <div class="space-y-6">
            // Page header with season selector
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-white">"Race Explorer"</h1>

                <select
                    on:change=move |ev| {
                        if let Ok(season) = event_target_value(&ev).parse() {
                            selected_season.set(season);
                        }
                    }
                    prop:value=move || selected_season.get().to_string()
                    class="bg-gray-800 text-gray-200 px-3 py-2 rounded border border-red-900/40
                           focus:border-red-600 focus:outline-none"
                >
                    {SEASONS.iter().map(|year| view! {
                        <option value=year.to_string()>{year.to_string()}</option>
                    }).collect_view()}
                </select>
            </div>

            // Loading indicator
            {move || loading.get().then(|| view! { <Loading /> })}

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                // Race list
                <Card title="Races" class="lg:col-span-1">
                    <div class="space-y-2 max-h-96 overflow-y-auto">
                        {move || {
                            let on_select = on_select_race.clone();
                            races.get().into_iter().map(|race| {
                                let round = race.round;
                                let on_select = on_select.clone();
                                let is_selected = move || selected_race.get() == Some(round);
                                view! {
                                    <button
                                        on:click=move |_| on_select(round)
                                        class=move || {
                                            let base = "w-full text-left p-3 rounded-lg border transition-colors";
                                            if is_selected() {
                                                format!("{} border-red-600 bg-red-600/10", base)
                                            } else {
                                                format!("{} border-red-900/40 hover:border-red-700", base)
                                            }
                                        }
                                    >
                                        <div class="font-medium">{race.race_name.clone()}</div>
                                        <div class="text-sm text-gray-400">
                                            "Round " {race.round.to_string()} " • " {race.circuit_name.clone()}
                                        </div>
                                        <div class="text-xs text-gray-500">
                                            {format_race_date(&race.date)}
                                        </div>
                                    </button>
                                }
                            }).collect_view()
                        }}
                    </div>
                </Card>

                // Results table
                <Card title="Race Results" class="lg:col-span-2">
                    {move || {
                        match race_results.get() {
                            Some(results) => view! {
                                <div>
                                    <div class="mb-4">
                                        <h3 class="text-lg font-medium">{results.race.race_name.clone()}</h3>
                                        <p class="text-gray-400">{results.race.circuit_name.clone()}</p>
                                    </div>
                                    <Table columns=result_columns() rows=results.results />
                                </div>
                            }.into_view(),
                            None => view! {
                                <p class="text-gray-400">"Select a race to view results"</p>
                            }.into_view(),
                        }
                    }}
                </Card>
            </div>

            // Telemetry charts
            {move || {
                telemetry.get()
                    .filter(|t| !t.drivers_telemetry.is_empty())
                    .map(|t| view! {
                        <Card title="Telemetry Data">
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                {t.drivers_telemetry.iter().take(MAX_TELEMETRY_CHARTS).map(|driver_tel| {
                                    view! {
                                        <LineChart
                                            series=driver_tel.speed_series()
                                            title=format!("{} - Speed", driver_tel.driver.full_name())
                                        />
                                    }
                                }).collect_view()}
                            </div>
                        </Card>
                    })
            }}
        </div>
    }
}

/// Columns for the results table
fn result_columns() -> Vec<Column<RaceResult>> {
    vec![
        Column { label: "Pos", cell: |r| r.position.to_string() },
        Column { label: "Driver", cell: |r| r.driver.full_name() },
        Column { label: "Team", cell: |r| r.constructor.name.clone() },
        Column { label: "Points", cell: |r| format_points(r.points) },
        Column { label: "Time", cell: |r| r.time.clone().unwrap_or_else(|| "—".to_string()) },
        Column { label: "Status", cell: |r| r.status.clone() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Constructor, Driver};

    fn sample_result() -> RaceResult {
        RaceResult {
            position: 1,
            driver: Driver {
                driver_id: "verstappen".to_string(),
                first_name: "Max".to_string(),
                last_name: "Verstappen".to_string(),
                code: "VER".to_string(),
                permanent_number: Some(1),
                team: Some("Red Bull Racing".to_string()),
            },
            constructor: Constructor {
                constructor_id: "red_bull".to_string(),
                name: "Red Bull Racing".to_string(),
                nationality: "Austrian".to_string(),
            },
            points: 25.0,
            time: None,
            status: "Finished".to_string(),
            fastest_lap: None,
            fastest_lap_rank: None,
        }
    }

    #[test]
    fn test_result_columns_render_documented_cells() {
        let columns = result_columns();
        let result = sample_result();

        let cells: Vec<String> = columns.iter().map(|c| (c.cell)(&result)).collect();
        assert_eq!(cells, vec!["1", "Max Verstappen", "Red Bull Racing", "25", "—", "Finished"]);

        let labels: Vec<&str> = columns.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Pos", "Driver", "Team", "Points", "Time", "Status"]);
    }

    #[test]
    fn test_stale_responses_are_discarded() {
        // A fetch issued at seq 1 loses to a newer fetch at seq 2
        assert!(is_stale(1, 2));
        // The latest fetch wins
        assert!(!is_stale(2, 2));
    }
}
