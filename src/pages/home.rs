//! Home Page
//!
//! Season overview: latest races, championship leader, quick stats.

use leptos::*;

use crate::api;
use crate::components::{Card, CardSkeleton};
use crate::state::global::default_season;
use crate::types::{format_points, format_race_date, Race, Standings};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let (races, set_races) = create_signal(Vec::<Race>::new());
    let (standings, set_standings) = create_signal(None::<Standings>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    // Fetch current-season data on mount. Both requests run concurrently
    // and settle independently - one failing never blocks the other from
    // populating its state.
    create_effect(move |_| {
        spawn_local(async move {
            set_loading.set(true);

            let season = default_season();
            let (races_result, standings_result) =
                futures::join!(api::get_races(season), api::get_standings(season, None));

            let mut failures = 0;

            match races_result {
                Ok(data) => set_races.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch races: {}", e).into());
                    failures += 1;
                }
            }

            match standings_result {
                Ok(data) => set_standings.set(Some(data)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch standings: {}", e).into());
                    failures += 1;
                }
            }

            if failures == 2 {
                set_error.set(Some(
                    "Failed to fetch data. Please check if the API server is running.".to_string(),
                ));
            }

            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="text-center">
                <h1 class="text-4xl font-bold text-white mb-4">"Welcome to F1 Dashboard"</h1>
                <p class="text-xl text-gray-300">
                    "Your hub for F1 race results, telemetry, and predictions"
                </p>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view()
                } else if let Some(message) = error.get() {
                    view! {
                        <div class="flex items-center justify-center min-h-64">
                            <Card title="Error" class="max-w-md">
                                <p class="text-red-400">{message}</p>
                                <p class="text-sm mt-2 text-gray-400">
                                    "Make sure the backend API server is running on localhost:8000."
                                </p>
                            </Card>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <Overview races=races standings=standings />
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Season overview cards
#[component]
fn Overview(
    races: ReadSignal<Vec<Race>>,
    standings: ReadSignal<Option<Standings>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <Card title="Latest Races" class="lg:col-span-2">
                {move || {
                    let recent = latest_races(&races.get(), 5);
                    if recent.is_empty() {
                        view! {
                            <p class="text-gray-400">"No recent races found"</p>
                        }.into_view()
                    } else {
                        recent.into_iter().map(|race| view! {
                            <div class="border-l-2 border-red-600 pl-3 mb-3">
                                <div class="font-medium">{race.race_name.clone()}</div>
                                <div class="text-sm text-gray-400">
                                    {race.circuit_name.clone()}
                                    " • "
                                    {format_race_date(&race.date)}
                                </div>
                            </div>
                        }).collect_view()
                    }
                }}
            </Card>

            <Card title="Championship Leader">
                {move || {
                    match standings.get().and_then(|s| s.driver_standings.first().cloned()) {
                        Some(leader) => view! {
                            <div>
                                <div class="font-bold text-lg">{leader.driver.full_name()}</div>
                                <div class="text-gray-400">{leader.constructor.name.clone()}</div>
                                <div class="text-red-500 font-medium mt-2">
                                    {format_points(leader.points)}
                                    " points"
                                </div>
                            </div>
                        }.into_view(),
                        None => view! {
                            <p class="text-gray-400">"No standings data"</p>
                        }.into_view(),
                    }
                }}
            </Card>

            <Card title="Quick Stats">
                <div class="space-y-2">
                    <div class="flex justify-between">
                        <span>"Races"</span>
                        <span class="font-medium">{move || races.get().len().to_string()}</span>
                    </div>
                    <div class="flex justify-between">
                        <span>"Drivers"</span>
                        <span class="font-medium">
                            {move || standings.get().map(|s| s.driver_standings.len()).unwrap_or(0).to_string()}
                        </span>
                    </div>
                    <div class="flex justify-between">
                        <span>"Teams"</span>
                        <span class="font-medium">
                            {move || standings.get().map(|s| s.constructor_standings.len()).unwrap_or(0).to_string()}
                        </span>
                    </div>
                </div>
            </Card>
        </div>
    }
}

/// The most recent `n` races, keeping calendar order
fn latest_races(races: &[Race], n: usize) -> Vec<Race> {
    let skip = races.len().saturating_sub(n);
    races[skip..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(round: u32) -> Race {
        Race {
            season: 2024,
            round,
            race_name: format!("Race {}", round),
            circuit_name: "Circuit".to_string(),
            date: "2024-03-02".to_string(),
            time: None,
            url: None,
        }
    }

    #[test]
    fn test_latest_races_keeps_calendar_order() {
        let races: Vec<Race> = (1..=8).map(race).collect();
        let recent = latest_races(&races, 5);
        assert_eq!(
            recent.iter().map(|r| r.round).collect::<Vec<_>>(),
            vec![4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_latest_races_short_calendar() {
        let races: Vec<Race> = (1..=3).map(race).collect();
        assert_eq!(latest_races(&races, 5).len(), 3);
        assert!(latest_races(&[], 5).is_empty());
    }
}
