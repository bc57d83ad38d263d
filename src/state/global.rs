//! Global Application State
//!
//! Reactive state management using Leptos signals. Pages own their fetched
//! data exclusively; the global state only carries cross-cutting UI concerns
//! (backend connectivity, toasts) and the season selection shared by the
//! season dropdowns.

use leptos::*;

/// Seasons the backend serves data for, newest first
pub const SEASONS: [u16; 5] = [2024, 2023, 2022, 2021, 2020];

/// The season shown by default on page load
pub fn default_season() -> u16 {
    SEASONS[0]
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Season selected in the explorer dropdown
    pub selected_season: RwSignal<u16>,
    /// Whether the backend answered the health probe
    pub api_connected: RwSignal<bool>,
    /// Global loading state (footer indicator)
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        selected_season: create_rw_signal(default_season()),
        api_connected: create_rw_signal(false),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasons_are_newest_first() {
        assert!(SEASONS.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_default_season_is_most_recent() {
        assert_eq!(default_season(), 2024);
        assert_eq!(default_season(), *SEASONS.iter().max().unwrap());
    }
}
