//! Pages
//!
//! Top-level page components for each route.

pub mod compare;
pub mod home;
pub mod predictions;
pub mod race_explorer;

pub use compare::Compare;
pub use home::Home;
pub use predictions::Predictions;
pub use race_explorer::RaceExplorer;
