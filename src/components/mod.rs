//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod line_chart;
pub mod loading;
pub mod nav;
pub mod table;
pub mod toast;

pub use card::Card;
pub use line_chart::LineChart;
pub use loading::{CardSkeleton, Loading};
pub use nav::Nav;
pub use table::{Column, Table};
pub use toast::Toast;
