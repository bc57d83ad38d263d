//! Card Component
//!
//! Titled container used for every dashboard panel.

use leptos::*;

/// Titled card container
#[component]
pub fn Card(
    /// Card heading
    #[prop(into)]
    title: String,
    /// Extra classes merged onto the container
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-gray-800 rounded-lg p-6 shadow-lg border border-red-900/40 {}",
            class
        )>
            <h3 class="text-xl font-semibold text-white mb-4">{title}</h3>
            <div class="text-gray-200">
                {children()}
            </div>
        </div>
    }
}
