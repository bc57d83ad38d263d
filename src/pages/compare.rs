//! Compare Page
//!
//! Placeholder for the driver comparison feature.

use leptos::*;

use crate::components::Card;

/// Driver comparison page component
#[component]
pub fn Compare() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-white">"Driver Comparison"</h1>

            <Card title="Coming Soon">
                <div class="text-center py-12">
                    <h3 class="text-xl font-medium mb-4">"Driver Comparison Feature"</h3>
                    <p class="text-gray-400 mb-6 max-w-md mx-auto">
                        "Compare driver performance, lap times, and telemetry data across \
                         different races and seasons. This feature will be available in a \
                         future update."
                    </p>
                    <div class="bg-gray-900/50 rounded-lg p-4 max-w-sm mx-auto">
                        <h4 class="font-medium mb-2">"Planned Features:"</h4>
                        <ul class="text-sm text-gray-400 space-y-1 text-left">
                            <li>"• Side-by-side driver statistics"</li>
                            <li>"• Lap time comparisons"</li>
                            <li>"• Telemetry overlays"</li>
                            <li>"• Performance trends"</li>
                            <li>"• Head-to-head analysis"</li>
                        </ul>
                    </div>
                </div>
            </Card>
        </div>
    }
}
