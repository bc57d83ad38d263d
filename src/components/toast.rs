//! Toast Notification Component
//!
//! Shows success and error messages fed by global state. Messages clear
//! themselves through the `GlobalState::show_*` timers.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "✕",
        }
    }

    fn container_class(self) -> &'static str {
        match self {
            ToastVariant::Success => "bg-gray-800 border-green-700 text-green-400",
            ToastVariant::Error => "bg-gray-800 border-red-700 text-red-400",
        }
    }
}

/// Toast notification container, anchored above the status footer
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}
            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(message: String, variant: ToastVariant) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 px-4 py-3 rounded-lg border shadow-lg \
             animate-slide-in {}",
            variant.container_class()
        )>
            <span class="text-lg font-bold">{variant.icon()}</span>
            <span class="text-sm font-medium text-gray-200">{message}</span>
        </div>
    }
}
