//! Error display component

use crate::components::button::{ButtonVariant, ChromelessButton};
use dioxus::prelude::*;

/// Error box with an optional retry action
#[component]
pub fn ErrorDisplay(
    message: String,
    /// Shows a "Try again" button when set
    #[props(default)]
    on_retry: Option<EventHandler<()>>,
) -> Element {
    let retry_class = format!(
        "mt-3 px-3 py-1.5 text-sm rounded-lg transition-colors {}",
        ButtonVariant::Secondary.class()
    );

    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            role: "alert",
            "data-testid": "error-display",
            p { "{message}" }
            if let Some(handler) = on_retry {
                ChromelessButton {
                    class: Some(retry_class),
                    testid: Some("retry-button".to_string()),
                    onclick: move |_: MouseEvent| handler.call(()),
                    "Try again"
                }
            }
        }
    }
}
