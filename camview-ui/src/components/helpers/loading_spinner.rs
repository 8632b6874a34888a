use crate::components::icons::CameraIcon;
use dioxus::prelude::*;

/// Busy indicator: pulsing camera icon with a status line
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-3 py-12 text-gray-400",
            role: "status",
            aria_busy: "true",
            "data-testid": "loading",
            CameraIcon { class: "w-10 h-10 animate-pulse" }
            p { class: "text-sm", "{message}" }
        }
    }
}
