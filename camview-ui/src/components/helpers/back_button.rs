//! Back button component

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Back button with customizable text and callback
#[component]
pub fn BackButton(
    /// Text to display (default: "Back to Cameras")
    #[props(default = "Back to Cameras".to_string())]
    text: String,
    /// Callback when button is clicked
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "mb-6",
            button {
                class: "inline-flex items-center gap-2 text-gray-400 hover:text-white transition-colors",
                r#type: "button",
                "data-testid": "back-button",
                onclick: move |_| on_click.call(()),
                ArrowLeftIcon { class: "w-5 h-5" }
                "{text}"
            }
        }
    }
}
