use super::BackButton;
use dioxus::prelude::*;

/// Padded page body, optionally headed by a back button and a page title
#[component]
pub fn PageContainer(
    #[props(default)] title: Option<String>,
    #[props(default)] on_back: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "container mx-auto px-4 py-6",
            if let Some(handler) = on_back {
                BackButton { on_click: handler }
            }
            if let Some(title) = title {
                h1 { class: "text-3xl font-bold text-white mb-6 truncate", "{title}" }
            }
            {children}
        }
    }
}
