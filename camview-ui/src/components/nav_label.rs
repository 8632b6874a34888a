//! Navigable text label

use dioxus::prelude::*;

/// Anchor whose activation is handed to the host router.
///
/// `href` carries `target` so the link still works as a plain link (middle
/// click, copy link address). A normal click is intercepted and reported
/// through `on_navigate`.
#[component]
pub fn NavLabel(
    label: String,
    target: String,
    on_navigate: EventHandler<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        a {
            class: "hover:text-indigo-300 transition-colors cursor-pointer {extra}",
            href: "{target}",
            "data-testid": "nav-label",
            onclick: {
                let target = target.clone();
                move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(target.clone());
                }
            },
            "{label}"
        }
    }
}
