//! App layout view component

use dioxus::prelude::*;

/// App layout view (pure, props-based)
///
/// Header bar on top, scrolling content below.
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Application title shown in the header
    #[props(default = "camview".to_string())]
    title: String,
    /// Called when the title is clicked
    on_title_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "h-screen flex flex-col bg-gray-900",
            header { class: "flex items-center h-12 px-4 border-b border-gray-800 shrink-0",
                span {
                    class: "text-lg font-semibold text-white cursor-pointer",
                    onclick: move |_| on_title_click.call(()),
                    "{title}"
                }
            }
            div { class: "flex-1 overflow-y-auto", {children} }
        }
    }
}
