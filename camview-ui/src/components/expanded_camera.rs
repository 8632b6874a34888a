//! Full-screen overlay for a single camera stream

use crate::components::button::{ButtonVariant, IconButton, IconKind};
use crate::components::media::{FitMode, MediaView};
use crate::display_types::Camera;
use dioxus::prelude::*;

/// Overlay covering the viewport with one stream.
///
/// Clicking the backdrop or the close button calls `on_close`. Clicks on the
/// stream itself are swallowed.
#[component]
pub fn ExpandedCameraView(camera: Camera, on_close: EventHandler<()>) -> Element {
    let alt = format!("Live view of {}", camera.name);

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black/90 flex flex-col p-6",
            "data-testid": "expanded-camera",
            onclick: move |_| on_close.call(()),
            div { class: "flex flex-row justify-between items-center mb-4",
                h2 { class: "text-2xl font-bold text-white truncate", "{camera.name}" }
                IconButton {
                    icon: IconKind::Close,
                    variant: ButtonVariant::Ghost,
                    aria_label: "Close".to_string(),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_close.call(());
                    },
                }
            }
            div {
                class: "flex-1 min-h-0 flex items-center",
                onclick: move |evt| evt.stop_propagation(),
                MediaView {
                    src: camera.stream_url.clone(),
                    fit: FitMode::Contain,
                    alt: Some(alt),
                    class: Some("h-full".to_string()),
                }
            }
        }
    }
}
