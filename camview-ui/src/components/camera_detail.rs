//! Camera detail view - one camera at full width

use crate::components::helpers::PageContainer;
use crate::components::media::{FitMode, MediaView};
use crate::display_types::Camera;
use dioxus::prelude::*;

#[component]
pub fn CameraDetailView(camera: Camera, on_back: EventHandler<()>) -> Element {
    let alt = format!("Live view of {}", camera.name);

    rsx! {
        PageContainer { title: camera.name.clone(), on_back,
            MediaView {
                src: camera.stream_url.clone(),
                fit: FitMode::Contain,
                alt: Some(alt),
                class: Some("max-h-[80vh] rounded-lg bg-black".to_string()),
            }
        }
    }
}
