//! Camera grid view component - pure rendering, no data fetching

use crate::components::camera_tile::CameraTile;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::CameraIcon;
use crate::display_types::Camera;
use dioxus::prelude::*;

/// Overview of all cameras as a responsive grid of tiles
#[component]
pub fn CameraGridView(
    cameras: Vec<Camera>,
    #[props(default)] loading: bool,
    #[props(default)] error: Option<String>,
    // Navigation callback - called with the camera's detail path
    on_camera_click: EventHandler<String>,
    // Called with the slug when a tile's expand button is pressed
    on_camera_expand: EventHandler<String>,
    // Offered next to the error message when set
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "flex-grow overflow-y-auto flex flex-col py-10",
            div { class: "container mx-auto flex flex-col px-4",
                h1 { class: "text-3xl font-bold text-white mb-6", "Cameras" }
                if loading {
                    LoadingSpinner { message: "Loading cameras...".to_string() }
                } else if let Some(err) = error {
                    ErrorDisplay { message: err, on_retry }
                    p { class: "text-sm mt-2 text-gray-400",
                        "An error occurred while loading the camera list."
                    }
                } else if cameras.is_empty() {
                    div { class: "text-center py-12", "data-testid": "cameras-empty",
                        div { class: "text-gray-400 mb-4",
                            CameraIcon { class: "w-16 h-16 mx-auto" }
                        }
                        h2 { class: "text-2xl font-bold text-gray-300 mb-2", "No cameras configured" }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                        for camera in cameras {
                            CameraTile {
                                key: "{camera.slug}",
                                camera_name: camera.name,
                                slug: camera.slug,
                                stream_source: camera.stream_url,
                                on_navigate: on_camera_click,
                                on_expand: on_camera_expand,
                            }
                        }
                    }
                }
            }
        }
    }
}
