use crate::api;
use crate::config::ClientConfig;
use crate::navigate_to;
use camview_ui::{CameraGridView, ExpandedCameraView};
use dioxus::prelude::*;

#[component]
pub fn Cameras() -> Element {
    let config: ClientConfig = use_context();
    let mut data = use_resource(move || {
        let config = config.clone();
        async move { api::fetch_cameras(&config).await }
    });
    // Slug of the camera shown in the full-screen overlay
    let mut expanded: Signal<Option<String>> = use_signal(|| None);

    let (cameras, loading, error) = match &*data.read() {
        Some(Ok(cameras)) => (cameras.clone(), false, None),
        Some(Err(e)) => (Vec::new(), false, Some(e.clone())),
        None => (Vec::new(), true, None),
    };

    let expanded_camera =
        expanded().and_then(|slug| cameras.iter().find(|camera| camera.slug == slug).cloned());

    rsx! {
        CameraGridView {
            cameras,
            loading,
            error,
            on_camera_click: move |path: String| navigate_to(&path),
            on_camera_expand: move |slug: String| expanded.set(Some(slug)),
            on_retry: move |_: ()| data.restart(),
        }
        if let Some(camera) = expanded_camera {
            ExpandedCameraView { camera, on_close: move |_| expanded.set(None) }
        }
    }
}
