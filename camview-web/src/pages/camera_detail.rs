use crate::api;
use crate::config::ClientConfig;
use crate::Route;
use camview_ui::{CameraDetailView, ErrorDisplay, LoadingSpinner, PageContainer};
use dioxus::prelude::*;

#[component]
pub fn CameraDetail(slug: String) -> Element {
    let config: ClientConfig = use_context();
    // Re-fetch when the route swaps the slug under a mounted page
    let mut data = use_resource(use_reactive!(|slug| {
        let config = config.clone();
        async move { api::fetch_camera(&config, &slug).await }
    }));
    let read = data.read();

    let result = match &*read {
        Some(Ok(camera)) => Ok(camera.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                LoadingSpinner { message: "Loading camera...".to_string() }
            };
        }
    };
    drop(read);

    let go_back = move |_: ()| {
        navigator().push(Route::Cameras {});
    };

    match result {
        Ok(camera) => rsx! {
            CameraDetailView { camera, on_back: go_back }
        },
        Err(e) => rsx! {
            PageContainer { title: "Camera unavailable".to_string(), on_back: go_back,
                ErrorDisplay { message: e, on_retry: move |_: ()| data.restart() }
            }
        },
    }
}
