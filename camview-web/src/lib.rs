pub mod api;
pub mod config;
pub mod pages;

use camview_common::slug_from_path;
use config::ClientConfig;
use dioxus::prelude::*;
use pages::{AppLayout, CameraDetail, Cameras};
use tracing::{debug, warn};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Cameras {},
    #[route("/camera/:slug")]
    CameraDetail { slug: String },
}

/// Map a path emitted by a view back to a route
pub fn route_for_path(path: &str) -> Option<Route> {
    if let Some(slug) = slug_from_path(path) {
        return Some(Route::CameraDetail {
            slug: slug.to_string(),
        });
    }
    path.parse::<Route>().ok()
}

/// Push the route for `path`, ignoring paths the app has no page for
pub fn navigate_to(path: &str) {
    match route_for_path(path) {
        Some(route) => {
            debug!("Navigating to {path}");
            navigator().push(route);
        }
        None => warn!("No route for path {path}"),
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(ClientConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camview_common::camera_path;

    #[test]
    fn test_detail_route_renders_camera_path() {
        let route = Route::CameraDetail {
            slug: "front-door".to_string(),
        };
        assert_eq!(route.to_string(), camera_path("front-door"));
    }

    #[test]
    fn test_route_for_detail_path() {
        assert_eq!(
            route_for_path("/camera/front-door"),
            Some(Route::CameraDetail {
                slug: "front-door".to_string()
            })
        );
    }

    #[test]
    fn test_route_for_detail_path_keeps_slug_verbatim() {
        assert_eq!(
            route_for_path("/camera/back yard"),
            Some(Route::CameraDetail {
                slug: "back yard".to_string()
            })
        );
    }

    #[test]
    fn test_route_for_root() {
        assert_eq!(route_for_path("/"), Some(Route::Cameras {}));
    }
}
