//! Server-side rendering tests for the detail and overlay views

use camview_ui::{Camera, CameraDetailView, ExpandedCameraView};
use dioxus::prelude::*;

fn porch() -> Camera {
    Camera {
        name: "Porch".to_string(),
        slug: "porch".to_string(),
        stream_url: "http://nvr.local/stream/porch".to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
struct ViewFixture {
    camera: Camera,
}

fn detail_fixture(fixture: ViewFixture) -> Element {
    rsx! {
        CameraDetailView { camera: fixture.camera, on_back: |_| {} }
    }
}

fn expanded_fixture(fixture: ViewFixture) -> Element {
    rsx! {
        ExpandedCameraView { camera: fixture.camera, on_close: |_| {} }
    }
}

fn render(root: fn(ViewFixture) -> Element, camera: Camera) -> String {
    let mut dom = VirtualDom::new_with_props(root, ViewFixture { camera });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_detail_view_shows_stream_and_back_button() {
    let html = render(detail_fixture, porch());

    assert!(html.contains(r#"data-testid="back-button""#));
    assert!(html.contains("Back to Cameras"));
    assert!(html.contains(">Porch</h1>"));
    assert!(html.contains(r#"src="http://nvr.local/stream/porch""#));
    assert!(html.contains(r#"data-fit="contain""#));
}

#[test]
fn test_expanded_view_has_close_button() {
    let html = render(expanded_fixture, porch());

    assert!(html.contains(r#"data-testid="expanded-camera""#));
    assert!(html.contains(r#"data-icon-kind="close""#));
    assert!(html.contains(r#"aria-label="Close""#));
    assert_eq!(html.matches("<img").count(), 1);
}
