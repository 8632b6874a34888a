//! Server-side rendering tests for the camera grid

use camview_ui::{Camera, CameraGridView};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct GridFixture {
    cameras: Vec<Camera>,
    loading: bool,
    error: Option<String>,
    retry: bool,
}

fn grid_fixture(fixture: GridFixture) -> Element {
    let on_retry = fixture.retry.then(|| EventHandler::new(|_: ()| {}));

    rsx! {
        CameraGridView {
            cameras: fixture.cameras,
            loading: fixture.loading,
            error: fixture.error,
            on_camera_click: |_| {},
            on_camera_expand: |_| {},
            on_retry,
        }
    }
}

fn render(cameras: Vec<Camera>, loading: bool, error: Option<String>) -> String {
    render_fixture(GridFixture {
        cameras,
        loading,
        error,
        retry: false,
    })
}

fn render_fixture(fixture: GridFixture) -> String {
    let mut dom = VirtualDom::new_with_props(grid_fixture, fixture);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn camera(name: &str, slug: &str) -> Camera {
    Camera {
        name: name.to_string(),
        slug: slug.to_string(),
        stream_url: format!("/stream/{slug}"),
    }
}

#[test]
fn test_one_tile_per_camera() {
    let html = render(
        vec![camera("Front Door", "front-door"), camera("Garage", "garage")],
        false,
        None,
    );

    assert_eq!(html.matches(r#"data-testid="camera-tile""#).count(), 2);
    assert!(html.contains(r#"href="/camera/front-door""#));
    assert!(html.contains(r#"href="/camera/garage""#));
    assert!(html.contains(r#"src="/stream/garage""#));
}

#[test]
fn test_loading_state() {
    let html = render(vec![camera("Garage", "garage")], true, None);

    assert!(html.contains(r#"data-testid="loading""#));
    assert!(!html.contains(r#"data-testid="camera-tile""#));
}

#[test]
fn test_error_state() {
    let html = render(vec![], false, Some("Network error: offline".to_string()));

    assert!(html.contains(r#"data-testid="error-display""#));
    assert!(html.contains("Network error: offline"));
}

#[test]
fn test_empty_state() {
    let html = render(vec![], false, None);

    assert!(html.contains(r#"data-testid="cameras-empty""#));
}

#[test]
fn test_error_state_offers_retry_when_wired() {
    let html = render_fixture(GridFixture {
        cameras: vec![],
        loading: false,
        error: Some("Server error: 502 Bad Gateway".to_string()),
        retry: true,
    });

    assert!(html.contains(r#"data-testid="retry-button""#));
    assert!(html.contains("Try again"));
}

#[test]
fn test_error_state_without_retry_handler() {
    let html = render(vec![], false, Some("Server error: 502 Bad Gateway".to_string()));

    assert!(!html.contains(r#"data-testid="retry-button""#));
}

#[test]
fn test_non_latin_slugs_render_every_tile() {
    let html = render(
        vec![camera("Камера", "камера"), camera("Кухня", "кухня")],
        false,
        None,
    );

    assert_eq!(html.matches(r#"data-testid="camera-tile""#).count(), 2);
    assert!(html.contains(r#"href="/camera/камера""#));
}
