//! Camera tile - stream preview with a link to the camera page

use crate::components::button::{ButtonVariant, IconButton, IconKind};
use crate::components::icons::CameraIcon;
use crate::components::media::{FitMode, MediaView};
use crate::components::nav_label::NavLabel;
use camview_common::{camera_path, check_required, ContractMode, ContractViolation};
use dioxus::prelude::*;

const COMPONENT: &str = "CameraTile";
const FALLBACK_NAME: &str = "Unknown Camera";

/// Required props that are missing or blank, in declaration order
pub fn tile_violations(
    camera_name: &str,
    slug: &str,
    stream_source: &str,
) -> Vec<ContractViolation> {
    check_required(
        COMPONENT,
        &[
            ("camera_name", camera_name),
            ("slug", slug),
            ("stream_source", stream_source),
        ],
    )
}

/// Preview tile for one camera.
///
/// Pure view: the stream fills the tile width with contain-fit, and below it
/// sits the camera name linking to `/camera/{slug}` plus an expand button.
/// Navigation goes out through `on_navigate` with the target path. The expand
/// button does nothing unless `on_expand` is set, in which case it is called
/// with the slug.
///
/// Blank props are a contract violation, handled per `contract`. Every
/// violation is logged at error level. In strict mode (the debug-build
/// default) the render then panics; Dioxus catches the panic, so the tile is
/// missing from the tree and the log is the place to look. In lenient mode
/// the tile renders placeholders: a generic name, an unlinked heading, and a
/// camera icon in place of the stream.
#[component]
pub fn CameraTile(
    camera_name: String,
    slug: String,
    stream_source: String,
    on_navigate: EventHandler<String>,
    #[props(default)] on_expand: Option<EventHandler<String>>,
    #[props(default)] contract: ContractMode,
) -> Element {
    contract.enforce(&tile_violations(&camera_name, &slug, &stream_source));

    let label = if camera_name.trim().is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        camera_name.clone()
    };
    let target = if slug.trim().is_empty() {
        None
    } else {
        Some(camera_path(&slug))
    };
    let has_stream = !stream_source.trim().is_empty();
    let alt = format!("Live view of {label}");
    let expand_label = format!("Expand {label}");

    rsx! {
        div { class: "w-full flex flex-col gap-2", "data-testid": "camera-tile",
            if has_stream {
                MediaView {
                    src: stream_source.clone(),
                    fit: FitMode::Contain,
                    alt: Some(alt),
                    class: Some("rounded-lg bg-black".to_string()),
                }
            } else {
                div {
                    class: "w-full aspect-video rounded-lg bg-gray-800 flex items-center justify-center",
                    "data-testid": "camera-tile-placeholder",
                    CameraIcon { class: "w-12 h-12 text-gray-500" }
                }
            }
            div { class: "flex flex-row justify-between items-center gap-4",
                h2 { class: "text-2xl font-bold text-white truncate",
                    if let Some(target) = target {
                        NavLabel { label: label.clone(), target, on_navigate }
                    } else {
                        span { "{label}" }
                    }
                }
                IconButton {
                    icon: IconKind::Expand,
                    variant: ButtonVariant::Secondary,
                    aria_label: expand_label,
                    testid: Some("expand-button".to_string()),
                    onclick: {
                        let slug = slug.clone();
                        move |_: MouseEvent| {
                            if let Some(handler) = on_expand {
                                handler.call(slug.clone());
                            }
                        }
                    },
                }
            }
        }
    }
}
