//! Media view - a single image or MJPEG stream

use dioxus::prelude::*;

/// How media is scaled into its box
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FitMode {
    /// Scale to fit, keep aspect ratio, never crop
    #[default]
    Contain,
    /// Fill the box, cropping overflow
    Cover,
}

impl FitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FitMode::Contain => "contain",
            FitMode::Cover => "cover",
        }
    }

    fn class(self) -> &'static str {
        match self {
            FitMode::Contain => "object-contain",
            FitMode::Cover => "object-cover",
        }
    }
}

/// Full-width media element.
///
/// Loading and broken-image handling are left to the browser.
#[component]
pub fn MediaView(
    src: String,
    #[props(default)] fit: FitMode,
    #[props(default)] alt: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let fit_class = fit.class();
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        img {
            class: "w-full {fit_class} {extra}",
            src: "{src}",
            alt: alt.as_deref(),
            "data-fit": fit.as_str(),
            "data-testid": "media-view",
        }
    }
}
