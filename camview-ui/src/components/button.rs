//! Reusable button components

use crate::components::icons::{ExpandIcon, XIcon};
use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used by IconButton and the retry action in ErrorDisplay.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] testid: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            "data-testid": testid.as_deref(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Gray background - for secondary actions
    Secondary,
    /// No background - icon or text only with hover
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn class(self) -> &'static str {
        match self {
            ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
            ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
        }
    }
}

/// Which icon an [`IconButton`] shows
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Expand,
    Close,
}

impl IconKind {
    /// Stable name, rendered as `data-icon-kind`
    pub fn as_str(self) -> &'static str {
        match self {
            IconKind::Expand => "expand",
            IconKind::Close => "close",
        }
    }
}

/// Square button holding a single icon.
///
/// Without `onclick` the button is only an affordance: it renders and takes
/// focus but does nothing when pressed.
#[component]
pub fn IconButton(
    icon: IconKind,
    variant: ButtonVariant,
    aria_label: String,
    #[props(default)] class: Option<String>,
    #[props(default)] testid: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let variant_class = variant.class();
    let extra = class.as_deref().unwrap_or("");
    let computed_class = format!(
        "inline-flex items-center justify-center w-9 h-9 rounded-lg transition-colors {variant_class} {extra}"
    );

    rsx! {
        ChromelessButton {
            class: Some(computed_class),
            title: Some(aria_label.clone()),
            aria_label: Some(aria_label),
            testid,
            onclick: move |e: MouseEvent| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            span { "data-icon-kind": icon.as_str(),
                {
                    match icon {
                        IconKind::Expand => rsx! {
                            ExpandIcon { class: "w-5 h-5" }
                        },
                        IconKind::Close => rsx! {
                            XIcon { class: "w-5 h-5" }
                        },
                    }
                }
            }
        }
    }
}
