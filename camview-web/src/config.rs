//! Client configuration
//!
//! Resolved once at startup and shared through Dioxus context. Values can be
//! overridden at build time:
//!
//! - `CAMVIEW_API_BASE`: base URL of the camera catalog API (default `/api`)
//! - `CAMVIEW_STREAM_BASE`: prefix applied to relative stream URLs (default none)

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Catalog API base, without trailing slash
    pub api_base: String,
    /// Prefix for stream URLs the catalog gives as absolute paths
    pub stream_base: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            option_env!("CAMVIEW_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("CAMVIEW_STREAM_BASE"),
        )
    }
}

impl ClientConfig {
    pub fn new(api_base: &str, stream_base: Option<&str>) -> Self {
        let api_base = api_base.trim().trim_end_matches('/');
        let stream_base = stream_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .map(str::to_string);

        Self {
            api_base: if api_base.is_empty() {
                DEFAULT_API_BASE.to_string()
            } else {
                api_base.to_string()
            },
            stream_base,
        }
    }

    /// Full URL of an API endpoint. Path-only bases are made absolute
    /// against the page origin when one is available.
    pub fn api_url(&self, endpoint: &str) -> String {
        let url = format!("{}/{}", self.api_base, endpoint.trim_start_matches('/'));
        match page_origin() {
            Some(origin) if url.starts_with('/') => format!("{origin}{url}"),
            _ => url,
        }
    }

    /// Apply `stream_base` to a stream URL given as an absolute path.
    /// Full URLs and relative references pass through unchanged.
    pub fn stream_url(&self, url: &str) -> String {
        match &self.stream_base {
            Some(base) if url.starts_with('/') && !url.starts_with("//") => format!("{base}{url}"),
            _ => url.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
