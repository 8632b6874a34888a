use crate::config::ClientConfig;
use camview_common::slugify;
use camview_ui::display_types::Camera;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::warn;

/// Camera record as served by the catalog API
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraRecord {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub stream_url: String,
}

impl CameraRecord {
    /// Slug as given by the catalog, else derived from the name, else
    /// `camera-{position}` (1-based) for names without alphanumerics.
    fn base_slug(&self, index: usize) -> String {
        match &self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.clone(),
            _ => {
                let derived = slugify(&self.name);
                if derived.is_empty() {
                    format!("camera-{}", index + 1)
                } else {
                    derived
                }
            }
        }
    }
}

/// Turn catalog records into display cameras.
///
/// Every camera gets a non-blank slug that is unique within the catalog;
/// later duplicates are suffixed `-2`, `-3`, ... in catalog order.
pub fn cameras_from_records(records: Vec<CameraRecord>, config: &ClientConfig) -> Vec<Camera> {
    let mut taken = HashSet::new();

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let base = record.base_slug(index);
            let mut slug = base.clone();
            let mut suffix = 2;
            while !taken.insert(slug.clone()) {
                slug = format!("{base}-{suffix}");
                suffix += 1;
            }
            if slug != base {
                warn!("Duplicate camera slug {base}, using {slug}");
            }

            Camera {
                stream_url: config.stream_url(&record.stream_url),
                name: record.name,
                slug,
            }
        })
        .collect()
}

/// Fetch the camera catalog
pub async fn fetch_cameras(config: &ClientConfig) -> Result<Vec<Camera>, String> {
    let result = request_catalog(config).await;
    if let Err(e) = &result {
        warn!("Failed to load camera catalog: {e}");
    }
    result
}

/// Fetch a single camera by slug
pub async fn fetch_camera(config: &ClientConfig, slug: &str) -> Result<Camera, String> {
    fetch_cameras(config)
        .await?
        .into_iter()
        .find(|camera| camera.slug == slug)
        .ok_or_else(|| format!("Camera not found: {slug}"))
}

async fn request_catalog(config: &ClientConfig) -> Result<Vec<Camera>, String> {
    let resp = reqwest::get(config.api_url("cameras"))
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let records: Vec<CameraRecord> = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(cameras_from_records(records, config))
}
