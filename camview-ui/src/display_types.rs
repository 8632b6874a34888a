//! Display types for UI components
//!
//! Lightweight camera records holding only what the views render. They keep
//! the components props-based so they work with live or fixture data alike.

use camview_common::camera_path;

/// Camera display info
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub name: String,
    pub slug: String,
    /// Image or MJPEG stream URL
    pub stream_url: String,
}

impl Camera {
    /// Path of this camera's detail page
    pub fn detail_path(&self) -> String {
        camera_path(&self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path() {
        let camera = Camera {
            name: "Front Door".to_string(),
            slug: "front-door".to_string(),
            stream_url: "https://cam.local/front.jpg".to_string(),
        };
        assert_eq!(camera.detail_path(), "/camera/front-door");
    }
}
