/// Path prefix of the per-camera detail page
pub const CAMERA_ROUTE_PREFIX: &str = "/camera/";

/// Build the detail path for a camera.
///
/// The slug is inserted verbatim. Reserved URL characters are not encoded here;
/// whoever mints slugs is expected to keep them path-safe (see [`slugify`]).
pub fn camera_path(slug: &str) -> String {
    format!("{CAMERA_ROUTE_PREFIX}{slug}")
}

/// Extract the slug from a detail path built by [`camera_path`].
pub fn slug_from_path(path: &str) -> Option<&str> {
    path.strip_prefix(CAMERA_ROUTE_PREFIX).filter(|slug| !slug.is_empty())
}

/// Derive a path-safe slug from a display name.
///
/// Keeps alphanumerics from any script, lowercased, and collapses every run of
/// other characters into a single `-`. Leading and trailing separators are
/// dropped. The result is empty when `name` has no alphanumerics at all.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_path_concatenates_prefix_and_slug() {
        assert_eq!(camera_path("front-door"), "/camera/front-door");
    }

    #[test]
    fn test_camera_path_does_not_encode() {
        assert_eq!(camera_path("back yard"), "/camera/back yard");
        assert_eq!(camera_path("a?b#c"), "/camera/a?b#c");
        assert_eq!(camera_path("Garage"), "/camera/Garage");
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_from_path("/camera/front-door"), Some("front-door"));
        assert_eq!(slug_from_path(&camera_path("porch")), Some("porch"));
    }

    #[test]
    fn test_slug_from_path_rejects_other_paths() {
        assert_eq!(slug_from_path("/camera/"), None);
        assert_eq!(slug_from_path("/"), None);
        assert_eq!(slug_from_path("/cameras/porch"), None);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Front Door"), "front-door");
        assert_eq!(slugify("  Back -- Yard #2 "), "back-yard-2");
        assert_eq!(slugify("garage"), "garage");
    }

    #[test]
    fn test_slugify_keeps_non_latin_letters() {
        assert_eq!(slugify("Камера"), "камера");
        assert_eq!(slugify("Кухня 2"), "кухня-2");
        assert_eq!(slugify("Caméra Entrée"), "caméra-entrée");
    }

    #[test]
    fn test_slugify_without_alphanumerics() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
