//! URLs for static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/for-you` on a static
/// host), generated URLs are prefixed accordingly. Local builds fall back to
/// root-anchored paths. Spaces in file names are percent-encoded so photo
/// names copied straight off a phone still resolve.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, or `None` to serve from root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Background music track.
#[must_use]
pub fn music_src() -> String {
    asset_path("music.mp3")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/').replace(' ', "%20");

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::{asset_path, music_src, router_base};

    #[test]
    fn root_prefixed_when_base_missing() {
        assert_eq!(asset_path("as.jpeg"), "/as.jpeg");
        assert_eq!(asset_path("/as.jpeg"), "/as.jpeg");
        assert_eq!(music_src(), "/music.mp3");
    }

    #[test]
    fn spaces_are_encoded() {
        assert_eq!(
            asset_path("/WhatsApp Image 1.jpeg"),
            "/WhatsApp%20Image%201.jpeg"
        );
    }

    #[test]
    fn public_base_is_prefixed() {
        assert_eq!(
            super::asset_path_with_base("as.jpeg", "/for-you/"),
            "/for-you/as.jpeg"
        );
        assert_eq!(router_base(), None);
        assert_eq!(
            super::router_base_with_base("/for-you/"),
            Some(String::from("/for-you"))
        );
    }
}
