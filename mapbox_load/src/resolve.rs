/// Turn a bare identifier into a TileJSON URL. Anything starting with `http` is considered a URL
/// already and is returned unchanged.
///
/// ```
/// use mapbox_load::{DEFAULT_BASE_URL, resolve};
///
/// assert_eq!(
///     resolve("examples.map-zr0njcqy", DEFAULT_BASE_URL),
///     "http://a.tiles.mapbox.com/v3/examples.map-zr0njcqy.jsonp"
/// );
/// assert_eq!(resolve("https://example.com/a.json", DEFAULT_BASE_URL), "https://example.com/a.json");
/// ```
pub fn resolve(url_or_id: &str, base_url: &str) -> String {
    if url_or_id.starts_with("http") {
        url_or_id.to_owned()
    } else {
        format!("{base_url}{url_or_id}.jsonp")
    }
}

/// Thumbnail image of the map with given identifier.
pub fn thumbnail_url(id: &str, base_url: &str) -> String {
    format!("{base_url}{id}/thumb.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_BASE_URL;

    #[test]
    fn bare_identifiers_are_expanded() {
        for id in ["foo", "examples.map-4l7djmvo", "", "with space", "ftp://x"] {
            assert_eq!(
                resolve(id, DEFAULT_BASE_URL),
                format!("http://a.tiles.mapbox.com/v3/{id}.jsonp")
            );
        }
    }

    #[test]
    fn urls_are_passed_through() {
        for url in [
            "http://example.com/tiles.json",
            "https://example.com/tiles.jsonp",
            "httpfoo",
        ] {
            assert_eq!(resolve(url, DEFAULT_BASE_URL), url);
            assert_eq!(resolve(&resolve(url, DEFAULT_BASE_URL), DEFAULT_BASE_URL), url);
        }
    }

    #[test]
    fn thumbnail() {
        assert_eq!(
            thumbnail_url("foo", DEFAULT_BASE_URL),
            "http://a.tiles.mapbox.com/v3/foo/thumb.png"
        );
    }
}
