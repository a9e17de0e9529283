use std::path::PathBuf;

pub use reqwest::header::HeaderValue;

/// Base of the hosted tile service. Bare identifiers and thumbnails are resolved against it.
pub const DEFAULT_BASE_URL: &str = "http://a.tiles.mapbox.com/v3/";

/// Settings shared by everything in the [`crate::Mapbox`] registry.
#[derive(Clone)]
pub struct Config {
    /// Prefix used to expand bare identifiers into TileJSON URLs, and to build thumbnail URLs.
    /// Must end with a slash.
    pub base_url: String,

    pub http: HttpOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: HttpOptions::default(),
        }
    }
}

impl Config {
    /// Use a different tile service, e.g. a self-hosted one.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Controls how [`crate::HttpFetch`] uses the HTTP protocol, such as caching.
#[derive(Clone)]
pub struct HttpOptions {
    /// Path to the directory to store the HTTP cache.
    ///
    /// This option is ignored in WASM, as HTTP cache is controlled by the
    /// browser the app is running on.
    pub cache: Option<PathBuf>,

    /// User agent to be sent to the servers.
    ///
    /// This should be set only on native targets. The browser sets its own user agent on wasm
    /// targets.
    pub user_agent: Option<HeaderValue>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let user_agent = Some(HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION"),
        )));

        #[cfg(target_arch = "wasm32")]
        let user_agent = None;

        Self {
            cache: None,
            user_agent,
        }
    }
}
