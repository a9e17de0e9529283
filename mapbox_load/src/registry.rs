use std::sync::OnceLock;

use crate::{
    Config, HttpFetch, config::HttpOptions, map::Maps, markers::GeoJsonMarkers, tiles::TileLayers,
};

/// Set of collaborators used to load TileJSON and turn it into a map. Built once, then only read.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use mapbox_load::{Config, Mapbox};
///
/// let mapbox = Mapbox::new(Config::default());
/// let assembled = mapbox
///     .auto("map", ["examples.map-zr0njcqy", "examples.map-4l7djmvo"])
///     .await;
///
/// if let Some(error) = assembled.error() {
///     log::warn!("Some of the layers are missing: {error}");
/// }
/// # }
/// ```
pub struct Mapbox<F = HttpFetch, T = TileLayers, M = GeoJsonMarkers, P = Maps> {
    pub config: Config,

    /// Fetches TileJSON documents.
    pub fetch: F,

    /// Creates tile layers.
    pub tile_layer: T,

    /// Creates marker layers.
    pub marker_layer: M,

    /// Creates maps.
    pub map: P,
}

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static GLOBAL: OnceLock<Mapbox> = OnceLock::new();

impl Mapbox {
    /// Registry with the default collaborators, all sharing one HTTP client.
    pub fn new(config: Config) -> Self {
        let fetch = HttpFetch::new(config.http.clone());
        Self {
            marker_layer: GeoJsonMarkers::new(fetch.clone()),
            fetch,
            tile_layer: TileLayers,
            map: Maps,
            config,
        }
    }

    /// Initialize the process-wide registry. Only the first call has any effect, later ones get
    /// the registry which is already there.
    pub fn init(config: Config) -> &'static Mapbox {
        let mut fresh = Some(config);
        let mapbox = GLOBAL.get_or_init(|| Mapbox::new(fresh.take().unwrap_or_default()));
        if fresh.is_some() {
            log::warn!("Mapbox registry is already initialized, ignoring new config.");
        }
        mapbox
    }

    /// Process-wide registry, if [`Mapbox::init`] was called.
    pub fn global() -> Option<&'static Mapbox> {
        GLOBAL.get()
    }
}

impl Default for Mapbox {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<F, T, M, P> Mapbox<F, T, M, P> {
    pub fn http_options(&self) -> &HttpOptions {
        &self.config.http
    }

    /// Replace the document fetcher. Marker layers keep using what they had.
    pub fn with_fetch<F2>(self, fetch: F2) -> Mapbox<F2, T, M, P> {
        Mapbox {
            config: self.config,
            fetch,
            tile_layer: self.tile_layer,
            marker_layer: self.marker_layer,
            map: self.map,
        }
    }

    pub fn with_tile_layer<T2>(self, tile_layer: T2) -> Mapbox<F, T2, M, P> {
        Mapbox {
            config: self.config,
            fetch: self.fetch,
            tile_layer,
            marker_layer: self.marker_layer,
            map: self.map,
        }
    }

    pub fn with_marker_layer<M2>(self, marker_layer: M2) -> Mapbox<F, T, M2, P> {
        Mapbox {
            config: self.config,
            fetch: self.fetch,
            tile_layer: self.tile_layer,
            marker_layer,
            map: self.map,
        }
    }

    pub fn with_map<P2>(self, map: P2) -> Mapbox<F, T, M, P2> {
        Mapbox {
            config: self.config,
            fetch: self.fetch,
            tile_layer: self.tile_layer,
            marker_layer: self.marker_layer,
            map,
        }
    }
}
