#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod auto;
mod config;
mod error;
mod io;
mod jsonp;
mod loader;
mod map;
pub mod markers;
mod position;
mod registry;
mod resolve;
pub mod tilejson;
mod tiles;

pub use auto::{Assembled, stack};
pub use config::{Config, DEFAULT_BASE_URL, HeaderValue, HttpOptions};
pub use error::{Error, LoadError};
pub use io::{Fetch, HttpFetch};
pub use loader::{LoadResult, Loaded, Sources};
pub use map::{AutoFit, Bounded, Layer, Map, MapFactory, Maps, Viewport};
pub use markers::{GeoJsonMarkers, MarkerLayerFactory, Markers};
pub use position::{Center, Extent, Position, lat_lon, lon_lat};
pub use registry::{Mapbox, VERSION};
pub use resolve::{resolve, thumbnail_url};
pub use tilejson::{RawTileJson, TileJson};
pub use tiles::{TileId, TileLayer, TileLayerFactory, TileLayers};
