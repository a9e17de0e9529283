//! Marker layers, loaded from the `data` URLs of TileJSON.

use std::future::Future;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    Error, Fetch, HttpFetch,
    position::{Extent, Position, extent_of, lon_lat},
};

/// Creates marker layers and fills them with features.
pub trait MarkerLayerFactory {
    type Layer;
    type Error: std::fmt::Display;

    /// Create an empty layer.
    fn marker_layer(&self) -> Self::Layer;

    /// Load features from `url` into the `layer`.
    #[cfg(target_arch = "wasm32")]
    fn load(
        &self,
        layer: &mut Self::Layer,
        url: &str,
    ) -> impl Future<Output = Result<(), Self::Error>>;

    /// Load features from `url` into the `layer`.
    #[cfg(not(target_arch = "wasm32"))]
    fn load(
        &self,
        layer: &mut Self::Layer,
        url: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Make markers react to the pointer.
    fn interact(&self, layer: &mut Self::Layer);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Marker properties, following the
/// [simplestyle](https://github.com/mapbox/simplestyle-spec) conventions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimpleStyle {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "marker-color")]
    pub color: Option<String>,
    #[serde(rename = "marker-size")]
    pub size: Option<MarkerSize>,
    #[serde(rename = "marker-symbol")]
    pub symbol: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SimpleStyle {
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or("#7e7e7e")
    }

    pub fn size(&self) -> MarkerSize {
        self.size.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Position,
    pub style: SimpleStyle,
}

/// Collection of point markers.
#[derive(Debug, Default)]
pub struct Markers {
    markers: Vec<Marker>,
    interactive: bool,
}

impl Markers {
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn extent(&self) -> Option<Extent> {
        extent_of(self.markers.iter().map(|marker| marker.position))
    }

    /// Add markers from a GeoJSON (or GeoJSONP) document. Only point features are supported, other
    /// geometries are skipped.
    pub fn add_geojson(&mut self, body: &[u8]) -> Result<(), Error> {
        let collection: FeatureCollection =
            serde_json::from_slice(crate::jsonp::strip_padding(body))?;

        for feature in collection.features {
            match feature.geometry {
                Some(Geometry::Point { coordinates }) if coordinates.len() >= 2 => {
                    self.markers.push(Marker {
                        position: lon_lat(coordinates[0], coordinates[1]),
                        style: feature.properties.unwrap_or_default(),
                    });
                }
                other => log::trace!("Skipping feature with geometry {other:?}."),
            }
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    properties: Option<SimpleStyle>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point {
        coordinates: Vec<f64>,
    },
    #[serde(other)]
    Other,
}

/// Creates [`Markers`], fetching GeoJSON with the given [`Fetch`].
#[derive(Clone, Default)]
pub struct GeoJsonMarkers<F = HttpFetch> {
    fetch: F,
}

impl<F> GeoJsonMarkers<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

impl<F: Fetch + Sync> MarkerLayerFactory for GeoJsonMarkers<F> {
    type Layer = Markers;
    type Error = Error;

    fn marker_layer(&self) -> Markers {
        Markers::default()
    }

    async fn load(&self, layer: &mut Markers, url: &str) -> Result<(), Error> {
        let body = self.fetch.fetch(url).await?;
        layer.add_geojson(&body)
    }

    fn interact(&self, layer: &mut Markers) {
        layer.interactive = true;
    }
}
