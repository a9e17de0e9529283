//! [TileJSON](https://github.com/mapbox/tilejson-spec) documents, as they come from the server and
//! after normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    Error,
    position::{Center, Extent},
    resolve::thumbnail_url,
};

/// Tile coordinate scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Xyz,
    Tms,
}

/// Field which may hold a single value or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(one) => vec![one],
            OneOrMany::Many(many) => many,
        }
    }
}

/// TileJSON exactly as fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTileJson {
    /// Empty when the server did not send one.
    #[serde(default)]
    pub id: String,

    /// `[longitude, latitude, zoom]`.
    pub center: Option<[f64; 3]>,

    /// Marker data URL(s).
    pub data: Option<OneOrMany>,

    pub tilejson: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub attribution: Option<String>,
    pub version: Option<String>,
    pub scheme: Option<Scheme>,
    #[serde(default)]
    pub tiles: Vec<String>,
    #[serde(default)]
    pub grids: Vec<String>,
    pub minzoom: Option<u8>,
    pub maxzoom: Option<u8>,

    /// `[west, south, east, north]`.
    pub bounds: Option<[f64; 4]>,

    pub legend: Option<String>,
    pub template: Option<String>,

    /// Everything else the server sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawTileJson {
    pub fn from_slice(body: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(crate::jsonp::strip_padding(body))?)
    }
}

/// TileJSON after normalization. There is no way back to [`RawTileJson`], so a document cannot
/// be normalized twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileJson {
    pub id: String,
    pub center: Center,
    pub zoom: f64,

    /// Only documents with an identifier have a thumbnail.
    pub thumbnail: Option<String>,
    pub data: Vec<String>,
    pub tilejson: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub attribution: Option<String>,
    pub version: Option<String>,
    pub scheme: Scheme,
    pub tiles: Vec<String>,
    pub grids: Vec<String>,
    pub minzoom: u8,
    pub maxzoom: u8,
    pub bounds: Option<[f64; 4]>,
    pub legend: Option<String>,
    pub template: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TileJson {
    /// Split `center` into a named center and a zoom level, and compute the thumbnail URL.
    pub fn normalize(raw: RawTileJson, base_url: &str) -> Result<Self, Error> {
        let Some([lon, lat, zoom]) = raw.center else {
            return Err(Error::MissingCenter { id: raw.id });
        };

        Ok(Self {
            thumbnail: (!raw.id.is_empty()).then(|| thumbnail_url(&raw.id, base_url)),
            id: raw.id,
            center: Center { lat, lon },
            zoom,
            data: raw
                .data
                .map(Vec::from)
                .unwrap_or_default()
                .into_iter()
                .filter(|url| !url.is_empty())
                .collect(),
            tilejson: raw.tilejson,
            name: raw.name,
            description: raw.description,
            attribution: raw.attribution,
            version: raw.version,
            scheme: raw.scheme.unwrap_or_default(),
            tiles: raw.tiles,
            grids: raw.grids,
            minzoom: raw.minzoom.unwrap_or(0),
            maxzoom: raw.maxzoom.unwrap_or(22),
            bounds: raw.bounds,
            legend: raw.legend,
            template: raw.template,
            extra: raw.extra,
        })
    }

    pub fn extent(&self) -> Option<Extent> {
        self.bounds.map(|[west, south, east, north]| {
            Extent::new(
                geo_types::coord! { x: west, y: south },
                geo_types::coord! { x: east, y: north },
            )
        })
    }
}
