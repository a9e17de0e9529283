use crate::{
    position::{Center, Extent},
    tilejson::{Scheme, TileJson},
};

/// Identifies the tile in the tile grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct TileId {
    /// X number of the tile.
    pub x: u32,

    /// Y number of the tile.
    pub y: u32,

    /// Zoom level, where 0 means no zoom.
    /// See: <https://wiki.openstreetmap.org/wiki/Zoom_levels>
    pub zoom: u8,
}

/// Number of tiles in each direction at given zoom.
fn total_tiles(zoom: u8) -> u32 {
    2u32.saturating_pow(zoom.into())
}

impl TileId {
    pub fn valid(&self) -> bool {
        self.x < total_tiles(self.zoom) && self.y < total_tiles(self.zoom)
    }
}

/// Builds a tile layer out of freshly normalized TileJSON.
pub trait TileLayerFactory {
    type Layer;

    fn tile_layer(&self, tilejson: &TileJson) -> Self::Layer;
}

/// Raster tile layer described by TileJSON. It does not download anything by itself, it only
/// knows where the tiles are.
#[derive(Debug)]
pub struct TileLayer {
    id: String,
    templates: Vec<String>,
    scheme: Scheme,
    minzoom: u8,
    maxzoom: u8,
    attribution: Option<String>,
    center: Center,
    zoom: f64,
    extent: Option<Extent>,
}

impl TileLayer {
    pub fn new(tilejson: &TileJson) -> Self {
        Self {
            id: tilejson.id.clone(),
            templates: tilejson.tiles.clone(),
            scheme: tilejson.scheme,
            minzoom: tilejson.minzoom,
            maxzoom: tilejson.maxzoom,
            attribution: tilejson.attribution.clone(),
            center: tilejson.center,
            zoom: tilejson.zoom,
            extent: tilejson.extent(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    /// Default center of this layer.
    pub fn center(&self) -> Center {
        self.center
    }

    /// Default zoom of this layer, clamped to the zoom range it has tiles for.
    pub fn zoom(&self) -> f64 {
        // Not `clamp`, which panics on a malformed range.
        self.zoom
            .max(f64::from(self.minzoom))
            .min(f64::from(self.maxzoom))
    }

    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    /// URL of given tile, or `None` if this layer does not have it.
    pub fn tile_url(&self, tile_id: TileId) -> Option<String> {
        if !tile_id.valid() || !(self.minzoom..=self.maxzoom).contains(&tile_id.zoom) {
            return None;
        }

        // Spread the requests over the mirrors.
        let mirrors = self.templates.len().max(1) as u64;
        let index = (u64::from(tile_id.x) + u64::from(tile_id.y)) % mirrors;
        let template = self.templates.get(usize::try_from(index).ok()?)?;

        let y = match self.scheme {
            Scheme::Xyz => tile_id.y,
            Scheme::Tms => total_tiles(tile_id.zoom) - 1 - tile_id.y,
        };

        Some(
            template
                .replace("{z}", &tile_id.zoom.to_string())
                .replace("{x}", &tile_id.x.to_string())
                .replace("{y}", &y.to_string()),
        )
    }
}

/// Creates [`TileLayer`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct TileLayers;

impl TileLayerFactory for TileLayers {
    type Layer = TileLayer;

    fn tile_layer(&self, tilejson: &TileJson) -> TileLayer {
        log::trace!("Creating tile layer for '{}'.", tilejson.id);
        TileLayer::new(tilejson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_BASE_URL, tilejson::RawTileJson};
    use approx::assert_relative_eq;

    fn tilejson(json: &str) -> TileJson {
        TileJson::normalize(
            RawTileJson::from_slice(json.as_bytes()).unwrap(),
            DEFAULT_BASE_URL,
        )
        .unwrap()
    }

    #[test]
    fn tile_url_rotates_templates() {
        let layer = TileLayer::new(&tilejson(
            r#"{
                "id": "a",
                "center": [0, 0, 1],
                "tiles": ["http://a.x/{z}/{x}/{y}.png", "http://b.x/{z}/{x}/{y}.png"]
            }"#,
        ));

        assert_eq!(
            layer.tile_url(TileId { x: 1, y: 2, zoom: 3 }).as_deref(),
            Some("http://b.x/3/1/2.png")
        );
        assert_eq!(
            layer.tile_url(TileId { x: 2, y: 2, zoom: 3 }).as_deref(),
            Some("http://a.x/3/2/2.png")
        );
    }

    #[test]
    fn tile_url_at_deep_zoom() {
        let layer = TileLayer::new(&tilejson(
            r#"{
                "id": "a",
                "center": [0, 0, 1],
                "maxzoom": 32,
                "tiles": ["a/{z}/{x}/{y}", "b/{z}/{x}/{y}"]
            }"#,
        ));

        let x = u32::MAX - 1;
        let y = u32::MAX - 2;
        assert_eq!(
            layer.tile_url(TileId { x, y, zoom: 32 }),
            Some(format!("b/32/{x}/{y}"))
        );
    }

    #[test]
    fn tile_url_flips_y_for_tms() {
        let layer = TileLayer::new(&tilejson(
            r#"{"id": "a", "center": [0, 0, 1], "scheme": "tms", "tiles": ["{z}/{x}/{y}"]}"#,
        ));

        assert_eq!(
            layer.tile_url(TileId { x: 1, y: 2, zoom: 3 }).as_deref(),
            Some("3/1/5")
        );
    }

    #[test]
    fn no_tile_url_outside_of_the_grid_or_zoom_range() {
        let layer = TileLayer::new(&tilejson(
            r#"{"id": "a", "center": [0, 0, 1], "minzoom": 2, "maxzoom": 5, "tiles": ["{z}/{x}/{y}"]}"#,
        ));

        // There only one tile at zoom 0.
        assert!(layer.tile_url(TileId { x: 2, y: 2, zoom: 0 }).is_none());
        assert!(layer.tile_url(TileId { x: 0, y: 0, zoom: 1 }).is_none());
        assert!(layer.tile_url(TileId { x: 0, y: 0, zoom: 6 }).is_none());
        assert!(layer.tile_url(TileId { x: 0, y: 0, zoom: 2 }).is_some());
    }

    #[test]
    fn no_tile_url_without_templates() {
        let layer = TileLayer::new(&tilejson(r#"{"id": "a", "center": [0, 0, 1]}"#));
        assert!(layer.tile_url(TileId { x: 0, y: 0, zoom: 0 }).is_none());
    }

    #[test]
    fn zoom_is_clamped() {
        let layer = TileLayer::new(&tilejson(
            r#"{"id": "a", "center": [0, 0, 9], "minzoom": 2, "maxzoom": 5}"#,
        ));
        assert_relative_eq!(layer.zoom(), 5.0);
    }

    #[test]
    fn factory_keeps_metadata() {
        let layer = TileLayers.tile_layer(&tilejson(
            r#"{"id": "a", "center": [1, 2, 3], "attribution": "me", "bounds": [-1, -2, 3, 4]}"#,
        ));
        assert_eq!(layer.id(), "a");
        assert_eq!(layer.attribution(), Some("me"));
        assert_relative_eq!(layer.center().lat, 2.0);
        let extent = layer.extent().expect("bounds were given");
        assert_relative_eq!(extent.min().x, -1.0);
        assert_relative_eq!(extent.max().y, 4.0);
    }
}
