use std::sync::Arc;

use crate::{
    markers::Markers,
    position::{Center, Extent, union},
    tiles::TileLayer,
};

/// One entry of the map's layer stack.
#[derive(Debug)]
pub enum Layer<T, M> {
    Tile(Arc<T>),
    Markers(Arc<M>),
}

impl<T, M> Clone for Layer<T, M> {
    fn clone(&self) -> Self {
        match self {
            Self::Tile(layer) => Self::Tile(Arc::clone(layer)),
            Self::Markers(layer) => Self::Markers(Arc::clone(layer)),
        }
    }
}

/// Content which a map can be fitted to.
pub trait Bounded {
    fn extent(&self) -> Option<Extent>;

    /// Preferred center and zoom, if there is one.
    fn view(&self) -> Option<(Center, f64)> {
        None
    }
}

impl Bounded for TileLayer {
    fn extent(&self) -> Option<Extent> {
        TileLayer::extent(self)
    }

    fn view(&self) -> Option<(Center, f64)> {
        Some((self.center(), self.zoom()))
    }
}

impl Bounded for Markers {
    fn extent(&self) -> Option<Extent> {
        Markers::extent(self)
    }
}

/// Map which can adjust its viewport to whatever it shows.
pub trait AutoFit {
    fn auto(&mut self);
}

/// Builds a map out of the container it lives in and an ordered stack of layers, bottom first.
pub trait MapFactory<T, M> {
    type Map: AutoFit;

    fn create(&self, container: &str, layers: Vec<Layer<T, M>>) -> Self::Map;
}

/// What part of the world is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub center: Option<Center>,
    pub zoom: Option<f64>,

    /// Extent of everything on the map.
    pub extent: Option<Extent>,
}

#[derive(Debug)]
pub struct Map<T = TileLayer, M = Markers> {
    container: String,
    layers: Vec<Layer<T, M>>,
    viewport: Viewport,
}

impl<T, M> Map<T, M> {
    pub fn new(container: impl Into<String>, layers: Vec<Layer<T, M>>) -> Self {
        Self {
            container: container.into(),
            layers,
            viewport: Viewport::default(),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// Layers, bottom first.
    pub fn layers(&self) -> &[Layer<T, M>] {
        &self.layers
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn tiles(&self) -> impl Iterator<Item = &T> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Tile(tile) => Some(tile.as_ref()),
            Layer::Markers(_) => None,
        })
    }

    fn markers(&self) -> impl Iterator<Item = &M> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Markers(markers) => Some(markers.as_ref()),
            Layer::Tile(_) => None,
        })
    }
}

impl<T: Bounded, M: Bounded> AutoFit for Map<T, M> {
    /// Center on the markers if there are any, on the first tile layer otherwise. Zoom is always
    /// taken from the first tile layer.
    fn auto(&mut self) {
        let tile_view = self.tiles().find_map(Bounded::view);
        let markers_extent = self.markers().filter_map(Bounded::extent).reduce(union);

        let extent = self
            .tiles()
            .filter_map(Bounded::extent)
            .chain(markers_extent)
            .reduce(union);

        let center = markers_extent
            .map(|extent| Center {
                lat: extent.center().y,
                lon: extent.center().x,
            })
            .or(tile_view.map(|(center, _)| center));

        self.viewport = Viewport {
            center,
            zoom: tile_view.map(|(_, zoom)| zoom),
            extent,
        };

        log::debug!("'{}' fitted to {:?}.", self.container, self.viewport);
    }
}

/// Creates [`Map`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct Maps;

impl<T: Bounded, M: Bounded> MapFactory<T, M> for Maps {
    type Map = Map<T, M>;

    fn create(&self, container: &str, layers: Vec<Layer<T, M>>) -> Map<T, M> {
        Map::new(container, layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_BASE_URL, RawTileJson, TileJson};
    use approx::assert_relative_eq;

    fn tile_layer(json: &str) -> Arc<TileLayer> {
        let tilejson = TileJson::normalize(
            RawTileJson::from_slice(json.as_bytes()).unwrap(),
            DEFAULT_BASE_URL,
        )
        .unwrap();
        Arc::new(TileLayer::new(&tilejson))
    }

    fn markers(geojson: &str) -> Arc<Markers> {
        let mut markers = Markers::default();
        markers.add_geojson(geojson.as_bytes()).unwrap();
        Arc::new(markers)
    }

    #[test]
    fn empty_map_has_no_viewport() {
        let mut map: Map = Map::new("map", Vec::new());
        map.auto();
        assert_eq!(map.viewport(), &Viewport::default());
        assert_eq!(map.container(), "map");
    }

    #[test]
    fn without_markers_first_tile_layer_decides() {
        let mut map: Map = Map::new(
            "map",
            vec![
                Layer::Tile(tile_layer(
                    r#"{"id": "a", "center": [17.0, 51.0, 10], "bounds": [16, 50, 18, 52]}"#,
                )),
                Layer::Tile(tile_layer(
                    r#"{"id": "b", "center": [0, 0, 3], "bounds": [-1, -1, 1, 1]}"#,
                )),
            ],
        );
        map.auto();

        let viewport = map.viewport();
        let center = viewport.center.expect("there is a tile layer");
        assert_relative_eq!(center.lon, 17.0);
        assert_relative_eq!(center.lat, 51.0);
        assert_eq!(viewport.zoom, Some(10.0));

        let extent = viewport.extent.expect("layers have bounds");
        assert_relative_eq!(extent.min().x, -1.0);
        assert_relative_eq!(extent.max().y, 52.0);
    }

    #[test]
    fn markers_decide_the_center() {
        let mut map: Map = Map::new(
            "map",
            vec![
                Layer::Tile(tile_layer(r#"{"id": "a", "center": [0, 0, 4]}"#)),
                Layer::Markers(markers(
                    r#"{"features": [
                        {"geometry": {"type": "Point", "coordinates": [10, 50]}},
                        {"geometry": {"type": "Point", "coordinates": [20, 54]}}
                    ]}"#,
                )),
            ],
        );
        map.auto();

        let viewport = map.viewport();
        let center = viewport.center.expect("there are markers");
        assert_relative_eq!(center.lon, 15.0);
        assert_relative_eq!(center.lat, 52.0);
        assert_eq!(viewport.zoom, Some(4.0));
    }
}
