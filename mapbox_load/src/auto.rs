use std::sync::Arc;

use crate::{
    Fetch, LoadError, Mapbox,
    loader::{LoadResult, Sources},
    map::{AutoFit, Layer, MapFactory},
    markers::MarkerLayerFactory,
    tiles::TileLayerFactory,
};

/// Map assembled by [`Mapbox::auto`], together with everything that was loaded for it.
pub struct Assembled<Map, T, M> {
    pub map: Map,

    /// One entry per requested source, in the same order.
    pub options: Vec<LoadResult<T, M>>,
}

impl<Map, T, M> Assembled<Map, T, M> {
    /// First failure, if any source failed to load.
    pub fn error(&self) -> Option<&LoadError<T, M>> {
        self.options.iter().find_map(|option| option.as_ref().err())
    }
}

/// Put all tile layers below all marker layers, keeping the order within each group.
///
/// Sources which failed to load their markers still contribute their tile layer. Sources which
/// failed altogether contribute nothing.
pub fn stack<T, M>(options: &[LoadResult<T, M>]) -> Vec<Layer<T, M>> {
    let mut tiles = Vec::new();
    let mut markers = Vec::new();

    for option in options {
        let loaded = match option {
            Ok(loaded) => loaded,
            Err(error) => {
                log::warn!("{error}");
                match error.partial() {
                    Some(partial) => partial,
                    None => continue,
                }
            }
        };

        tiles.push(Layer::Tile(Arc::clone(&loaded.layer)));
        if let Some(layer) = &loaded.markers {
            markers.push(Layer::Markers(Arc::clone(layer)));
        }
    }

    tiles.extend(markers);
    tiles
}

impl<F, T, M, P> Mapbox<F, T, M, P>
where
    F: Fetch,
    T: TileLayerFactory,
    M: MarkerLayerFactory,
    P: MapFactory<T::Layer, M::Layer>,
{
    /// Load given TileJSON source(s), and put everything they describe on a new map living in
    /// `container`. The map is fitted to its content.
    pub async fn auto(
        &self,
        container: &str,
        sources: impl Into<Sources>,
    ) -> Assembled<P::Map, T::Layer, M::Layer> {
        let options = self.load_sources(sources).await;

        let mut map = self.map.create(container, stack(&options));
        map.auto();

        Assembled { map, options }
    }
}
