//! Loading TileJSON documents and everything they describe.

use std::sync::Arc;

use futures::future::join_all;

use crate::{
    Error, Fetch, LoadError, Mapbox,
    markers::MarkerLayerFactory,
    resolve::resolve,
    tilejson::{RawTileJson, TileJson},
    tiles::TileLayerFactory,
};

/// Normalized TileJSON together with the layers built out of it.
#[derive(Debug)]
pub struct Loaded<T, M> {
    pub tilejson: TileJson,
    pub layer: Arc<T>,

    /// Present only if the TileJSON had `data`.
    pub markers: Option<Arc<M>>,
}

pub type LoadResult<T, M> = Result<Loaded<T, M>, LoadError<T, M>>;

/// Either one TileJSON URL (or bare identifier), or many of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Sources {
    fn from(url: &str) -> Self {
        Self::One(url.to_owned())
    }
}

impl From<String> for Sources {
    fn from(url: String) -> Self {
        Self::One(url)
    }
}

impl<S: Into<String>> From<Vec<S>> for Sources {
    fn from(urls: Vec<S>) -> Self {
        Self::Many(urls.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Sources {
    fn from(urls: [S; N]) -> Self {
        Self::Many(urls.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Sources {
    fn from(urls: &[S]) -> Self {
        Self::Many(urls.iter().map(|url| url.as_ref().to_owned()).collect())
    }
}

impl<F, T, M, P> Mapbox<F, T, M, P>
where
    F: Fetch,
    T: TileLayerFactory,
    M: MarkerLayerFactory,
{
    /// Fetch and normalize a single TileJSON, then build its tile layer and, if it has `data`,
    /// its marker layer.
    pub async fn load(&self, url: &str) -> LoadResult<T::Layer, M::Layer> {
        let url = resolve(url, &self.config.base_url);
        log::debug!("Loading TileJSON from {url}.");

        let body = self.fetch.fetch(&url).await?;
        let raw = RawTileJson::from_slice(&body)?;
        let tilejson = TileJson::normalize(raw, &self.config.base_url)?;
        let layer = Arc::new(self.tile_layer.tile_layer(&tilejson));

        if tilejson.data.is_empty() {
            return Ok(Loaded {
                tilejson,
                layer,
                markers: None,
            });
        }

        let mut markers = self.marker_layer.marker_layer();
        match self.load_markers(&mut markers, &tilejson.data).await {
            Ok(()) => {
                self.marker_layer.interact(&mut markers);
                Ok(Loaded {
                    tilejson,
                    layer,
                    markers: Some(Arc::new(markers)),
                })
            }
            Err(error) => Err(LoadError::Markers {
                partial: Loaded {
                    tilejson,
                    layer,
                    markers: None,
                },
                error,
            }),
        }
    }

    async fn load_markers(&self, markers: &mut M::Layer, urls: &[String]) -> Result<(), Error> {
        for url in urls {
            log::debug!("Loading markers from {url}.");
            self.marker_layer
                .load(markers, url)
                .await
                .map_err(|e| Error::Markers(format!("{url}: {e}")))?;
        }
        Ok(())
    }

    /// Load all `urls` concurrently. Results come in the same order as `urls`, regardless of which
    /// download finished first.
    pub async fn load_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<LoadResult<T::Layer, M::Layer>> {
        join_all(urls.iter().map(|url| self.load(url.as_ref()))).await
    }

    /// [`Mapbox::load`] or [`Mapbox::load_all`], depending on what was given.
    pub async fn load_sources(
        &self,
        sources: impl Into<Sources>,
    ) -> Vec<LoadResult<T::Layer, M::Layer>> {
        match sources.into() {
            Sources::One(url) => vec![self.load(&url).await],
            Sources::Many(urls) => self.load_all(&urls).await,
        }
    }
}
