use std::fmt;

use crate::loader::Loaded;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("'{url}' responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid TileJSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("TileJSON '{id}' has no center")]
    MissingCenter { id: String },

    #[error("Could not load markers: {0}")]
    Markers(String),
}

/// Failure of a single TileJSON load.
pub enum LoadError<T, M> {
    /// The document itself could not be fetched or understood. Nothing was built.
    Document(Error),

    /// The document was normalized and its tile layer built, but loading the markers failed.
    /// `partial.markers` is always `None`.
    Markers { partial: Loaded<T, M>, error: Error },
}

impl<T, M> LoadError<T, M> {
    pub fn error(&self) -> &Error {
        match self {
            Self::Document(error) | Self::Markers { error, .. } => error,
        }
    }

    /// Whatever got loaded before the failure.
    pub fn partial(&self) -> Option<&Loaded<T, M>> {
        match self {
            Self::Document(_) => None,
            Self::Markers { partial, .. } => Some(partial),
        }
    }

    pub fn into_partial(self) -> Option<Loaded<T, M>> {
        match self {
            Self::Document(_) => None,
            Self::Markers { partial, .. } => Some(partial),
        }
    }
}

impl<T, M> From<Error> for LoadError<T, M> {
    fn from(error: Error) -> Self {
        Self::Document(error)
    }
}

impl<T, M> fmt::Display for LoadError<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(error) => error.fmt(f),
            Self::Markers { partial, error } => {
                write!(f, "{} (TileJSON '{}')", error, partial.tilejson.id)
            }
        }
    }
}

// Layers are opaque, so they are not part of the output.
impl<T, M> fmt::Debug for LoadError<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(error) => f.debug_tuple("Document").field(error).finish(),
            Self::Markers { partial, error } => f
                .debug_struct("Markers")
                .field("id", &partial.tilejson.id)
                .field("error", error)
                .finish(),
        }
    }
}

impl<T, M> std::error::Error for LoadError<T, M> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error())
    }
}
