//! Fetching remote documents. Concrete HTTP client depends on the target.

use std::future::Future;

use bytes::Bytes;
use reqwest::header::USER_AGENT;
use reqwest_middleware::ClientWithMiddleware;

use crate::{Error, config::HttpOptions};

#[cfg(not(target_arch = "wasm32"))]
use native::http_client;

#[cfg(target_arch = "wasm32")]
use web::http_client;

/// Source of remote documents: TileJSON and marker data.
pub trait Fetch {
    #[cfg(target_arch = "wasm32")]
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Bytes, Error>>;

    #[cfg(not(target_arch = "wasm32"))]
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Bytes, Error>> + Send;
}

/// [`Fetch`] implementation talking HTTP.
#[derive(Clone)]
pub struct HttpFetch {
    client: ClientWithMiddleware,
    options: HttpOptions,
}

impl HttpFetch {
    pub fn new(options: HttpOptions) -> Self {
        Self {
            client: http_client(&options),
            options,
        }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        Self::new(HttpOptions::default())
    }
}

impl Fetch for HttpFetch {
    async fn fetch(&self, url: &str) -> Result<Bytes, Error> {
        let mut request = self.client.get(url);

        if let Some(user_agent) = &self.options.user_agent {
            request = request.header(USER_AGENT, user_agent.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        log::debug!("Fetched {url}: {:?}.", response.status());

        if !response.status().is_success() {
            return Err(Error::Status {
                url: url.to_owned(),
                status: response.status(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::config::HttpOptions;
    use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

    pub fn http_client(_http_options: &HttpOptions) -> ClientWithMiddleware {
        ClientBuilder::new(reqwest::Client::new()).build()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use crate::config::HttpOptions;
    use http_cache_reqwest::{CACacheManager, Cache, CacheMode, HttpCache, HttpCacheOptions};
    use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

    pub fn http_client(http_options: &HttpOptions) -> ClientWithMiddleware {
        let builder = ClientBuilder::new(reqwest::Client::new());

        if let Some(path) = &http_options.cache {
            builder
                .with(Cache(HttpCache {
                    mode: CacheMode::Default,
                    manager: CACacheManager::new(path.clone(), true),
                    options: HttpCacheOptions::default(),
                }))
                .build()
        } else {
            builder.build()
        }
    }
}
