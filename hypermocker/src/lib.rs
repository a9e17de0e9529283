//! Minimal HTTP server for tests, which lets the test decide when and how each anticipated
//! request gets answered.

use http_body_util::Full;
pub use hyper;
use hyper::{Request, Response, body::Incoming, server::conn::http1, service::Service};
pub use hyper::{StatusCode, body::Bytes, http::request::Parts};
use hyper_util::rt::TokioIo;
use std::{
    collections::HashMap,
    future::Future,
    net::SocketAddr,
    pin::Pin,
    sync::{Arc, Mutex},
};
use tokio::{net::TcpListener, sync::oneshot};

type Reply = (StatusCode, Bytes);

/// Server-side half of an anticipation.
struct Slot {
    request_tx: oneshot::Sender<Parts>,
    reply_rx: oneshot::Receiver<Reply>,
}

#[derive(Default)]
struct State {
    /// Paths announced with [`Server::anticipate`], before the request comes.
    anticipated: HashMap<String, Slot>,

    unexpected: Vec<String>,
}

pub struct Server {
    port: u16,
    state: Arc<Mutex<State>>,
}

impl Server {
    /// Create new [`Server`], and bind it to a random port.
    pub async fn bind() -> Server {
        let state = Arc::new(Mutex::new(State::default()));

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr).await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let state_clone = state.clone();
        tokio::spawn(async move {
            loop {
                let (stream, _) = listener.accept().await.unwrap();
                let io = TokioIo::new(stream);

                let state = state_clone.clone();
                tokio::task::spawn(async move {
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(io, Connection { state })
                        .await
                    {
                        log::debug!("Connection closed: {e}.");
                    }
                });
            }
        });

        Server { port, state }
    }

    /// Base URL of this server, without the trailing slash.
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Announce that a request for `path` is going to come.
    pub async fn anticipate(&self, path: impl Into<String>) -> Anticipated {
        let path = path.into();
        log::info!("Anticipating '{path}'.");

        let (request_tx, request_rx) = oneshot::channel();
        let (reply_tx, reply_rx) = oneshot::channel();

        self.state.lock().unwrap().anticipated.insert(
            path.clone(),
            Slot {
                request_tx,
                reply_rx,
            },
        );

        Anticipated {
            path,
            request_rx: Some(request_rx),
            reply_tx,
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }

        let state = self.state.lock().unwrap();
        if !state.unexpected.is_empty() {
            panic!("there are unexpected requests: {:?}", state.unexpected);
        }
    }
}

/// Test-side half of an anticipation.
pub struct Anticipated {
    path: String,
    request_rx: Option<oneshot::Receiver<Parts>>,
    reply_tx: oneshot::Sender<Reply>,
}

impl Anticipated {
    /// Wait until the anticipated request arrives.
    pub async fn expect(&mut self) -> Parts {
        log::info!("Waiting for '{}'.", self.path);
        self.request_rx
            .take()
            .expect("request was already expected")
            .await
            .unwrap()
    }

    /// Respond with `200 OK` and given payload.
    pub async fn respond(self, payload: impl Into<Bytes>) {
        self.reply(StatusCode::OK, payload.into());
    }

    /// Respond with given status and an empty body.
    pub async fn respond_with_status(self, status: StatusCode) {
        self.reply(status, Bytes::new());
    }

    fn reply(self, status: StatusCode, payload: Bytes) {
        log::info!("Responding to '{}' with {status}.", self.path);
        // Client might have given up already.
        let _ = self.reply_tx.send((status, payload));
    }
}

struct Connection {
    state: Arc<Mutex<State>>,
}

impl Service<Request<Incoming>> for Connection {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, request: Request<Incoming>) -> Self::Future {
        log::info!("Incoming request '{}'.", request.uri());
        let state = self.state.clone();
        Box::pin(async move {
            let path = request.uri().path().to_owned();
            let slot = state.lock().unwrap().anticipated.remove(&path);

            let Some(slot) = slot else {
                log::warn!("Unexpected '{}'.", request.uri());
                state
                    .lock()
                    .unwrap()
                    .unexpected
                    .push(request.uri().to_string());
                return Ok(Response::builder()
                    .status(StatusCode::IM_A_TEAPOT)
                    .body(Full::new(Bytes::from_static(b"unexpected")))
                    .unwrap());
            };

            let (parts, _) = request.into_parts();
            // Test might not be interested in the request itself.
            let _ = slot.request_tx.send(parts);

            let (status, payload) = slot
                .reply_rx
                .await
                .unwrap_or((StatusCode::SERVICE_UNAVAILABLE, Bytes::new()));

            Ok(Response::builder()
                .status(status)
                .body(Full::new(payload))
                .unwrap())
        })
    }
}
