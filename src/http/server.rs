//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router that forwards every request to the dispatcher
//! - Wire up middleware (tracing, timeout)
//! - Translate dispatcher results into HTTP responses
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use percent_encoding::percent_decode_str;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::dispatch::{Dispatcher, Response as Outcome};

/// Dispatcher whose handlers see the request head as their seed.
pub type HttpDispatcher = Dispatcher<Parts>;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<HttpDispatcher>,
}

/// HTTP transport in front of a built dispatcher.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server. The dispatcher is frozen from here on.
    pub fn new(config: ServerConfig, dispatcher: HttpDispatcher) -> Self {
        let state = AppState {
            dispatcher: Arc::new(dispatcher),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config().timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Hand the request to the dispatcher and write back its result.
async fn dispatch_handler(State(state): State<AppState>, request: Request) -> Response {
    let (parts, _body) = request.into_parts();

    // Routes see the decoded path, so `%20` in a variable arrives as a space.
    let path = match percent_decode_str(parts.uri.path()).decode_utf8() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Request path is not valid UTF-8");
            return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
        }
    };

    let outcome = state.dispatcher.handle(parts.method.as_str(), &path, &parts);
    into_http_response(outcome)
}

/// A zero status means no handler responded; it is not writable on the wire
/// and goes out as 500, like any other status outside 100..=999.
fn into_http_response(outcome: Outcome) -> Response {
    match StatusCode::from_u16(outcome.status) {
        Ok(status) => (status, outcome.body).into_response(),
        Err(_) => {
            tracing::warn!(status = outcome.status, "Handler chain produced no writable status");
            (StatusCode::INTERNAL_SERVER_ERROR, outcome.body).into_response()
        }
    }
}
