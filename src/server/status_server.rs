// src/server/status_server.rs

//! The HTTP endpoint that exposes status snapshots to dashboards.

use crate::core::{StatusAggregator, StatusError};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing::get};
use std::any::Any;
use std::future::Future;
use std::net::SocketAddr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Converts every domain error into a protocol response.
///
/// The body carries only the error's description, never a backtrace.
impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        warn!("Status request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Error: {self}"),
        )
            .into_response()
    }
}

/// Handles `GET /` by building and serializing a fresh snapshot.
///
/// A panicking host provider is reported like any other failure.
async fn status_handler(
    State(aggregator): State<StatusAggregator>,
) -> Result<Response, StatusError> {
    let snapshot = panic::catch_unwind(AssertUnwindSafe(|| aggregator.build()))
        .map_err(|payload| StatusError::Internal(panic_message(payload.as_ref())))??;
    let body = snapshot.to_json_pretty()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("host provider panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("host provider panicked: {msg}")
    } else {
        "host provider panicked".to_string()
    }
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Error: not found",
    )
}

/// Builds the router serving the status endpoint.
pub fn router(aggregator: StatusAggregator) -> Router {
    Router::new()
        .route("/", get(status_handler))
        .fallback(not_found)
        .with_state(aggregator)
}

/// A bound, not yet serving, status endpoint.
pub struct StatusServer {
    listener: TcpListener,
    app: Router,
}

impl StatusServer {
    /// Binds the listening socket.
    ///
    /// Failure is returned as `StatusError::Bind`; callers must treat it as fatal.
    pub async fn bind(
        host: &str,
        port: u16,
        aggregator: StatusAggregator,
    ) -> Result<Self, StatusError> {
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|e| StatusError::Bind {
                addr: format!("{host}:{port}"),
                source: Arc::new(e),
            })?;
        Ok(Self {
            listener,
            app: router(aggregator),
        })
    }

    /// The address actually bound, which differs from the requested one for port 0.
    pub fn local_addr(&self) -> Result<SocketAddr, StatusError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight requests.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), StatusError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("Status API listening on http://{}/", addr);

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Status API shut down.");
        Ok(())
    }
}
