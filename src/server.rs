// ABOUTME: HTTP server assembly: routes, middleware stack, and graceful shutdown
// ABOUTME: Connects the database, optionally seeds it, and serves until a shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Server
//!
//! Middleware order, outermost first: request id assignment, request
//! tracing, request id propagation, CORS, timeout. The body limit is
//! enforced by the JSON extractor through `DefaultBodyLimit`.

use crate::config::environment::ServerConfig;
use crate::constants::{headers, paths};
use crate::database::Database;
use crate::errors::AppError;
use crate::middleware::{create_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{AdminRoutes, CollectionRoutes, HealthRoutes};
use anyhow::{anyhow, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Response, StatusCode, Uri};
use axum::{serve, Router};
use std::future::{self, Future};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, Span};

/// Build the full application router with its middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);
    let request_id = HeaderName::from_static(headers::REQUEST_ID);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .nest(paths::ADMIN_API, AdminRoutes::routes(Arc::clone(&resources)))
        .nest(paths::PUBLIC_API, CollectionRoutes::routes(resources))
        .fallback(handle_unknown_route)
        .layer(DefaultBodyLimit::max(config.http.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(create_request_span)
                        .on_response(record_response),
                )
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(setup_cors(&config))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.http.request_timeout,
                )),
        )
}

async fn handle_unknown_route(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

fn record_response<B>(response: &Response<B>, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    let duration_ms = latency.as_millis() as u64;
    span.record("status_code", status);
    span.record("duration_ms", duration_ms);
    info!(status, duration_ms, "Request completed");
}

/// Connect the database, seed it if configured, and serve until shutdown
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeded, or if the
/// listener cannot bind
pub async fn run(config: ServerConfig) -> Result<()> {
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    if config.database.seed_on_startup {
        let report = database
            .seed_defaults()
            .await
            .map_err(|e| anyhow!("Failed to seed default content: {e}"))?;
        info!(
            created = report.created(),
            skipped = report.skipped.len(),
            "Default content seeding finished"
        );
    }

    let address = config.bind_address();
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow!("Failed to bind {address}: {e}"))?;

    serve_until(listener, resources, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections
pub async fn serve_until<F>(
    listener: TcpListener,
    resources: Arc<ServerResources>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let database = Arc::clone(&resources.database);
    info!("HTTP server listening on http://{}", listener.local_addr()?);

    serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown)
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
