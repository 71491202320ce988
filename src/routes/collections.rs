// ABOUTME: Public read routes for the ordered content collections
// ABOUTME: Serves active items in display order to the storefront
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Public collection routes
//!
//! Read-only. Mutations are only mounted under the admin prefix.

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use basecamp_core::models::CollectionKind;
use std::sync::Arc;

/// Public collection routes handler
pub struct CollectionRoutes;

impl CollectionRoutes {
    /// Create the public read routes, mounted under `/api`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/:collection", get(Self::handle_list_active))
            .with_state(resources)
    }

    /// Handle GET /api/:collection - Active items in display order
    async fn handle_list_active(
        State(resources): State<Arc<ServerResources>>,
        Path(collection): Path<String>,
    ) -> Result<Response, AppError> {
        let kind: CollectionKind = collection.parse()?;
        let items = resources.collections().list_active(kind).await?;
        Ok((StatusCode::OK, Json(items)).into_response())
    }
}
