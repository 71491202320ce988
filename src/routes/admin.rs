// ABOUTME: Admin route handlers for managing the ordered content collections
// ABOUTME: Create, update, delete, and reorder items; every mutation names the collection to re-list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Admin collection routes
//!
//! Mounted under `/api/admin`. Successful mutations carry an
//! `x-invalidate-collection` header naming the collection whose listing
//! changed, so dashboards know to re-fetch it. Reorder responses also
//! return the new ordering directly.

use crate::constants::headers;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use basecamp_core::models::{CollectionKind, Direction, ItemPayload, OrderedItem};
use basecamp_core::schema::{CollectionSchema, FieldRule};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for the reorder endpoint
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReorderRequest {
    /// Swap with the previous (`up`) or next (`down`) item
    pub direction: Direction,
}

/// Response for the reorder endpoint
#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    /// Whether any order changed
    pub moved: bool,
    /// Id of the item the moved item traded places with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_with: Option<i64>,
    /// Full collection in its new order
    pub items: Vec<OrderedItem>,
}

/// Summary of one collection for the admin dashboard
#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    /// Path segment
    pub collection: CollectionKind,
    /// Human-readable label
    pub label: &'static str,
    /// Whether items can be hidden from the public site
    pub has_active_flag: bool,
    /// Content fields beyond the title, with their rules
    pub fields: &'static [FieldRule],
    /// Number of stored items
    pub count: i64,
}

/// Admin routes handler
pub struct AdminRoutes;

impl AdminRoutes {
    /// Create admin collection routes, mounted under `/api/admin`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/collections", get(Self::handle_list_collections))
            .route(
                "/:collection",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/:collection/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/:collection/:id/reorder", patch(Self::handle_reorder))
            .with_state(resources)
    }

    /// Parse the `:collection` and `:id` path segments
    ///
    /// A non-numeric id cannot name a stored item, so it is reported as
    /// not found rather than as a malformed request.
    fn parse_target(collection: &str, id: &str) -> Result<(CollectionKind, i64), AppError> {
        let kind: CollectionKind = collection.parse()?;
        let id = id
            .parse::<i64>()
            .map_err(|_| AppError::not_found(format!("{kind} item {id}")))?;
        Ok((kind, id))
    }

    /// Unwrap a JSON body, reporting malformed input as a 400 and an
    /// oversized body as a 413
    fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
        body.map(|Json(value)| value).map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::payload_too_large(rejection.body_text())
            } else {
                AppError::invalid_input(rejection.body_text())
            }
        })
    }

    /// Attach the invalidation header to a mutation response
    fn invalidating(kind: CollectionKind, status: StatusCode, body: impl IntoResponse) -> Response {
        (
            status,
            [(headers::INVALIDATE_COLLECTION, kind.as_str())],
            body,
        )
            .into_response()
    }

    /// Handle GET /api/admin/collections - Available collections and their schemas
    async fn handle_list_collections(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let manager = resources.collections();
        let mut summaries = Vec::with_capacity(CollectionKind::ALL.len());
        for kind in CollectionKind::ALL {
            let schema = CollectionSchema::for_kind(kind);
            summaries.push(CollectionSummary {
                collection: kind,
                label: kind.label(),
                has_active_flag: schema.has_active_flag,
                fields: schema.fields,
                count: manager.count(kind).await?,
            });
        }

        Ok((StatusCode::OK, Json(summaries)).into_response())
    }

    /// Handle GET /api/admin/:collection - All items, active or not
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(collection): Path<String>,
    ) -> Result<Response, AppError> {
        let kind: CollectionKind = collection.parse()?;
        let items = resources.collections().list(kind).await?;
        Ok((StatusCode::OK, Json(items)).into_response())
    }

    /// Handle POST /api/admin/:collection - Append a new item
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Path(collection): Path<String>,
        body: Result<Json<ItemPayload>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let kind: CollectionKind = collection.parse()?;
        let payload = Self::json_body(body)?;

        let item = resources.collections().create(kind, &payload).await?;

        Ok(Self::invalidating(kind, StatusCode::CREATED, Json(item)))
    }

    /// Handle GET /api/admin/:collection/:id - A single item
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path((collection, id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let (kind, id) = Self::parse_target(&collection, &id)?;
        let item = resources.collections().get(kind, id).await?;
        Ok((StatusCode::OK, Json(item)).into_response())
    }

    /// Handle PATCH /api/admin/:collection/:id - Partial update of content fields
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path((collection, id)): Path<(String, String)>,
        body: Result<Json<ItemPayload>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (kind, id) = Self::parse_target(&collection, &id)?;
        let payload = Self::json_body(body)?;

        let item = resources.collections().update(kind, id, &payload).await?;

        Ok(Self::invalidating(kind, StatusCode::OK, Json(item)))
    }

    /// Handle DELETE /api/admin/:collection/:id - Remove an item
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path((collection, id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let (kind, id) = Self::parse_target(&collection, &id)?;
        resources.collections().delete(kind, id).await?;
        Ok(Self::invalidating(kind, StatusCode::NO_CONTENT, ()))
    }

    /// Handle PATCH /api/admin/:collection/:id/reorder - Swap with a neighbour
    async fn handle_reorder(
        State(resources): State<Arc<ServerResources>>,
        Path((collection, id)): Path<(String, String)>,
        body: Result<Json<ReorderRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (kind, id) = Self::parse_target(&collection, &id)?;
        let request = Self::json_body(body)?;

        let manager = resources.collections();
        let outcome = manager.reorder(kind, id, request.direction).await?;
        let response = ReorderResponse {
            moved: outcome.moved(),
            swapped_with: outcome.swapped_with(),
            items: manager.list(kind).await?,
        };

        if response.moved {
            Ok(Self::invalidating(kind, StatusCode::OK, Json(response)))
        } else {
            Ok((StatusCode::OK, Json(response)).into_response())
        }
    }
}
