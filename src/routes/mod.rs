// ABOUTME: Route module organization for the Basecamp content server HTTP endpoints
// ABOUTME: Public reads, admin mutations, and health checks as separate route groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Basecamp content server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the collection repository.

/// Admin collection management routes
pub mod admin;
/// Public collection read routes
pub mod collections;
/// Health check routes
pub mod health;

/// Admin route handlers
pub use admin::AdminRoutes;
/// Public collection route handlers
pub use collections::CollectionRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
