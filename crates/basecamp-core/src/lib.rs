// ABOUTME: Core types for the Basecamp content server
// ABOUTME: Foundation crate with error handling, collection models, and validation schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Basecamp Core
//!
//! Foundation crate shared by the server and its tools. It changes rarely,
//! which keeps incremental builds of the server crate cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the JSON error body
//! - **models**: collection kinds, ordered items, admin payloads
//! - **schema**: per-collection field rules, validation, and DDL

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Ordered content collection models
pub mod models;

/// Per-collection schemas and payload validation
pub mod schema;
