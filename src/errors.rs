// ABOUTME: Unified error handling re-exported from the basecamp-core crate
// ABOUTME: AppError, ErrorCode, and the JSON error body used by every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `basecamp-core` so models and schemas can raise them
//! without depending on the server. With the `http-response` feature the
//! core crate implements axum's `IntoResponse` for [`AppError`], and with
//! `database-errors` it converts `sqlx::Error`.

pub use basecamp_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, FieldError,
};
