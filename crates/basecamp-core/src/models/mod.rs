// ABOUTME: Data models for ordered content collections
// ABOUTME: Re-exports collection kinds, items, and request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod collection;
mod item;

pub use collection::{CollectionKind, Direction};
pub use item::{ContentField, ItemContent, ItemPayload, OrderedItem, ReorderOutcome};
