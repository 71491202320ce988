// ABOUTME: Default storefront content seeded into empty collections
// ABOUTME: Content ships as embedded JSON and goes through the regular validated create path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default content seeding
//!
//! Used by the `seed-content` binary and by `SEED_ON_STARTUP`. A
//! collection that already holds any row is skipped entirely, so seeding
//! never duplicates or reorders administrator content.
//!
//! ```bash
//! cargo run --bin seed-content -- --database-url sqlite:./data/basecamp.db
//! ```

use super::Database;
use crate::errors::AppResult;
use basecamp_core::models::{CollectionKind, ItemPayload};
use serde::{Deserialize, Serialize};
use tracing::info;

const DEFAULT_CONTENT_JSON: &str = include_str!("default_content.json");

/// Seed items for one collection
#[derive(Debug, Deserialize)]
struct DefaultCollection {
    collection: CollectionKind,
    items: Vec<ItemPayload>,
}

/// What a seeding run did, per collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Collections that were empty and received default items
    pub seeded: Vec<(CollectionKind, usize)>,
    /// Collections left alone because they already had content
    pub skipped: Vec<CollectionKind>,
}

impl SeedReport {
    /// Total number of items created
    #[must_use]
    pub fn created(&self) -> usize {
        self.seeded.iter().map(|(_, count)| count).sum()
    }
}

fn default_collections() -> AppResult<Vec<DefaultCollection>> {
    Ok(serde_json::from_str(DEFAULT_CONTENT_JSON)?)
}

impl Database {
    /// Fill every empty collection with the default content
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded content is malformed, fails
    /// validation, or cannot be written
    pub async fn seed_defaults(&self) -> AppResult<SeedReport> {
        let manager = self.collections();
        let mut report = SeedReport::default();

        for default in default_collections()? {
            let existing = manager.count(default.collection).await?;
            if existing > 0 {
                info!(
                    collection = %default.collection,
                    existing,
                    "Collection already has content, skipping seed"
                );
                report.skipped.push(default.collection);
                continue;
            }

            for payload in &default.items {
                manager.create(default.collection, payload).await?;
            }
            info!(
                collection = %default.collection,
                created = default.items.len(),
                "Seeded default content"
            );
            report.seeded.push((default.collection, default.items.len()));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basecamp_core::schema::CollectionSchema;

    #[test]
    fn test_default_content_covers_every_collection() {
        let defaults = default_collections().unwrap();
        for kind in CollectionKind::ALL {
            assert!(
                defaults.iter().any(|d| d.collection == kind && !d.items.is_empty()),
                "no default content for {kind}"
            );
        }
    }

    #[test]
    fn test_default_content_is_valid() {
        for default in default_collections().unwrap() {
            let schema = CollectionSchema::for_kind(default.collection);
            for payload in &default.items {
                schema.validate_create(payload).unwrap();
            }
        }
    }
}
