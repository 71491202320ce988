// ABOUTME: Ordered content item, its content fields, and the admin request payload
// ABOUTME: Shared by the repository, the validation schemas, and the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CollectionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content columns that only some collections carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentField {
    /// Image URL
    Image,
    /// Long-form description
    Description,
    /// Grouping category
    Category,
    /// Unique URL slug
    Slug,
    /// Secondary headline
    Subtitle,
    /// Link target (absolute URL or site path)
    Link,
}

impl ContentField {
    /// Every optional content field
    pub const ALL: [Self; 6] = [
        Self::Image,
        Self::Description,
        Self::Category,
        Self::Slug,
        Self::Subtitle,
        Self::Link,
    ];

    /// Column name, also the payload key
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Description => "description",
            Self::Category => "category",
            Self::Slug => "slug",
            Self::Subtitle => "subtitle",
            Self::Link => "link",
        }
    }
}

/// The administrator-editable part of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContent {
    /// Display title
    pub title: String,
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Long-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Unique URL slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Secondary headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Visibility on the public site (only for kinds with an active flag)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ItemContent {
    /// Read an optional content field
    #[must_use]
    pub fn field(&self, field: ContentField) -> Option<&str> {
        match field {
            ContentField::Image => self.image.as_deref(),
            ContentField::Description => self.description.as_deref(),
            ContentField::Category => self.category.as_deref(),
            ContentField::Slug => self.slug.as_deref(),
            ContentField::Subtitle => self.subtitle.as_deref(),
            ContentField::Link => self.link.as_deref(),
        }
    }

    /// Overwrite an optional content field
    pub fn set_field(&mut self, field: ContentField, value: Option<String>) {
        let slot = match field {
            ContentField::Image => &mut self.image,
            ContentField::Description => &mut self.description,
            ContentField::Category => &mut self.category,
            ContentField::Slug => &mut self.slug,
            ContentField::Subtitle => &mut self.subtitle,
            ContentField::Link => &mut self.link,
        };
        *slot = value;
    }
}

/// A row of an ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedItem {
    /// Store-assigned identifier, increasing with insertion
    pub id: i64,
    /// Collection this item belongs to
    pub collection: CollectionKind,
    /// Editable content
    #[serde(flatten)]
    pub content: ItemContent,
    /// Display position (lower first), not necessarily contiguous
    #[serde(rename = "order")]
    pub display_order: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last write timestamp
    pub updated_at: DateTime<Utc>,
}

/// Admin request body for create and partial update
///
/// Every key is optional at the type level; the collection schema decides
/// which keys are required on create and which are allowed at all. `order`
/// is deliberately absent, so sending it is rejected as an unknown field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPayload {
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Unique URL slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Secondary headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Link target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Visibility on the public site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ItemPayload {
    /// Payload with only a title and an image, the minimum most collections accept
    pub fn titled(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            image: Some(image.into()),
            ..Self::default()
        }
    }

    /// Raw value sent for an optional content field
    #[must_use]
    pub fn field(&self, field: ContentField) -> Option<&str> {
        match field {
            ContentField::Image => self.image.as_deref(),
            ContentField::Description => self.description.as_deref(),
            ContentField::Category => self.category.as_deref(),
            ContentField::Slug => self.slug.as_deref(),
            ContentField::Subtitle => self.subtitle.as_deref(),
            ContentField::Link => self.link.as_deref(),
        }
    }
}

/// Result of a reorder request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReorderOutcome {
    /// Orders were swapped with the adjacent item
    Moved {
        /// Id of the neighbour the item traded places with
        swapped_with: i64,
    },
    /// The item was already first (up) or last (down); nothing changed
    AtBoundary,
    /// The neighbour shares the item's order, so swapping would change nothing
    Tied {
        /// Id of the neighbour holding the same order
        neighbour: i64,
    },
}

impl ReorderOutcome {
    /// Whether any row changed
    #[must_use]
    pub const fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Neighbour the item traded places with, if it moved
    #[must_use]
    pub const fn swapped_with(&self) -> Option<i64> {
        match self {
            Self::Moved { swapped_with } => Some(*swapped_with),
            Self::AtBoundary | Self::Tied { .. } => None,
        }
    }
}
