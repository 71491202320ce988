// ABOUTME: Per-collection schemas describing columns, required fields, and field formats
// ABOUTME: One static schema per collection kind drives validation, DDL, and SQL column lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Collection schemas
//!
//! Each [`CollectionKind`] owns a static [`CollectionSchema`]. The schema
//! lists the optional content columns the collection carries, how each one
//! is validated, and whether the collection has an `is_active` flag. The
//! repository builds its SQL from the same schema, so table layout and
//! validation cannot drift apart.

mod validate;

pub use validate::ContentPatch;

use crate::models::{CollectionKind, ContentField};
use serde::Serialize;

/// Longest accepted title
pub const MAX_TITLE_CHARS: usize = 200;

/// Longest accepted free-text value
pub const MAX_TEXT_CHARS: usize = 5000;

/// Whether a field must be present on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Must be present and non-empty
    Required,
    /// May be omitted or cleared with an empty string
    Optional,
    /// Derived from the title when omitted on create
    DerivedFromTitle,
}

/// Accepted shape of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldFormat {
    /// Free text with a minimum length in characters
    Text {
        /// Minimum number of characters after trimming
        min_chars: usize,
    },
    /// Absolute `http`/`https` URL
    HttpUrl,
    /// Lowercase ASCII words joined by single hyphens
    Slug,
    /// Absolute `http`/`https` URL or a site path starting with `/`
    Link,
}

/// Validation rule for one content field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    /// Field the rule applies to
    pub field: ContentField,
    /// Presence requirement
    pub presence: Presence,
    /// Value format
    pub format: FieldFormat,
    /// Backed by a UNIQUE column
    pub unique: bool,
}

impl FieldRule {
    const fn new(field: ContentField, presence: Presence, format: FieldFormat) -> Self {
        Self {
            field,
            presence,
            format,
            unique: false,
        }
    }

    const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

const IMAGE_REQUIRED: FieldRule =
    FieldRule::new(ContentField::Image, Presence::Required, FieldFormat::HttpUrl);
const DESCRIPTION: FieldRule = FieldRule::new(
    ContentField::Description,
    Presence::Optional,
    FieldFormat::Text { min_chars: 10 },
);

const FAVORITE_DESTINATION_FIELDS: &[FieldRule] = &[
    IMAGE_REQUIRED,
    FieldRule::new(
        ContentField::Slug,
        Presence::DerivedFromTitle,
        FieldFormat::Slug,
    )
    .unique(),
    DESCRIPTION,
];

const TRAVELERS_CHOICE_FIELDS: &[FieldRule] = &[
    IMAGE_REQUIRED,
    FieldRule::new(
        ContentField::Category,
        Presence::Required,
        FieldFormat::Text { min_chars: 2 },
    ),
    DESCRIPTION,
];

const TIP_FIELDS: &[FieldRule] = &[IMAGE_REQUIRED, DESCRIPTION];

const SLIDER_FIELDS: &[FieldRule] = &[
    IMAGE_REQUIRED,
    FieldRule::new(
        ContentField::Subtitle,
        Presence::Optional,
        FieldFormat::Text { min_chars: 2 },
    ),
    FieldRule::new(ContentField::Link, Presence::Optional, FieldFormat::Link),
];

const HEADER_MENU_FIELDS: &[FieldRule] = &[
    FieldRule::new(ContentField::Image, Presence::Optional, FieldFormat::HttpUrl),
    FieldRule::new(ContentField::Link, Presence::Required, FieldFormat::Link),
];

/// Static description of one collection
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CollectionSchema {
    /// Collection kind
    pub kind: CollectionKind,
    /// Backing table
    pub table: &'static str,
    /// Optional content columns with their rules
    pub fields: &'static [FieldRule],
    /// Whether rows carry an `is_active` flag
    pub has_active_flag: bool,
}

impl CollectionSchema {
    /// Schema for a collection kind
    #[must_use]
    pub const fn for_kind(kind: CollectionKind) -> Self {
        let (fields, has_active_flag) = match kind {
            CollectionKind::FavoriteDestinations => (FAVORITE_DESTINATION_FIELDS, false),
            CollectionKind::TravelersChoice => (TRAVELERS_CHOICE_FIELDS, false),
            CollectionKind::Tips => (TIP_FIELDS, false),
            CollectionKind::Sliders => (SLIDER_FIELDS, true),
            CollectionKind::HeaderMenus => (HEADER_MENU_FIELDS, true),
        };
        Self {
            kind,
            table: kind.table(),
            fields,
            has_active_flag,
        }
    }

    /// Rule for a field, if the collection carries it
    #[must_use]
    pub fn rule(&self, field: ContentField) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.field == field)
    }

    /// Content columns in schema order
    pub fn content_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|rule| rule.field.column())
    }

    /// `SELECT` column list covering every stored column of the collection
    #[must_use]
    pub fn select_columns(&self) -> String {
        let mut columns = vec!["id", "title"];
        columns.extend(self.content_columns());
        if self.has_active_flag {
            columns.push("is_active");
        }
        columns.extend(["display_order", "created_at", "updated_at"]);
        columns.join(", ")
    }

    /// `CREATE TABLE` statement for the collection
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        let mut columns = vec![
            "id INTEGER PRIMARY KEY AUTOINCREMENT".to_owned(),
            "title TEXT NOT NULL".to_owned(),
        ];
        for rule in self.fields {
            let mut column = format!("{} TEXT", rule.field.column());
            if rule.presence != Presence::Optional {
                column.push_str(" NOT NULL");
            }
            if rule.unique {
                column.push_str(" UNIQUE");
            }
            columns.push(column);
        }
        if self.has_active_flag {
            columns.push("is_active INTEGER NOT NULL DEFAULT 1".to_owned());
        }
        columns.extend([
            "display_order INTEGER NOT NULL DEFAULT 0 CHECK (display_order >= 0)".to_owned(),
            "created_at TEXT NOT NULL".to_owned(),
            "updated_at TEXT NOT NULL".to_owned(),
        ]);
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.table,
            columns.join(",\n    ")
        )
    }

    /// Index supporting the ordered listing
    #[must_use]
    pub fn create_order_index_sql(&self) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_display_order ON {table} (display_order, id)",
            table = self.table
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_columns_follow_schema() {
        let schema = CollectionSchema::for_kind(CollectionKind::Sliders);
        assert_eq!(
            schema.select_columns(),
            "id, title, image, subtitle, link, is_active, display_order, created_at, updated_at"
        );

        let tips = CollectionSchema::for_kind(CollectionKind::Tips);
        assert!(!tips.select_columns().contains("is_active"));
    }

    #[test]
    fn test_create_table_marks_unique_slug() {
        let schema = CollectionSchema::for_kind(CollectionKind::FavoriteDestinations);
        let ddl = schema.create_table_sql();
        assert!(ddl.contains("slug TEXT NOT NULL UNIQUE"));
        assert!(ddl.contains("favorite_destinations"));
    }

    #[test]
    fn test_header_menu_image_is_optional() {
        let schema = CollectionSchema::for_kind(CollectionKind::HeaderMenus);
        let rule = schema.rule(ContentField::Image).unwrap();
        assert_eq!(rule.presence, Presence::Optional);
        assert!(schema.rule(ContentField::Description).is_none());
    }
}
