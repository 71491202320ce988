// ABOUTME: Ordered collection repository with create, update, delete, and adjacent-swap reordering
// ABOUTME: Builds its SQL from the collection schema so one manager serves every collection table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, FieldError};
use basecamp_core::models::{
    CollectionKind, ContentField, Direction, ItemContent, ItemPayload, OrderedItem,
    ReorderOutcome,
};
use basecamp_core::schema::CollectionSchema;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

/// Repository over the ordered collection tables
///
/// Listings are sorted by `display_order` ascending with `id` as the
/// tie-break. New items are appended after the current maximum order.
/// Reordering swaps the orders of an item and its neighbour inside one
/// transaction; gaps left by deletes are never compacted.
#[derive(Clone)]
pub struct CollectionManager {
    pool: SqlitePool,
}

impl CollectionManager {
    /// Create a new collection manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every item of a collection in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list(&self, kind: CollectionKind) -> AppResult<Vec<OrderedItem>> {
        let schema = CollectionSchema::for_kind(kind);
        let sql = format!(
            "SELECT {} FROM {} ORDER BY display_order ASC, id ASC",
            schema.select_columns(),
            schema.table
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| row_to_item(&schema, row)).collect()
    }

    /// Items visible on the public site, in display order
    ///
    /// Collections without an active flag expose every item.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_active(&self, kind: CollectionKind) -> AppResult<Vec<OrderedItem>> {
        let schema = CollectionSchema::for_kind(kind);
        if !schema.has_active_flag {
            return self.list(kind).await;
        }

        let sql = format!(
            "SELECT {} FROM {} WHERE is_active = 1 ORDER BY display_order ASC, id ASC",
            schema.select_columns(),
            schema.table
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| row_to_item(&schema, row)).collect()
    }

    /// Get a single item
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no item has this id
    pub async fn get(&self, kind: CollectionKind, id: i64) -> AppResult<OrderedItem> {
        let schema = CollectionSchema::for_kind(kind);
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            schema.select_columns(),
            schema.table
        );

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| item_not_found(kind, id))?;

        row_to_item(&schema, &row)
    }

    /// Number of items in a collection
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count(&self, kind: CollectionKind) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) AS total FROM {}", kind.table());
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;
        Ok(row.try_get("total")?)
    }

    /// Validate and append a new item after the current last one
    ///
    /// The order is computed inside the `INSERT`, so two concurrent creates
    /// cannot read the same maximum.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad payload, `ResourceAlreadyExists`
    /// for a duplicate slug, or a database error
    pub async fn create(&self, kind: CollectionKind, payload: &ItemPayload) -> AppResult<OrderedItem> {
        let schema = CollectionSchema::for_kind(kind);
        let content = schema.validate_create(payload)?;
        let now = Utc::now();

        let mut columns = vec!["title"];
        columns.extend(schema.content_columns());
        if schema.has_active_flag {
            columns.push("is_active");
        }
        let value_count = columns.len();
        columns.extend(["display_order", "created_at", "updated_at"]);

        let mut values: Vec<String> = (1..=value_count).map(|n| format!("${n}")).collect();
        values.push("COALESCE(MAX(display_order) + 1, 0)".to_owned());
        values.push(format!("${}", value_count + 1));
        values.push(format!("${}", value_count + 2));

        let sql = format!(
            "INSERT INTO {table} ({}) SELECT {} FROM {table}",
            columns.join(", "),
            values.join(", "),
            table = schema.table
        );

        let mut query = sqlx::query(&sql).bind(content.title.clone());
        for rule in schema.fields {
            query = query.bind(content.field(rule.field).map(str::to_owned));
        }
        if schema.has_active_flag {
            query = query.bind(content.is_active.unwrap_or(true));
        }
        let result = query
            .bind(now.to_rfc3339())
            .bind(now.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(kind, e))?;

        let id = result.last_insert_rowid();
        let item = self.get(kind, id).await?;

        info!(
            collection = %kind,
            id,
            order = item.display_order,
            "Created collection item"
        );

        Ok(item)
    }

    /// Apply a partial update; absent keys keep their stored value
    ///
    /// An empty patch returns the item unchanged without touching
    /// `updated_at`. The order is never changed here.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, a validation error for
    /// a bad payload, or `ResourceAlreadyExists` for a duplicate slug
    pub async fn update(
        &self,
        kind: CollectionKind,
        id: i64,
        payload: &ItemPayload,
    ) -> AppResult<OrderedItem> {
        let schema = CollectionSchema::for_kind(kind);
        let mut item = self.get(kind, id).await?;
        let patch = schema.validate_patch(payload)?;

        if patch.is_empty() {
            debug!(collection = %kind, id, "Empty update, nothing to write");
            return Ok(item);
        }

        patch.apply_to(&mut item.content);
        item.updated_at = Utc::now();

        let mut assignments = vec!["title = $1".to_owned()];
        let mut next = 2;
        for column in schema.content_columns() {
            assignments.push(format!("{column} = ${next}"));
            next += 1;
        }
        if schema.has_active_flag {
            assignments.push(format!("is_active = ${next}"));
            next += 1;
        }
        assignments.push(format!("updated_at = ${next}"));

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ${}",
            schema.table,
            assignments.join(", "),
            next + 1
        );

        let mut query = sqlx::query(&sql).bind(item.content.title.clone());
        for rule in schema.fields {
            query = query.bind(item.content.field(rule.field).map(str::to_owned));
        }
        if schema.has_active_flag {
            query = query.bind(item.content.is_active.unwrap_or(true));
        }
        let result = query
            .bind(item.updated_at.to_rfc3339())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(kind, e))?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(kind, id));
        }

        info!(collection = %kind, id, "Updated collection item");
        Ok(item)
    }

    /// Delete an item; remaining orders are left as they are
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no item has this id
    pub async fn delete(&self, kind: CollectionKind, id: i64) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(kind, id));
        }

        info!(collection = %kind, id, "Deleted collection item");
        Ok(())
    }

    /// Swap an item's order with its neighbour in the given direction
    ///
    /// The neighbour is the adjacent item in the `(display_order, id)`
    /// listing. An item already first (up) or last (down) is left alone and
    /// [`ReorderOutcome::AtBoundary`] is returned. A neighbour holding the
    /// same order cannot be swapped with; nothing is written and
    /// [`ReorderOutcome::Tied`] is returned.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no item has this id
    pub async fn reorder(
        &self,
        kind: CollectionKind,
        id: i64,
        direction: Direction,
    ) -> AppResult<ReorderOutcome> {
        let table = kind.table();
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query(&format!("SELECT display_order FROM {table} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| item_not_found(kind, id))?;
        let order: i64 = current.try_get("display_order")?;

        let neighbour_sql = match direction {
            Direction::Up => format!(
                "SELECT id, display_order FROM {table} \
                 WHERE display_order < $1 OR (display_order = $1 AND id < $2) \
                 ORDER BY display_order DESC, id DESC LIMIT 1"
            ),
            Direction::Down => format!(
                "SELECT id, display_order FROM {table} \
                 WHERE display_order > $1 OR (display_order = $1 AND id > $2) \
                 ORDER BY display_order ASC, id ASC LIMIT 1"
            ),
        };

        let Some(neighbour) = sqlx::query(&neighbour_sql)
            .bind(order)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            debug!(
                collection = %kind,
                id,
                direction = direction.as_str(),
                "Item already at boundary, order unchanged"
            );
            return Ok(ReorderOutcome::AtBoundary);
        };
        let neighbour_id: i64 = neighbour.try_get("id")?;
        let neighbour_order: i64 = neighbour.try_get("display_order")?;

        if neighbour_order == order {
            debug!(
                collection = %kind,
                id,
                neighbour = neighbour_id,
                order,
                "Neighbour shares the same order, nothing to swap"
            );
            return Ok(ReorderOutcome::Tied {
                neighbour: neighbour_id,
            });
        }

        let now = Utc::now().to_rfc3339();
        let swap_sql = format!("UPDATE {table} SET display_order = $1, updated_at = $2 WHERE id = $3");
        sqlx::query(&swap_sql)
            .bind(neighbour_order)
            .bind(&now)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(&swap_sql)
            .bind(order)
            .bind(&now)
            .bind(neighbour_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            collection = %kind,
            id,
            swapped_with = neighbour_id,
            direction = direction.as_str(),
            "Reordered collection item"
        );

        Ok(ReorderOutcome::Moved {
            swapped_with: neighbour_id,
        })
    }
}

fn item_not_found(kind: CollectionKind, id: i64) -> AppError {
    AppError::not_found(format!("{kind} item {id}"))
}

/// Map a failed write, naming the slug when a unique constraint fired
fn write_error(kind: CollectionKind, error: sqlx::Error) -> AppError {
    let is_unique = matches!(
        &error,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation()
    );
    if is_unique {
        let field = ContentField::Slug.column();
        return AppError::already_exists(format!("A {kind} item with this {field} already exists"))
        .with_details(serde_json::json!({
            "fields": [FieldError::new(field, "is already in use")]
        }))
        .with_source(error);
    }
    AppError::from(error)
}

fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid stored timestamp '{raw}': {e}")))
}

fn row_to_item(schema: &CollectionSchema, row: &SqliteRow) -> AppResult<OrderedItem> {
    let mut content = ItemContent {
        title: row.try_get("title")?,
        ..ItemContent::default()
    };
    for rule in schema.fields {
        let value: Option<String> = row.try_get(rule.field.column())?;
        content.set_field(rule.field, value);
    }
    if schema.has_active_flag {
        content.is_active = Some(row.try_get("is_active")?);
    }

    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(OrderedItem {
        id: row.try_get("id")?,
        collection: schema.kind,
        content,
        display_order: row.try_get("display_order")?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
