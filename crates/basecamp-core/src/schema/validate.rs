// ABOUTME: Validation of admin payloads against a collection schema
// ABOUTME: Collects every failing field before reporting, derives slugs, normalizes whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CollectionSchema, FieldFormat, FieldRule, Presence, MAX_TEXT_CHARS, MAX_TITLE_CHARS};
use crate::errors::{AppError, AppResult, FieldError};
use crate::models::{ContentField, ItemContent, ItemPayload};
use url::Url;

/// Validated partial update, ready to apply to stored content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPatch {
    /// New title
    pub title: Option<String>,
    /// Field changes; `None` clears the column
    pub fields: Vec<(ContentField, Option<String>)>,
    /// New active flag
    pub is_active: Option<bool>,
}

impl ContentPatch {
    /// Whether the patch changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.fields.is_empty() && self.is_active.is_none()
    }

    /// Apply the patch to existing content
    pub fn apply_to(&self, content: &mut ItemContent) {
        if let Some(title) = &self.title {
            content.title.clone_from(title);
        }
        for (field, value) in &self.fields {
            content.set_field(*field, value.clone());
        }
        if let Some(active) = self.is_active {
            content.is_active = Some(active);
        }
    }
}

impl CollectionSchema {
    /// Validate a create payload into storable content
    ///
    /// # Errors
    ///
    /// Returns a validation error naming every field that failed
    pub fn validate_create(&self, payload: &ItemPayload) -> AppResult<ItemContent> {
        let mut errors = Vec::new();
        self.reject_unsupported(payload, &mut errors);

        let title = match normalized(payload.title.as_deref()) {
            Some(title) => check_title(title, &mut errors),
            None => {
                errors.push(FieldError::new("title", "is required"));
                None
            }
        };

        let mut content = ItemContent {
            title: title.unwrap_or_default(),
            is_active: self.has_active_flag.then(|| payload.is_active.unwrap_or(true)),
            ..ItemContent::default()
        };

        for rule in self.fields {
            let value = match normalized(payload.field(rule.field)) {
                Some(value) => check_format(rule, value, &mut errors),
                None => match rule.presence {
                    Presence::Required => {
                        errors.push(FieldError::new(rule.field.column(), "is required"));
                        None
                    }
                    Presence::DerivedFromTitle => {
                        derive_slug(&content.title, rule.field, &mut errors)
                    }
                    Presence::Optional => None,
                },
            };
            content.set_field(rule.field, value);
        }

        if errors.is_empty() {
            Ok(content)
        } else {
            Err(AppError::validation(errors))
        }
    }

    /// Validate a partial update payload
    ///
    /// # Errors
    ///
    /// Returns a validation error naming every field that failed
    pub fn validate_patch(&self, payload: &ItemPayload) -> AppResult<ContentPatch> {
        let mut errors = Vec::new();
        self.reject_unsupported(payload, &mut errors);

        let mut patch = ContentPatch {
            is_active: payload.is_active,
            ..ContentPatch::default()
        };

        if let Some(raw) = payload.title.as_deref() {
            match normalized(Some(raw)) {
                Some(title) => patch.title = check_title(title, &mut errors),
                None => errors.push(FieldError::new("title", "must not be empty")),
            }
        }

        for rule in self.fields {
            let Some(raw) = payload.field(rule.field) else {
                continue;
            };
            match normalized(Some(raw)) {
                Some(value) => {
                    if let Some(valid) = check_format(rule, value, &mut errors) {
                        patch.fields.push((rule.field, Some(valid)));
                    }
                }
                None if rule.presence == Presence::Optional => {
                    patch.fields.push((rule.field, None));
                }
                None => errors.push(FieldError::new(rule.field.column(), "must not be empty")),
            }
        }

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(AppError::validation(errors))
        }
    }

    fn reject_unsupported(&self, payload: &ItemPayload, errors: &mut Vec<FieldError>) {
        for field in ContentField::ALL {
            if payload.field(field).is_some() && self.rule(field).is_none() {
                errors.push(FieldError::new(
                    field.column(),
                    format!("is not supported for {}", self.kind),
                ));
            }
        }
        if payload.is_active.is_some() && !self.has_active_flag {
            errors.push(FieldError::new(
                "is_active",
                format!("is not supported for {}", self.kind),
            ));
        }
    }
}

/// Trimmed value, `None` when absent or blank
fn normalized(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_title(title: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(FieldError::new(
            "title",
            format!("must be at most {MAX_TITLE_CHARS} characters"),
        ));
        return None;
    }
    Some(title.to_owned())
}

fn check_format(rule: &FieldRule, value: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let name = rule.field.column();
    let problem = match rule.format {
        FieldFormat::Text { min_chars } => {
            let chars = value.chars().count();
            if chars < min_chars {
                Some(format!("must be at least {min_chars} characters"))
            } else if chars > MAX_TEXT_CHARS {
                Some(format!("must be at most {MAX_TEXT_CHARS} characters"))
            } else {
                None
            }
        }
        FieldFormat::HttpUrl => {
            (!is_http_url(value)).then(|| "must be an absolute http(s) URL".to_owned())
        }
        FieldFormat::Slug => (!is_slug(value))
            .then(|| "must be lowercase letters and digits separated by hyphens".to_owned()),
        FieldFormat::Link => (!is_http_url(value) && !is_site_path(value))
            .then(|| "must be an absolute http(s) URL or a path starting with '/'".to_owned()),
    };

    match problem {
        Some(message) => {
            errors.push(FieldError::new(name, message));
            None
        }
        None => Some(value.to_owned()),
    }
}

fn derive_slug(title: &str, field: ContentField, errors: &mut Vec<FieldError>) -> Option<String> {
    if title.is_empty() {
        // The missing title is already reported
        return None;
    }
    let derived = slug::slugify(title);
    if derived.is_empty() {
        errors.push(FieldError::new(
            field.column(),
            "could not be derived from the title; provide one explicitly",
        ));
        return None;
    }
    Some(derived)
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
}

fn is_site_path(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//") && !value.contains(char::is_whitespace)
}

fn is_slug(value: &str) -> bool {
    slug::slugify(value) == value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CollectionKind;

    fn schema(kind: CollectionKind) -> CollectionSchema {
        CollectionSchema::for_kind(kind)
    }

    #[test]
    fn test_create_with_title_and_image() {
        let content = schema(CollectionKind::Tips)
            .validate_create(&ItemPayload::titled("D", "https://x/y.png"))
            .unwrap();
        assert_eq!(content.title, "D");
        assert_eq!(content.image.as_deref(), Some("https://x/y.png"));
        assert_eq!(content.is_active, None);
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let payload = ItemPayload {
            title: Some(String::new()),
            ..ItemPayload::default()
        };
        let err = schema(CollectionKind::Tips)
            .validate_create(&payload)
            .unwrap_err();

        let fields: Vec<String> = err.field_errors().into_iter().map(|f| f.field).collect();
        assert!(fields.contains(&"title".to_owned()));
        assert!(fields.contains(&"image".to_owned()));
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let payload = ItemPayload {
            title: Some("   ".to_owned()),
            image: Some("not a url".to_owned()),
            description: Some("short".to_owned()),
            ..ItemPayload::default()
        };
        let err = schema(CollectionKind::Tips)
            .validate_create(&payload)
            .unwrap_err();
        assert_eq!(err.field_errors().len(), 3);
    }

    #[test]
    fn test_slug_derived_from_title() {
        let content = schema(CollectionKind::FavoriteDestinations)
            .validate_create(&ItemPayload::titled(
                "Torres del Paine",
                "https://cdn.example.com/tdp.jpg",
            ))
            .unwrap();
        assert_eq!(content.slug.as_deref(), Some("torres-del-paine"));
    }

    #[test]
    fn test_explicit_slug_must_be_slug_form() {
        let payload = ItemPayload {
            slug: Some("Not A Slug".to_owned()),
            ..ItemPayload::titled("Patagonia", "https://cdn.example.com/p.jpg")
        };
        let err = schema(CollectionKind::FavoriteDestinations)
            .validate_create(&payload)
            .unwrap_err();
        assert_eq!(err.field_errors()[0].field, "slug");
    }

    #[test]
    fn test_unsupported_fields_are_rejected() {
        let payload = ItemPayload {
            category: Some("Hiking".to_owned()),
            is_active: Some(false),
            ..ItemPayload::titled("Pack light", "https://cdn.example.com/t.jpg")
        };
        let err = schema(CollectionKind::Tips)
            .validate_create(&payload)
            .unwrap_err();
        let fields: Vec<String> = err.field_errors().into_iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["category".to_owned(), "is_active".to_owned()]);
    }

    #[test]
    fn test_header_menu_link_accepts_site_paths() {
        let payload = ItemPayload {
            title: Some("Shop".to_owned()),
            link: Some("/shop".to_owned()),
            ..ItemPayload::default()
        };
        let content = schema(CollectionKind::HeaderMenus)
            .validate_create(&payload)
            .unwrap();
        assert_eq!(content.link.as_deref(), Some("/shop"));
        assert_eq!(content.is_active, Some(true));

        let bad = ItemPayload {
            link: Some("//evil.example.com".to_owned()),
            ..payload
        };
        assert!(schema(CollectionKind::HeaderMenus)
            .validate_create(&bad)
            .is_err());
    }

    #[test]
    fn test_patch_clears_optional_and_rejects_blank_required() {
        let schema = schema(CollectionKind::Sliders);

        let patch = schema
            .validate_patch(&ItemPayload {
                subtitle: Some(String::new()),
                ..ItemPayload::default()
            })
            .unwrap();
        assert_eq!(patch.fields, vec![(ContentField::Subtitle, None)]);

        let err = schema
            .validate_patch(&ItemPayload {
                image: Some(" ".to_owned()),
                ..ItemPayload::default()
            })
            .unwrap_err();
        assert_eq!(err.field_errors()[0].field, "image");
    }

    #[test]
    fn test_patch_applies_to_content() {
        let mut content = ItemContent {
            title: "Old".to_owned(),
            subtitle: Some("Gone soon".to_owned()),
            is_active: Some(true),
            ..ItemContent::default()
        };
        let patch = ContentPatch {
            title: Some("New".to_owned()),
            fields: vec![(ContentField::Subtitle, None)],
            is_active: Some(false),
        };
        patch.apply_to(&mut content);

        assert_eq!(content.title, "New");
        assert_eq!(content.subtitle, None);
        assert_eq!(content.is_active, Some(false));
    }
}
