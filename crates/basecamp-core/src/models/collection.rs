// ABOUTME: Collection kinds served by the content API and the reorder direction type
// ABOUTME: Maps each kind to its URL path segment and backing table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, ordered content collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKind {
    /// Destinations highlighted on the home page
    FavoriteDestinations,
    /// Travelers' choice entries grouped by category
    TravelersChoice,
    /// Short travel tips
    Tips,
    /// Hero sliders
    Sliders,
    /// Entries of the site header menu
    HeaderMenus,
}

impl CollectionKind {
    /// Every collection kind, in the order the admin dashboard lists them
    pub const ALL: [Self; 5] = [
        Self::FavoriteDestinations,
        Self::TravelersChoice,
        Self::Tips,
        Self::Sliders,
        Self::HeaderMenus,
    ];

    /// URL path segment (`/api/<segment>`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FavoriteDestinations => "favorite-destinations",
            Self::TravelersChoice => "travelers-choice",
            Self::Tips => "tips",
            Self::Sliders => "sliders",
            Self::HeaderMenus => "header-menus",
        }
    }

    /// Backing table name
    #[must_use]
    pub const fn table(&self) -> &'static str {
        match self {
            Self::FavoriteDestinations => "favorite_destinations",
            Self::TravelersChoice => "travelers_choice",
            Self::Tips => "tips",
            Self::Sliders => "sliders",
            Self::HeaderMenus => "header_menus",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FavoriteDestinations => "Favorite destinations",
            Self::TravelersChoice => "Travelers' choice",
            Self::Tips => "Tips",
            Self::Sliders => "Sliders",
            Self::HeaderMenus => "Header menus",
        }
    }
}

impl FromStr for CollectionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::not_found(format!("Collection '{s}'")))
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a reorder swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the list (smaller order)
    Up,
    /// Towards the end of the list (larger order)
    Down,
}

impl Direction {
    /// Database/display string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_kind_round_trips_through_path_segment() {
        for kind in CollectionKind::ALL {
            assert_eq!(kind.as_str().parse::<CollectionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_collection_is_not_found() {
        let err = "blog-posts".parse::<CollectionKind>().unwrap_err();
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn test_direction_deserializes_lowercase() {
        let up: Direction = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(up, Direction::Up);
        assert!(serde_json::from_str::<Direction>("\"sideways\"").is_err());
    }
}
