//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

/// Kind of catalogue item, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ItemType {
    Fiction,
    NonFiction,
    Magazine,
    Movie,
    VideoGame,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ItemType::Fiction => "Fiction",
            ItemType::NonFiction => "Non-Fiction",
            ItemType::Magazine => "Magazine",
            ItemType::Movie => "Movie",
            ItemType::VideoGame => "Video Game",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Circulation status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Availability {
    #[default]
    Available,
    CheckedOut,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "Available"),
            Availability::CheckedOut => write!(f, "Checked out"),
        }
    }
}

// ---------------------------------------------------------------------------
// UserType
// ---------------------------------------------------------------------------

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum UserType {
    #[default]
    Patron,
    Librarian,
    Admin,
}

impl UserType {
    /// Staff accounts may browse every user record
    pub fn is_staff(&self) -> bool {
        matches!(self, UserType::Librarian | UserType::Admin)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UserType::Patron => "Patron",
            UserType::Librarian => "Librarian",
            UserType::Admin => "System Administrator",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ItemType::NonFiction.to_string(), "Non-Fiction");
        assert_eq!(ItemType::VideoGame.to_string(), "Video Game");
        assert_eq!(Availability::CheckedOut.to_string(), "Checked out");
        assert_eq!(UserType::Admin.to_string(), "System Administrator");
    }

    #[test]
    fn test_staff() {
        assert!(!UserType::Patron.is_staff());
        assert!(UserType::Librarian.is_staff());
        assert!(UserType::Admin.is_staff());
    }
}
