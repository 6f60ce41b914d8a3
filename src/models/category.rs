//! Category model
//!
//! Categories are user-facing labels for spend type, scoped to exactly one
//! section. New users get a seeded set of defaults in both sections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};
use super::section::Section;

/// Category names seeded for every new user, in both sections
pub const DEFAULT_CATEGORY_NAMES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Health & Medical",
    "Utilities & Bills",
    "Education",
    "Travel",
    "Home & Rent",
    "Office Supplies",
    "Subscriptions & Memberships",
    "Gifts & Donations",
    "Insurance",
    "Miscellaneous",
];

/// A spend category scoped to one section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// The user this category belongs to
    pub owner: UserId,

    /// Category name
    pub name: String,

    /// The section this category belongs to
    pub section: Section,

    /// Whether this category was seeded (vs. user-created)
    #[serde(default)]
    pub is_default: bool,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new user-created category
    pub fn new(owner: UserId, name: impl Into<String>, section: Section) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            owner,
            name: name.into(),
            section,
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a seeded default category
    pub fn seeded(owner: UserId, name: impl Into<String>, section: Section) -> Self {
        let mut category = Self::new(owner, name, section);
        category.is_default = true;
        category
    }

    /// Build the full default category set for a user (both sections)
    pub fn default_set(owner: UserId) -> Vec<Self> {
        Section::all()
            .iter()
            .flat_map(|&section| {
                DEFAULT_CATEGORY_NAMES
                    .iter()
                    .map(move |&name| Self::seeded(owner, name, section))
            })
            .collect()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let owner = UserId::new();
        let category = Category::new(owner, "Groceries", Section::Personal);

        assert_eq!(category.name, "Groceries");
        assert_eq!(category.owner, owner);
        assert_eq!(category.section, Section::Personal);
        assert!(!category.is_default);
    }

    #[test]
    fn test_seeded_category() {
        let category = Category::seeded(UserId::new(), "Travel", Section::Business);
        assert!(category.is_default);
    }

    #[test]
    fn test_default_set_covers_both_sections() {
        let owner = UserId::new();
        let set = Category::default_set(owner);

        assert_eq!(set.len(), DEFAULT_CATEGORY_NAMES.len() * 2);
        assert!(set.iter().all(|c| c.owner == owner && c.is_default));

        let personal = set.iter().filter(|c| c.section == Section::Personal).count();
        let business = set.iter().filter(|c| c.section == Section::Business).count();
        assert_eq!(personal, DEFAULT_CATEGORY_NAMES.len());
        assert_eq!(business, DEFAULT_CATEGORY_NAMES.len());
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new(UserId::new(), "Valid", Section::Personal);
        assert!(category.validate().is_ok());

        category.name = String::new();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let category = Category::new(UserId::new(), "Office Supplies", Section::Business);
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category.id, deserialized.id);
        assert_eq!(category.section, deserialized.section);
    }
}
