//! Category service
//!
//! Provides business logic for category management: CRUD operations,
//! default seeding, and reference-guarded deletion.

use crate::error::{BillBrainError, BillBrainResult};
use crate::models::{Category, CategoryId, Section, UserId};
use crate::storage::{seed_default_categories, Storage};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Outcome of a category delete request
///
/// Deletion is blocked while receipts still reference the category; the
/// caller must branch on this result and reassign those receipts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CategoryDeletion {
    /// The category was removed
    Deleted,
    /// The category was left in place because receipts still reference it
    BlockedByReferences { receipt_count: usize },
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category in a section
    pub fn create(&self, owner: UserId, name: &str, section: Section) -> BillBrainResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BillBrainError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Names are unique per user and section
        if self
            .storage
            .categories
            .get_by_name(owner, section, name)?
            .is_some()
        {
            return Err(BillBrainError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(owner, name, section);
        category
            .validate()
            .map_err(|e| BillBrainError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Get a category, checking that it belongs to the requesting user
    pub fn get(&self, owner: UserId, id: CategoryId) -> BillBrainResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BillBrainError::category_not_found(id.to_string()))?;

        if category.owner != owner {
            return Err(BillBrainError::OwnershipViolation {
                entity_type: "Category",
                identifier: id.to_string(),
            });
        }

        Ok(category)
    }

    /// List all of a user's categories
    pub fn list(&self, owner: UserId) -> BillBrainResult<Vec<Category>> {
        self.storage.categories.get_by_owner(owner)
    }

    /// List a user's categories in one section
    pub fn list_by_section(
        &self,
        owner: UserId,
        section: Section,
    ) -> BillBrainResult<Vec<Category>> {
        self.storage.categories.get_by_owner_and_section(owner, section)
    }

    /// Find a category by name (either section) or ID string
    pub fn find(&self, owner: UserId, identifier: &str) -> BillBrainResult<Option<Category>> {
        // Try by name first
        let name_lower = identifier.trim().to_lowercase();
        if let Some(category) = self
            .list(owner)?
            .into_iter()
            .find(|c| c.name.to_lowercase() == name_lower)
        {
            return Ok(Some(category));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return match self.get(owner, id) {
                Ok(category) => Ok(Some(category)),
                Err(e) if e.is_not_found() => Ok(None),
                Err(e) => Err(e),
            };
        }

        Ok(None)
    }

    /// Rename a category
    pub fn rename(&self, owner: UserId, id: CategoryId, new_name: &str) -> BillBrainResult<Category> {
        let mut category = self.get(owner, id)?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(BillBrainError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if let Some(existing) = self
            .storage
            .categories
            .get_by_name(owner, category.section, new_name)?
        {
            if existing.id != id {
                return Err(BillBrainError::Duplicate {
                    entity_type: "Category",
                    identifier: new_name.to_string(),
                });
            }
        }

        category.name = new_name.to_string();
        category.updated_at = chrono::Utc::now();
        category
            .validate()
            .map_err(|e| BillBrainError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Delete a category unless receipts still reference it
    pub fn delete(&self, owner: UserId, id: CategoryId) -> BillBrainResult<CategoryDeletion> {
        let category = self.get(owner, id)?;

        let receipt_count = self.storage.receipts.count_by_category(owner, category.id)?;
        if receipt_count > 0 {
            return Ok(CategoryDeletion::BlockedByReferences { receipt_count });
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        Ok(CategoryDeletion::Deleted)
    }

    /// Seed the default category set for a user that has none
    pub fn seed_defaults(&self, owner: UserId) -> BillBrainResult<usize> {
        seed_default_categories(self.storage, owner)
    }
}
