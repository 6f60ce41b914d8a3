//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json, scoped by owner.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BillBrainError;
use crate::models::{Category, CategoryId, Section, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), BillBrainError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| {
            a.section
                .as_str()
                .cmp(b.section.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });

        let file_data = CategoryData { categories };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all categories for a user, sorted by section then name
    pub fn get_by_owner(&self, owner: UserId) -> Result<Vec<Category>, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut categories: Vec<_> = data
            .values()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect();
        categories.sort_by(|a, b| {
            a.section
                .as_str()
                .cmp(b.section.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(categories)
    }

    /// Get a user's categories in one section, sorted by name
    pub fn get_by_owner_and_section(
        &self,
        owner: UserId,
        section: Section,
    ) -> Result<Vec<Category>, BillBrainError> {
        let mut categories = self.get_by_owner(owner)?;
        categories.retain(|c| c.section == section);
        Ok(categories)
    }

    /// Get a user's category by name within a section (case-insensitive)
    pub fn get_by_name(
        &self,
        owner: UserId,
        section: Section,
        name: &str,
    ) -> Result<Option<Category>, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|c| {
                c.owner == owner && c.section == section && c.name.to_lowercase() == name_lower
            })
            .cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), BillBrainError> {
        let mut data = self.data.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(category.id, category);
        Ok(())
    }

    /// Delete a category, returning whether it existed
    pub fn delete(&self, id: CategoryId) -> Result<bool, BillBrainError> {
        let mut data = self.data.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    /// Count all categories
    pub fn count(&self) -> Result<usize, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
