//! Storage initialization
//!
//! Creates the data directories and seeds the default category set for a
//! user that has none yet.

use crate::error::BillBrainResult;
use crate::models::{Category, UserId};

use super::Storage;

/// Seed the default categories for a user if they have none
///
/// Returns the number of categories created (zero when the user already
/// has categories, making repeated runs harmless).
pub fn seed_default_categories(storage: &Storage, owner: UserId) -> BillBrainResult<usize> {
    if !storage.categories.get_by_owner(owner)?.is_empty() {
        return Ok(0);
    }

    let defaults = Category::default_set(owner);
    let created = defaults.len();

    for category in defaults {
        storage.categories.upsert(category)?;
    }
    storage.categories.save()?;

    Ok(created)
}
