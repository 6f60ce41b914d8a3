//! Storage layer for BillBrain
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. This is the record store the aggregation engine reads from.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod receipts;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::seed_default_categories;
pub use receipts::ReceiptRepository;

use crate::config::paths::BillBrainPaths;
use crate::error::BillBrainError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BillBrainPaths,
    pub receipts: ReceiptRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BillBrainPaths) -> Result<Self, BillBrainError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            receipts: ReceiptRepository::new(paths.receipts_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BillBrainPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BillBrainError> {
        self.receipts.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BillBrainError> {
        self.receipts.save()?;
        self.categories.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
