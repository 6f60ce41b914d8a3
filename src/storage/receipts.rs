//! Receipt repository for JSON storage
//!
//! Manages loading and saving receipts to receipts.json. All lookups are
//! scoped by owner so one user's records never leak into another's queries.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::BillBrainError;
use crate::models::{CategoryId, Receipt, ReceiptId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable receipt data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ReceiptData {
    receipts: Vec<Receipt>,
}

/// Repository for receipt persistence with an owner index
pub struct ReceiptRepository {
    path: PathBuf,
    data: RwLock<HashMap<ReceiptId, Receipt>>,
    /// Index: owner -> receipt_ids
    by_owner: RwLock<HashMap<UserId, Vec<ReceiptId>>>,
}

impl ReceiptRepository {
    /// Create a new receipt repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load receipts from disk and build the owner index
    pub fn load(&self) -> Result<(), BillBrainError> {
        let file_data: ReceiptData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_owner.clear();

        for receipt in file_data.receipts {
            by_owner.entry(receipt.owner).or_default().push(receipt.id);
            data.insert(receipt.id, receipt);
        }

        Ok(())
    }

    /// Save receipts to disk
    pub fn save(&self) -> Result<(), BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut receipts: Vec<_> = data.values().cloned().collect();
        receipts.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = ReceiptData { receipts };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a receipt by ID
    pub fn get(&self, id: ReceiptId) -> Result<Option<Receipt>, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all receipts for a user, newest first
    pub fn get_by_owner(&self, owner: UserId) -> Result<Vec<Receipt>, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_owner = self.by_owner.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_owner.get(&owner).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut receipts: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        receipts.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(receipts)
    }

    /// Get a user's receipts whose date falls within [from, to], inclusive
    pub fn get_by_owner_in_range(
        &self,
        owner: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Receipt>, BillBrainError> {
        let mut receipts = self.get_by_owner(owner)?;
        receipts.retain(|r| r.date >= from && r.date <= to);
        Ok(receipts)
    }

    /// Count a user's receipts assigned to a category
    pub fn count_by_category(
        &self,
        owner: UserId,
        category_id: CategoryId,
    ) -> Result<usize, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_owner = self.by_owner.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_owner.get(&owner).map(|v| v.as_slice()).unwrap_or(&[]);
        Ok(ids
            .iter()
            .filter_map(|id| data.get(id))
            .filter(|r| r.category_id == category_id)
            .count())
    }

    /// Insert or update a receipt
    pub fn upsert(&self, receipt: Receipt) -> Result<(), BillBrainError> {
        let mut data = self.data.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(previous) = data.insert(receipt.id, receipt.clone()) {
            // Ownership never changes in practice, but keep the index honest
            if previous.owner != receipt.owner {
                if let Some(ids) = by_owner.get_mut(&previous.owner) {
                    ids.retain(|id| *id != receipt.id);
                }
                by_owner.entry(receipt.owner).or_default().push(receipt.id);
            }
        } else {
            by_owner.entry(receipt.owner).or_default().push(receipt.id);
        }

        Ok(())
    }

    /// Delete a receipt, returning whether it existed
    pub fn delete(&self, id: ReceiptId) -> Result<bool, BillBrainError> {
        let mut data = self.data.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.remove(&id) {
            Some(receipt) => {
                if let Some(ids) = by_owner.get_mut(&receipt.owner) {
                    ids.retain(|rid| *rid != id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Count all receipts
    pub fn count(&self) -> Result<usize, BillBrainError> {
        let data = self.data.read().map_err(|e| {
            BillBrainError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
