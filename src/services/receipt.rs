//! Receipt service
//!
//! Provides business logic for receipt management: CRUD operations and
//! filtered listing with pagination.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{NaiveDate, Utc};

use crate::error::{BillBrainError, BillBrainResult};
use crate::models::{CategoryId, LineItem, Money, Receipt, ReceiptId, Section, UserId};
use crate::storage::Storage;

/// Service for receipt management
pub struct ReceiptService<'a> {
    storage: &'a Storage,
}

/// Options for filtering receipts
#[derive(Debug, Clone, Default)]
pub struct ReceiptFilter {
    /// Filter by section
    pub section: Option<Section>,
    /// Filter by category
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring match on the merchant name
    pub merchant_search: Option<String>,
    /// Filter by date range start (inclusive)
    pub date_from: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub date_to: Option<NaiveDate>,
    /// Minimum total amount
    pub amount_min: Option<Money>,
    /// Maximum total amount
    pub amount_max: Option<Money>,
    /// Number of matching receipts to skip (pagination)
    pub skip: usize,
    /// Maximum number of receipts to return
    pub limit: Option<usize>,
}

impl ReceiptFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by section
    pub fn section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    /// Filter by category
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter by merchant name substring
    pub fn merchant(mut self, search: impl Into<String>) -> Self {
        self.merchant_search = Some(search.into());
        self
    }

    /// Filter by date range (inclusive on both ends)
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Filter by amount range
    pub fn amount_range(mut self, min: Money, max: Money) -> Self {
        self.amount_min = Some(min);
        self.amount_max = Some(max);
        self
    }

    /// Skip the first `skip` matches
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, receipt: &Receipt) -> bool {
        if let Some(section) = self.section {
            if receipt.section != section {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if receipt.category_id != category_id {
                return false;
            }
        }
        if let Some(search) = &self.merchant_search {
            if !receipt
                .merchant_name
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if receipt.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if receipt.date > to {
                return false;
            }
        }
        if let Some(min) = self.amount_min {
            if receipt.total < min {
                return false;
            }
        }
        if let Some(max) = self.amount_max {
            if receipt.total > max {
                return false;
            }
        }
        true
    }
}

/// One page of filtered receipts
#[derive(Debug, Clone)]
pub struct ReceiptPage {
    /// Matching receipts (image payloads stripped), newest first
    pub receipts: Vec<Receipt>,
    /// Total number of matches before pagination
    pub total: usize,
}

/// Input for creating a new receipt
#[derive(Debug, Clone)]
pub struct CreateReceiptInput {
    pub merchant_name: String,
    pub date: NaiveDate,
    pub total: Money,
    pub tax: Money,
    pub section: Section,
    pub category_id: CategoryId,
    pub payment_method: Option<String>,
    pub note: Option<String>,
    pub items: Vec<LineItem>,
    pub image: Option<String>,
}

/// Input for updating a receipt; only set fields are changed
#[derive(Debug, Clone, Default)]
pub struct UpdateReceiptInput {
    pub merchant_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub total: Option<Money>,
    pub tax: Option<Money>,
    pub section: Option<Section>,
    pub category_id: Option<CategoryId>,
    pub payment_method: Option<String>,
    pub note: Option<String>,
}

impl UpdateReceiptInput {
    /// Check whether any field is set
    pub fn is_empty(&self) -> bool {
        self.merchant_name.is_none()
            && self.date.is_none()
            && self.total.is_none()
            && self.tax.is_none()
            && self.section.is_none()
            && self.category_id.is_none()
            && self.payment_method.is_none()
            && self.note.is_none()
    }
}

impl<'a> ReceiptService<'a> {
    /// Create a new receipt service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new receipt
    pub fn create(&self, owner: UserId, input: CreateReceiptInput) -> BillBrainResult<Receipt> {
        self.ensure_category_owned(owner, input.category_id)?;

        if let Some(image) = &input.image {
            BASE64.decode(image).map_err(|e| {
                BillBrainError::Validation(format!("Receipt image is not valid base64: {}", e))
            })?;
        }

        let mut receipt = Receipt::new(
            owner,
            input.merchant_name.trim(),
            input.date,
            input.total,
            input.section,
            input.category_id,
        );
        receipt.tax = input.tax;
        receipt.payment_method = input.payment_method.unwrap_or_default();
        receipt.note = input.note.unwrap_or_default();
        receipt.items = input.items;
        receipt.image = input.image;

        receipt
            .validate()
            .map_err(|e| BillBrainError::Validation(e.to_string()))?;

        self.storage.receipts.upsert(receipt.clone())?;
        self.storage.receipts.save()?;

        Ok(receipt)
    }

    /// Get a receipt (full record, including any image payload)
    pub fn get(&self, owner: UserId, id: ReceiptId) -> BillBrainResult<Receipt> {
        let receipt = self
            .storage
            .receipts
            .get(id)?
            .ok_or_else(|| BillBrainError::receipt_not_found(id.to_string()))?;

        if receipt.owner != owner {
            return Err(BillBrainError::OwnershipViolation {
                entity_type: "Receipt",
                identifier: id.to_string(),
            });
        }

        Ok(receipt)
    }

    /// List a user's receipts matching a filter, newest first
    ///
    /// Image payloads are stripped from the listing; use `get` for the full
    /// record. `total` counts every match before skip/limit are applied.
    pub fn list(&self, owner: UserId, filter: &ReceiptFilter) -> BillBrainResult<ReceiptPage> {
        let receipts = self.storage.receipts.get_by_owner(owner)?;

        let matches: Vec<_> = receipts.into_iter().filter(|r| filter.matches(r)).collect();
        let total = matches.len();

        let receipts = matches
            .into_iter()
            .skip(filter.skip)
            .take(filter.limit.unwrap_or(usize::MAX))
            .map(|r| r.without_image())
            .collect();

        Ok(ReceiptPage { receipts, total })
    }

    /// Update a receipt; only fields set in the input are changed
    pub fn update(
        &self,
        owner: UserId,
        id: ReceiptId,
        input: UpdateReceiptInput,
    ) -> BillBrainResult<Receipt> {
        if input.is_empty() {
            return Err(BillBrainError::Validation("No fields to update".into()));
        }

        let mut receipt = self.get(owner, id)?;

        if let Some(category_id) = input.category_id {
            self.ensure_category_owned(owner, category_id)?;
            receipt.category_id = category_id;
        }
        if let Some(merchant_name) = input.merchant_name {
            receipt.merchant_name = merchant_name.trim().to_string();
        }
        if let Some(date) = input.date {
            receipt.date = date;
        }
        if let Some(total) = input.total {
            receipt.total = total;
        }
        if let Some(tax) = input.tax {
            receipt.tax = tax;
        }
        if let Some(section) = input.section {
            receipt.section = section;
        }
        if let Some(payment_method) = input.payment_method {
            receipt.payment_method = payment_method;
        }
        if let Some(note) = input.note {
            receipt.note = note;
        }

        receipt.updated_at = Utc::now();
        receipt
            .validate()
            .map_err(|e| BillBrainError::Validation(e.to_string()))?;

        self.storage.receipts.upsert(receipt.clone())?;
        self.storage.receipts.save()?;

        Ok(receipt)
    }

    /// Delete a receipt (hard delete, no cascade)
    pub fn delete(&self, owner: UserId, id: ReceiptId) -> BillBrainResult<()> {
        // Ownership check before the destructive step
        self.get(owner, id)?;

        self.storage.receipts.delete(id)?;
        self.storage.receipts.save()?;

        Ok(())
    }

    fn ensure_category_owned(&self, owner: UserId, category_id: CategoryId) -> BillBrainResult<()> {
        let category = self
            .storage
            .categories
            .get(category_id)?
            .ok_or_else(|| BillBrainError::category_not_found(category_id.to_string()))?;

        if category.owner != owner {
            return Err(BillBrainError::OwnershipViolation {
                entity_type: "Category",
                identifier: category_id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use crate::config::paths::BillBrainPaths;
    use crate::models::Category;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillBrainPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn setup_category(storage: &Storage, owner: UserId, name: &str, section: Section) -> Category {
        let category = Category::new(owner, name, section);
        storage.categories.upsert(category.clone()).unwrap();
        category
    }

    fn input(date: (i32, u32, u32), cents: i64, category_id: CategoryId) -> CreateReceiptInput {
        CreateReceiptInput {
            merchant_name: "Corner Store".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            total: Money::from_cents(cents),
            tax: Money::zero(),
            section: Section::Personal,
            category_id,
            payment_method: None,
            note: None,
            items: Vec::new(),
            image: None,
        }
    }

    #[test]
    fn test_create_and_get() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();
        let category = setup_category(&storage, owner, "Shopping", Section::Personal);

        let receipt = service.create(owner, input((2024, 3, 1), 4200, category.id)).unwrap();
        let loaded = service.get(owner, receipt.id).unwrap();
        assert_eq!(loaded.merchant_name, "Corner Store");
        assert_eq!(loaded.total.cents(), 4200);
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();

        let result = service.create(owner, input((2024, 3, 1), 100, CategoryId::new()));
        assert!(matches!(result, Err(BillBrainError::NotFound { .. })));
    }

    #[test]
    fn test_create_rejects_foreign_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let alice = UserId::new();
        let bob = UserId::new();
        let category = setup_category(&storage, alice, "Shopping", Section::Personal);

        let result = service.create(bob, input((2024, 3, 1), 100, category.id));
        assert!(matches!(
            result,
            Err(BillBrainError::OwnershipViolation { .. })
        ));
    }

    #[test]
    fn test_create_rejects_bad_image_payload() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();
        let category = setup_category(&storage, owner, "Shopping", Section::Personal);

        let mut bad = input((2024, 3, 1), 100, category.id);
        bad.image = Some("not base64 ___".to_string());
        let result = service.create(owner, bad);
        assert!(matches!(result, Err(BillBrainError::Validation(_))));
    }

    #[test]
    fn test_list_filters_and_pagination() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();
        let groceries = setup_category(&storage, owner, "Groceries", Section::Personal);
        let travel = setup_category(&storage, owner, "Travel", Section::Business);

        let mut a = input((2024, 3, 1), 10000, groceries.id);
        a.merchant_name = "Metro Grocery".to_string();
        service.create(owner, a).unwrap();

        let mut b = input((2024, 3, 15), 5000, travel.id);
        b.merchant_name = "Airline".to_string();
        b.section = Section::Business;
        service.create(owner, b).unwrap();

        let mut c = input((2024, 4, 2), 2500, groceries.id);
        c.merchant_name = "Metro Grocery".to_string();
        service.create(owner, c).unwrap();

        // Section filter
        let page = service
            .list(owner, &ReceiptFilter::new().section(Section::Business))
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.receipts[0].merchant_name, "Airline");

        // Merchant search is case-insensitive substring
        let page = service
            .list(owner, &ReceiptFilter::new().merchant("metro"))
            .unwrap();
        assert_eq!(page.total, 2);

        // Pagination reports the unpaginated total
        let page = service
            .list(owner, &ReceiptFilter::new().limit(1).skip(1))
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.receipts.len(), 1);

        // Amount range
        let page = service
            .list(
                owner,
                &ReceiptFilter::new()
                    .amount_range(Money::from_cents(3000), Money::from_cents(20000)),
            )
            .unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_list_strips_images() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();
        let category = setup_category(&storage, owner, "Shopping", Section::Personal);

        let mut with_image = input((2024, 3, 1), 100, category.id);
        with_image.image = Some(BASE64.encode(b"image bytes"));
        let receipt = service.create(owner, with_image).unwrap();

        let page = service.list(owner, &ReceiptFilter::new()).unwrap();
        assert!(!page.receipts[0].has_image());

        // Single-receipt reads keep the payload
        assert!(service.get(owner, receipt.id).unwrap().has_image());
    }

    #[test]
    fn test_update_partial() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();
        let category = setup_category(&storage, owner, "Shopping", Section::Personal);

        let receipt = service.create(owner, input((2024, 3, 1), 4200, category.id)).unwrap();

        let updated = service
            .update(
                owner,
                receipt.id,
                UpdateReceiptInput {
                    total: Some(Money::from_cents(4500)),
                    note: Some("corrected total".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.total.cents(), 4500);
        assert_eq!(updated.note, "corrected total");
        assert_eq!(updated.merchant_name, "Corner Store");
    }

    #[test]
    fn test_update_with_no_fields_is_an_error() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();
        let category = setup_category(&storage, owner, "Shopping", Section::Personal);

        let receipt = service.create(owner, input((2024, 3, 1), 100, category.id)).unwrap();
        let result = service.update(owner, receipt.id, UpdateReceiptInput::default());
        assert!(matches!(result, Err(BillBrainError::Validation(_))));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let owner = UserId::new();
        let category = setup_category(&storage, owner, "Shopping", Section::Personal);

        let receipt = service.create(owner, input((2024, 3, 1), 100, category.id)).unwrap();
        service.delete(owner, receipt.id).unwrap();

        let result = service.get(owner, receipt.id);
        assert!(matches!(result, Err(BillBrainError::NotFound { .. })));
    }

    #[test]
    fn test_delete_rejects_foreign_owner() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let alice = UserId::new();
        let bob = UserId::new();
        let category = setup_category(&storage, alice, "Shopping", Section::Personal);

        let receipt = service.create(alice, input((2024, 3, 1), 100, category.id)).unwrap();
        let result = service.delete(bob, receipt.id);
        assert!(matches!(
            result,
            Err(BillBrainError::OwnershipViolation { .. })
        ));

        // Still present for the real owner
        assert!(service.get(alice, receipt.id).is_ok());
    }
}
