//! CSV Export functionality
//!
//! Exports a user's receipts over a date range as a flat CSV document.
//! Money fields are written with exactly two decimals and no currency
//! symbol; the symbol is a display concern and stays out of the data.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{BillBrainError, BillBrainResult};
use crate::models::{CategoryId, UserId};
use crate::storage::Storage;

/// Column order of the receipt export
const HEADER: [&str; 7] = [
    "Date",
    "Merchant",
    "Section",
    "Category",
    "Total",
    "Tax",
    "Payment Method",
];

/// Export a user's receipts in `[date_from, date_to]` to CSV, newest first
///
/// A range with no receipts still produces the header row, so downstream
/// tooling always sees the column layout.
pub fn export_receipts_csv<W: Write>(
    storage: &Storage,
    user: UserId,
    date_from: NaiveDate,
    date_to: NaiveDate,
    writer: W,
) -> BillBrainResult<()> {
    if date_from > date_to {
        return Err(BillBrainError::InvalidRange {
            from: date_from,
            to: date_to,
        });
    }

    let receipts = storage
        .receipts
        .get_by_owner_in_range(user, date_from, date_to)?;
    crate::reports::verify_ownership(&receipts, user)?;

    let category_names: std::collections::HashMap<CategoryId, String> = storage
        .categories
        .get_by_owner(user)?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| BillBrainError::Export(e.to_string()))?;

    for receipt in &receipts {
        let category_name = category_names
            .get(&receipt.category_id)
            .cloned()
            .unwrap_or_default();

        csv_writer
            .write_record([
                receipt.date.to_string(),
                receipt.merchant_name.clone(),
                receipt.section.to_string(),
                category_name,
                receipt.total.format_plain(),
                receipt.tax.format_plain(),
                receipt.payment_method.clone(),
            ])
            .map_err(|e| BillBrainError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BillBrainError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BillBrainPaths;
    use crate::models::{Category, Money, Receipt, Section};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillBrainPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn export_to_string(
        storage: &Storage,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> String {
        let mut output = Vec::new();
        export_receipts_csv(storage, user, from, to, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_export_two_receipts_is_three_lines() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = UserId::new();

        let food = Category::new(owner, "Food", Section::Personal);
        let travel = Category::new(owner, "Travel", Section::Business);
        storage.categories.upsert(food.clone()).unwrap();
        storage.categories.upsert(travel.clone()).unwrap();

        let mut r1 = Receipt::new(
            owner,
            "Metro Grocery",
            date(2024, 3, 1),
            Money::from_cents(10000),
            Section::Personal,
            food.id,
        );
        r1.tax = Money::from_cents(1300);
        r1.payment_method = "Visa".to_string();
        storage.receipts.upsert(r1).unwrap();

        let mut r2 = Receipt::new(
            owner,
            "Airline",
            date(2024, 3, 15),
            Money::from_cents(5000),
            Section::Business,
            travel.id,
        );
        r2.tax = Money::from_cents(650);
        storage.receipts.upsert(r2).unwrap();

        let csv = export_to_string(&storage, owner, date(2024, 1, 1), date(2024, 12, 31));
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Date,Merchant,Section,Category,Total,Tax,Payment Method"
        );
        // Newest first
        assert_eq!(lines[1], "2024-03-15,Airline,Business,Travel,50.00,6.50,");
        assert_eq!(
            lines[2],
            "2024-03-01,Metro Grocery,Personal,Food,100.00,13.00,Visa"
        );
    }

    #[test]
    fn test_empty_range_is_header_only() {
        let (_temp_dir, storage) = create_test_storage();

        let csv = export_to_string(
            &storage,
            UserId::new(),
            date(2024, 1, 1),
            date(2024, 12, 31),
        );
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "Date,Merchant,Section,Category,Total,Tax,Payment Method"
        );
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let mut output = Vec::new();

        let result = export_receipts_csv(
            &storage,
            UserId::new(),
            date(2024, 12, 31),
            date(2024, 1, 1),
            &mut output,
        );
        assert!(matches!(result, Err(BillBrainError::InvalidRange { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_merchant_with_comma_is_quoted() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = UserId::new();

        let food = Category::new(owner, "Food", Section::Personal);
        storage.categories.upsert(food.clone()).unwrap();

        let receipt = Receipt::new(
            owner,
            "Soup, Salad & More",
            date(2024, 3, 1),
            Money::from_cents(1850),
            Section::Personal,
            food.id,
        );
        storage.receipts.upsert(receipt).unwrap();

        let csv = export_to_string(&storage, owner, date(2024, 1, 1), date(2024, 12, 31));
        assert!(csv.contains("\"Soup, Salad & More\""));
    }

    #[test]
    fn test_out_of_range_receipts_excluded() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = UserId::new();

        let food = Category::new(owner, "Food", Section::Personal);
        storage.categories.upsert(food.clone()).unwrap();

        let in_range = Receipt::new(
            owner,
            "Inside",
            date(2024, 6, 1),
            Money::from_cents(100),
            Section::Personal,
            food.id,
        );
        let out_of_range = Receipt::new(
            owner,
            "Outside",
            date(2025, 6, 1),
            Money::from_cents(200),
            Section::Personal,
            food.id,
        );
        storage.receipts.upsert(in_range).unwrap();
        storage.receipts.upsert(out_of_range).unwrap();

        let csv = export_to_string(&storage, owner, date(2024, 1, 1), date(2024, 12, 31));
        assert!(csv.contains("Inside"));
        assert!(!csv.contains("Outside"));
    }
}
