//! Report display formatting
//!
//! Formats dashboard and tax summaries for terminal output. The currency
//! symbol comes from settings and appears only here, never in exported data.

use crate::reports::{DashboardSummary, TaxSummary};

/// How many categories the dashboard shows
const TOP_CATEGORY_COUNT: usize = 10;

/// Format a dashboard summary for terminal display
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Dashboard as of {}\n", summary.as_of));
    output.push_str(&"=".repeat(72));
    output.push('\n');

    output.push_str(&format!(
        "This month:  {:>12}  (tax {}, {} receipts)\n",
        summary.monthly.total.format_with_symbol(symbol),
        summary.monthly.tax.format_with_symbol(symbol),
        summary.monthly.count
    ));
    output.push_str(&format!(
        "This year:   {:>12}  (tax {}, {} receipts)\n\n",
        summary.yearly.total.format_with_symbol(symbol),
        summary.yearly.tax.format_with_symbol(symbol),
        summary.yearly.count
    ));

    output.push_str(&format!(
        "Personal: {} ({:.1}%)   Business: {} ({:.1}%)\n",
        summary.sections.personal.total.format_with_symbol(symbol),
        summary.sections.personal_share_percent(),
        summary.sections.business.total.format_with_symbol(symbol),
        summary.sections.business_share_percent()
    ));

    if !summary.categories.is_empty() {
        output.push_str("\nTop categories\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        for category in summary.categories.iter().take(TOP_CATEGORY_COUNT) {
            output.push_str(&format!(
                "  {:<32} {:>12} {:>8}\n",
                category.category_name,
                category.total.format_with_symbol(symbol),
                category.count
            ));
        }
    }

    if !summary.recent_receipts.is_empty() {
        output.push_str("\nRecent receipts\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        for receipt in &summary.recent_receipts {
            output.push_str(&format!(
                "  {}  {:<28} {:>12}  {}\n",
                receipt.date,
                receipt.merchant_name,
                receipt.total.format_with_symbol(symbol),
                receipt.section
            ));
        }
    }

    output
}

/// Format a tax summary for terminal display
pub fn format_tax_summary(summary: &TaxSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Tax Summary: {} to {}\n",
        summary.date_from, summary.date_to
    ));
    output.push_str(&"=".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "Grand total: {}   Tax: {}   Receipts: {}\n",
        summary.grand.total.format_with_symbol(symbol),
        summary.grand.tax.format_with_symbol(symbol),
        summary.grand.count
    ));

    if summary.sections.is_empty() {
        output.push_str("\nNo receipts in this range.\n");
        return output;
    }

    for section in &summary.sections {
        output.push_str(&format!("\n{}\n", section.section.to_string().to_uppercase()));
        output.push_str(&format!(
            "  {:<32} {:>12} {:>10} {:>8}\n",
            "Category", "Total", "Tax", "Count"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &section.rows {
            output.push_str(&format!(
                "  {:<32} {:>12} {:>10} {:>8}\n",
                row.category_name,
                row.total.format_with_symbol(symbol),
                row.tax.format_with_symbol(symbol),
                row.count
            ));
        }

        output.push_str(&format!(
            "  {:<32} {:>12} {:>10} {:>8}\n",
            "Subtotal:",
            section.subtotal.total.format_with_symbol(symbol),
            section.subtotal.tax.format_with_symbol(symbol),
            section.subtotal.count
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BillBrainPaths;
    use crate::models::{Category, Money, Receipt, Section, UserId};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_receipt() -> (TempDir, Storage, UserId) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillBrainPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let owner = UserId::new();
        let food = Category::new(owner, "Food", Section::Personal);
        storage.categories.upsert(food.clone()).unwrap();

        let mut receipt = Receipt::new(
            owner,
            "Metro Grocery",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Money::from_cents(10000),
            Section::Personal,
            food.id,
        );
        receipt.tax = Money::from_cents(1300);
        storage.receipts.upsert(receipt).unwrap();

        (temp_dir, storage, owner)
    }

    #[test]
    fn test_format_dashboard() {
        let (_temp_dir, storage, owner) = storage_with_receipt();
        let summary = DashboardSummary::generate(
            &storage,
            owner,
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        )
        .unwrap();

        let text = format_dashboard(&summary, "$");
        assert!(text.contains("This month:"));
        assert!(text.contains("$100.00"));
        assert!(text.contains("Metro Grocery"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_format_tax_summary() {
        let (_temp_dir, storage, owner) = storage_with_receipt();
        let summary = TaxSummary::generate(
            &storage,
            owner,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .unwrap();

        let text = format_tax_summary(&summary, "$");
        assert!(text.contains("PERSONAL"));
        assert!(text.contains("Food"));
        assert!(text.contains("$100.00"));
        assert!(text.contains("Subtotal:"));
    }

    #[test]
    fn test_format_empty_tax_summary() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillBrainPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let summary = TaxSummary::generate(
            &storage,
            UserId::new(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .unwrap();

        let text = format_tax_summary(&summary, "$");
        assert!(text.contains("No receipts in this range."));
    }
}
