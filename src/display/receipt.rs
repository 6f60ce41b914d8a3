//! Receipt display formatting

use crate::models::Receipt;
use crate::services::ReceiptPage;

/// Format a page of receipts as a table
pub fn format_receipt_list(page: &ReceiptPage, symbol: &str) -> String {
    if page.receipts.is_empty() {
        return "No receipts found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<28} {:<10} {:>12} {:>10}  {}\n",
        "Date", "Merchant", "Section", "Total", "Tax", "ID"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for receipt in &page.receipts {
        output.push_str(&format!(
            "{:<12} {:<28} {:<10} {:>12} {:>10}  {}\n",
            receipt.date.to_string(),
            truncate(&receipt.merchant_name, 28),
            receipt.section.to_string(),
            receipt.total.format_with_symbol(symbol),
            receipt.tax.format_with_symbol(symbol),
            receipt.id
        ));
    }

    output.push_str(&format!(
        "\nShowing {} of {} receipts\n",
        page.receipts.len(),
        page.total
    ));

    output
}

/// Format a single receipt with all details
pub fn format_receipt_details(
    receipt: &Receipt,
    category_name: Option<&str>,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Receipt {}\n", receipt.id));
    output.push_str(&format!("  Merchant:  {}\n", receipt.merchant_name));
    output.push_str(&format!("  Date:      {}\n", receipt.date));
    output.push_str(&format!(
        "  Total:     {}\n",
        receipt.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Tax:       {}\n",
        receipt.tax.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Section:   {}\n", receipt.section));
    output.push_str(&format!(
        "  Category:  {}\n",
        category_name.unwrap_or("Unknown")
    ));

    if !receipt.payment_method.is_empty() {
        output.push_str(&format!("  Payment:   {}\n", receipt.payment_method));
    }
    if !receipt.note.is_empty() {
        output.push_str(&format!("  Note:      {}\n", receipt.note));
    }
    if !receipt.items.is_empty() {
        output.push_str("  Items:\n");
        for item in &receipt.items {
            output.push_str(&format!(
                "    {:<30} {:>10}\n",
                item.name,
                item.price.format_with_symbol(symbol)
            ));
        }
    }
    if receipt.has_image() {
        output.push_str("  Image:     attached\n");
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, Section, UserId};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        let page = ReceiptPage {
            receipts: vec![],
            total: 0,
        };
        assert_eq!(format_receipt_list(&page, "$"), "No receipts found.");
    }

    #[test]
    fn test_details_include_optional_fields() {
        let mut receipt = Receipt::new(
            UserId::new(),
            "Corner Store",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Money::from_cents(4200),
            Section::Personal,
            CategoryId::new(),
        );
        receipt.payment_method = "Debit".to_string();
        receipt.note = "office snacks".to_string();

        let text = format_receipt_details(&receipt, Some("Shopping"), "$");
        assert!(text.contains("Corner Store"));
        assert!(text.contains("Shopping"));
        assert!(text.contains("Debit"));
        assert!(text.contains("office snacks"));
        assert!(!text.contains("Image:"));
    }
}
