//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod export;
pub mod receipt;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use receipt::{handle_receipt_command, ReceiptCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{BillBrainError, BillBrainResult};
use crate::models::{Money, Section};

/// Parse a calendar date in YYYY-MM-DD form
pub fn parse_date(s: &str) -> BillBrainResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| BillBrainError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s)))
}

/// Parse a section argument (personal or business)
pub fn parse_section(s: &str) -> BillBrainResult<Section> {
    s.parse()
        .map_err(|e: crate::models::section::SectionParseError| {
            BillBrainError::Validation(e.to_string())
        })
}

/// Parse a money argument ("12.34", "$12.34", "12")
pub fn parse_money(s: &str) -> BillBrainResult<Money> {
    Money::parse(s).map_err(|e| BillBrainError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-20").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
        );
        assert!(parse_date("03/20/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_section_and_money() {
        assert_eq!(parse_section("business").unwrap(), Section::Business);
        assert!(parse_section("corporate").is_err());
        assert_eq!(parse_money("10.50").unwrap().cents(), 1050);
        assert!(parse_money("lots").is_err());
    }
}
