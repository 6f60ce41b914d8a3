//! Terminal output formatting
//!
//! Pure string builders so the CLI handlers stay thin and the formatting is
//! testable without a terminal.

pub mod category;
pub mod receipt;
pub mod report;

pub use category::format_category_list;
pub use receipt::{format_receipt_details, format_receipt_list};
pub use report::{format_dashboard, format_tax_summary};
