//! Core data models for BillBrain
//!
//! This module contains the data structures that represent the receipt
//! tracking domain: receipts, categories, sections, and money amounts.

pub mod category;
pub mod ids;
pub mod money;
pub mod receipt;
pub mod section;

pub use category::{Category, DEFAULT_CATEGORY_NAMES};
pub use ids::{CategoryId, ReceiptId, UserId};
pub use money::Money;
pub use receipt::{LineItem, Receipt};
pub use section::Section;
