//! Business logic layer
//!
//! Services wrap the storage repositories with validation, ownership
//! checks, and the domain rules the CLI and reports rely on.

pub mod category;
pub mod receipt;

pub use category::{CategoryDeletion, CategoryService};
pub use receipt::{
    CreateReceiptInput, ReceiptFilter, ReceiptPage, ReceiptService, UpdateReceiptInput,
};
