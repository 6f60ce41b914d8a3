//! Receipt model
//!
//! A receipt records a single purchase: merchant, calendar date, total and
//! tax amounts, section, category, and optional extras (note, line items,
//! captured image payload).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ReceiptId, UserId};
use super::money::Money;
use super::section::Section;

/// A single line item extracted from a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description as printed on the receipt
    pub name: String,

    /// Item price
    pub price: Money,
}

impl LineItem {
    /// Create a new line item
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A receipt record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier
    pub id: ReceiptId,

    /// The user this receipt belongs to
    pub owner: UserId,

    /// Merchant name
    pub merchant_name: String,

    /// Purchase date (calendar date, no time component)
    pub date: NaiveDate,

    /// Total amount paid
    pub total: Money,

    /// Tax portion of the total
    #[serde(default)]
    pub tax: Money,

    /// Personal or business spending
    pub section: Section,

    /// The category this receipt is assigned to
    pub category_id: CategoryId,

    /// Payment method (free text, e.g. "Visa", "Cash")
    #[serde(default)]
    pub payment_method: String,

    /// Free-form note
    #[serde(default)]
    pub note: String,

    /// Line items extracted from the receipt
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Captured receipt image as a base64 payload, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// When the receipt was created
    pub created_at: DateTime<Utc>,

    /// When the receipt was last modified
    pub updated_at: DateTime<Utc>,
}

impl Receipt {
    /// Create a new receipt
    pub fn new(
        owner: UserId,
        merchant_name: impl Into<String>,
        date: NaiveDate,
        total: Money,
        section: Section,
        category_id: CategoryId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ReceiptId::new(),
            owner,
            merchant_name: merchant_name.into(),
            date,
            total,
            tax: Money::zero(),
            section,
            category_id,
            payment_method: String::new(),
            note: String::new(),
            items: Vec::new(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this receipt has a captured image
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Copy of this receipt with the image payload stripped
    ///
    /// List projections omit image payloads; only single-receipt reads
    /// carry them.
    pub fn without_image(&self) -> Self {
        let mut receipt = self.clone();
        receipt.image = None;
        receipt
    }

    /// Validate the receipt
    pub fn validate(&self) -> Result<(), ReceiptValidationError> {
        if self.merchant_name.trim().is_empty() {
            return Err(ReceiptValidationError::EmptyMerchant);
        }

        if self.total.is_negative() {
            return Err(ReceiptValidationError::NegativeAmount("total"));
        }

        if self.tax.is_negative() {
            return Err(ReceiptValidationError::NegativeAmount("tax"));
        }

        Ok(())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.merchant_name, self.total)
    }
}

/// Validation errors for receipts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptValidationError {
    EmptyMerchant,
    NegativeAmount(&'static str),
}

impl fmt::Display for ReceiptValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMerchant => write!(f, "Merchant name cannot be empty"),
            Self::NegativeAmount(field) => write!(f, "Receipt {} cannot be negative", field),
        }
    }
}

impl std::error::Error for ReceiptValidationError {}
