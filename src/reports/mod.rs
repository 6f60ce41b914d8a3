//! Aggregation engine
//!
//! Read-only rollups over a single user's receipts: the dashboard summary
//! and the tax summary. Reports never mutate the record store, so repeated
//! generation over unchanged data yields identical results.

pub mod dashboard;
pub mod tax;

pub use dashboard::{CategoryTotal, DashboardSummary, SectionBreakdown};
pub use tax::{CategoryRow, SectionSummary, TaxSummary};

use crate::error::{BillBrainError, BillBrainResult};
use crate::models::{Money, Receipt, UserId};

/// Total amount, tax, and count over a receipt subset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total: Money,
    pub tax: Money,
    pub count: usize,
}

impl Totals {
    /// Zeroed totals
    pub fn zero() -> Self {
        Self::default()
    }

    /// Fold a receipt into the totals
    pub fn add(&mut self, receipt: &Receipt) {
        self.total += receipt.total;
        self.tax += receipt.tax;
        self.count += 1;
    }

    /// Check if nothing has been accumulated
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Verify that every fetched receipt belongs to the requesting user.
///
/// Aggregations are scoped to one user; a foreign record here means a
/// broken query, and the computation must fail rather than fold it in.
pub(crate) fn verify_ownership(receipts: &[Receipt], user: UserId) -> BillBrainResult<()> {
    for receipt in receipts {
        if receipt.owner != user {
            return Err(BillBrainError::OwnershipViolation {
                entity_type: "Receipt",
                identifier: receipt.id.to_string(),
            });
        }
    }
    Ok(())
}
