//! Dashboard summary
//!
//! Rolls a user's receipts up into the numbers the dashboard shows: totals
//! for the current calendar month and year, the personal/business split,
//! top categories, and the most recent receipts.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::BillBrainResult;
use crate::models::{CategoryId, Money, Receipt, Section, UserId};
use crate::storage::Storage;

use super::{verify_ownership, Totals};

/// How many receipts the dashboard lists as "recent"
pub const RECENT_RECEIPT_COUNT: usize = 5;

/// Per-category rollup for the dashboard
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// Category ID
    pub category_id: CategoryId,
    /// Category name at the time of the report
    pub category_name: String,
    /// Total spend in the category
    pub total: Money,
    /// Tax portion
    pub tax: Money,
    /// Number of receipts
    pub count: usize,
}

/// Per-section totals with a guarded percentage split
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionBreakdown {
    pub personal: Totals,
    pub business: Totals,
}

impl SectionBreakdown {
    /// Totals for one section
    pub fn get(&self, section: Section) -> Totals {
        match section {
            Section::Personal => self.personal,
            Section::Business => self.business,
        }
    }

    /// Personal share of combined spend, in percent.
    ///
    /// When nothing has been spent in either section the split defaults to
    /// an even 50% rather than dividing by zero.
    pub fn personal_share_percent(&self) -> f64 {
        let combined = self.personal.total.cents() + self.business.total.cents();
        if combined == 0 {
            return 50.0;
        }
        (self.personal.total.cents() as f64 / combined as f64) * 100.0
    }

    /// Business share of combined spend, in percent
    pub fn business_share_percent(&self) -> f64 {
        100.0 - self.personal_share_percent()
    }
}

/// Dashboard summary for one user
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// The date the summary was computed for
    pub as_of: NaiveDate,
    /// Totals for the calendar month containing `as_of`
    pub monthly: Totals,
    /// Totals for the calendar year containing `as_of`
    pub yearly: Totals,
    /// Per-section totals over the calendar year
    pub sections: SectionBreakdown,
    /// Per-category totals over the calendar year, largest spend first
    pub categories: Vec<CategoryTotal>,
    /// The most recent receipts, newest first (image payloads stripped)
    pub recent_receipts: Vec<Receipt>,
}

impl DashboardSummary {
    /// Generate the dashboard summary for a user as of a given date
    ///
    /// Grouping is by calendar date only; receipts carry no time component
    /// and no timezone conversion is applied.
    pub fn generate(storage: &Storage, user: UserId, as_of: NaiveDate) -> BillBrainResult<Self> {
        // get_by_owner returns receipts newest first (date, then insertion)
        let receipts = storage.receipts.get_by_owner(user)?;
        verify_ownership(&receipts, user)?;

        let category_names: HashMap<CategoryId, String> = storage
            .categories
            .get_by_owner(user)?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let (month_start, month_end) = month_bounds(as_of);
        let year_start = NaiveDate::from_ymd_opt(as_of.year(), 1, 1).expect("valid year start");
        let year_end = NaiveDate::from_ymd_opt(as_of.year(), 12, 31).expect("valid year end");

        let mut monthly = Totals::zero();
        let mut yearly = Totals::zero();
        let mut sections = SectionBreakdown::default();
        let mut by_category: HashMap<CategoryId, Totals> = HashMap::new();

        for receipt in &receipts {
            if receipt.date >= month_start && receipt.date <= month_end {
                monthly.add(receipt);
            }

            if receipt.date >= year_start && receipt.date <= year_end {
                yearly.add(receipt);

                match receipt.section {
                    Section::Personal => sections.personal.add(receipt),
                    Section::Business => sections.business.add(receipt),
                }

                by_category.entry(receipt.category_id).or_default().add(receipt);
            }
        }

        let mut categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category_id, totals)| CategoryTotal {
                category_id,
                category_name: category_names
                    .get(&category_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                total: totals.total,
                tax: totals.tax,
                count: totals.count,
            })
            .collect();

        // Largest spend first; equal spend ordered by name for determinism
        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        let recent_receipts = receipts
            .iter()
            .take(RECENT_RECEIPT_COUNT)
            .map(|r| r.without_image())
            .collect();

        Ok(Self {
            as_of,
            monthly,
            yearly,
            sections,
            categories,
            recent_receipts,
        })
    }
}

/// First and last calendar day of the month containing `date`
fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).expect("day 1 always exists");
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let end = next_month.expect("valid month start") - Duration::days(1);
    (start, end)
}
