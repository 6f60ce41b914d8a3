//! Tax summary
//!
//! Rolls a user's receipts over an inclusive date range up into per-section,
//! per-category rows with section subtotals and grand totals. This is the
//! report used for tax filing.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{BillBrainError, BillBrainResult};
use crate::models::{CategoryId, Money, Section, UserId};
use crate::storage::Storage;

use super::{verify_ownership, Totals};

/// One category's rollup within a section
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// Category ID
    pub category_id: CategoryId,
    /// Category name at the time of the report
    pub category_name: String,
    /// Total spend
    pub total: Money,
    /// Tax portion
    pub tax: Money,
    /// Number of receipts
    pub count: usize,
}

/// One section's block of the tax summary
#[derive(Debug, Clone)]
pub struct SectionSummary {
    /// The section this block covers
    pub section: Section,
    /// Category rows, largest spend first; only categories with receipts
    pub rows: Vec<CategoryRow>,
    /// Section subtotal
    pub subtotal: Totals,
}

/// Tax summary over an inclusive date range
#[derive(Debug, Clone)]
pub struct TaxSummary {
    /// Range start (inclusive)
    pub date_from: NaiveDate,
    /// Range end (inclusive)
    pub date_to: NaiveDate,
    /// Non-empty sections in report order (personal, then business)
    pub sections: Vec<SectionSummary>,
    /// Grand totals across all sections
    pub grand: Totals,
}

impl TaxSummary {
    /// Generate the tax summary for a user over `[date_from, date_to]`
    ///
    /// Fails with `InvalidRange` before touching the record store when the
    /// range is inverted. An empty range is not an error: the result simply
    /// carries zero totals and no sections.
    pub fn generate(
        storage: &Storage,
        user: UserId,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> BillBrainResult<Self> {
        if date_from > date_to {
            return Err(BillBrainError::InvalidRange {
                from: date_from,
                to: date_to,
            });
        }

        let receipts = storage
            .receipts
            .get_by_owner_in_range(user, date_from, date_to)?;
        verify_ownership(&receipts, user)?;

        let category_names: HashMap<CategoryId, String> = storage
            .categories
            .get_by_owner(user)?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let mut grand = Totals::zero();
        let mut per_section: HashMap<Section, HashMap<CategoryId, Totals>> = HashMap::new();

        for receipt in &receipts {
            grand.add(receipt);
            per_section
                .entry(receipt.section)
                .or_default()
                .entry(receipt.category_id)
                .or_default()
                .add(receipt);
        }

        let mut sections = Vec::new();
        for &section in Section::all() {
            let Some(by_category) = per_section.remove(&section) else {
                continue;
            };

            let mut subtotal = Totals::zero();
            let mut rows: Vec<CategoryRow> = by_category
                .into_iter()
                .map(|(category_id, totals)| {
                    subtotal.total += totals.total;
                    subtotal.tax += totals.tax;
                    subtotal.count += totals.count;
                    CategoryRow {
                        category_id,
                        category_name: category_names
                            .get(&category_id)
                            .cloned()
                            .unwrap_or_else(|| "Unknown".to_string()),
                        total: totals.total,
                        tax: totals.tax,
                        count: totals.count,
                    }
                })
                .collect();

            // Largest spend first; equal spend ordered by name for determinism
            rows.sort_by(|a, b| {
                b.total
                    .cmp(&a.total)
                    .then_with(|| a.category_name.cmp(&b.category_name))
            });

            sections.push(SectionSummary {
                section,
                rows,
                subtotal,
            });
        }

        Ok(Self {
            date_from,
            date_to,
            sections,
            grand,
        })
    }

    /// Find one section's block, if it has any receipts
    pub fn section(&self, section: Section) -> Option<&SectionSummary> {
        self.sections.iter().find(|s| s.section == section)
    }
}
