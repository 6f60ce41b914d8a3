//! Receipt CLI commands

use clap::Subcommand;

use crate::display::{format_receipt_details, format_receipt_list};
use crate::error::{BillBrainError, BillBrainResult};
use crate::models::{ReceiptId, UserId};
use crate::services::{
    CategoryService, CreateReceiptInput, ReceiptFilter, ReceiptService, UpdateReceiptInput,
};
use crate::storage::Storage;

use super::{parse_date, parse_money, parse_section};

/// Receipt subcommands
#[derive(Subcommand)]
pub enum ReceiptCommands {
    /// Add a new receipt
    Add {
        /// Merchant name
        merchant: String,
        /// Total amount (e.g. "42.00")
        total: String,
        /// Tax portion of the total
        #[arg(long, default_value = "0")]
        tax: String,
        /// Receipt date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Section (personal or business)
        #[arg(short, long)]
        section: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Payment method (e.g. "Visa", "Cash")
        #[arg(short, long)]
        payment: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List receipts
    List {
        /// Filter by section
        #[arg(short, long)]
        section: Option<String>,
        /// Filter by category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Merchant name search (case-insensitive substring)
        #[arg(long)]
        search: Option<String>,
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Minimum total amount
        #[arg(long)]
        min: Option<String>,
        /// Maximum total amount
        #[arg(long)]
        max: Option<String>,
        /// Number of receipts to skip
        #[arg(long, default_value = "0")]
        skip: usize,
        /// Number of receipts to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show receipt details
    Show {
        /// Receipt ID
        receipt: String,
    },

    /// Edit a receipt
    Edit {
        /// Receipt ID
        receipt: String,
        /// New merchant name
        #[arg(long)]
        merchant: Option<String>,
        /// New total amount
        #[arg(long)]
        total: Option<String>,
        /// New tax amount
        #[arg(long)]
        tax: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New section
        #[arg(long)]
        section: Option<String>,
        /// New category name or ID
        #[arg(long)]
        category: Option<String>,
        /// New payment method
        #[arg(long)]
        payment: Option<String>,
        /// New note
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a receipt
    Delete {
        /// Receipt ID
        receipt: String,
    },
}

/// Handle a receipt command
pub fn handle_receipt_command(
    storage: &Storage,
    user: UserId,
    symbol: &str,
    cmd: ReceiptCommands,
) -> BillBrainResult<()> {
    let service = ReceiptService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        ReceiptCommands::Add {
            merchant,
            total,
            tax,
            date,
            section,
            category,
            payment,
            note,
        } => {
            let category = categories
                .find(user, &category)?
                .ok_or_else(|| BillBrainError::category_not_found(&category))?;

            let receipt = service.create(
                user,
                CreateReceiptInput {
                    merchant_name: merchant,
                    date: parse_date(&date)?,
                    total: parse_money(&total)?,
                    tax: parse_money(&tax)?,
                    section: parse_section(&section)?,
                    category_id: category.id,
                    payment_method: payment,
                    note,
                    items: Vec::new(),
                    image: None,
                },
            )?;

            println!("Added receipt: {} {}", receipt.merchant_name, receipt.total);
            println!("  ID: {}", receipt.id);
        }

        ReceiptCommands::List {
            section,
            category,
            search,
            from,
            to,
            min,
            max,
            skip,
            limit,
        } => {
            let mut filter = ReceiptFilter::new().skip(skip).limit(limit);

            if let Some(s) = section {
                filter = filter.section(parse_section(&s)?);
            }
            if let Some(c) = category {
                let category = categories
                    .find(user, &c)?
                    .ok_or_else(|| BillBrainError::category_not_found(&c))?;
                filter = filter.category(category.id);
            }
            if let Some(s) = search {
                filter = filter.merchant(s);
            }
            if let Some(f) = from {
                filter.date_from = Some(parse_date(&f)?);
            }
            if let Some(t) = to {
                filter.date_to = Some(parse_date(&t)?);
            }
            if let Some(m) = min {
                filter.amount_min = Some(parse_money(&m)?);
            }
            if let Some(m) = max {
                filter.amount_max = Some(parse_money(&m)?);
            }

            let page = service.list(user, &filter)?;
            print!("{}", format_receipt_list(&page, symbol));
        }

        ReceiptCommands::Show { receipt } => {
            let id = parse_receipt_id(&receipt)?;
            let receipt = service.get(user, id)?;
            let category_name = categories
                .get(user, receipt.category_id)
                .ok()
                .map(|c| c.name);
            print!(
                "{}",
                format_receipt_details(&receipt, category_name.as_deref(), symbol)
            );
        }

        ReceiptCommands::Edit {
            receipt,
            merchant,
            total,
            tax,
            date,
            section,
            category,
            payment,
            note,
        } => {
            let id = parse_receipt_id(&receipt)?;

            let category_id = match category {
                Some(c) => Some(
                    categories
                        .find(user, &c)?
                        .ok_or_else(|| BillBrainError::category_not_found(&c))?
                        .id,
                ),
                None => None,
            };

            let input = UpdateReceiptInput {
                merchant_name: merchant,
                date: date.as_deref().map(parse_date).transpose()?,
                total: total.as_deref().map(parse_money).transpose()?,
                tax: tax.as_deref().map(parse_money).transpose()?,
                section: section.as_deref().map(parse_section).transpose()?,
                category_id,
                payment_method: payment,
                note,
            };

            let updated = service.update(user, id, input)?;
            println!("Updated receipt: {} {}", updated.merchant_name, updated.total);
        }

        ReceiptCommands::Delete { receipt } => {
            let id = parse_receipt_id(&receipt)?;
            service.delete(user, id)?;
            println!("Deleted receipt {}", id);
        }
    }

    Ok(())
}

fn parse_receipt_id(s: &str) -> BillBrainResult<ReceiptId> {
    s.parse::<ReceiptId>()
        .map_err(|_| BillBrainError::Validation(format!("Invalid receipt ID: {}", s)))
}
