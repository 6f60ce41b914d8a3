//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{BillBrainError, BillBrainResult};
use crate::models::UserId;
use crate::services::{CategoryDeletion, CategoryService};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories (grouped by section)
    List {
        /// Only show one section (personal or business)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Section the category belongs to (personal or business)
        #[arg(short, long)]
        section: String,
    },

    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: String,
    },

    /// Delete a category (blocked while receipts reference it)
    Delete {
        /// Category name or ID
        category: String,
    },

    /// Seed the default category set for this user
    Seed,
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    user: UserId,
    cmd: CategoryCommands,
) -> BillBrainResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { section } => {
            let categories = match section {
                Some(s) => service.list_by_section(user, super::parse_section(&s)?)?,
                None => service.list(user)?,
            };
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Create { name, section } => {
            let category = service.create(user, &name, super::parse_section(&section)?)?;
            println!("Created category: {} ({})", category.name, category.section);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Rename { category, name } => {
            let cat = service
                .find(user, &category)?
                .ok_or_else(|| BillBrainError::category_not_found(&category))?;

            let renamed = service.rename(user, cat.id, &name)?;
            println!("Renamed category to: {}", renamed.name);
        }

        CategoryCommands::Delete { category } => {
            let cat = service
                .find(user, &category)?
                .ok_or_else(|| BillBrainError::category_not_found(&category))?;

            match service.delete(user, cat.id)? {
                CategoryDeletion::Deleted => {
                    println!("Deleted category: {}", cat.name);
                }
                CategoryDeletion::BlockedByReferences { receipt_count } => {
                    println!(
                        "Cannot delete '{}': {} receipt(s) still use it. Reassign them first.",
                        cat.name, receipt_count
                    );
                }
            }
        }

        CategoryCommands::Seed => {
            let created = service.seed_defaults(user)?;
            if created == 0 {
                println!("Categories already present; nothing seeded.");
            } else {
                println!("Seeded {} default categories.", created);
            }
        }
    }

    Ok(())
}
