//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display::{format_dashboard, format_tax_summary};
use crate::error::BillBrainResult;
use crate::models::UserId;
use crate::reports::{DashboardSummary, TaxSummary};
use crate::storage::Storage;

use super::parse_date;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the dashboard summary (current month and year)
    Dashboard,

    /// Show the tax summary for a date range
    Tax {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    user: UserId,
    symbol: &str,
    cmd: ReportCommands,
) -> BillBrainResult<()> {
    match cmd {
        ReportCommands::Dashboard => {
            let today = Local::now().date_naive();
            let summary = DashboardSummary::generate(storage, user, today)?;
            print!("{}", format_dashboard(&summary, symbol));
        }

        ReportCommands::Tax { from, to } => {
            let summary =
                TaxSummary::generate(storage, user, parse_date(&from)?, parse_date(&to)?)?;
            print!("{}", format_tax_summary(&summary, symbol));
        }
    }

    Ok(())
}
