//! Export CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{BillBrainError, BillBrainResult};
use crate::export::export_receipts_csv;
use crate::models::UserId;
use crate::storage::Storage;

use super::parse_date;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export receipts in a date range as CSV
    Receipts {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    user: UserId,
    cmd: ExportCommands,
) -> BillBrainResult<()> {
    match cmd {
        ExportCommands::Receipts { from, to, output } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        BillBrainError::Export(format!(
                            "Failed to create {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    export_receipts_csv(storage, user, from, to, BufWriter::new(file))?;
                    println!("Exported receipts to {}", path.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    export_receipts_csv(storage, user, from, to, stdout.lock())?;
                }
            }
        }
    }

    Ok(())
}
