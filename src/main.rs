use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use billbrain::cli::{
    handle_category_command, handle_export_command, handle_receipt_command, handle_report_command,
};
use billbrain::config::{paths::BillBrainPaths, settings::Settings};
use billbrain::models::UserId;
use billbrain::services::CategoryService;
use billbrain::storage::Storage;

#[derive(Parser)]
#[command(
    name = "billbrain",
    version,
    about = "Terminal-based receipt tracking and tax reporting",
    long_about = "BillBrain tracks your receipts, splits spending into personal \
                  and business sections, and rolls everything up into dashboard \
                  summaries, tax reports, and CSV exports."
)]
struct Cli {
    /// User identity to operate as (UUID)
    #[arg(long, global = true, env = "BILLBRAIN_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Receipt management commands
    #[command(subcommand, alias = "rcpt")]
    Receipt(billbrain::cli::ReceiptCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(billbrain::cli::CategoryCommands),

    /// Report commands
    #[command(subcommand)]
    Report(billbrain::cli::ReportCommands),

    /// Export commands
    #[command(subcommand)]
    Export(billbrain::cli::ExportCommands),

    /// Initialize BillBrain and seed default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BillBrainPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Receipt(cmd)) => {
            let user = resolve_user(cli.user.as_deref(), &settings)?;
            handle_receipt_command(&storage, user, &settings.currency_symbol, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let user = resolve_user(cli.user.as_deref(), &settings)?;
            handle_category_command(&storage, user, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let user = resolve_user(cli.user.as_deref(), &settings)?;
            handle_report_command(&storage, user, &settings.currency_symbol, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let user = resolve_user(cli.user.as_deref(), &settings)?;
            handle_export_command(&storage, user, cmd)?;
        }
        Some(Commands::Init) => {
            let user = match cli.user.as_deref() {
                Some(raw) => parse_user(raw)?,
                None => settings.default_user.unwrap_or_else(UserId::new),
            };

            settings.default_user = Some(user);
            settings.save(&paths)?;

            let seeded = CategoryService::new(&storage).seed_defaults(user)?;

            println!("Initialized BillBrain at: {}", paths.base_dir().display());
            println!("Default user: {}", user.as_uuid());
            if seeded > 0 {
                println!("Seeded {} default categories (personal and business).", seeded);
            }
            println!();
            println!("Run 'billbrain category list' to see your categories.");
        }
        Some(Commands::Config) => {
            println!("BillBrain Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency: {} ({})", settings.currency_symbol, settings.currency_code);
            println!("  Date format: {}", settings.date_format);
            match settings.default_user {
                Some(user) => println!("  Default user: {}", user.as_uuid()),
                None => println!("  Default user: (not set - run 'billbrain init')"),
            }
        }
        None => {
            println!("BillBrain - receipt tracking and tax reporting");
            println!();
            println!("Run 'billbrain --help' for usage information.");
            println!("Run 'billbrain init' to get started.");
        }
    }

    Ok(())
}

/// Resolve the user identity for a command: --user flag first, then the
/// default recorded in settings.
fn resolve_user(flag: Option<&str>, settings: &Settings) -> Result<UserId> {
    if let Some(raw) = flag {
        return parse_user(raw);
    }

    settings
        .default_user
        .ok_or_else(|| anyhow!("No user configured. Pass --user or run 'billbrain init' first."))
}

fn parse_user(raw: &str) -> Result<UserId> {
    raw.parse::<UserId>()
        .map_err(|_| anyhow!("Invalid user ID '{}' (expected a UUID)", raw))
}
