//! BillBrain - Terminal-based receipt tracking and tax reporting
//!
//! This library provides the core functionality for the BillBrain receipt
//! tracker. Receipts are classified into personal and business sections,
//! assigned to per-section categories, and rolled up into dashboard
//! summaries, tax reports, and CSV exports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (receipts, categories, sections, money)
//! - `storage`: JSON file storage layer (the record store)
//! - `services`: Business logic layer
//! - `reports`: Read-only aggregation engine (dashboard and tax summaries)
//! - `export`: CSV report projection
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use billbrain::config::{paths::BillBrainPaths, settings::Settings};
//!
//! let paths = BillBrainPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::BillBrainError;
