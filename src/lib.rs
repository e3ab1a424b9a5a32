//! covid19_rs
//!
//! A small Rust library for fetching COVID-19 case statistics from the public
//! covid19api REST service and rendering them in the terminal. Pairs with the
//! `covid19` CLI.
//!
//! ### Features
//! - Global and per-country summaries (totals and daily deltas)
//! - Per-country daily series since the first confirmed case
//! - Bundled country directory (name ↔ ISO2 code ↔ API slug)
//! - Box tables with humanized numbers and an animated day-one progress view
//!
//! ### Example
//! ```no_run
//! use covid19_rs::{Client, Console, Record, render};
//!
//! let client = Client::default();
//! let global = client.fetch_global_summary()?;
//! let mut console = Console::plain(std::io::stdout());
//! console.print_all(&render::render(&Record::Global(global)))?;
//! # Ok::<(), covid19_rs::CovidError>(())
//! ```

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod humanize;
pub mod models;
pub mod render;
pub mod stats;

pub use api::Client;
pub use config::Config;
pub use directory::CountryDirectory;
pub use error::{CovidError, Result};
pub use models::{CountryDirectoryEntry, CountrySummary, DayOneStat, GlobalSummary};
pub use render::{Console, DisplayUnit, Record};
