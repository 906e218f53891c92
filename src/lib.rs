//! Currency conversion over a per-request snapshot of exchange rates.
//!
//! The rate feed serves one table per base currency; every conversion
//! fetches the table fresh, derives the cross rate between the two codes
//! and rounds the result to four decimal places, halves away from zero.
//!
//! ```no_run
//! use crossrate::{api, convert};
//!
//! # async fn run() -> crossrate::Result<()> {
//! let rates = api::fetch_rates("eur").await?;
//! let conversion = convert::convert(&rates, "usd", "eur", "100")?;
//! println!("{conversion}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod models;

pub use convert::{convert, Conversion};
pub use error::{Error, Result};
pub use models::RateTable;
