//! # rustreadinglog
//!
//! Reading Log Converter - turns a spreadsheet CSV export of a paper reading
//! log into a normalized JSON array, one record per paper.
//!
//! ## Modules
//!
//! - [`headers`] - Canonical header map and whitespace-tolerant header index
//! - [`normalize`] - Tag, year, bullet-list and rating normalization
//! - [`record`] - Output record assembly and id synthesis
//! - [`convert`] - CSV reading and JSON writing
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let count = rustreadinglog::convert::convert_file(
//!         Path::new("reading_log.csv"),
//!         Path::new("papers.json"),
//!     )?;
//!     println!("Wrote {} papers", count);
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod error;
pub mod headers;
pub mod normalize;
pub mod record;

pub use error::{ReadingLogError, Result};
pub use record::PaperRecord;
