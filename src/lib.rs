//! Ad report aggregation.
//!
//! Reads a comma-separated report of `MM/DD/YYYY,subdivision,impressions,ctr%`
//! lines (UTF-8 or UTF-16), validates every line, maps the subdivision to its
//! country's alpha-3 code and sums impressions and derived clicks per
//! (date, country). The result is written as
//! `YYYY-MM-DD,country,impressions,clicks`, sorted by date and country.
//!
//! ```
//! use proccsv::{loader, SubdivisionTable};
//!
//! let input = "01/02/2020,California,100,5%\n01/02/2020,Nevada,50,10%\n";
//! let mut out = Vec::new();
//! let mut diagnostics = Vec::new();
//! let table = SubdivisionTable::builtin();
//! loader::run(input.as_bytes(), &mut out, &table, &mut diagnostics).unwrap();
//! assert!(out.starts_with(b"2020-01-02,USA,150,10"));
//! ```
pub mod aggregate;
pub mod config;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod loader;
pub mod output;
pub mod processor;
pub mod resolver;
pub mod subdivisions;
pub mod types;
pub mod util;

pub use error::{EncodingError, Field, FieldError, FieldErrorKind, ProcError, ProcResult, RowError};
pub use resolver::SubdivisionTable;
pub use types::{AggregationEntry, AggregationKey, RunReport, ValidatedRow, UNKNOWN_COUNTRY};
