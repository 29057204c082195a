//! In-memory table engine for tablerank
//!
//! Parses delimited text into typed rows, derives computed columns, orders
//! rows by a column and renders the result as a fixed-width text table.
//!
//! # Examples
//!
//! ## Parsing and reading values
//!
//! ```
//! use tablerank_table::{CellValue, Table};
//!
//! let table = Table::parse("city,density\n  Lagos,13712\n  Tokyo,6168").unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! let lagos = table.get_row(0).unwrap();
//! assert_eq!(lagos.get_value("city").unwrap(), &CellValue::from("Lagos"));
//! assert_eq!(table.max_of("density").unwrap(), CellValue::Int(13712));
//! ```
//!
//! ## Ranking, sorting and rendering
//!
//! ```
//! use tablerank_table::{rank_against, RenderOptions, Table};
//!
//! let table = Table::parse("city,density\nA,100\nB,300\nC,200").unwrap();
//! let max = table.max_of("density").unwrap().as_float().unwrap();
//!
//! let text = table
//!     .with_computed_column("rank", rank_against("density", max))
//!     .and_then(|t| t.sort_by("rank"))
//!     .and_then(|t| {
//!         t.render_with_options(&RenderOptions::new().with_gap(1).with_left_aligned(["city"]))
//!     })
//!     .unwrap();
//!
//! assert_eq!(text, "B  300 100\nC  200  67\nA  100  33\n");
//! ```
//!
//! Every transforming operation consumes the table and returns the new one,
//! so a table is never changed behind a caller's back.

mod cell;
mod column;
mod csv;
mod error;
mod json;
mod rank;
mod render;
mod row;
pub mod sample;
mod table;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export column view.
pub use column::Column;
/// Re-export parse options.
pub use csv::ParseOptions;
/// Re-export table error types.
pub use error::{Result, TableError};
/// Re-export the canonical rank compute function.
pub use rank::rank_against;
/// Re-export render options.
pub use render::RenderOptions;
/// Re-export row type.
pub use row::Row;
/// Re-export table types.
pub use table::{SortOrder, Table};
