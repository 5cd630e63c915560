//! # Standout Display - Console Tables for Row/Column Data
//!
//! `standout-display` lays out already-stringified values as an aligned text
//! table that fits a width budget. It does not decide how a value is turned
//! into text; it only measures, pads, shortens and prints.
//!
//! ## Core Concepts
//!
//! - [`TableDisplay`]: append-only grid with a write cursor, plus renderers
//! - [`Cell`]: a grid slot and its printing state (printed, dotted, ignored)
//! - [`DisplayConfig`]: width budget, fill character, delimiter and ellipsis
//! - [`DisplayValue`]: JSON values converted to cells or collections
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_display::TableDisplay;
//!
//! let mut table = TableDisplay::new(["id", "hits"], ["int", "vector<int>"], 1).unwrap();
//! table.add_cell("7");
//! table.add_collection_cell(["3", "1", "4", "1", "5"]);
//!
//! assert_eq!(
//!     table.render_lines(),
//!     vec![
//!         "id | hits | ",
//!         "7  | 3    | ",
//!         "   | …    | ",
//!         "   | 5    | ",
//!     ]
//! );
//! ```
//!
//! ## Shortening and Elision
//!
//! Collections are expanded down their column. Rendering keeps the first and
//! last element and replaces everything in between with one ellipsis line;
//! [`TableDisplay::serialize`] still shows every element.
//!
//! Columns are dropped from the right once their accumulated width (each
//! followed by the delimiter) exceeds the configured `max_width`:
//!
//! ```rust
//! use standout_display::{DisplayConfig, TableDisplay};
//!
//! let config = DisplayConfig::default().max_width(8);
//! let mut table = TableDisplay::with_config(["left", "right"], ["s", "s"], 1, config).unwrap();
//! table.add_cell("a");
//! table.add_cell("b");
//!
//! assert_eq!(table.columns_to_elide(), 1);
//! assert_eq!(table.render_lines(), vec!["left | ", "a    | "]);
//! ```

mod cell;
mod config;
mod error;
mod table;
mod util;
pub mod value;

pub use cell::Cell;
pub use config::{
    DisplayConfig, DEFAULT_DELIMITER, DEFAULT_ELLIPSIS, DEFAULT_FILL, DEFAULT_MAX_WIDTH,
    DOTTED_MIN_WIDTH,
};
pub use error::{DisplayError, Result};
pub use table::TableDisplay;
pub use util::{display_width, pad_right_with};
pub use value::{type_label, DisplayValue};
