//! Layout configuration for table display.
//!
//! The width budget, fill character, field delimiter and ellipsis marker are
//! owned by each table rather than being process-wide constants, so a test can
//! run with a budget of 10 next to a production table with the default 100.
//!
//! Configuration can be built in code or loaded from YAML:
//!
//! ```rust
//! use standout_display::DisplayConfig;
//!
//! let config = DisplayConfig::default().max_width(40).delimiter(" ; ");
//! assert_eq!(config.max_width, 40);
//!
//! let config = DisplayConfig::from_yaml("max_width: 60\nfill: '.'").unwrap();
//! assert_eq!(config.max_width, 60);
//! assert_eq!(config.fill, '.');
//! assert_eq!(config.delimiter, " | ");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util::display_width;

/// Default printed-width budget.
pub const DEFAULT_MAX_WIDTH: usize = 100;

/// Default padding character.
pub const DEFAULT_FILL: char = ' ';

/// Default delimiter written after every field.
pub const DEFAULT_DELIMITER: &str = " | ";

/// Default marker for shortened collections.
pub const DEFAULT_ELLIPSIS: &str = "…";

/// Narrowest a column may be once it holds an ellipsis marker.
pub const DOTTED_MIN_WIDTH: usize = 3;

/// Width budget and punctuation used when laying out a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Columns that push the accumulated width past this are elided on render.
    pub max_width: usize,
    /// Character used to pad fields to their column width.
    pub fill: char,
    /// Text written after every field.
    pub delimiter: String,
    /// Marker printed in place of a shortened collection's hidden elements.
    pub ellipsis: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_width: DEFAULT_MAX_WIDTH,
            fill: DEFAULT_FILL,
            delimiter: DEFAULT_DELIMITER.to_string(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Parses a configuration from YAML. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set the printed-width budget.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the padding character.
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the ellipsis marker.
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Minimum width of a column that holds an ellipsis marker.
    pub fn dotted_width(&self) -> usize {
        DOTTED_MIN_WIDTH.max(display_width(&self.ellipsis))
    }

    pub(crate) fn delimiter_width(&self) -> usize {
        display_width(&self.delimiter)
    }
}
