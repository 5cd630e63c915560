//! Turning JSON values into display input.
//!
//! The table only lays out text it is given. This module is the conversion a
//! caller needs when its data is already JSON: scalars become single cells,
//! arrays become collections expanded down the column.

use serde_json::Value;

use crate::table::TableDisplay;

/// A value ready to be appended to a [`TableDisplay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayValue {
    /// Appended with [`TableDisplay::add_cell`].
    Scalar(String),
    /// Appended with [`TableDisplay::add_collection_cell`].
    Collection(Vec<String>),
}

impl DisplayValue {
    /// Converts a JSON value.
    ///
    /// Strings are shown without quotes. Arrays become collections whose
    /// elements are converted the same way, except that nested arrays and
    /// objects are kept as compact JSON.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use standout_display::DisplayValue;
    ///
    /// assert_eq!(DisplayValue::from_json(&json!("hi")), DisplayValue::Scalar("hi".into()));
    /// assert_eq!(
    ///     DisplayValue::from_json(&json!([1, [2, 3]])),
    ///     DisplayValue::Collection(vec!["1".into(), "[2,3]".into()]),
    /// );
    /// ```
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                DisplayValue::Collection(items.iter().map(scalar_text).collect())
            }
            other => DisplayValue::Scalar(scalar_text(other)),
        }
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        DisplayValue::Scalar(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        DisplayValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for DisplayValue {
    fn from(values: Vec<String>) -> Self {
        DisplayValue::Collection(values)
    }
}

/// Short name for the JSON type of `value`, usable as a column type label.
pub fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl TableDisplay {
    /// Append a converted value at the cursor.
    pub fn add_value(&mut self, value: impl Into<DisplayValue>) {
        match value.into() {
            DisplayValue::Scalar(s) => self.add_cell(s),
            DisplayValue::Collection(items) => self.add_collection_cell(items),
        }
    }
}
