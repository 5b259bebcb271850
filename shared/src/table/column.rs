//! Column descriptors, cell values and the row trait the table engine sorts over.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sticky::{column_width_px, DEFAULT_COLUMN_WIDTH};

/// A record that can be displayed as one row of a data table.
pub trait TableRow {
    /// Field selector used by column descriptors.
    type Key: Copy + Eq + Hash + fmt::Debug;

    /// Value of `key` for this row, used for sorting and default display.
    fn cell(&self, key: Self::Key) -> CellValue;
}

/// A single cell value with a natural ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    /// Compare two values by their natural ordering.
    ///
    /// Integers and numbers compare numerically with each other, text compares
    /// lexically and dates chronologically. Values of different kinds order by
    /// kind (numeric, then date, then text) so the ordering stays total. NaN
    /// sorts after every other number.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Integer(a), Self::Number(b)) => compare_f64(*a as f64, *b),
            (Self::Number(a), Self::Integer(b)) => compare_f64(*a, *b as f64),
            (Self::Number(a), Self::Number(b)) => compare_f64(*a, *b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Integer(_) | Self::Number(_) => 0,
            Self::Date(_) => 1,
            Self::Text(_) => 2,
        }
    }

}

fn compare_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Both finite or infinite, so partial_cmp is always Some
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Describes one column of a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<K> {
    pub key: K,
    pub header: String,
    /// CSS width such as `"80px"`; `None` uses the default width.
    pub width: Option<String>,
    pub sortable: bool,
}

impl<K> Column<K> {
    pub fn new(key: K, header: impl Into<String>) -> Self {
        Self {
            key,
            header: header.into(),
            width: None,
            sortable: false,
        }
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Width in pixels used for sticky offsets.
    pub fn width_px(&self) -> u32 {
        column_width_px(self.width.as_deref())
    }

    /// CSS `min-width` for the rendered cell.
    pub fn min_width(&self) -> String {
        self.width
            .clone()
            .unwrap_or_else(|| format!("{}px", DEFAULT_COLUMN_WIDTH))
    }
}
