use serde::{Deserialize, Serialize};

use crate::error::TableError;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_LOADING_DELAY_MS: u32 = 800;
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Display configuration for the employee directory table.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page when the table mounts.
    pub page_size: usize,
    /// Choices offered by the page-size selector.
    pub page_size_options: Vec<usize>,
    /// How long the synthetic loading overlay stays up after a page change.
    pub loading_delay_ms: u32,
    /// CSS height of the scrollable viewport.
    pub height: String,
    pub paginate: bool,
    /// Column keys pinned to the left edge, in any order.
    pub sticky_columns: Vec<String>,
    /// Pin only the first column. Ignored when `sticky_columns` is non-empty.
    pub sticky_first_column: bool,
    /// Number of generated sample employees.
    pub sample_size: usize,
    /// Fixed seed for the sample data; random per page load when absent.
    pub sample_seed: Option<u64>,
    /// Minimum log level: "debug", "info", "warn" or "error".
    pub log_level: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            height: "600px".to_string(),
            paginate: true,
            sticky_columns: Vec::new(),
            sticky_first_column: false,
            sample_size: DEFAULT_SAMPLE_SIZE,
            sample_seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl TableConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.page_size == 0 {
            return Err(TableError::InvalidPageSize(self.page_size));
        }
        if let Some(&zero) = self.page_size_options.iter().find(|&&size| size == 0) {
            return Err(TableError::InvalidPageSize(zero));
        }
        Ok(())
    }
}
