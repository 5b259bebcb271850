//! Data table engine for the employee directory.
//!
//! This module contains everything the table needs that does not depend on a
//! rendering framework: column descriptors, the sort/paginate derivation of
//! visible rows, the synthetic loading flag and sticky-column layout.
//!
//! ## Key Responsibilities
//!
//! - **Sorting**: single-column, stable, cycling none → ascending → descending
//! - **Pagination**: 1-based pages with the current page always kept in range
//! - **Loading**: a cosmetic flag raised on page changes and cleared by ticket
//! - **Sticky Layout**: left offsets for columns pinned while scrolling
//!
//! ## Core Components
//!
//! - **TableState**: sort, pagination and loading state with one transition function
//! - **TableAction**: every user interaction the table reacts to
//! - **Column / TableRow**: how rows expose sortable, displayable cells
//! - **StickyColumns**: which columns are pinned

pub mod column;
pub mod pagination;
pub mod sort;
pub mod state;
pub mod sticky;

pub use column::{CellValue, Column, TableRow};
pub use pagination::{page_range, page_size_choices, page_slice, page_window, PageInfo, Pagination};
pub use sort::{indicator_for, next_sort, sort_rows, SortDirection, SortIndicator, SortState};
pub use state::{LoadingState, LoadingTicket, TableAction, TableState, Transition};
pub use sticky::{column_width_px, sticky_layout, sticky_offset, StickyColumns, DEFAULT_COLUMN_WIDTH};
