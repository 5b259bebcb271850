//! Single-column sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::column::{CellValue, TableRow};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison for this direction.
    ///
    /// Equal stays equal, which keeps the sort stable in both directions.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The active sort key and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K> SortState<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

/// Header indicator for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    Unsorted,
}

/// Sort state after a click on the header of `key`.
///
/// Cycles none → ascending → descending → none for the same column; a click
/// on a different column starts over at ascending.
pub fn next_sort<K: PartialEq>(current: Option<SortState<K>>, key: K) -> Option<SortState<K>> {
    match current {
        Some(active) if active.key == key => match active.direction {
            SortDirection::Ascending => Some(SortState::descending(key)),
            SortDirection::Descending => None,
        },
        _ => Some(SortState::ascending(key)),
    }
}

pub fn indicator_for<K: PartialEq>(current: Option<&SortState<K>>, key: &K) -> SortIndicator {
    match current {
        Some(active) if active.key == *key => match active.direction {
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        },
        _ => SortIndicator::Unsorted,
    }
}

/// Order `rows` by the active sort without touching the input.
///
/// With no sort the input order is returned. The sort is stable: rows with
/// equal keys keep their relative input order.
pub fn sort_rows<'a, R: TableRow>(rows: &'a [R], sort: Option<&SortState<R::Key>>) -> Vec<&'a R> {
    let Some(sort) = sort else {
        return rows.iter().collect();
    };

    let mut keyed: Vec<(CellValue, &R)> = rows.iter().map(|row| (row.cell(sort.key), row)).collect();
    keyed.sort_by(|(a, _), (b, _)| sort.direction.orient(a.natural_cmp(b)));
    keyed.into_iter().map(|(_, row)| row).collect()
}
