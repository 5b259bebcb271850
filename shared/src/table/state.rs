//! Table state and its transition function.

use crate::error::TableError;

use super::column::{Column, TableRow};
use super::pagination::{page_slice, PageInfo, Pagination};
use super::sort::{indicator_for, next_sort, sort_rows, SortIndicator, SortState};

/// Identifies one loading cycle. Only the ticket of the latest cycle may
/// clear the loading flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadingTicket(u64);

/// Synthetic loading flag shown after page changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingState {
    active: bool,
    generation: u64,
}

impl LoadingState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticket of the running cycle, if any.
    pub fn ticket(&self) -> Option<LoadingTicket> {
        self.active.then_some(LoadingTicket(self.generation))
    }

    fn start(&mut self) -> LoadingTicket {
        self.generation += 1;
        self.active = true;
        LoadingTicket(self.generation)
    }

    fn finish(&mut self, ticket: LoadingTicket) -> bool {
        if self.active && ticket.0 == self.generation {
            self.active = false;
            true
        } else {
            false
        }
    }
}

/// Every way the table state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction<K> {
    /// Header click on the column `key`.
    Sort { key: K, sortable: bool },
    ChangePage(usize),
    ChangePageSize(usize),
    /// The bound data now has this many rows.
    SetRowCount(usize),
    FinishLoading(LoadingTicket),
}

impl<K: Copy> TableAction<K> {
    pub fn sort(column: &Column<K>) -> Self {
        TableAction::Sort {
            key: column.key,
            sortable: column.sortable,
        }
    }
}

/// Outcome of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    pub changed: bool,
    /// Set when the action started a loading cycle; the caller schedules
    /// [`TableAction::FinishLoading`] with it after the loading delay.
    pub loading: Option<LoadingTicket>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            loading: None,
        }
    }

    fn loading(ticket: LoadingTicket) -> Self {
        Self {
            changed: true,
            loading: Some(ticket),
        }
    }
}

/// Sort, pagination and loading state of one data table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<K> {
    sort: Option<SortState<K>>,
    pagination: Pagination,
    loading: LoadingState,
}

impl<K: Copy + PartialEq> TableState<K> {
    /// Fresh state: no sort, page 1, not loading.
    pub fn new(total_rows: usize, page_size: usize) -> Self {
        Self {
            sort: None,
            pagination: Pagination::new(page_size, total_rows),
            loading: LoadingState::default(),
        }
    }

    /// State showing all rows on one page.
    pub fn unpaginated(total_rows: usize) -> Self {
        Self {
            sort: None,
            pagination: Pagination::disabled(total_rows),
            loading: LoadingState::default(),
        }
    }

    pub fn sort(&self) -> Option<&SortState<K>> {
        self.sort.as_ref()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn page_info(&self) -> PageInfo {
        self.pagination.page_info()
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn sort_indicator(&self, key: &K) -> SortIndicator {
        indicator_for(self.sort.as_ref(), key)
    }

    /// Apply one action. All coupling between sort, page size and the current
    /// page lives here: a sort or page-size change returns to page 1, and the
    /// current page always stays within `1..=max(1, total_pages)`.
    pub fn apply(&mut self, action: TableAction<K>) -> Result<Transition, TableError> {
        match action {
            TableAction::Sort { key, sortable } => {
                if !sortable {
                    return Ok(Transition::unchanged());
                }
                self.sort = next_sort(self.sort, key);
                self.pagination.current_page = 1;
                Ok(Transition::changed())
            }
            TableAction::ChangePage(page) => Ok(Transition::loading(self.change_page(page))),
            TableAction::ChangePageSize(size) => {
                Ok(Transition::loading(self.change_page_size(size)?))
            }
            TableAction::SetRowCount(total_rows) => {
                let before = self.pagination;
                self.pagination.total_rows = total_rows;
                if !self.pagination.enabled {
                    self.pagination.page_size = total_rows.max(1);
                }
                self.pagination.current_page = self.pagination.clamp_page(before.current_page);
                Ok(Transition {
                    changed: self.pagination != before,
                    loading: None,
                })
            }
            TableAction::FinishLoading(ticket) => Ok(Transition {
                changed: self.loading.finish(ticket),
                loading: None,
            }),
        }
    }

    pub fn handle_sort(&mut self, column: &Column<K>) -> Transition {
        // Sorting never fails
        self.apply(TableAction::sort(column)).unwrap_or_default()
    }

    pub fn handle_page_change(&mut self, page: usize) -> LoadingTicket {
        self.change_page(page)
    }

    pub fn handle_page_size_change(&mut self, size: usize) -> Result<LoadingTicket, TableError> {
        self.change_page_size(size)
    }

    fn change_page(&mut self, page: usize) -> LoadingTicket {
        self.pagination.current_page = self.pagination.clamp_page(page);
        self.loading.start()
    }

    fn change_page_size(&mut self, size: usize) -> Result<LoadingTicket, TableError> {
        if size == 0 {
            return Err(TableError::InvalidPageSize(size));
        }
        self.pagination.page_size = size;
        self.pagination.current_page = 1;
        Ok(self.loading.start())
    }

    pub fn finish_loading(&mut self, ticket: LoadingTicket) -> bool {
        self.loading.finish(ticket)
    }

    /// All rows in display order.
    pub fn sorted_rows<'a, R>(&self, rows: &'a [R]) -> Vec<&'a R>
    where
        R: TableRow<Key = K>,
    {
        sort_rows(rows, self.sort.as_ref())
    }

    /// Rows on the current page, in display order.
    pub fn visible_rows<'a, R>(&self, rows: &'a [R]) -> Vec<&'a R>
    where
        R: TableRow<Key = K>,
    {
        let sorted = self.sorted_rows(rows);
        if !self.pagination.enabled {
            return sorted;
        }
        page_slice(&sorted, self.pagination.current_page, self.pagination.page_size).to_vec()
    }

    /// The exact row shown at `visible_index` on the current page.
    pub fn row_at<'a, R>(&self, rows: &'a [R], visible_index: usize) -> Option<&'a R>
    where
        R: TableRow<Key = K>,
    {
        self.visible_rows(rows).get(visible_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        salary: u64,
        city: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Field {
        Id,
        Salary,
        City,
    }

    impl TableRow for Row {
        type Key = Field;

        fn cell(&self, key: Field) -> CellValue {
            match key {
                Field::Id => self.id.into(),
                Field::Salary => self.salary.into(),
                Field::City => self.city.into(),
            }
        }
    }

    fn rows(count: u32) -> Vec<Row> {
        let cities = ["Seoul", "Busan", "Daegu"];
        (1..=count)
            .map(|id| Row {
                id,
                salary: 40_000_000 + u64::from((id * 7919) % 13) * 1_000_000,
                city: cities[(id as usize) % cities.len()],
            })
            .collect()
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn salary() -> Column<Field> {
        Column::new(Field::Salary, "Salary").sortable()
    }

    #[test]
    fn test_defaults() {
        let state = TableState::<Field>::new(15, 10);
        assert_eq!(state.sort(), None);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 10);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_fifteen_rows_scenario() {
        let data = rows(15);
        let mut state = TableState::new(data.len(), 10);

        assert_eq!(state.total_pages(), 2);
        assert_eq!(ids(&state.visible_rows(&data)), (1..=10).collect::<Vec<_>>());

        state.apply(TableAction::ChangePage(2)).unwrap();
        assert_eq!(ids(&state.visible_rows(&data)), (11..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_three_clicks_clear_sort() {
        let mut state = TableState::new(10, 10);
        let column = salary();

        state.handle_sort(&column);
        assert_eq!(state.sort_indicator(&Field::Salary), SortIndicator::Ascending);
        state.handle_sort(&column);
        assert_eq!(state.sort_indicator(&Field::Salary), SortIndicator::Descending);
        state.handle_sort(&column);
        assert_eq!(state.sort(), None);
        assert_eq!(state.sort_indicator(&Field::Salary), SortIndicator::Unsorted);
    }

    #[test]
    fn test_non_sortable_column_is_ignored() {
        let mut state = TableState::new(10, 10);
        let city = Column::new(Field::City, "City");

        let transition = state.handle_sort(&city);
        assert!(!transition.changed);
        assert_eq!(state.sort(), None);

        state.handle_sort(&salary());
        state.handle_sort(&city);
        assert_eq!(state.sort(), Some(&SortState::ascending(Field::Salary)));
    }

    #[test]
    fn test_salary_cycle_restores_original_order() {
        let data = rows(30);
        let mut state = TableState::new(data.len(), 30);
        let original = ids(&state.visible_rows(&data));

        state.handle_sort(&salary());
        let ascending = state.sorted_rows(&data);
        assert!(ascending.windows(2).all(|w| w[0].salary <= w[1].salary));

        state.handle_sort(&salary());
        let descending = state.sorted_rows(&data);
        assert!(descending.windows(2).all(|w| w[0].salary >= w[1].salary));

        state.handle_sort(&salary());
        assert_eq!(ids(&state.visible_rows(&data)), original);
    }

    #[test]
    fn test_sort_resets_page() {
        let mut state = TableState::new(35, 10);
        state.apply(TableAction::ChangePage(3)).unwrap();
        assert_eq!(state.current_page(), 3);

        state.handle_sort(&salary());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = TableState::<Field>::new(35, 10);
        state.apply(TableAction::ChangePage(4)).unwrap();

        let transition = state.apply(TableAction::ChangePageSize(20)).unwrap();
        assert!(transition.loading.is_some());
        assert_eq!(state.page_size(), 20);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 2);
        assert!(state.is_loading());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let mut state = TableState::<Field>::new(35, 10);
        state.apply(TableAction::ChangePage(2)).unwrap();

        let result = state.apply(TableAction::ChangePageSize(0));
        assert_eq!(result, Err(TableError::InvalidPageSize(0)));
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_handle_page_size_change() {
        let mut state = TableState::<Field>::new(35, 10);
        let first = state.handle_page_change(3);

        let second = state.handle_page_size_change(15).unwrap();
        assert_ne!(first, second);
        assert_eq!(state.page_size(), 15);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 3);

        assert_eq!(state.handle_page_size_change(0), Err(TableError::InvalidPageSize(0)));
        assert_eq!(state.page_size(), 15);
        assert!(!state.finish_loading(first));
        assert!(state.finish_loading(second));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_page_change_is_clamped() {
        let mut state = TableState::<Field>::new(15, 10);

        state.handle_page_change(7);
        assert_eq!(state.current_page(), 2);

        state.handle_page_change(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_loading_cycle() {
        let mut state = TableState::<Field>::new(15, 10);
        let transition = state.apply(TableAction::ChangePage(2)).unwrap();
        let ticket = transition.loading.expect("page change starts loading");
        assert!(state.is_loading());
        assert_eq!(state.loading().ticket(), Some(ticket));

        let transition = state.apply(TableAction::FinishLoading(ticket)).unwrap();
        assert!(transition.changed);
        assert!(!state.is_loading());
        assert_eq!(state.loading().ticket(), None);
    }

    #[test]
    fn test_superseded_ticket_does_not_clear_loading() {
        let mut state = TableState::<Field>::new(50, 10);
        let first = state.handle_page_change(2);
        let second = state.handle_page_change(3);
        assert_ne!(first, second);

        assert!(!state.finish_loading(first));
        assert!(state.is_loading());

        assert!(state.finish_loading(second));
        assert!(!state.is_loading());

        // A late duplicate is harmless
        assert!(!state.finish_loading(second));
    }

    #[test]
    fn test_sort_does_not_start_loading() {
        let mut state = TableState::new(50, 10);
        let transition = state.handle_sort(&salary());
        assert!(transition.changed);
        assert_eq!(transition.loading, None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_row_count_change_reclamps_page() {
        let mut state = TableState::<Field>::new(50, 10);
        state.handle_page_change(5);

        let transition = state.apply(TableAction::SetRowCount(22)).unwrap();
        assert!(transition.changed);
        assert_eq!(state.current_page(), 3);

        state.apply(TableAction::SetRowCount(0)).unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 0);

        let transition = state.apply(TableAction::SetRowCount(0)).unwrap();
        assert!(!transition.changed);
    }

    #[test]
    fn test_empty_data() {
        let data: Vec<Row> = Vec::new();
        let state = TableState::new(0, 10);
        assert_eq!(state.total_pages(), 0);
        assert!(state.visible_rows(&data).is_empty());
        assert_eq!(state.row_at(&data, 0), None);
    }

    #[test]
    fn test_row_at_returns_exact_row() {
        let data = rows(25);
        let mut state = TableState::new(data.len(), 10);
        state.handle_sort(&Column::new(Field::Id, "ID").sortable());
        state.handle_sort(&Column::new(Field::Id, "ID").sortable());
        state.handle_page_change(2);

        let row = state.row_at(&data, 3).expect("row exists");
        // Descending by id: page 2 starts at id 15
        assert_eq!(row.id, 12);
        assert!(std::ptr::eq(row, &data[11]));
        assert_eq!(state.row_at(&data, 10), None);
    }

    #[test]
    fn test_unpaginated_state_shows_all_rows() {
        let data = rows(42);
        let mut state = TableState::unpaginated(data.len());
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.visible_rows(&data).len(), 42);

        state.apply(TableAction::SetRowCount(10)).unwrap();
        assert_eq!(state.visible_rows(&data[..10]).len(), 10);
    }
}
