use std::fmt::Debug;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::{TableAction, TableState};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Options the table state is created from.
#[derive(Clone, PartialEq)]
pub struct TableOptions {
    pub total_rows: usize,
    pub page_size: usize,
    pub paginate: bool,
    /// How long the loading overlay stays up after a page change
    pub loading_delay_ms: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            total_rows: 0,
            page_size: shared::config::DEFAULT_PAGE_SIZE,
            paginate: true,
            loading_delay_ms: shared::config::DEFAULT_LOADING_DELAY_MS,
        }
    }
}

/// Reducer wrapper so [`TableState`] can live in `use_reducer`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStore<K> {
    pub state: TableState<K>,
}

impl<K: Copy + PartialEq> TableStore<K> {
    pub fn new(options: &TableOptions) -> Self {
        let state = if options.paginate {
            TableState::new(options.total_rows, options.page_size)
        } else {
            TableState::unpaginated(options.total_rows)
        };
        Self { state }
    }
}

impl<K: Copy + PartialEq + Debug> Reducible for TableStore<K> {
    type Action = TableAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let description = format!("{:?}", action);
        let mut state = self.state.clone();

        match state.apply(action) {
            Ok(transition) if transition.changed => {
                Logger::debug_with_component(
                    "data-table",
                    &format!(
                        "{} -> page {}/{} size {}",
                        description,
                        state.current_page(),
                        state.total_pages(),
                        state.page_size()
                    ),
                );
                Rc::new(Self { state })
            }
            Ok(_) => self,
            Err(e) => {
                Logger::warn_with_component("data-table", &format!("Rejected {}: {}", description, e));
                self
            }
        }
    }
}

/// Result from the table hook
pub struct UseTableResult<K: Copy + PartialEq + Debug + 'static> {
    pub state: TableState<K>,
    pub dispatcher: UseReducerDispatcher<TableStore<K>>,
}

/// Hook owning the sort, pagination and loading state of one data table.
///
/// Keeps the row count in sync with `options.total_rows` and clears the
/// loading flag `options.loading_delay_ms` after each page change. A newer
/// page change drops the pending timer of the previous one.
#[hook]
pub fn use_table<K>(options: TableOptions) -> UseTableResult<K>
where
    K: Copy + PartialEq + Debug + 'static,
{
    let store = {
        let options = options.clone();
        use_reducer(move || TableStore::new(&options))
    };

    {
        let dispatcher = store.dispatcher();
        use_effect_with(options.total_rows, move |total_rows| {
            dispatcher.dispatch(TableAction::SetRowCount(*total_rows));
        });
    }

    {
        let dispatcher = store.dispatcher();
        let delay_ms = options.loading_delay_ms;
        use_effect_with(store.state.loading().ticket(), move |ticket| {
            let timeout = ticket.map(|ticket| {
                Timeout::new(delay_ms, move || {
                    dispatcher.dispatch(TableAction::FinishLoading(ticket));
                })
            });
            move || drop(timeout)
        });
    }

    UseTableResult {
        state: store.state.clone(),
        dispatcher: store.dispatcher(),
    }
}
