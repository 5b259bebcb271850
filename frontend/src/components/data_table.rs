use std::fmt::Debug;
use std::rc::Rc;

use shared::table::{sticky_layout, SortIndicator};
use shared::{CellValue, Column, StickyColumns, TableAction, TableRow, TableState};
use yew::prelude::*;

use super::pagination_bar::PaginationBar;
use crate::hooks::use_table::{use_table, TableOptions};

/// Renders one cell from its value and the row it belongs to.
pub type CellRenderer<R> = Rc<dyn Fn(&CellValue, &R) -> Html>;

/// A column plus an optional custom cell renderer.
pub struct ColumnDef<R: TableRow> {
    pub column: Column<R::Key>,
    pub render: Option<CellRenderer<R>>,
}

impl<R: TableRow> ColumnDef<R> {
    pub fn new(column: Column<R::Key>) -> Self {
        Self { column, render: None }
    }

    pub fn render(mut self, render: impl Fn(&CellValue, &R) -> Html + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Cell content; plain text when no renderer is set.
    pub fn render_cell(&self, row: &R) -> Html {
        let value = row.cell(self.column.key);
        match &self.render {
            Some(render) => render(&value, row),
            None => html! { {value.to_string()} },
        }
    }
}

impl<R: TableRow> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            column: self.column.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R: TableRow> PartialEq for ColumnDef<R> {
    fn eq(&self, other: &Self) -> bool {
        let same_render = match (&self.render, &other.render) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.column == other.column && same_render
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R>
where
    R: TableRow + Clone + PartialEq + 'static,
{
    pub data: Rc<Vec<R>>,
    pub columns: Rc<Vec<ColumnDef<R>>>,
    #[prop_or_default]
    pub sticky: StickyColumns<R::Key>,
    /// CSS height of the scroll viewport
    #[prop_or(AttrValue::Static("600px"))]
    pub height: AttrValue,
    #[prop_or(shared::config::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[prop_or(true)]
    pub paginate: bool,
    #[prop_or_else(|| vec![10, 20, 50, 100])]
    pub page_size_options: Vec<usize>,
    #[prop_or(shared::config::DEFAULT_LOADING_DELAY_MS)]
    pub loading_delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_row_click: Option<Callback<R>>,
}

/// Header glyph for a sort indicator.
pub fn sort_glyph(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Ascending => "▲",
        SortIndicator::Descending => "▼",
        SortIndicator::Unsorted => "⇅",
    }
}

/// Inline style for a header or body cell. Sticky cells get their left offset;
/// `position: sticky` itself comes from the `sticky-col` class.
pub fn cell_style<K>(column: &Column<K>, offset: Option<u32>) -> String {
    match offset {
        Some(left) => format!("min-width: {}; left: {}px;", column.min_width(), left),
        None => format!("min-width: {};", column.min_width()),
    }
}

/// Emit the row shown at `visible_index` of the current page, exactly once.
/// Returns false when no row is shown there.
pub fn emit_row_click<R>(
    on_row_click: &Callback<R>,
    state: &TableState<R::Key>,
    rows: &[R],
    visible_index: usize,
) -> bool
where
    R: TableRow + Clone + 'static,
{
    match state.row_at(rows, visible_index) {
        Some(row) => {
            on_row_click.emit(row.clone());
            true
        }
        None => false,
    }
}

#[function_component(DataTable)]
pub fn data_table<R>(props: &DataTableProps<R>) -> Html
where
    R: TableRow + Clone + PartialEq + 'static,
    R::Key: Debug + 'static,
{
    let table = use_table::<R::Key>(TableOptions {
        total_rows: props.data.len(),
        page_size: props.page_size,
        paginate: props.paginate,
        loading_delay_ms: props.loading_delay_ms,
    });

    let layout = {
        let columns: Vec<Column<R::Key>> = props.columns.iter().map(|def| def.column.clone()).collect();
        sticky_layout(&columns, &props.sticky)
    };

    let on_page_change = {
        let dispatcher = table.dispatcher.clone();
        Callback::from(move |page: usize| dispatcher.dispatch(TableAction::ChangePage(page)))
    };

    let on_page_size_change = {
        let dispatcher = table.dispatcher.clone();
        Callback::from(move |size: usize| dispatcher.dispatch(TableAction::ChangePageSize(size)))
    };

    let header_cells = props.columns.iter().zip(&layout).map(|(def, offset)| {
        let column = &def.column;
        let class = classes!(
            "data-table-header",
            column.sortable.then_some("sortable"),
            offset.is_some().then_some("sticky-col")
        );
        let onclick = column.sortable.then(|| {
            let dispatcher = table.dispatcher.clone();
            let action = TableAction::sort(column);
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
        });

        html! {
            <th class={class} style={cell_style(column, *offset)} onclick={onclick}>
                <span class="header-label">{&column.header}</span>
                {if column.sortable {
                    html! {
                        <span class="sort-indicator">{sort_glyph(table.state.sort_indicator(&column.key))}</span>
                    }
                } else {
                    html! {}
                }}
            </th>
        }
    });

    let click_state = Rc::new(table.state.clone());
    let visible = table.state.visible_rows(props.data.as_slice());
    let body = if visible.is_empty() {
        html! {
            <tr class="empty-row">
                <td colspan={props.columns.len().to_string()}>{"No data to display"}</td>
            </tr>
        }
    } else {
        visible
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let onclick = props.on_row_click.as_ref().map(|on_row_click| {
                    let on_row_click = on_row_click.clone();
                    let state = click_state.clone();
                    let data = props.data.clone();
                    Callback::from(move |_: MouseEvent| {
                        emit_row_click(&on_row_click, &state, data.as_slice(), index);
                    })
                });
                let class = classes!(
                    "data-table-row",
                    (index % 2 == 1).then_some("striped"),
                    props.on_row_click.is_some().then_some("clickable")
                );

                html! {
                    <tr class={class} onclick={onclick}>
                        {for props.columns.iter().zip(&layout).map(|(def, offset)| html! {
                            <td
                                class={classes!("data-table-cell", offset.is_some().then_some("sticky-col"))}
                                style={cell_style(&def.column, *offset)}
                            >
                                {def.render_cell(row)}
                            </td>
                        })}
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class={classes!("data-table", props.class.clone())}>
            <div class="data-table-viewport" style={format!("height: {};", props.height)}>
                <table class="data-table-grid">
                    <thead class="data-table-head">
                        <tr>{for header_cells}</tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
                {if table.state.is_loading() {
                    html! {
                        <div class="data-table-loading">
                            <div class="spinner"></div>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>

            {if props.paginate {
                html! {
                    <PaginationBar
                        pagination={*table.state.pagination()}
                        page_size_options={props.page_size_options.clone()}
                        loading={table.state.is_loading()}
                        on_page_change={on_page_change}
                        on_page_size_change={on_page_size_change}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
