use shared::table::{page_size_choices, page_window, PageInfo, Pagination};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Most page-number buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub page_size_options: Vec<usize>,
    #[prop_or_default]
    pub loading: bool,
    pub on_page_change: Callback<usize>,
    pub on_page_size_change: Callback<usize>,
}

/// "Showing 11 - 20 of 1,000" style summary.
pub fn page_summary(info: &PageInfo) -> String {
    format!(
        "Showing {} - {} of {}",
        info.first_row,
        info.last_row,
        shared::format::group_thousands(info.total_rows as u64)
    )
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let go_to = |page: usize| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let on_size_change = {
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                on_page_size_change.emit(size);
            }
        })
    };

    let pagination = props.pagination;
    let current_page = pagination.current_page;
    let total_pages = pagination.total_pages();
    let at_first = !pagination.has_previous();
    let at_last = !pagination.has_next();

    html! {
        <div class="pagination-bar">
            <div class="pagination-info">{page_summary(&pagination.page_info())}</div>

            <div class="pagination-controls">
                <button class="page-btn" disabled={at_first} onclick={go_to(1)}>{"«"}</button>
                <button class="page-btn" disabled={at_first} onclick={go_to(current_page.saturating_sub(1))}>{"‹"}</button>
                {for page_window(current_page, total_pages, MAX_PAGE_BUTTONS).into_iter().map(|page| {
                    let class = classes!("page-btn", (page == current_page).then_some("active"));
                    html! {
                        <button class={class} onclick={go_to(page)}>{page.to_string()}</button>
                    }
                })}
                <button class="page-btn" disabled={at_last} onclick={go_to(current_page + 1)}>{"›"}</button>
                <button class="page-btn" disabled={at_last} onclick={go_to(total_pages)}>{"»"}</button>
            </div>

            <label class="page-size-select">
                {"Rows per page "}
                <select onchange={on_size_change} disabled={props.loading}>
                    {for page_size_choices(&props.page_size_options, pagination.page_size).into_iter().map(|size| html! {
                        <option value={size.to_string()} selected={size == pagination.page_size}>{size.to_string()}</option>
                    })}
                </select>
            </label>
        </div>
    }
}
