use std::rc::Rc;

use shared::sample_data::generate_employees;
use shared::{DirectoryStats, Employee, EmployeeField, StickyColumns, TableConfig};
use yew::prelude::*;

mod columns;
mod components;
mod hooks;
mod services;

use components::{DataTable, EmployeeDetailModal, SummaryCards, UsageGuide};
use log::LevelFilter;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<TableConfig>,
}

/// Sticky columns from the configuration, ID and Name when it names an
/// unknown column.
fn resolve_sticky(config: &TableConfig) -> StickyColumns<EmployeeField> {
    EmployeeField::sticky_columns(config).unwrap_or_else(|e| {
        Logger::warn_with_component("app", &format!("{}; pinning ID and Name", e));
        StickyColumns::Keys(vec![EmployeeField::Id, EmployeeField::Name])
    })
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();

    let employees = {
        let config = config.clone();
        use_memo((), move |_| {
            let seed = config
                .sample_seed
                .unwrap_or_else(|| js_sys::Date::now() as u64);
            Logger::info_with_component(
                "app",
                &format!("Generating {} employees (seed {})", config.sample_size, seed),
            );
            generate_employees(config.sample_size, seed)
        })
    };

    let stats = {
        let employees = employees.clone();
        use_memo((), move |_| DirectoryStats::from_employees(&employees))
    };

    let columns = use_memo((), |_| columns::employee_columns());
    let sticky = use_memo((), {
        let config = config.clone();
        move |_| resolve_sticky(&config)
    });

    let selected_employee = use_state(|| Option::<Employee>::None);
    let modal_open = use_state(|| false);

    let on_row_click = {
        let selected_employee = selected_employee.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |employee: Employee| {
            Logger::debug_with_component("app", &format!("Opening details for employee {}", employee.id));
            selected_employee.set(Some(employee));
            modal_open.set(true);
        })
    };

    let on_close = {
        let selected_employee = selected_employee.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            modal_open.set(false);
            selected_employee.set(None);
        })
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"🏢 Employee Directory"}</h1>
                <p class="app-subtitle">{"Sortable, paginated employee table with sticky header and columns"}</p>
            </header>

            <main class="app-main">
                <SummaryCards stats={(*stats).clone()} />

                <DataTable<Employee>
                    data={employees.clone()}
                    columns={columns.clone()}
                    sticky={(*sticky).clone()}
                    height={AttrValue::from(config.height.clone())}
                    page_size={config.page_size}
                    paginate={config.paginate}
                    page_size_options={config.page_size_options.clone()}
                    loading_delay_ms={config.loading_delay_ms}
                    class="employee-table"
                    on_row_click={on_row_click}
                />

                <UsageGuide />
            </main>

            <EmployeeDetailModal
                employee={(*selected_employee).clone()}
                open={*modal_open}
                on_close={on_close}
            />
        </div>
    }
}

fn main() {
    Logger::init(LevelFilter::Info);
    let config = services::config::load_config();

    if let Err(e) = Logger::set_level(&config.log_level) {
        Logger::warn_with_component(
            "app",
            &format!("{:?}: {}; keeping {}", config.log_level, e, log::max_level()),
        );
    }
    Logger::info_with_component(
        "app",
        &format!(
            "Starting employee directory: {} rows, page size {}",
            config.sample_size, config.page_size
        ),
    );

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
