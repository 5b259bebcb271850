use gloo::events::EventListener;
use shared::format::format_krw;
use shared::Employee;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::star_rating::StarRating;

#[derive(Properties, PartialEq)]
pub struct EmployeeDetailModalProps {
    pub employee: Option<Employee>,
    pub open: bool,
    pub on_close: Callback<()>,
}

fn detail_field(label: &'static str, value: Html) -> Html {
    html! {
        <div class="detail-field">
            <label class="detail-label">{label}</label>
            <div class="detail-value">{value}</div>
        </div>
    }
}

#[function_component(EmployeeDetailModal)]
pub fn employee_detail_modal(props: &EmployeeDetailModalProps) -> Html {
    // Escape closes the modal while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let employee = match (&props.employee, props.open) {
        (Some(employee), true) => employee,
        _ => return html! {},
    };

    html! {
        <div class="detail-modal-backdrop" onclick={on_backdrop_click}>
            <div class="detail-modal" onclick={on_modal_click}>
                <div class="detail-modal-header">
                    <h3 class="detail-title">{"👤 Employee Details"}</h3>
                    <button type="button" class="detail-close" aria-label="Close" onclick={on_close_click.clone()}>
                        {"✕"}
                    </button>
                </div>

                <div class="detail-modal-content">
                    <section class="detail-section">
                        <h4>{"Basic Information"}</h4>
                        {detail_field("Name", html! { {&employee.name} })}
                        {detail_field("Employee ID", html! { {employee.id.to_string()} })}
                    </section>

                    <section class="detail-section">
                        <h4>{"Contact"}</h4>
                        {detail_field("Email", html! {
                            <a href={format!("mailto:{}", employee.email)}>{&employee.email}</a>
                        })}
                    </section>

                    <section class="detail-section">
                        <h4>{"Job"}</h4>
                        {detail_field("Department", html! { {&employee.department} })}
                        {detail_field("Position", html! { {&employee.position} })}
                        {detail_field("Location", html! { {&employee.location} })}
                        {detail_field("Manager", html! { {&employee.manager} })}
                    </section>

                    <section class="detail-section">
                        <h4>{"Compensation & Performance"}</h4>
                        {detail_field("Salary", html! { {format_krw(employee.salary)} })}
                        {detail_field("Performance", html! {
                            <StarRating score={employee.performance} show_score={true} />
                        })}
                        {detail_field("Projects", html! {
                            <span class="project-badge">{format!("{} projects", employee.projects)}</span>
                        })}
                        {detail_field("Status", html! {
                            <span class={employee.status.tone().css_class()}>{employee.status.label()}</span>
                        })}
                    </section>

                    <section class="detail-section">
                        <h4>{"Other"}</h4>
                        {detail_field("Join Date", html! { {employee.join_date.format("%Y-%m-%d").to_string()} })}
                    </section>
                </div>

                <div class="detail-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_close_click}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
