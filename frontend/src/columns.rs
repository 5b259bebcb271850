use shared::format::format_krw;
use shared::{Column, Employee, EmployeeField};
use yew::prelude::*;

use crate::components::star_rating::StarRating;
use crate::components::ColumnDef;

/// Column set of the employee directory, in display order.
pub fn employee_columns() -> Vec<ColumnDef<Employee>> {
    let column = |key: EmployeeField, header: &str, width: &str| -> ColumnDef<Employee> {
        ColumnDef::new(Column::new(key, header).width(width).sortable())
    };

    vec![
        column(EmployeeField::Id, "ID", "80px"),
        column(EmployeeField::Name, "Name", "120px"),
        column(EmployeeField::Email, "Email", "220px"),
        column(EmployeeField::Department, "Department", "120px"),
        column(EmployeeField::Position, "Position", "180px"),
        column(EmployeeField::Salary, "Salary", "120px")
            .render(|_, employee: &Employee| html! { <span class="salary">{format_krw(employee.salary)}</span> }),
        column(EmployeeField::JoinDate, "Join Date", "120px"),
        column(EmployeeField::Location, "Location", "120px"),
        column(EmployeeField::Manager, "Manager", "120px"),
        column(EmployeeField::Performance, "Performance", "100px")
            .render(|_, employee: &Employee| html! { <StarRating score={employee.performance} /> }),
        column(EmployeeField::Projects, "Projects", "100px")
            .render(|_, employee: &Employee| html! { <span class="project-badge">{employee.projects.to_string()}</span> }),
        column(EmployeeField::Status, "Status", "100px").render(|_, employee: &Employee| {
            html! { <span class={employee.status.tone().css_class()}>{employee.status.label()}</span> }
        }),
    ]
}
