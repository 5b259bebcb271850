use yew::prelude::*;

const TIPS: [(&str, &str); 6] = [
    ("Sort", "Click a column header to sort ascending, again for descending, a third time to clear."),
    ("Scroll", "Scroll inside the table to move through rows and across columns."),
    ("Sticky header", "The header row stays visible while scrolling down."),
    ("Sticky columns", "ID and Name stay pinned on the left while scrolling sideways."),
    ("Row details", "Hover a row to highlight it, click it to open the employee details."),
    ("Pagination", "Use the page buttons or change the rows per page below the table."),
];

#[function_component(UsageGuide)]
pub fn usage_guide() -> Html {
    html! {
        <section class="usage-guide">
            <h3>{"How to use"}</h3>
            <ul>
                {for TIPS.iter().map(|(title, text)| html! {
                    <li><strong>{*title}</strong>{": "}{*text}</li>
                })}
            </ul>
        </section>
    }
}
