use shared::format::group_thousands;
use shared::DirectoryStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub stats: DirectoryStats,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let stats = &props.stats;
    let cards = [
        ("👥", "Total Employees", group_thousands(stats.total_employees as u64)),
        ("✅", "Active Employees", group_thousands(stats.active_employees as u64)),
        ("⭐", "Average Performance", stats.average_performance_label()),
        ("📁", "Total Projects", group_thousands(stats.total_projects)),
    ];

    html! {
        <section class="summary-cards">
            {for cards.into_iter().map(|(icon, label, value)| html! {
                <div class="summary-card">
                    <div class="summary-icon">{icon}</div>
                    <div class="summary-body">
                        <div class="summary-value">{value}</div>
                        <div class="summary-label">{label}</div>
                    </div>
                </div>
            })}
        </section>
    }
}
