pub mod data_table;
pub mod employee_detail_modal;
pub mod pagination_bar;
pub mod star_rating;
pub mod summary_cards;
pub mod usage_guide;

pub use data_table::{ColumnDef, DataTable};
pub use employee_detail_modal::EmployeeDetailModal;
pub use summary_cards::SummaryCards;
pub use usage_guide::UsageGuide;
