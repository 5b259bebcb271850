use serde::{Deserialize, Serialize};

use crate::{Employee, EmployeeStatus};

/// Headline numbers shown above the directory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub total_employees: usize,
    pub active_employees: usize,
    /// Mean performance score, 0.0 when there are no employees
    pub average_performance: f64,
    pub total_projects: u64,
}

impl DirectoryStats {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let total_employees = employees.len();
        let active_employees = employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count();
        let average_performance = if employees.is_empty() {
            0.0
        } else {
            employees.iter().map(|e| e.performance).sum::<f64>() / total_employees as f64
        };
        let total_projects = employees.iter().map(|e| u64::from(e.projects)).sum();

        Self {
            total_employees,
            active_employees,
            average_performance,
            total_projects,
        }
    }

    /// Average performance rounded to one decimal, e.g. `"4.0"`
    pub fn average_performance_label(&self) -> String {
        format!("{:.1}", self.average_performance)
    }
}
