use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod config;
pub mod error;
pub mod format;
pub mod sample_data;
pub mod stats;
pub mod table;

pub use config::TableConfig;
pub use error::TableError;
pub use format::StatusTone;
pub use stats::DirectoryStats;
pub use table::{CellValue, Column, StickyColumns, TableAction, TableRow, TableState};

/// One record of the employee directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    /// Annual salary in Korean won
    pub salary: u64,
    pub join_date: NaiveDate,
    /// Office the employee works from
    pub location: String,
    pub manager: String,
    /// Performance score from 0.0 to 5.0, one decimal
    pub performance: f64,
    /// Number of projects the employee is assigned to
    pub projects: u32,
    pub status: EmployeeStatus,
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::OnLeave => "On Leave",
        }
    }

    /// Badge color for this status
    pub fn tone(&self) -> StatusTone {
        match self {
            EmployeeStatus::Active => StatusTone::Positive,
            EmployeeStatus::Inactive => StatusTone::Negative,
            EmployeeStatus::OnLeave => StatusTone::Warning,
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeStatus {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EmployeeStatus::Active),
            "Inactive" => Ok(EmployeeStatus::Inactive),
            "On Leave" => Ok(EmployeeStatus::OnLeave),
            other => Err(TableError::UnknownStatus(other.to_string())),
        }
    }
}

/// Column selector for [`Employee`] rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeField {
    Id,
    Name,
    Email,
    Department,
    Position,
    Salary,
    JoinDate,
    Location,
    Manager,
    Performance,
    Projects,
    Status,
}

impl EmployeeField {
    /// All fields in directory column order
    pub const ALL: [EmployeeField; 12] = [
        EmployeeField::Id,
        EmployeeField::Name,
        EmployeeField::Email,
        EmployeeField::Department,
        EmployeeField::Position,
        EmployeeField::Salary,
        EmployeeField::JoinDate,
        EmployeeField::Location,
        EmployeeField::Manager,
        EmployeeField::Performance,
        EmployeeField::Projects,
        EmployeeField::Status,
    ];

    /// Key used in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::Id => "id",
            EmployeeField::Name => "name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
            EmployeeField::Position => "position",
            EmployeeField::Salary => "salary",
            EmployeeField::JoinDate => "join_date",
            EmployeeField::Location => "location",
            EmployeeField::Manager => "manager",
            EmployeeField::Performance => "performance",
            EmployeeField::Projects => "projects",
            EmployeeField::Status => "status",
        }
    }

    /// Resolve the sticky-column setting of a [`TableConfig`].
    ///
    /// Explicit keys win over `sticky_first_column`.
    pub fn sticky_columns(config: &TableConfig) -> Result<StickyColumns<EmployeeField>, TableError> {
        if !config.sticky_columns.is_empty() {
            let keys = config
                .sticky_columns
                .iter()
                .map(|key| key.parse())
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(StickyColumns::Keys(keys));
        }
        if config.sticky_first_column {
            return Ok(StickyColumns::FirstColumn);
        }
        Ok(StickyColumns::None)
    }
}

impl FromStr for EmployeeField {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the camelCase spelling as well
        let normalized = if s == "joinDate" { "join_date" } else { s };
        EmployeeField::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| TableError::UnknownColumn(s.to_string()))
    }
}

impl TableRow for Employee {
    type Key = EmployeeField;

    fn cell(&self, key: EmployeeField) -> CellValue {
        match key {
            EmployeeField::Id => self.id.into(),
            EmployeeField::Name => self.name.as_str().into(),
            EmployeeField::Email => self.email.as_str().into(),
            EmployeeField::Department => self.department.as_str().into(),
            EmployeeField::Position => self.position.as_str().into(),
            EmployeeField::Salary => self.salary.into(),
            EmployeeField::JoinDate => self.join_date.into(),
            EmployeeField::Location => self.location.as_str().into(),
            EmployeeField::Manager => self.manager.as_str().into(),
            EmployeeField::Performance => self.performance.into(),
            EmployeeField::Projects => self.projects.into(),
            EmployeeField::Status => self.status.label().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(id: u32, name: &str, salary: u64, status: EmployeeStatus) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: format!("user{}@company.com", id),
            department: "Engineering".to_string(),
            position: "Backend Developer".to_string(),
            salary,
            join_date: NaiveDate::from_ymd_opt(2020, 5, 17).unwrap(),
            location: "Seoul HQ".to_string(),
            manager: "Hong Gildong".to_string(),
            performance: 4.2,
            projects: 7,
            status,
        }
    }

    #[test]
    fn test_status_round_trip_through_text() {
        for status in [EmployeeStatus::Active, EmployeeStatus::Inactive, EmployeeStatus::OnLeave] {
            assert_eq!(status.to_string().parse::<EmployeeStatus>().unwrap(), status);
        }
        assert_eq!(
            "Retired".parse::<EmployeeStatus>(),
            Err(TableError::UnknownStatus("Retired".to_string()))
        );
    }

    #[test]
    fn test_status_serializes_with_display_names() {
        assert_eq!(serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(), "\"On Leave\"");
        let status: EmployeeStatus = serde_json::from_str("\"Inactive\"").unwrap();
        assert_eq!(status, EmployeeStatus::Inactive);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(EmployeeStatus::Active.tone(), StatusTone::Positive);
        assert_eq!(EmployeeStatus::Inactive.tone(), StatusTone::Negative);
        assert_eq!(EmployeeStatus::OnLeave.tone(), StatusTone::Warning);
    }

    #[test]
    fn test_employee_cells() {
        let employee = create_test_employee(42, "Kim Minsu", 52_000_000, EmployeeStatus::Active);

        assert_eq!(employee.cell(EmployeeField::Id), CellValue::Integer(42));
        assert_eq!(employee.cell(EmployeeField::Name), CellValue::Text("Kim Minsu".to_string()));
        assert_eq!(employee.cell(EmployeeField::Salary), CellValue::Integer(52_000_000));
        assert_eq!(employee.cell(EmployeeField::Performance), CellValue::Number(4.2));
        assert_eq!(employee.cell(EmployeeField::Status).to_string(), "Active");
        assert_eq!(employee.cell(EmployeeField::JoinDate).to_string(), "2020-05-17");
    }

    #[test]
    fn test_field_keys_parse() {
        for field in EmployeeField::ALL {
            assert_eq!(field.key().parse::<EmployeeField>().unwrap(), field);
        }
        assert_eq!("joinDate".parse::<EmployeeField>().unwrap(), EmployeeField::JoinDate);
        assert_eq!(
            "age".parse::<EmployeeField>(),
            Err(TableError::UnknownColumn("age".to_string()))
        );
    }

    #[test]
    fn test_sticky_columns_from_config() {
        let config = TableConfig {
            sticky_columns: vec!["id".to_string(), "name".to_string()],
            sticky_first_column: true,
            ..TableConfig::default()
        };
        assert_eq!(
            EmployeeField::sticky_columns(&config).unwrap(),
            StickyColumns::Keys(vec![EmployeeField::Id, EmployeeField::Name])
        );

        let config = TableConfig {
            sticky_first_column: true,
            ..TableConfig::default()
        };
        assert_eq!(EmployeeField::sticky_columns(&config).unwrap(), StickyColumns::FirstColumn);

        assert_eq!(
            EmployeeField::sticky_columns(&TableConfig::default()).unwrap(),
            StickyColumns::None
        );

        let config = TableConfig {
            sticky_columns: vec!["badge".to_string()],
            ..TableConfig::default()
        };
        assert!(EmployeeField::sticky_columns(&config).is_err());
    }

    #[test]
    fn test_salary_sort_cycle_restores_order() {
        let employees = vec![
            create_test_employee(1, "Kim Minsu", 80_000_000, EmployeeStatus::Active),
            create_test_employee(2, "Park Jiyoung", 45_000_000, EmployeeStatus::Inactive),
            create_test_employee(3, "Lee Junho", 80_000_000, EmployeeStatus::OnLeave),
            create_test_employee(4, "Choi Seoyeon", 61_000_000, EmployeeStatus::Active),
        ];
        let salary = Column::new(EmployeeField::Salary, "Salary").sortable();
        let mut state = TableState::new(employees.len(), 10);

        state.handle_sort(&salary);
        let ids: Vec<u32> = state.visible_rows(&employees).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        state.handle_sort(&salary);
        let ids: Vec<u32> = state.visible_rows(&employees).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);

        state.handle_sort(&salary);
        let rows = state.visible_rows(&employees);
        assert_eq!(rows.len(), employees.len());
        for (shown, original) in rows.iter().zip(&employees) {
            assert_eq!(*shown, original);
        }
    }
}
