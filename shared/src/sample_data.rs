//! Generator for plausible sample employees.
//!
//! Records are random but reproducible: the same `count` and `seed` always
//! yield the same directory.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Employee, EmployeeStatus};

const NAMES: [&str; 50] = [
    "Kim Minsu", "Park Jiyoung", "Lee Junho", "Choi Seoyeon", "Jung Taemin",
    "Han Yerim", "Yoon Sanghyuk", "Song Mira", "Cho Hyunwoo", "Kang Eunji",
    "Lim Donghyuk", "Bae Sujin", "Hong Sungmin", "Oh Haneul", "Shin Woochul",
    "Lee Subin", "Jang Hyejin", "Kim Taehyun", "Park Soyoung", "Choi Dongwook",
    "Jung Mikyung", "Han Jimin", "Yoon Jaewoong", "Song Haneul", "Cho Eunbi",
    "Kang Taejun", "Lim Yeseul", "Bae Hyunsoo", "Hong Jiwoo", "Oh Minseok",
    "Shin Yeri", "Lee Hyunwoo", "Jang Mirae", "Kim Doyoon", "Park Junseo",
    "Choi Harin", "Jung Seojun", "Han Jiho", "Yoon Seohyun", "Song Jian",
    "Cho Minjun", "Kang Seoyeon", "Lim Hajun", "Bae Jiyoon", "Hong Seojin",
    "Oh Jihwan", "Shin Dohyun", "Lee Seoyoon", "Jang Junyoung", "Kim Haeun",
];

const DEPARTMENTS: [&str; 8] = [
    "Engineering", "Marketing", "People", "Sales", "Design", "Finance", "Planning", "Operations",
];

const POSITIONS: [&str; 34] = [
    "Senior Developer", "Junior Developer", "Frontend Developer", "Backend Developer",
    "Full-stack Developer", "Data Engineer", "Marketing Manager", "Content Planner",
    "Brand Manager", "Digital Marketer", "HR Specialist", "Recruiter",
    "Training Coordinator", "Labor Relations Specialist", "Sales Representative",
    "Sales Team Lead", "Sales Associate", "Account Manager", "UX/UI Designer",
    "Graphic Designer", "Product Designer", "Brand Designer", "Financial Analyst",
    "Accountant", "Budget Manager", "Investment Analyst", "Project Manager", "Planner",
    "Strategy Planner", "Business Planner", "Operations Manager", "Quality Manager",
    "Facilities Manager", "IT Support",
];

const LOCATIONS: [&str; 6] = [
    "Seoul HQ", "Busan Branch", "Daegu Branch", "Gwangju Branch", "Daejeon Branch", "Incheon Branch",
];

const MANAGERS: [&str; 10] = [
    "Lee Younghee", "Choi Wonseok", "Kim Minsu", "Jung Hyejin", "Hong Gildong",
    "Kim Yena", "Kim Jaeho", "Park Sanghyun", "Lee Miyoung", "Choi Jihoon",
];

/// Four in six employees are active.
const STATUSES: [EmployeeStatus; 6] = [
    EmployeeStatus::Active,
    EmployeeStatus::Active,
    EmployeeStatus::Active,
    EmployeeStatus::Active,
    EmployeeStatus::Inactive,
    EmployeeStatus::OnLeave,
];

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Generate `count` employees with ids `1..=count`.
pub fn generate_employees(count: usize, seed: u64) -> Vec<Employee> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|index| generate_employee(&mut rng, index))
        .collect()
}

fn generate_employee<R: Rng>(rng: &mut R, index: usize) -> Employee {
    let id = u32::try_from(index).unwrap_or(u32::MAX);
    let base_name = *pick(rng, &NAMES);
    // Names repeat once the list is exhausted, so later ones carry the id
    let name = if index > NAMES.len() {
        format!("{}{}", base_name, id)
    } else {
        base_name.to_string()
    };

    let year = rng.random_range(2015..=2023);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    // Day 28 exists in every month
    let join_date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);

    Employee {
        id,
        name,
        email: format!("user{}@company.com", id),
        department: pick(rng, &DEPARTMENTS).to_string(),
        position: pick(rng, &POSITIONS).to_string(),
        salary: rng.random_range(40_000_000..120_000_000),
        join_date,
        location: pick(rng, &LOCATIONS).to_string(),
        manager: pick(rng, &MANAGERS).to_string(),
        performance: f64::from(rng.random_range(30u32..=50)) / 10.0,
        projects: rng.random_range(1..=30),
        status: *pick(rng, &STATUSES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count_with_sequential_ids() {
        let employees = generate_employees(120, 7);
        assert_eq!(employees.len(), 120);
        let ids: Vec<u32> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=120).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_directory() {
        assert_eq!(generate_employees(50, 42), generate_employees(50, 42));
        assert_ne!(generate_employees(50, 42), generate_employees(50, 43));
    }

    #[test]
    fn test_values_stay_in_range() {
        let min_date = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        let max_date = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();

        for employee in generate_employees(500, 1) {
            assert!((40_000_000..120_000_000).contains(&employee.salary));
            assert!((3.0..=5.0).contains(&employee.performance));
            assert!((1..=30).contains(&employee.projects));
            assert!(employee.join_date >= min_date && employee.join_date <= max_date);
            assert_eq!(employee.email, format!("user{}@company.com", employee.id));
        }
    }

    #[test]
    fn test_late_names_carry_id() {
        let employees = generate_employees(60, 3);
        assert!(!employees[49].name.ends_with("50"));
        assert!(employees[50].name.ends_with("51"));
        assert!(!employees[50].name.ends_with(" 51"));
        let unique: HashSet<&str> = employees[50..].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_empty_directory() {
        assert!(generate_employees(0, 9).is_empty());
    }
}
