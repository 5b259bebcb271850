//! Display formatting shared by the table cells and the detail view.

use serde::{Deserialize, Serialize};

/// Number of stars in a performance rating.
pub const MAX_STARS: u8 = 5;

/// Group digits in threes: `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Salary in Korean won, e.g. `"₩52,300,000"`.
pub fn format_krw(amount: u64) -> String {
    format!("₩{}", group_thousands(amount))
}

/// Filled stars for a score: its integer part, limited to `0..=MAX_STARS`.
pub fn star_rating(score: f64) -> u8 {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    score.floor().min(f64::from(MAX_STARS)) as u8
}

/// Filled/empty flag for each of the five stars.
pub fn stars(score: f64) -> [bool; MAX_STARS as usize] {
    let filled = star_rating(score) as usize;
    std::array::from_fn(|i| i < filled)
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Positive,
    Negative,
    Warning,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Positive => "status-badge positive",
            StatusTone::Negative => "status-badge negative",
            StatusTone::Warning => "status-badge warning",
        }
    }
}
