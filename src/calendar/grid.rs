use chrono::Datelike;
use serde::Serialize;
use utoipa::ToSchema;

use super::business_days::{count_business_days, is_business_day};
use super::month::YearMonth;
use crate::model::employee::Employee;
use crate::model::leave::LeaveInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayMarker {
    Empty,
    OnLeave,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GridRow {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// One marker per day of the month, day 1 first.
    pub days: Vec<DayMarker>,
    /// Business days of every leave overlapping the month, counted over the
    /// whole leave rather than only the part inside the month.
    #[schema(example = 5)]
    pub total_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthlyGrid {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 1)]
    pub month: u32,
    #[schema(example = "January 2024")]
    pub title: String,
    #[schema(example = 31)]
    pub days_in_month: u32,
    pub rows: Vec<GridRow>,
}

/// Project leave intervals onto the days of `month`, one row per employee in
/// the order given.
pub fn project_month(
    month: YearMonth,
    employees: &[Employee],
    leaves: &[LeaveInterval],
) -> MonthlyGrid {
    let rows = employees
        .iter()
        .map(|employee| project_employee(month, employee, leaves))
        .collect();

    MonthlyGrid {
        year: month.year(),
        month: month.month(),
        title: month.title(),
        days_in_month: month.days_in_month(),
        rows,
    }
}

fn project_employee(month: YearMonth, employee: &Employee, leaves: &[LeaveInterval]) -> GridRow {
    let mut days = vec![DayMarker::Empty; month.days_in_month() as usize];
    let mut total_days = 0u32;

    let overlapping = leaves
        .iter()
        .filter(|leave| leave.employee_id == employee.id)
        .filter(|leave| month.overlaps(leave.start_date, leave.end_date));

    for leave in overlapping {
        let from = leave.start_date.max(month.first_day());
        let to = leave.end_date.min(month.last_day());

        for date in from.iter_days().take_while(|d| *d <= to) {
            if !is_business_day(date) {
                continue;
            }
            if let Some(slot) = days.get_mut(date.day0() as usize) {
                *slot = DayMarker::OnLeave;
            }
        }

        total_days = total_days.saturating_add(count_business_days(leave.start_date, leave.end_date));
    }

    GridRow {
        employee_id: employee.id,
        name: employee.name.clone(),
        days,
        total_days,
    }
}
