use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::calendar::count_business_days;
use crate::error::AppError;
use crate::model::leave::{LeaveRecord, LeaveType};

pub const CSV_HEADER: [&str; 4] = ["employee_name", "leave_type", "start_date", "end_date"];

/// Inclusive date range a report covers. `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if end < start {
            return Err(AppError::validation("Please select a valid start and end date"));
        }
        Ok(Self { start, end })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportRow {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[schema(example = "annual", nullable = true)]
    pub leave_type: Option<LeaveType>,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    /// Weekdays covered by the leave
    #[schema(example = 5)]
    pub leave_days: u32,
}

impl From<LeaveRecord> for ReportRow {
    fn from(record: LeaveRecord) -> Self {
        Self {
            leave_days: count_business_days(record.start_date, record.end_date),
            id: record.id,
            employee_name: record.employee_name,
            leave_type: record.leave_type,
            start_date: record.start_date,
            end_date: record.end_date,
        }
    }
}

/// Render records as CSV: header first, ISO dates, empty `leave_type` when
/// unspecified.
pub fn to_csv(records: &[LeaveRecord]) -> String {
    let mut out = String::new();
    push_line(&mut out, CSV_HEADER.iter().copied());

    for record in records {
        let start = record.start_date.format("%Y-%m-%d").to_string();
        let end = record.end_date.format("%Y-%m-%d").to_string();
        let leave_type = record.leave_type.map(|t| t.to_string()).unwrap_or_default();

        let fields = [
            record.employee_name.as_str(),
            leave_type.as_str(),
            start.as_str(),
            end.as_str(),
        ];
        push_line(&mut out, fields.into_iter());
    }

    out
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

// RFC 4180 quoting
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
