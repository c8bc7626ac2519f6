use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Kind of absence. The lowercase form is what gets stored and exported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Personal,
    Unpaid,
    Sick,
    Other,
}

impl LeaveType {
    /// Label shown to people picking a leave type.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Personal => "Personal Leave",
            LeaveType::Unpaid => "Unpaid Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Other => "Other",
        }
    }

    pub fn all() -> Vec<LeaveType> {
        LeaveType::iter().collect()
    }
}

/// A stored leave interval. `end_date >= start_date` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveInterval {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "annual", nullable = true)]
    pub leave_type: Option<LeaveType>,
}

/// A leave interval joined with its employee's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveRecord {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "annual", nullable = true)]
    pub leave_type: Option<LeaveType>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewLeave {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "sick")]
    #[serde(default)]
    pub leave_type: Option<LeaveType>, // enum ensures Swagger dropdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn leave_type_text_forms() {
        assert_eq!(LeaveType::Personal.to_string(), "personal");
        assert_eq!(LeaveType::from_str("sick").unwrap(), LeaveType::Sick);
        assert!(LeaveType::from_str("holiday").is_err());
        assert_eq!(LeaveType::Unpaid.label(), "Unpaid Leave");
        assert_eq!(LeaveType::all().len(), 5);
    }

    #[test]
    fn new_leave_type_is_optional() {
        let payload: NewLeave = serde_json::from_str(
            r#"{"employee_id": 3, "start_date": "2024-02-01", "end_date": "2024-02-02"}"#,
        )
        .unwrap();
        assert_eq!(payload.leave_type, None);

        let payload: NewLeave = serde_json::from_str(
            r#"{"employee_id": 3, "start_date": "2024-02-01", "end_date": "2024-02-02", "leave_type": "annual"}"#,
        )
        .unwrap();
        assert_eq!(payload.leave_type, Some(LeaveType::Annual));
    }
}
