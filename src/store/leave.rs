use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::IntoParams;

use super::Store;
use crate::error::AppError;
use crate::model::leave::{LeaveInterval, LeaveRecord, NewLeave};
use crate::report::ReportWindow;

const RECORD_SELECT: &str = r#"
    SELECT l.id, l.employee_id, e.name AS employee_name, l.start_date, l.end_date, l.leave_type
    FROM leaves l
    JOIN employees e ON l.employee_id = e.id
"#;

/// Search criteria for leave records. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaveFilter {
    /// Exact employee name
    #[param(example = "Jane Doe")]
    pub employee_name: Option<String>,
    /// Only leaves starting on or after this date
    #[param(value_type = Option<String>, example = "2024-01-01")]
    pub start: Option<NaiveDate>,
    /// Only leaves ending on or before this date
    #[param(value_type = Option<String>, example = "2024-01-31")]
    pub end: Option<NaiveDate>,
}

impl LeaveFilter {
    /// Blank names mean "all employees".
    fn name(&self) -> Option<&str> {
        self.employee_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn matches(&self, record: &LeaveRecord) -> bool {
        self.name().is_none_or(|name| record.employee_name == name)
            && self.start.is_none_or(|start| record.start_date >= start)
            && self.end.is_none_or(|end| record.end_date <= end)
    }
}

// Helper enum for typed SQLx binding
enum FilterValue<'a> {
    Str(&'a str),
    Date(NaiveDate),
}

impl Store {
    pub async fn list_leaves(&self, filter: &LeaveFilter) -> Result<Vec<LeaveRecord>, AppError> {
        let mut where_sql = String::from(" WHERE 1=1");
        let mut args: Vec<FilterValue> = Vec::new();

        if let Some(name) = filter.name() {
            where_sql.push_str(" AND e.name = ?");
            args.push(FilterValue::Str(name));
        }

        if let Some(start) = filter.start {
            where_sql.push_str(" AND l.start_date >= ?");
            args.push(FilterValue::Date(start));
        }

        if let Some(end) = filter.end {
            where_sql.push_str(" AND l.end_date <= ?");
            args.push(FilterValue::Date(end));
        }

        let sql = format!("{RECORD_SELECT}{where_sql} ORDER BY l.start_date, l.id");
        debug!(sql = %sql, ?filter, "Searching leaves");

        let mut query = sqlx::query_as::<_, LeaveRecord>(&sql);
        for arg in args {
            query = match arg {
                FilterValue::Str(s) => query.bind(s),
                FilterValue::Date(d) => query.bind(d),
            };
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Leaves sharing at least one day with `[from, to]`.
    pub async fn leaves_in_window(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveInterval>, AppError> {
        let leaves = sqlx::query_as::<_, LeaveInterval>(
            r#"
            SELECT id, employee_id, start_date, end_date, leave_type
            FROM leaves
            WHERE start_date <= ? AND end_date >= ?
            ORDER BY start_date, id
            "#,
        )
        .bind(to)
        .bind(from)
        .fetch_all(&self.pool)
        .await?;

        Ok(leaves)
    }

    /// Leave records overlapping the report window, earliest first.
    pub async fn report(&self, window: &ReportWindow) -> Result<Vec<LeaveRecord>, AppError> {
        let sql = format!(
            "{RECORD_SELECT} WHERE l.start_date <= ? AND l.end_date >= ? ORDER BY l.start_date, l.id"
        );

        let records = sqlx::query_as::<_, LeaveRecord>(&sql)
            .bind(window.end)
            .bind(window.start)
            .fetch_all(&self.pool)
            .await?;

        debug!(start = %window.start, end = %window.end, count = records.len(), "Report built");
        Ok(records)
    }

    pub async fn add_leave(&self, leave: &NewLeave) -> Result<LeaveInterval, AppError> {
        if leave.end_date < leave.start_date {
            return Err(AppError::validation("end_date cannot be before start_date"));
        }

        let mut tx = self.pool.begin().await?;

        let known: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE id = ?")
            .bind(leave.employee_id)
            .fetch_one(&mut *tx)
            .await?;

        if known == 0 {
            return Err(AppError::Validation(format!(
                "Employee {} does not exist",
                leave.employee_id
            )));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO leaves (employee_id, start_date, end_date, leave_type)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(leave.employee_id)
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(leave.leave_type)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let interval = LeaveInterval {
            id: result.last_insert_rowid(),
            employee_id: leave.employee_id,
            start_date: leave.start_date,
            end_date: leave.end_date,
            leave_type: leave.leave_type,
        };
        info!(
            leave_id = interval.id,
            employee_id = interval.employee_id,
            start = %interval.start_date,
            end = %interval.end_date,
            "Leave added"
        );

        Ok(interval)
    }

    /// Unknown ids are a no-op; returns whether a row was removed.
    pub async fn delete_leave(&self, leave_id: i64) -> Result<bool, AppError> {
        let removed = sqlx::query("DELETE FROM leaves WHERE id = ?")
            .bind(leave_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if removed > 0 {
            info!(leave_id, "Leave removed");
        }
        Ok(removed > 0)
    }
}
