use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::calendar::{YearMonth, project_month};
use crate::error::AppError;
use crate::store::Store;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// Defaults to the current year
    #[param(example = 2024)]
    pub year: Option<i32>,
    /// 1-12, defaults to the current month
    #[param(example = 1)]
    pub month: Option<u32>,
}

/// Monthly leave calendar
#[utoipa::path(
    get,
    path = "/api/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "One row per employee with a marker per day and a total", body = crate::calendar::MonthlyGrid),
        (status = 400, description = "Invalid month", body = Object, example = json!({
            "message": "Invalid month: 2024-13"
        }))
    ),
    tag = "Calendar"
)]
pub async fn get_calendar(
    store: web::Data<Store>,
    query: web::Query<CalendarQuery>,
) -> Result<impl Responder, AppError> {
    let month = resolve_month(&query, YearMonth::current())?;

    let employees = store.list_employees().await?;
    let leaves = store
        .leaves_in_window(month.first_day(), month.last_day())
        .await?;
    debug!(
        year = month.year(),
        month = month.month(),
        employees = employees.len(),
        leaves = leaves.len(),
        "Projecting calendar"
    );

    Ok(HttpResponse::Ok().json(project_month(month, &employees, &leaves)))
}

/// Fills whichever of year and month the query leaves out from `today`.
fn resolve_month(query: &CalendarQuery, today: Option<YearMonth>) -> Result<YearMonth, AppError> {
    let (year, month) = match (query.year, query.month) {
        (Some(year), Some(month)) => (year, month),
        _ => {
            let today =
                today.ok_or_else(|| AppError::validation("Current month is out of range"))?;
            (
                query.year.unwrap_or(today.year()),
                query.month.unwrap_or(today.month()),
            )
        }
    };

    YearMonth::new(year, month)
        .ok_or_else(|| AppError::Validation(format!("Invalid month: {year}-{month}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as atest;
    use chrono::NaiveDate;
    use serde_json::Value;

    use crate::model::leave::NewLeave;
    use crate::store::test_store;

    #[test]
    fn explicit_month_is_used() {
        let month = resolve_month(
            &CalendarQuery {
                year: Some(2023),
                month: Some(2),
            },
            YearMonth::new(2030, 7),
        )
        .unwrap();
        assert_eq!((month.year(), month.month(), month.days_in_month()), (2023, 2, 28));
    }

    #[test]
    fn missing_parts_default_to_today() {
        let today = YearMonth::new(2030, 7);
        let query = |year, month| CalendarQuery { year, month };

        assert_eq!(resolve_month(&query(None, None), today).unwrap(), today.unwrap());
        assert_eq!(
            resolve_month(&query(Some(2024), None), today).unwrap(),
            YearMonth::new(2024, 7).unwrap()
        );
        assert_eq!(
            resolve_month(&query(None, Some(2)), today).unwrap(),
            YearMonth::new(2030, 2).unwrap()
        );
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let err = resolve_month(
            &CalendarQuery {
                year: Some(2024),
                month: Some(13),
            },
            YearMonth::new(2030, 7),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[actix_web::test]
    async fn renders_grid_for_requested_month() {
        let store = test_store().await;
        let ann = store.add_employee("Ann").await.unwrap();
        store.add_employee("Bob").await.unwrap();
        store
            .add_leave(&NewLeave {
                employee_id: ann.id,
                // Mon 29 Jan .. Fri 9 Feb 2024
                start_date: NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
                leave_type: None,
            })
            .await
            .unwrap();
        let app = test_app!(store);

        let req = atest::TestRequest::get()
            .uri("/api/calendar?year=2024&month=2")
            .to_request();
        let grid: Value = atest::call_and_read_body_json(&app, req).await;

        assert_eq!(grid["days_in_month"], 29);
        assert_eq!(grid["title"], "February 2024");
        let rows = grid["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["days"].as_array().unwrap().len(), 29);
        assert_eq!(rows[0]["days"][0], "on_leave");
        assert_eq!(rows[0]["days"][2], "empty");
        assert_eq!(rows[0]["total_days"], 10);
        assert_eq!(rows[1]["total_days"], 0);
    }

    #[actix_web::test]
    async fn invalid_month_is_bad_request() {
        let app = test_app!(test_store().await);
        let req = atest::TestRequest::get()
            .uri("/api/calendar?year=2024&month=13")
            .to_request();
        let resp = atest::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
