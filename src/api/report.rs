use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::report::{ReportRow, ReportWindow, to_csv};
use crate::store::Store;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    #[param(value_type = String, example = "2024-01-01")]
    pub start: NaiveDate,
    #[param(value_type = String, example = "2024-01-31")]
    pub end: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct ReportResponse {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start: NaiveDate,
    #[schema(example = "2024-01-31", format = "date", value_type = String)]
    pub end: NaiveDate,
    pub data: Vec<ReportRow>,
}

/// Leave report: every leave overlapping the window
#[utoipa::path(
    get,
    path = "/api/report",
    params(ReportQuery),
    responses(
        (status = 200, description = "Leaves overlapping the window", body = ReportResponse),
        (status = 400, description = "start is after end", body = Object, example = json!({
            "message": "Please select a valid start and end date"
        }))
    ),
    tag = "Report"
)]
pub async fn leave_report(
    store: web::Data<Store>,
    query: web::Query<ReportQuery>,
) -> Result<impl Responder, AppError> {
    let window = ReportWindow::new(query.start, query.end)?;
    let records = store.report(&window).await?;

    Ok(HttpResponse::Ok().json(ReportResponse {
        start: window.start,
        end: window.end,
        data: records.into_iter().map(ReportRow::from).collect(),
    }))
}

/// Leave report as a CSV download
#[utoipa::path(
    get,
    path = "/api/report/csv",
    params(ReportQuery),
    responses(
        (status = 200, description = "employee_name,leave_type,start_date,end_date", content_type = "text/csv", body = String),
        (status = 400, description = "start is after end")
    ),
    tag = "Report"
)]
pub async fn leave_report_csv(
    store: web::Data<Store>,
    query: web::Query<ReportQuery>,
) -> Result<impl Responder, AppError> {
    let window = ReportWindow::new(query.start, query.end)?;
    let records = store.report(&window).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/csv; charset=utf-8"))
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename("leave_report.csv".to_string())],
        })
        .body(to_csv(&records)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use chrono::NaiveDate;
    use serde_json::Value;

    use crate::model::leave::{LeaveType, NewLeave};
    use crate::store::{Store, test_store};

    async fn seeded() -> Store {
        let store = test_store().await;
        let ann = store.add_employee("Ann").await.unwrap();
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();

        for (start, end, leave_type) in [
            (d(1, 29), d(2, 2), Some(LeaveType::Annual)),
            (d(2, 20), d(2, 21), None),
            (d(4, 1), d(4, 1), Some(LeaveType::Sick)),
        ] {
            store
                .add_leave(&NewLeave {
                    employee_id: ann.id,
                    start_date: start,
                    end_date: end,
                    leave_type,
                })
                .await
                .unwrap();
        }
        store
    }

    #[actix_web::test]
    async fn report_includes_partial_overlap() {
        let app = test_app!(seeded().await);
        let req = test::TestRequest::get()
            .uri("/api/report?start=2024-02-01&end=2024-02-29")
            .to_request();
        let report: Value = test::call_and_read_body_json(&app, req).await;

        let data = report["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["start_date"], "2024-01-29");
        assert_eq!(data[0]["leave_days"], 5);
        assert_eq!(data[1]["leave_type"], Value::Null);
    }

    #[actix_web::test]
    async fn csv_download() {
        let app = test_app!(seeded().await);
        let req = test::TestRequest::get()
            .uri("/api/report/csv?start=2024-02-01&end=2024-02-29")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        assert!(
            resp.headers()
                .get(header::CONTENT_DISPOSITION)
                .unwrap()
                .to_str()
                .unwrap()
                .contains("leave_report.csv")
        );

        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "employee_name,leave_type,start_date,end_date\n\
             Ann,annual,2024-01-29,2024-02-02\n\
             Ann,,2024-02-20,2024-02-21\n"
        );
    }

    #[actix_web::test]
    async fn reversed_window_is_bad_request() {
        let app = test_app!(seeded().await);
        let req = test::TestRequest::get()
            .uri("/api/report/csv?start=2024-03-01&end=2024-02-01")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
