use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::model::leave::{LeaveType, NewLeave};
use crate::report::ReportRow;
use crate::store::{LeaveFilter, Store};

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<ReportRow>,
    #[schema(example = 1)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveTypeOption {
    pub value: LeaveType,
    #[schema(example = "Annual Leave")]
    pub label: String,
}

/// Search leave records
#[utoipa::path(
    get,
    path = "/api/leaves",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Matching leaves, earliest first", body = LeaveListResponse)
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    store: web::Data<Store>,
    query: web::Query<LeaveFilter>,
) -> Result<impl Responder, AppError> {
    let records = store.list_leaves(&query).await?;
    let data: Vec<ReportRow> = records.into_iter().map(ReportRow::from).collect();

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        total: data.len(),
        data,
    }))
}

/// Record a leave interval
#[utoipa::path(
    post,
    path = "/api/leaves",
    request_body(
        content = NewLeave,
        description = "Leave payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave recorded", body = crate::model::leave::LeaveInterval),
        (status = 400, description = "Invalid range or unknown employee", body = Object, example = json!({
            "message": "end_date cannot be before start_date"
        }))
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: web::Data<Store>,
    payload: web::Json<NewLeave>,
) -> Result<impl Responder, AppError> {
    let leave = store.add_leave(&payload).await?;
    Ok(HttpResponse::Created().json(leave))
}

/// Delete a leave interval
#[utoipa::path(
    delete,
    path = "/api/leaves/{leave_id}",
    params(
        ("leave_id" = i64, Path, description = "ID of the leave to delete")
    ),
    responses(
        (status = 200, description = "Leave removed, or already absent", body = Object, example = json!({
            "message": "Leave deleted",
            "deleted": true
        }))
    ),
    tag = "Leave"
)]
pub async fn delete_leave(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let deleted = store.delete_leave(path.into_inner()).await?;

    let message = if deleted {
        "Leave deleted"
    } else {
        "Leave not found, nothing to delete"
    };
    Ok(HttpResponse::Ok().json(json!({ "message": message, "deleted": deleted })))
}

/// Leave types with display labels
#[utoipa::path(
    get,
    path = "/api/leave-types",
    responses(
        (status = 200, description = "Selectable leave types", body = [LeaveTypeOption])
    ),
    tag = "Leave"
)]
pub async fn leave_types() -> impl Responder {
    let options: Vec<LeaveTypeOption> = LeaveType::all()
        .into_iter()
        .map(|value| LeaveTypeOption {
            value,
            label: value.label().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(options)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    use crate::store::test_store;

    #[actix_web::test]
    async fn invalid_leave_leaves_store_unchanged() {
        let store = test_store().await;
        let ann = store.add_employee("Ann").await.unwrap();
        let app = test_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/api/leaves")
            .set_json(json!({
                "employee_id": ann.id,
                "start_date": "2024-01-02",
                "end_date": "2024-01-05",
                "leave_type": "annual"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/leaves")
            .set_json(json!({
                "employee_id": ann.id,
                "start_date": "2024-01-05",
                "end_date": "2024-01-02"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "end_date cannot be before start_date");

        let req = test::TestRequest::get().uri("/api/leaves").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 1);
        assert_eq!(list["data"][0]["leave_type"], "annual");
        assert_eq!(list["data"][0]["leave_days"], 4);
    }

    #[actix_web::test]
    async fn search_by_name_and_delete() {
        let store = test_store().await;
        let ann = store.add_employee("Ann").await.unwrap();
        let bob = store.add_employee("Bob").await.unwrap();
        let app = test_app!(store.clone());

        let leaves = [
            (ann.id, "2024-03-04", "2024-03-05"),
            (bob.id, "2024-03-06", "2024-03-06"),
        ];
        for (id, start, end) in leaves {
            let req = test::TestRequest::post()
                .uri("/api/leaves")
                .set_json(json!({ "employee_id": id, "start_date": start, "end_date": end }))
                .to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }

        let req = test::TestRequest::get()
            .uri("/api/leaves?employee_name=Bob&start=2024-03-01")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 1);
        let leave_id = list["data"][0]["id"].as_i64().unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/leaves/{leave_id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["deleted"], true);

        let req = test::TestRequest::get()
            .uri("/api/leaves?employee_name=Bob")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 0);
    }

    #[actix_web::test]
    async fn lists_leave_types() {
        let app = test_app!(test_store().await);
        let req = test::TestRequest::get().uri("/api/leave-types").to_request();
        let types: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(types.as_array().unwrap().len(), 5);
        assert_eq!(types[0], json!({ "value": "annual", "label": "Annual Leave" }));
    }
}
