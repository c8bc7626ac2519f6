use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::model::employee::Employee;
use crate::store::Store;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Jane Doe")]
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(example = json!([{ "id": 1, "name": "Jane Doe" }]))]
    pub data: Vec<Employee>,
    #[schema(example = 1)]
    pub total: usize,
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees in insertion order", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> Result<impl Responder, AppError> {
    let employees = store.list_employees().await?;

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        total: employees.len(),
        data: employees,
    }))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Empty name", body = Object, example = json!({
            "message": "Employee name must not be empty"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, AppError> {
    let employee = store.add_employee(&payload.name).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Delete Employee together with all of their leaves
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee removed, or already absent", body = Object, example = json!({
            "message": "Successfully deleted",
            "deleted": true
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let deleted = store.delete_employee(path.into_inner()).await?;

    let message = if deleted {
        "Successfully deleted"
    } else {
        "Employee not found, nothing to delete"
    };
    Ok(HttpResponse::Ok().json(json!({ "message": message, "deleted": deleted })))
}
