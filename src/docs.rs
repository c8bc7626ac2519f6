use crate::api::employee::{CreateEmployee, EmployeeListResponse};
use crate::api::leave::{LeaveListResponse, LeaveTypeOption};
use crate::api::report::ReportResponse;
use crate::calendar::{DayMarker, GridRow, MonthlyGrid};
use crate::model::employee::Employee;
use crate::model::leave::{LeaveInterval, LeaveType, NewLeave};
use crate::report::ReportRow;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Calendar API",
        version = "0.1.0",
        description = r#"
## Employee Leave Calendar

Register employees, record their leave and see who is away.

### Key Features
- **Employees**: add, list and remove (removal also deletes their leave)
- **Leave**: record, search and delete leave intervals
- **Calendar**: monthly grid with one marker per weekday on leave and a
  business-day total per employee
- **Report**: leaves overlapping a date window, as JSON or CSV

Business days are Monday to Friday; holidays are not considered.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::leave::leave_list,
        crate::api::leave::create_leave,
        crate::api::leave::delete_leave,
        crate::api::leave::leave_types,

        crate::api::calendar::get_calendar,

        crate::api::report::leave_report,
        crate::api::report::leave_report_csv
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeListResponse,
            LeaveType,
            LeaveInterval,
            NewLeave,
            LeaveListResponse,
            LeaveTypeOption,
            DayMarker,
            GridRow,
            MonthlyGrid,
            ReportRow,
            ReportResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Calendar", description = "Monthly leave calendar"),
        (name = "Report", description = "Leave reports and CSV export"),
    )
)]
pub struct ApiDoc;
