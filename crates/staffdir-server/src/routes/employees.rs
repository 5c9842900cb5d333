//! Employee Routes
//!
//! HTTP handlers that delegate to EmployeeService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{
    ApiError, ApiResponse, ApiResult, CreateEmployeeRequest, EmployeeResponse,
    UpdateEmployeeRequest,
};
use crate::AppState;

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "List of all employees", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<EmployeeResponse>>>> {
    let employees = state.employee_service.list_all().await?;

    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(responses)))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<EmployeeResponse>>> {
    let employee = state
        .employee_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    Ok(Json(ApiResponse::data(employee.into())))
}

/// Create new employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Missing required fields or unknown department"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<EmployeeResponse>>)> {
    let (employee, department) = state
        .employee_service
        .create(
            payload.first_name,
            payload.last_name,
            payload.department,
            payload.email,
            payload.phone,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            (employee, Some(department)).into(),
            "Employee created successfully",
        )),
    ))
}

/// Update employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Unknown department reference"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> ApiResult<Json<ApiResponse<EmployeeResponse>>> {
    let employee = state
        .employee_service
        .update(
            id,
            payload.first_name,
            payload.last_name,
            payload.department,
            payload.email,
            payload.phone,
            payload.hire_date,
            payload.is_active,
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        employee.into(),
        "Employee updated successfully",
    )))
}

/// Delete employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.employee_service.delete(id).await?;

    Ok(Json(ApiResponse::message("Employee deleted successfully")))
}

/// Search employees by name (case-insensitive, first or last name).
/// The route shape itself rejects an empty term.
#[utoipa::path(
    get,
    path = "/api/employees/search/{term}",
    params(("term" = String, Path, description = "Search term")),
    responses(
        (status = 200, description = "Matching employees", body = Vec<EmployeeResponse>),
        (status = 400, description = "Blank search term"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn search_employees(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<EmployeeResponse>>>> {
    let term = term.trim().to_string();
    if term.is_empty() {
        return Err(ApiError::bad_request("Search term is required"));
    }

    let employees = state.employee_service.search(&term).await?;

    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(responses)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/api/employees/search/:term", get(search_employees))
}
