//! Department Routes
//!
//! HTTP handlers that delegate to DepartmentService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{
    ApiError, ApiResponse, ApiResult, CreateDepartmentRequest, DepartmentResponse,
    EmployeeResponse, UpdateDepartmentRequest,
};
use crate::AppState;

/// List all departments
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "List of all departments", body = Vec<DepartmentResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<DepartmentResponse>>>> {
    let departments = state.department_service.list_all().await?;

    let responses: Vec<DepartmentResponse> =
        departments.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(responses)))
}

/// Get department by ID
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(("id" = Uuid, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<DepartmentResponse>>> {
    let department = state
        .department_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Department not found"))?;

    Ok(Json(ApiResponse::data(department.into())))
}

/// Create new department
#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<DepartmentResponse>>)> {
    let department = state
        .department_service
        .create(payload.name, payload.description)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            department.into(),
            "Department created successfully",
        )),
    ))
}

/// Update department
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(("id" = Uuid, Path, description = "Department ID")),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated", body = DepartmentResponse),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> ApiResult<Json<ApiResponse<DepartmentResponse>>> {
    let department = state
        .department_service
        .update(id, payload.name, payload.description)
        .await?;

    Ok(Json(ApiResponse::with_message(
        department.into(),
        "Department updated successfully",
    )))
}

/// Delete department (blocked while employees reference it)
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(("id" = Uuid, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department deleted"),
        (status = 400, description = "Department has assigned employees"),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.department_service.delete(id).await?;

    Ok(Json(ApiResponse::message("Department deleted successfully")))
}

/// List employees of a department
#[utoipa::path(
    get,
    path = "/api/departments/{id}/employees",
    params(("id" = Uuid, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Employees of the department", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn list_department_employees(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<EmployeeResponse>>>> {
    let employees = state.department_service.list_employees(id).await?;

    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(responses)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/api/departments/:id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .route(
            "/api/departments/:id/employees",
            get(list_department_employees),
        )
}
