//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateDepartmentRequest,
    CreateEmployeeRequest,
    // Department models
    DepartmentResponse,
    DepartmentSummaryResponse,
    // Employee models
    EmployeeResponse,
    UpdateDepartmentRequest,
    UpdateEmployeeRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Department endpoints
        super::departments::list_departments,
        super::departments::create_department,
        super::departments::get_department,
        super::departments::update_department,
        super::departments::delete_department,
        super::departments::list_department_employees,
        // Employee endpoints
        super::employees::list_employees,
        super::employees::create_employee,
        super::employees::get_employee,
        super::employees::update_employee,
        super::employees::delete_employee,
        super::employees::search_employees,
    ),
    components(schemas(
        DepartmentResponse,
        CreateDepartmentRequest,
        UpdateDepartmentRequest,
        EmployeeResponse,
        DepartmentSummaryResponse,
        CreateEmployeeRequest,
        UpdateEmployeeRequest,
    )),
    tags(
        (name = "Departments", description = "Department management"),
        (name = "Employees", description = "Employee management and search")
    ),
    info(
        title = "Staffdir API",
        description = "Employee/department directory API"
    )
)]
pub struct ApiDoc;
