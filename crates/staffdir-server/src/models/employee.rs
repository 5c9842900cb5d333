//! Employee request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use staffdir::{DepartmentSummary, Employee};

/// Create Employee request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    /// Department id; presence is enforced by the service, not the deserializer
    pub department: Option<Uuid>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Update Employee request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<Uuid>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

/// Department summary attached to employee responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummaryResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<DepartmentSummary> for DepartmentSummaryResponse {
    fn from(summary: DepartmentSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            description: summary.description,
        }
    }
}

/// Employee response, enriched with its department summary
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub department: Option<DepartmentSummaryResponse>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(Employee, Option<DepartmentSummary>)> for EmployeeResponse {
    fn from((employee, summary): (Employee, Option<DepartmentSummary>)) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            department: summary.map(Into::into),
            email: employee.email,
            phone: employee.phone,
            hire_date: employee.hire_date,
            is_active: employee.is_active,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}
