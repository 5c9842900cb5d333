//! Employee Repository Port
//!
//! Abstract interface for Employee persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Employee};

/// Repository interface for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an Employee by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError>;

    /// Find all Employees, ordered by (last name, first name) ascending
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Find all Employees referencing a Department, same ordering as find_all
    async fn find_by_department(&self, department_id: Uuid) -> Result<Vec<Employee>, DomainError>;

    /// Count Employees referencing a Department
    async fn count_by_department(&self, department_id: Uuid) -> Result<i64, DomainError>;

    /// Case-insensitive substring match of `term` against first OR last name.
    /// An empty term matches everything.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Employee>, DomainError>;

    /// Save an Employee (insert or update)
    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError>;

    /// Delete an Employee by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
