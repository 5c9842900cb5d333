//! Department Repository Port
//!
//! Abstract interface for Department persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Department};

/// Repository interface for Department entities
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find a Department by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, DomainError>;

    /// Find a Department by exact name (case-sensitive)
    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DomainError>;

    /// Find all Departments, ordered by name ascending
    async fn find_all(&self) -> Result<Vec<Department>, DomainError>;

    /// Save a Department (insert or update)
    async fn save(&self, department: &Department) -> Result<Department, DomainError>;

    /// Delete a Department by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
