//! Department Application Service (Use Case)
//!
//! Orchestrates domain operations for Department management, including the
//! delete-only-if-empty integrity guard against the employee collection.

use std::sync::Arc;
use uuid::Uuid;

use staffdir::{
    Department, DepartmentRepository, DepartmentSummary, DomainError, Employee, EmployeeRepository,
};

/// Application service for Department operations
pub struct DepartmentService<D: DepartmentRepository, E: EmployeeRepository> {
    departments: Arc<D>,
    employees: Arc<E>,
}

impl<D: DepartmentRepository, E: EmployeeRepository> DepartmentService<D, E> {
    pub fn new(departments: Arc<D>, employees: Arc<E>) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Get all departments, ordered by name ascending
    pub async fn list_all(&self) -> Result<Vec<Department>, DomainError> {
        self.departments.find_all().await
    }

    /// Get a department by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Department>, DomainError> {
        self.departments.find_by_id(id).await
    }

    /// Create a new department with a unique name
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Department, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Department name is required".to_string(),
            ));
        }

        // Existence check and insert are separate statements; the store-level
        // unique index on name is the backstop for concurrent creates.
        if self.departments.find_by_name(&name).await?.is_some() {
            return Err(DomainError::Conflict(
                "Department already exists".to_string(),
            ));
        }

        let department = Department::new(name, description);
        let saved = self.departments.save(&department).await?;

        tracing::info!("Created department: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Update a department (partial field replace).
    /// Rename does not re-check name uniqueness here.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Department, DomainError> {
        let current = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Department", id))?;

        let name = match name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(DomainError::Validation(
                        "Department name is required".to_string(),
                    ));
                }
                name
            }
            None => current.name,
        };

        let updated = Department {
            id: current.id,
            name,
            description: description.or(current.description),
            created_at: current.created_at,
            updated_at: chrono::Utc::now(),
        };

        self.departments.save(&updated).await
    }

    /// Delete a department, blocked while any employee references it
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let department = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Department", id))?;

        let referencing = self.employees.count_by_department(id).await?;
        if referencing > 0 {
            tracing::warn!(
                "Refusing to delete department {} with {} assigned employees",
                id,
                referencing
            );
            return Err(DomainError::Conflict(
                "Cannot delete department with assigned employees".to_string(),
            ));
        }

        self.departments.delete(department.id).await?;
        tracing::info!("Deleted department: {}", id);

        Ok(())
    }

    /// Get all employees of a department with a name-only department summary.
    /// An unknown department id yields an empty list, not an error.
    pub async fn list_employees(
        &self,
        id: Uuid,
    ) -> Result<Vec<(Employee, Option<DepartmentSummary>)>, DomainError> {
        let summary = self
            .departments
            .find_by_id(id)
            .await?
            .map(|d| d.name_summary());

        let employees = self.employees.find_by_department(id).await?;

        Ok(employees
            .into_iter()
            .map(|employee| (employee, summary.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryDepartmentRepository, InMemoryEmployeeRepository,
    };
    use crate::application::EmployeeService;
    use staffdir::DepartmentRef;

    type TestService = DepartmentService<InMemoryDepartmentRepository, InMemoryEmployeeRepository>;

    fn service() -> (
        TestService,
        Arc<InMemoryDepartmentRepository>,
        Arc<InMemoryEmployeeRepository>,
    ) {
        let departments = Arc::new(InMemoryDepartmentRepository::new());
        let employees = Arc::new(InMemoryEmployeeRepository::new());
        let service = DepartmentService::new(departments.clone(), employees.clone());
        (service, departments, employees)
    }

    #[tokio::test]
    async fn create_persists_and_assigns_id() {
        let (service, departments, _) = service();

        let created = service
            .create("Surgery".to_string(), Some("Oral surgery".to_string()))
            .await
            .unwrap();

        let stored = departments.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Surgery");
        assert_eq!(stored.description.as_deref(), Some("Oral surgery"));
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let (service, departments, _) = service();

        let err = service.create("   ".to_string(), None).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(departments.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_duplicate_name_conflicts() {
        let (service, departments, _) = service();

        service.create("Surgery".to_string(), None).await.unwrap();
        let err = service
            .create("Surgery".to_string(), None)
            .await
            .unwrap_err();

        match err {
            DomainError::Conflict(message) => assert_eq!(message, "Department already exists"),
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(departments.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_name() {
        let (service, _, _) = service();

        for name in ["Surgery", "General Dentistry", "Orthodontics"] {
            service.create(name.to_string(), None).await.unwrap();
        }

        let names: Vec<String> = service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["General Dentistry", "Orthodontics", "Surgery"]);
    }

    #[tokio::test]
    async fn get_by_id_is_idempotent() {
        let (service, _, _) = service();

        let created = service.create("Surgery".to_string(), None).await.unwrap();

        let first = service.get_by_id(created.id).await.unwrap().unwrap();
        let second = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(first.name, second.name);
        assert_eq!(first.updated_at, second.updated_at);
    }

    #[tokio::test]
    async fn update_replaces_only_present_fields() {
        let (service, _, _) = service();

        let created = service
            .create("Surgery".to_string(), Some("Oral surgery".to_string()))
            .await
            .unwrap();

        let updated = service
            .update(created.id, Some("Oral Surgery".to_string()), None)
            .await
            .unwrap();

        assert_eq!(updated.name, "Oral Surgery");
        assert_eq!(updated.description.as_deref(), Some("Oral surgery"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_unknown_department_is_not_found() {
        let (service, _, _) = service();

        let err = service
            .update(Uuid::new_v4(), Some("Surgery".to_string()), None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_with_assigned_employees_conflicts() {
        let (service, _, employees) = service();

        let department = service.create("Surgery".to_string(), None).await.unwrap();
        let employee = staffdir::Employee::new(
            "Constance".to_string(),
            "Smith".to_string(),
            DepartmentRef::new(department.id),
            None,
            None,
        );
        employees.save(&employee).await.unwrap();

        let err = service.delete(department.id).await.unwrap_err();

        match err {
            DomainError::Conflict(message) => {
                assert_eq!(message, "Cannot delete department with assigned employees")
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert!(service.get_by_id(department.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_empty_department_succeeds() {
        let (service, _, _) = service();

        let department = service.create("Surgery".to_string(), None).await.unwrap();
        service.delete(department.id).await.unwrap();

        assert!(service.get_by_id(department.id).await.unwrap().is_none());
        let err = service.delete(department.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_employees_attaches_name_only_summary() {
        let (service, _, employees) = service();

        let department = service
            .create("Surgery".to_string(), Some("Oral surgery".to_string()))
            .await
            .unwrap();
        let employee = staffdir::Employee::new(
            "Constance".to_string(),
            "Smith".to_string(),
            DepartmentRef::new(department.id),
            None,
            None,
        );
        employees.save(&employee).await.unwrap();

        let listed = service.list_employees(department.id).await.unwrap();

        assert_eq!(listed.len(), 1);
        let summary = listed[0].1.as_ref().unwrap();
        assert_eq!(summary.name, "Surgery");
        assert!(summary.description.is_none());
    }

    #[tokio::test]
    async fn list_employees_of_unknown_department_is_empty_success() {
        let (service, _, _) = service();

        let listed = service.list_employees(Uuid::new_v4()).await.unwrap();

        assert!(listed.is_empty());
    }

    // End-to-end walk of the guard: duplicate create, dangling-reference
    // create, blocked delete, delete after the last reference goes away.
    #[tokio::test]
    async fn directory_lifecycle_scenario() {
        let departments = Arc::new(InMemoryDepartmentRepository::new());
        let employees = Arc::new(InMemoryEmployeeRepository::new());
        let department_service =
            DepartmentService::new(departments.clone(), employees.clone());
        let employee_service = EmployeeService::new(employees, departments);

        let d1 = department_service
            .create("Surgery".to_string(), None)
            .await
            .unwrap();

        let duplicate = department_service
            .create("Surgery".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(duplicate, DomainError::Conflict(_)));

        let dangling = employee_service
            .create(
                "A".to_string(),
                "B".to_string(),
                Some(Uuid::new_v4()),
                None,
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(dangling, DomainError::Validation(_)));

        let (employee, _) = employee_service
            .create(
                "A".to_string(),
                "B".to_string(),
                Some(d1.id),
                None,
                None,
            )
            .await
            .unwrap();

        let blocked = department_service.delete(d1.id).await.unwrap_err();
        assert!(matches!(blocked, DomainError::Conflict(_)));

        employee_service.delete(employee.id).await.unwrap();
        department_service.delete(d1.id).await.unwrap();
        assert!(department_service
            .get_by_id(d1.id)
            .await
            .unwrap()
            .is_none());
    }
}
