//! Employee Application Service (Use Case)
//!
//! Orchestrates domain operations for Employee management. Every write that
//! touches the department reference resolves it against the department
//! collection first; the store itself enforces nothing.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use chrono::{DateTime, Utc};
use staffdir::{
    DepartmentRef, DepartmentRepository, DepartmentSummary, DomainError, Employee,
    EmployeeRepository,
};

/// Application service for Employee operations
pub struct EmployeeService<E: EmployeeRepository, D: DepartmentRepository> {
    employees: Arc<E>,
    departments: Arc<D>,
}

impl<E: EmployeeRepository, D: DepartmentRepository> EmployeeService<E, D> {
    pub fn new(employees: Arc<E>, departments: Arc<D>) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// Get all employees with their department summaries,
    /// ordered by (last name, first name) ascending
    pub async fn list_all(
        &self,
    ) -> Result<Vec<(Employee, Option<DepartmentSummary>)>, DomainError> {
        let employees = self.employees.find_all().await?;
        self.attach_departments(employees).await
    }

    /// Get an employee by ID with its department summary
    pub async fn get_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<(Employee, Option<DepartmentSummary>)>, DomainError> {
        let employee = match self.employees.find_by_id(id).await? {
            Some(employee) => employee,
            None => return Ok(None),
        };

        let summary = self
            .departments
            .find_by_id(employee.department.id())
            .await?
            .map(|d| d.summary());

        Ok(Some((employee, summary)))
    }

    /// Get employees of a department. An empty list is a success,
    /// never a not-found.
    pub async fn list_by_department(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<(Employee, Option<DepartmentSummary>)>, DomainError> {
        let employees = self.employees.find_by_department(department_id).await?;
        self.attach_departments(employees).await
    }

    /// Create a new employee. The department reference must resolve before
    /// anything is written.
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        department: Option<Uuid>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<(Employee, DepartmentSummary), DomainError> {
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(DomainError::Validation(
                "First name, last name, and department are required".to_string(),
            ));
        }
        let Some(department_id) = department else {
            return Err(DomainError::Validation(
                "First name, last name, and department are required".to_string(),
            ));
        };

        let department = self
            .departments
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| DomainError::Validation("department not found".to_string()))?;

        let employee = Employee::new(
            first_name,
            last_name,
            DepartmentRef::new(department_id),
            email,
            phone,
        );
        let saved = self.employees.save(&employee).await?;

        tracing::info!("Created employee: {} ({})", saved.full_name(), saved.id);

        Ok((saved, department.summary()))
    }

    /// Update an employee (partial field replace). A department present in
    /// the input must resolve before the update is applied.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        department: Option<Uuid>,
        email: Option<String>,
        phone: Option<String>,
        hire_date: Option<DateTime<Utc>>,
        is_active: Option<bool>,
    ) -> Result<(Employee, Option<DepartmentSummary>), DomainError> {
        let current = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", id))?;

        let department = match department {
            Some(department_id) => {
                self.departments
                    .find_by_id(department_id)
                    .await?
                    .ok_or_else(|| DomainError::Validation("department not found".to_string()))?;
                DepartmentRef::new(department_id)
            }
            None => current.department,
        };

        let first_name = match first_name {
            Some(first_name) => {
                let first_name = first_name.trim().to_string();
                if first_name.is_empty() {
                    return Err(DomainError::Validation(
                        "First name cannot be empty".to_string(),
                    ));
                }
                first_name
            }
            None => current.first_name,
        };
        let last_name = match last_name {
            Some(last_name) => {
                let last_name = last_name.trim().to_string();
                if last_name.is_empty() {
                    return Err(DomainError::Validation(
                        "Last name cannot be empty".to_string(),
                    ));
                }
                last_name
            }
            None => current.last_name,
        };

        let updated = Employee {
            id: current.id,
            first_name,
            last_name,
            department,
            email: email.or(current.email),
            phone: phone.or(current.phone),
            hire_date: hire_date.unwrap_or(current.hire_date),
            is_active: is_active.unwrap_or(current.is_active),
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        let saved = self.employees.save(&updated).await?;
        let summary = self
            .departments
            .find_by_id(saved.department.id())
            .await?
            .map(|d| d.summary());

        Ok((saved, summary))
    }

    /// Delete an employee. Unconditional: the employee is the leaf of the
    /// only relationship in the model.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let deleted = self.employees.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("Employee", id));
        }

        tracing::info!("Deleted employee: {}", id);
        Ok(())
    }

    /// Case-insensitive name search (first OR last name).
    /// An empty term matches everything; rejecting it is the caller's job.
    pub async fn search(
        &self,
        term: &str,
    ) -> Result<Vec<(Employee, Option<DepartmentSummary>)>, DomainError> {
        let employees = self.employees.search_by_name(term).await?;
        self.attach_departments(employees).await
    }

    async fn attach_departments(
        &self,
        employees: Vec<Employee>,
    ) -> Result<Vec<(Employee, Option<DepartmentSummary>)>, DomainError> {
        let mut summaries: HashMap<Uuid, Option<DepartmentSummary>> = HashMap::new();
        let mut results = Vec::with_capacity(employees.len());

        for employee in employees {
            let department_id = employee.department.id();
            let summary = match summaries.get(&department_id) {
                Some(summary) => summary.clone(),
                None => {
                    let summary = self
                        .departments
                        .find_by_id(department_id)
                        .await?
                        .map(|d| d.summary());
                    summaries.insert(department_id, summary.clone());
                    summary
                }
            };
            results.push((employee, summary));
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryDepartmentRepository, InMemoryEmployeeRepository,
    };
    use staffdir::Department;

    type TestService = EmployeeService<InMemoryEmployeeRepository, InMemoryDepartmentRepository>;

    fn service() -> (
        TestService,
        Arc<InMemoryDepartmentRepository>,
        Arc<InMemoryEmployeeRepository>,
    ) {
        let departments = Arc::new(InMemoryDepartmentRepository::new());
        let employees = Arc::new(InMemoryEmployeeRepository::new());
        let service = EmployeeService::new(employees.clone(), departments.clone());
        (service, departments, employees)
    }

    async fn seed_department(departments: &InMemoryDepartmentRepository, name: &str) -> Department {
        let department = Department::new(name.to_string(), None);
        departments.save(&department).await.unwrap()
    }

    #[tokio::test]
    async fn create_resolves_department_name() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "Surgery").await;

        let (employee, summary) = service
            .create(
                "Constance".to_string(),
                "Smith".to_string(),
                Some(department.id),
                Some("c.smith@example.com".to_string()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(summary.name, "Surgery");
        assert_eq!(employee.department.id(), department.id);
        assert!(employee.is_active);
        assert_eq!(employee.full_name(), "Constance Smith");
    }

    #[tokio::test]
    async fn create_with_unknown_department_writes_nothing() {
        let (service, _, employees) = service();

        let err = service
            .create(
                "Constance".to_string(),
                "Smith".to_string(),
                Some(Uuid::new_v4()),
                None,
                None,
            )
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(message) => assert_eq!(message, "department not found"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(employees.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_requires_names_and_department() {
        let (service, departments, employees) = service();
        let department = seed_department(&departments, "Surgery").await;

        for (first, last, dept) in [
            ("", "Smith", Some(department.id)),
            ("Constance", "  ", Some(department.id)),
            ("Constance", "Smith", None),
        ] {
            let err = service
                .create(first.to_string(), last.to_string(), dept, None, None)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert!(employees.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_orders_by_last_then_first_name() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "General Dentistry").await;

        for (first, last) in [
            ("John", "Dudley"),
            ("Alfred", "Christensen"),
            ("Janet", "Doe"),
            ("Alice", "Doe"),
        ] {
            service
                .create(
                    first.to_string(),
                    last.to_string(),
                    Some(department.id),
                    None,
                    None,
                )
                .await
                .unwrap();
        }

        let names: Vec<String> = service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|(e, _)| e.full_name())
            .collect();
        assert_eq!(
            names,
            ["Alfred Christensen", "Alice Doe", "Janet Doe", "John Dudley"]
        );
    }

    #[tokio::test]
    async fn list_by_department_filters_and_enriches() {
        let (service, departments, _) = service();
        let surgery = seed_department(&departments, "Surgery").await;
        let ortho = seed_department(&departments, "Orthodontics").await;

        service
            .create(
                "Constance".to_string(),
                "Smith".to_string(),
                Some(surgery.id),
                None,
                None,
            )
            .await
            .unwrap();
        service
            .create(
                "Leslie".to_string(),
                "Roche".to_string(),
                Some(ortho.id),
                None,
                None,
            )
            .await
            .unwrap();

        let listed = service.list_by_department(surgery.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0.last_name, "Smith");
        assert_eq!(listed[0].1.as_ref().unwrap().name, "Surgery");

        let empty = service.list_by_department(Uuid::new_v4()).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn get_by_id_is_idempotent() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "Surgery").await;

        let (created, _) = service
            .create(
                "Constance".to_string(),
                "Smith".to_string(),
                Some(department.id),
                None,
                None,
            )
            .await
            .unwrap();

        let (first, _) = service.get_by_id(created.id).await.unwrap().unwrap();
        let (second, _) = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(first.full_name(), second.full_name());
        assert_eq!(first.updated_at, second.updated_at);
    }

    #[tokio::test]
    async fn update_revalidates_department_reference() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "Surgery").await;

        let (created, _) = service
            .create(
                "Constance".to_string(),
                "Smith".to_string(),
                Some(department.id),
                None,
                None,
            )
            .await
            .unwrap();

        let err = service
            .update(
                created.id,
                None,
                None,
                Some(Uuid::new_v4()),
                None,
                None,
                None,
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // The failed update must not have touched the record
        let (unchanged, _) = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(unchanged.department.id(), department.id);
    }

    #[tokio::test]
    async fn update_replaces_only_present_fields() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "Surgery").await;

        let (created, _) = service
            .create(
                "Constance".to_string(),
                "Smith".to_string(),
                Some(department.id),
                Some("c.smith@example.com".to_string()),
                None,
            )
            .await
            .unwrap();

        let (updated, summary) = service
            .update(
                created.id,
                None,
                Some("Smith-Jones".to_string()),
                None,
                None,
                Some("555-0199".to_string()),
                None,
                Some(false),
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Constance");
        assert_eq!(updated.last_name, "Smith-Jones");
        assert_eq!(updated.email.as_deref(), Some("c.smith@example.com"));
        assert_eq!(updated.phone.as_deref(), Some("555-0199"));
        assert!(!updated.is_active);
        assert_eq!(summary.unwrap().name, "Surgery");
    }

    #[tokio::test]
    async fn update_unknown_employee_is_not_found() {
        let (service, _, _) = service();

        let err = service
            .update(Uuid::new_v4(), None, None, None, None, None, None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_is_unconditional_for_existing_employee() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "Surgery").await;

        let (created, _) = service
            .create(
                "Constance".to_string(),
                "Smith".to_string(),
                Some(department.id),
                None,
                None,
            )
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();
        assert!(service.get_by_id(created.id).await.unwrap().is_none());

        let err = service.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "General Dentistry").await;

        for (first, last) in [
            ("John", "Dudley"),
            ("Janet", "Johnson"),
            ("Alfred", "Christensen"),
        ] {
            service
                .create(
                    first.to_string(),
                    last.to_string(),
                    Some(department.id),
                    None,
                    None,
                )
                .await
                .unwrap();
        }

        let lower: Vec<Uuid> = service
            .search("john")
            .await
            .unwrap()
            .into_iter()
            .map(|(e, _)| e.id)
            .collect();
        let upper: Vec<Uuid> = service
            .search("JOHN")
            .await
            .unwrap()
            .into_iter()
            .map(|(e, _)| e.id)
            .collect();

        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
    }

    #[tokio::test]
    async fn search_matches_first_or_last_name() {
        let (service, departments, _) = service();
        let department = seed_department(&departments, "Restorative Dentistry").await;

        service
            .create(
                "Lisa".to_string(),
                "Harris".to_string(),
                Some(department.id),
                None,
                None,
            )
            .await
            .unwrap();
        service
            .create(
                "Danny".to_string(),
                "Perez".to_string(),
                Some(department.id),
                None,
                None,
            )
            .await
            .unwrap();

        let hits = service.search("ris").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.last_name, "Harris");

        let everything = service.search("").await.unwrap();
        assert_eq!(everything.len(), 2);
    }
}
