//! In-memory repository doubles for service tests.
//!
//! They mirror the ordering and matching semantics of the Postgres adapters
//! so the services can be exercised without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use staffdir::{
    Department, DepartmentRepository, DomainError, Employee, EmployeeRepository,
};

pub struct InMemoryDepartmentRepository {
    rows: Mutex<HashMap<Uuid, Department>>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        let mut departments: Vec<Department> =
            self.rows.lock().unwrap().values().cloned().collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn save(&self, department: &Department) -> Result<Department, DomainError> {
        self.rows
            .lock()
            .unwrap()
            .insert(department.id, department.clone());
        Ok(department.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

pub struct InMemoryEmployeeRepository {
    rows: Mutex<HashMap<Uuid, Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

fn by_last_then_first(employees: &mut Vec<Employee>) {
    employees.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let mut employees: Vec<Employee> = self.rows.lock().unwrap().values().cloned().collect();
        by_last_then_first(&mut employees);
        Ok(employees)
    }

    async fn find_by_department(&self, department_id: Uuid) -> Result<Vec<Employee>, DomainError> {
        let mut employees: Vec<Employee> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.department.id() == department_id)
            .cloned()
            .collect();
        by_last_then_first(&mut employees);
        Ok(employees)
    }

    async fn count_by_department(&self, department_id: Uuid) -> Result<i64, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.department.id() == department_id)
            .count() as i64)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Employee>, DomainError> {
        let term = term.to_lowercase();
        let mut employees: Vec<Employee> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| {
                e.first_name.to_lowercase().contains(&term)
                    || e.last_name.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
        by_last_then_first(&mut employees);
        Ok(employees)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        self.rows
            .lock()
            .unwrap()
            .insert(employee.id, employee.clone());
        Ok(employee.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}
