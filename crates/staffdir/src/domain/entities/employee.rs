//! Employee - staff member record
//!
//! Pure domain entity without infrastructure dependencies. The `department`
//! field is a weak reference: the store carries no foreign key, so the
//! reference is validated by the services at every write boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::DepartmentRef;

/// Employee - staff member associated with a department by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub department: DepartmentRef,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new Employee with generated ID and defaults
    /// (`hire_date` = now, `is_active` = true)
    pub fn new(
        first_name: String,
        last_name: String,
        department: DepartmentRef,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            department,
            email,
            phone,
            hire_date: now,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Computed full name, never stored
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_defaults() {
        let before = Utc::now();
        let employee = Employee::new(
            "Alfred".to_string(),
            "Christensen".to_string(),
            DepartmentRef::new(Uuid::new_v4()),
            None,
            None,
        );

        assert!(employee.is_active);
        assert!(employee.hire_date >= before);
        assert_eq!(employee.hire_date, employee.created_at);
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let employee = Employee::new(
            "Janet".to_string(),
            "Doe".to_string(),
            DepartmentRef::new(Uuid::new_v4()),
            None,
            None,
        );

        assert_eq!(employee.full_name(), "Janet Doe");
    }
}
