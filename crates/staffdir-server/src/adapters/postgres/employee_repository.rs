//! PostgreSQL implementation of EmployeeRepository
//!
//! The `department` column carries no foreign key: the reference is weak by
//! design and resolved by the services.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use staffdir::{DepartmentRef, DomainError, Employee, EmployeeRepository};

/// PostgreSQL implementation of EmployeeRepository
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    department: Uuid,
    email: Option<String>,
    phone: Option<String>,
    hire_date: chrono::DateTime<chrono::Utc>,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            department: DepartmentRef::new(row.department),
            email: row.email,
            phone: row.phone,
            hire_date: row.hire_date,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError> {
        let row = sqlx::query_as::<_, EmployeeRow>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT * FROM employees ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_department(&self, department_id: Uuid) -> Result<Vec<Employee>, DomainError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT * FROM employees
            WHERE department = $1
            ORDER BY last_name, first_name
            "#,
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_by_department(&self, department_id: Uuid) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE department = $1",
        )
        .bind(department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(count)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Employee>, DomainError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT * FROM employees
            WHERE first_name ILIKE '%' || $1 || '%'
               OR last_name ILIKE '%' || $1 || '%'
            ORDER BY last_name, first_name
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        // Check if exists
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
                .bind(employee.id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = if exists {
            // Update
            sqlx::query_as::<_, EmployeeRow>(
                r#"
                UPDATE employees
                SET first_name = $2, last_name = $3, department = $4, email = $5,
                    phone = $6, hire_date = $7, is_active = $8, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(employee.id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(employee.department.id())
            .bind(&employee.email)
            .bind(&employee.phone)
            .bind(employee.hire_date)
            .bind(employee.is_active)
            .fetch_one(&self.pool)
            .await
        } else {
            // Insert
            sqlx::query_as::<_, EmployeeRow>(
                r#"
                INSERT INTO employees
                    (id, first_name, last_name, department, email, phone, hire_date, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
                "#,
            )
            .bind(employee.id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(employee.department.id())
            .bind(&employee.email)
            .bind(&employee.phone)
            .bind(employee.hire_date)
            .bind(employee.is_active)
            .fetch_one(&self.pool)
            .await
        }
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
