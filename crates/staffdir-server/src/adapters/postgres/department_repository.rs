//! PostgreSQL implementation of DepartmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use staffdir::{Department, DepartmentRepository, DomainError};

/// PostgreSQL implementation of DepartmentRepository
pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, DomainError> {
        let row = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DomainError> {
        let row = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM departments WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        let rows = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM departments ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, department: &Department) -> Result<Department, DomainError> {
        // Check if exists
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM departments WHERE id = $1)",
        )
        .bind(department.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = if exists {
            // Update
            sqlx::query_as::<_, DepartmentRow>(
                r#"
                UPDATE departments
                SET name = $2, description = $3, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(department.id)
            .bind(&department.name)
            .bind(&department.description)
            .fetch_one(&self.pool)
            .await
        } else {
            // Insert
            sqlx::query_as::<_, DepartmentRow>(
                r#"
                INSERT INTO departments (id, name, description)
                VALUES ($1, $2, $3)
                RETURNING *
                "#,
            )
            .bind(department.id)
            .bind(&department.name)
            .bind(&department.description)
            .fetch_one(&self.pool)
            .await
        }
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
