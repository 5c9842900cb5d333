//! PostgreSQL adapters for the repository ports.

mod department_repository;
mod employee_repository;

pub use department_repository::PgDepartmentRepository;
pub use employee_repository::PgEmployeeRepository;
