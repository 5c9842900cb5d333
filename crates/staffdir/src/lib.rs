//! Staffdir Domain Library
//!
//! Core domain types and interfaces for the employee/department directory.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Department, Employee)
//!   - `value_objects/`: Immutable value types (DepartmentRef)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! The domain services that orchestrate these types live in the server crate;
//! this crate stays free of web-framework and database dependencies.

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Department, DepartmentRef, DepartmentSummary, DomainError, Employee};
pub use ports::{DepartmentRepository, EmployeeRepository};
