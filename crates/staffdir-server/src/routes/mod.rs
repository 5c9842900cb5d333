//! Staffdir API Routes
//!
//! - /api/departments - Department management
//! - /api/departments/:id/employees - Employees of a department
//! - /api/employees - Employee management
//! - /api/employees/search/:term - Name search

pub mod departments;
pub mod employees;
pub mod swagger;
