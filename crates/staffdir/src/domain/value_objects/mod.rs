//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod department_ref;

pub use department_ref::*;
