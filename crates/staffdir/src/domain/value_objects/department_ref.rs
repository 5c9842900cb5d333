//! DepartmentRef - weak reference to a Department

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weak reference to a Department, carrying only its id.
///
/// Holding a `DepartmentRef` grants no ownership and no cascading lifecycle;
/// whether the referenced department still exists is checked against the
/// department collection at write boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentRef(Uuid);

impl DepartmentRef {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for DepartmentRef {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DepartmentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
