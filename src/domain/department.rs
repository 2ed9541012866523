use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity assigned by the store on first save.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct DepartmentId(pub u64);

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl From<u64> for DepartmentId {
    fn from(value: u64) -> Self { Self(value) }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// `None` until the department has been saved.
    pub id_department: Option<DepartmentId>,
    pub name: String,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id_department: None, name: name.into() }
    }

    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self { id_department: Some(id), name: name.into() }
    }

    pub fn is_persisted(&self) -> bool { self.id_department.is_some() }
}
