//! Polymorphic reference to a storage: either its id or its name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::StorageId;

/// A storage addressed by id or by name.
///
/// Wire format (untagged): a JSON integer is an id, a JSON string is a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageRef {
    ById(StorageId),
    ByName(String),
}

impl StorageRef {
    /// Interpret a path segment: all-digit segments are ids, anything else is a name.
    pub fn from_segment(segment: &str) -> Self {
        match segment.parse::<StorageId>() {
            Ok(id) => Self::ById(id),
            Err(_) => Self::ByName(segment.to_owned()),
        }
    }
}

impl From<StorageId> for StorageRef {
    fn from(id: StorageId) -> Self {
        Self::ById(id)
    }
}

impl From<&str> for StorageRef {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_owned())
    }
}

impl fmt::Display for StorageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "#{id}"),
            Self::ByName(name) => f.write_str(name),
        }
    }
}
