//! Audit entries emitted as a side effect of successful mutations.

use serde_json::Value;
use std::fmt;

/// Kind of entity an audit entry is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Car,
    Operator,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Operator => "operator",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Assign,
    Unassign,
    Create,
    Update,
    Delete,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "assign",
            Self::Unassign => "unassign",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub action_type: ActionType,
    pub performed_by: String,
    /// JSON description of the change.
    pub changes: Value,
}
