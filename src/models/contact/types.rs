use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
}

/// One persisted contact-form submission. Never modified after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    /// RFC 3339 UTC, millisecond precision.
    pub timestamp: String,
    pub status: ContactStatus,
}
