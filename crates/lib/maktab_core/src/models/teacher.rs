//! Teacher roster models.

use serde::{Deserialize, Serialize};

/// Employment status shown in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    OnLeave,
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "Active"),
            EmploymentStatus::OnLeave => write!(f, "On leave"),
        }
    }
}

/// One teacher row in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
    pub subject: String,
    /// Display-formatted phone, spaces included.
    pub phone: String,
    pub email: String,
    /// Number of groups currently assigned.
    pub groups: u32,
    pub status: EmploymentStatus,
}
