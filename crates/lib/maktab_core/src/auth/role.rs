//! User roles issued by the backend.

use serde::{Deserialize, Serialize};

/// Role assigned to a signed-in user.
///
/// The backend transports roles as `ROLE_*` strings; the serde renames keep
/// the wire form intact so a role can pass through JSON unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access across all schools.
    #[serde(rename = "ROLE_SUPER_ADMIN")]
    SuperAdmin,
    /// Administrative access within one school.
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Teaching staff.
    #[serde(rename = "ROLE_TEACHER")]
    Teacher,
    /// Enrolled student.
    #[serde(rename = "ROLE_STUDENT")]
    Student,
    /// Parent or guardian of a student.
    #[serde(rename = "ROLE_PARENT")]
    Parent,
}

impl Role {
    /// Parse a role from its wire form. Matching is exact; an unknown or
    /// differently-cased string yields `None`.
    pub fn from_wire(s: &str) -> Option<Role> {
        match s {
            "ROLE_SUPER_ADMIN" => Some(Role::SuperAdmin),
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_TEACHER" => Some(Role::Teacher),
            "ROLE_STUDENT" => Some(Role::Student),
            "ROLE_PARENT" => Some(Role::Parent),
            _ => None,
        }
    }

    /// The wire form the backend uses for this role.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "ROLE_SUPER_ADMIN",
            Role::Admin => "ROLE_ADMIN",
            Role::Teacher => "ROLE_TEACHER",
            Role::Student => "ROLE_STUDENT",
            Role::Parent => "ROLE_PARENT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}
