//! Console routes and the navigation seam.
//!
//! Routes are the closed set of destinations the auth flow can land on. The
//! [`Navigator`] trait is how the core asks the surrounding UI to move; the
//! console binary provides the real implementation and tests substitute a
//! recording double.

use crate::auth::Role;

/// A navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The sign-in screen.
    SignIn,
    SuperAdminDashboard,
    AdminDashboard,
    TeacherDashboard,
    StudentDashboard,
    ParentDashboard,
}

impl Route {
    /// The path this route lives at.
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/signin",
            Route::SuperAdminDashboard => "/dashboard/super_admin",
            Route::AdminDashboard => "/dashboard/admin",
            Route::TeacherDashboard => "/dashboard/teacher",
            Route::StudentDashboard => "/dashboard/student",
            Route::ParentDashboard => "/dashboard/parent",
        }
    }

    /// The dashboard a role lands on after sign-in.
    pub fn for_role(role: Role) -> Route {
        match role {
            Role::SuperAdmin => Route::SuperAdminDashboard,
            Role::Admin => Route::AdminDashboard,
            Role::Teacher => Route::TeacherDashboard,
            Role::Student => Route::StudentDashboard,
            Role::Parent => Route::ParentDashboard,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Post-login destination for a role string as the backend sent it.
///
/// Unknown or absent roles fall back to the teacher dashboard.
pub fn destination_for(role: Option<&str>) -> Route {
    role.and_then(Role::from_wire)
        .map(Route::for_role)
        .unwrap_or(Route::TeacherDashboard)
}

/// Navigation hooks the core calls into.
///
/// `replace` is an in-app route change that overwrites the current history
/// entry, so backing out of a dashboard does not land on the sign-in screen
/// again. `hard_redirect` is a full reload that drops all in-app state; the
/// gateway uses it when a session is force-closed.
pub trait Navigator: Send + Sync {
    /// The route the UI is currently on.
    fn current(&self) -> Route;

    /// Client-side navigation, replacing the current history entry.
    fn replace(&self, route: Route);

    /// Full-reload navigation to `route`.
    fn hard_redirect(&self, route: Route);
}
