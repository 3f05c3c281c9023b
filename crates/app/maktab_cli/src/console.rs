//! Console-side navigation state and output rendering.

use std::sync::{Arc, Mutex};

use maktab_core::auth::{SessionSnapshot, TokenClaims};
use maktab_core::menu::MENU;
use maktab_core::roster::RosterPage;
use maktab_core::routes::{self, Navigator, Route};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Navigator for a terminal session.
///
/// There is no browser here; the current route is remembered so the gateway
/// can tell whether the user is already on the sign-in screen, and a hard
/// redirect becomes a printed instruction instead of a page load.
pub struct ConsoleNavigator {
    current: Mutex<Route>,
}

impl ConsoleNavigator {
    pub fn starting_at(route: Route) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(route),
        })
    }
}

impl Navigator for ConsoleNavigator {
    fn current(&self) -> Route {
        *self.current.lock().expect("navigator state lock")
    }

    fn replace(&self, route: Route) {
        log::debug!("route replaced: {}", route.path());
        *self.current.lock().expect("navigator state lock") = route;
    }

    fn hard_redirect(&self, route: Route) {
        println!("Redirecting to {}", route.path());
        *self.current.lock().expect("navigator state lock") = route;
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Session summary for `status`.
pub fn render_status(session: &SessionSnapshot, claims: Option<&TokenClaims>) -> String {
    let mut lines = Vec::new();

    if session.token.is_none() {
        lines.push("Session: none (run `maktab_cli login`)".to_string());
    } else if session.is_token_expired {
        lines.push("Session: expired".to_string());
    } else {
        lines.push("Session: active".to_string());
    }

    if let Some(role) = &session.role {
        lines.push(format!("Role:    {role}"));
    }
    if let Some(claims) = claims {
        if let Some(phone) = &claims.phone {
            lines.push(format!("Phone:   {phone}"));
        }
        if let Some(issued) = claims.issued_at() {
            lines.push(format!("Issued:  {}", issued.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        if let Some(expires) = claims.expires_at() {
            lines.push(format!(
                "Expires: {}",
                expires.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
    }

    lines.join("\n")
}

/// Dashboard header and menu for the signed-in user.
pub fn render_dashboard(session: &SessionSnapshot) -> String {
    let destination = routes::destination_for(session.role.as_deref());
    let role_label = session.role.as_deref().unwrap_or("unknown role");

    let mut lines = Vec::new();
    lines.push(format!("Signed in as {role_label} ({})", destination.path()));
    lines.push(String::new());
    for item in MENU {
        lines.push(format!("  {:<12} {}", item.label, item.path));
    }
    lines.join("\n")
}

/// Roster table plus the range footer.
pub fn render_teachers(page: &RosterPage) -> String {
    if page.teachers.is_empty() {
        return "No teachers found.".to_string();
    }

    let name_w = column_width("Name", page.teachers.iter().map(|t| t.name.len()));
    let email_w = column_width("Email", page.teachers.iter().map(|t| t.email.len()));
    let subject_w = column_width("Subject", page.teachers.iter().map(|t| t.subject.len()));
    let phone_w = column_width("Phone", page.teachers.iter().map(|t| t.phone.len()));

    let mut lines = Vec::new();
    lines.push(format!(
        "{:>3}  {:name_w$}  {:email_w$}  {:subject_w$}  {:phone_w$}  {:>6}  {}",
        "ID", "Name", "Email", "Subject", "Phone", "Groups", "Status"
    ));
    for teacher in &page.teachers {
        lines.push(format!(
            "{:>3}  {:name_w$}  {:email_w$}  {:subject_w$}  {:phone_w$}  {:>6}  {}",
            teacher.id,
            teacher.name,
            teacher.email,
            teacher.subject,
            teacher.phone,
            teacher.groups,
            teacher.status
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{}-{} / {} (page {} of {})",
        page.start, page.end, page.total, page.page, page.total_pages
    ));
    lines.join("\n")
}

fn column_width(header: &str, values: impl Iterator<Item = usize>) -> usize {
    values
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
