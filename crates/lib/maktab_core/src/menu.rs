//! Dashboard menu.
//!
//! The fixed set of sections an administrator can reach from the dashboard.
//! Role-based filtering of menu entries is a backend concern and not applied
//! here.

/// One navigable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Menu entries in display order.
pub const MENU: &[MenuItem] = &[
    MenuItem { label: "Dashboard", path: "/" },
    MenuItem { label: "Teachers", path: "/teachers" },
    MenuItem { label: "Students", path: "/students" },
    MenuItem { label: "Parents", path: "/parents" },
    MenuItem { label: "Attendance", path: "/attendance" },
    MenuItem { label: "Groups", path: "/groups" },
    MenuItem { label: "Rooms", path: "/rooms" },
    MenuItem { label: "Calendar", path: "/calendar" },
    MenuItem { label: "Profile", path: "/profile" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique_and_absolute() {
        let mut seen = HashSet::new();
        for item in MENU {
            assert!(item.path.starts_with('/'), "{} is not absolute", item.path);
            assert!(seen.insert(item.path), "{} appears twice", item.path);
        }
    }

    #[test]
    fn teachers_entry_is_present() {
        assert!(
            MENU.iter()
                .any(|item| item.label == "Teachers" && item.path == "/teachers")
        );
    }
}
