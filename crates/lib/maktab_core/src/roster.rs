//! Teacher roster queries: search and paging over the roster list.

use crate::models::teacher::{EmploymentStatus, Teacher};

/// Rows shown per roster page.
pub const PAGE_SIZE: usize = 10;

/// One page of roster results plus the numbers the footer renders.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterPage {
    pub teachers: Vec<Teacher>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first row on this page; 0 when the page is empty.
    pub start: usize,
    /// 1-based index of the last row on this page; 0 when the page is empty.
    pub end: usize,
    /// Total matching rows across all pages.
    pub total: usize,
}

/// Static roster data; the backend has no teachers endpoint yet.
pub fn seed_teachers() -> Vec<Teacher> {
    #[rustfmt::skip]
    let rows = [
        (1, "Abdullaev Ahmad", "Frontend", "+998 90 123 45 67", "ahmad@school.uz", 5, EmploymentStatus::Active),
        (2, "Karimova Gulnoza", "Backend", "+998 91 234 56 78", "gulnoza@school.uz", 4, EmploymentStatus::Active),
        (3, "Oripov Sardor", "Python", "+998 99 345 67 89", "sardor@school.uz", 3, EmploymentStatus::OnLeave),
        (4, "Saidova Madina", "Frontend", "+998 93 456 78 90", "madina@school.uz", 6, EmploymentStatus::Active),
        (5, "To'rayev Botir", "Java", "+998 97 567 89 01", "botir@school.uz", 2, EmploymentStatus::Active),
    ];
    rows.into_iter()
        .map(|(id, name, subject, phone, email, groups, status)| Teacher {
            id,
            name: name.to_string(),
            subject: subject.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            groups,
            status,
        })
        .collect()
}

/// Rows matching `term`: case-insensitive over name and subject, raw substring
/// over the phone. An empty term matches everything.
pub fn search(teachers: &[Teacher], term: &str) -> Vec<Teacher> {
    let needle = term.to_lowercase();
    teachers
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t.subject.to_lowercase().contains(&needle)
                || t.phone.contains(term)
        })
        .cloned()
        .collect()
}

/// Search, then cut the requested page. An out-of-range page number is
/// clamped into the valid range rather than rejected.
pub fn page(teachers: &[Teacher], term: &str, requested: usize) -> RosterPage {
    let matches = search(teachers, term);
    let total = matches.len();
    let total_pages = total.div_ceil(PAGE_SIZE).max(1);
    let page = requested.clamp(1, total_pages);

    let first = (page - 1) * PAGE_SIZE;
    let teachers: Vec<Teacher> = matches.into_iter().skip(first).take(PAGE_SIZE).collect();
    let (start, end) = if teachers.is_empty() {
        (0, 0)
    } else {
        (first + 1, first + teachers.len())
    };

    RosterPage {
        teachers,
        page,
        total_pages,
        start,
        end,
        total,
    }
}
