//! Domain models.

pub mod api;
pub mod teacher;

pub use api::LoginResponse;
pub use teacher::Teacher;
