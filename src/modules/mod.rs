pub mod assignments;
pub mod auth;
pub mod courses;
pub mod students;
pub mod users;
