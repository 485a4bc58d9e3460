pub mod academic;
pub mod announcement;
pub mod auth;
pub mod tuition;
