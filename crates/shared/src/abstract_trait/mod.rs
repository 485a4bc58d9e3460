pub mod academic;
pub mod announcement;
pub mod auth;
pub mod hashing;
pub mod jwt;
pub mod tuition;
