pub mod academic;
pub mod admin;
pub mod announcement;
pub mod installment;
pub mod invoice;
pub mod student;
