pub mod aggregate;

pub use aggregate::{Employee, EmployeeStatus};
