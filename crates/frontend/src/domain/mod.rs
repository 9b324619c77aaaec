pub mod a001_company;
pub mod a002_employee;
pub mod a004_approval;
