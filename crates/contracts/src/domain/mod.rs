pub mod a001_company;
pub mod a002_employee;
pub mod a003_contract;
pub mod a004_approval;
