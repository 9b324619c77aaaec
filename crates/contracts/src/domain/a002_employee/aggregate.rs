use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a003_contract::ContractType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Expired,
}

impl EmployeeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
            EmployeeStatus::Expired => "EXPIRED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Aktif",
            EmployeeStatus::Inactive => "Tidak Aktif",
            EmployeeStatus::Expired => "Kontrak Berakhir",
        }
    }
}

/// Karyawan row as returned by the employees list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub company_id: String,
    pub full_name: String,
    /// National identity number
    pub nik: String,
    #[serde(default)]
    pub position: Option<String>,
    pub contract_type: ContractType,
    pub status: EmployeeStatus,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
