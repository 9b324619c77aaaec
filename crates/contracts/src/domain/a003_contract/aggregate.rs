use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Contract type
// ============================================================================

/// PKWT (fixed-term) or PKWTT (permanent) employment contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "PKWT")]
    Pkwt,
    #[serde(rename = "PKWTT")]
    Pkwtt,
}

impl ContractType {
    pub fn code(&self) -> &'static str {
        match self {
            ContractType::Pkwt => "PKWT",
            ContractType::Pkwtt => "PKWTT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Pkwt => "Waktu Tertentu",
            ContractType::Pkwtt => "Waktu Tidak Tertentu",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "PKWT" => Some(ContractType::Pkwt),
            "PKWTT" => Some(ContractType::Pkwtt),
            _ => None,
        }
    }

    /// Fixed-term contracts must carry an end date.
    pub fn requires_end_date(&self) -> bool {
        matches!(self, ContractType::Pkwt)
    }
}

// ============================================================================
// Contract
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentContract {
    pub id: String,
    pub employee_id: String,
    pub company_id: String,
    pub contract_type: ContractType,
    pub position: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub salary: Option<i64>,
}

impl EmploymentContract {
    /// Length in whole days for fixed-term contracts.
    pub fn duration_days(&self) -> Option<i64> {
        self.end_date
            .map(|end| (end - self.start_date).num_days())
    }

    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.end_date.map(|end| end < date).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_type_codes() {
        assert_eq!(ContractType::from_code("pkwt"), Some(ContractType::Pkwt));
        assert_eq!(ContractType::from_code("PKWTT"), Some(ContractType::Pkwtt));
        assert_eq!(ContractType::from_code("ALL"), None);
        assert_eq!(
            serde_json::to_string(&ContractType::Pkwtt).unwrap(),
            "\"PKWTT\""
        );
    }

    #[test]
    fn test_fixed_term_duration_and_expiry() {
        let contract = EmploymentContract {
            id: "k-1".into(),
            employee_id: "e-1".into(),
            company_id: "c-1".into(),
            contract_type: ContractType::Pkwt,
            position: "Operator".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            salary: None,
        };
        assert_eq!(contract.duration_days(), Some(365));
        assert!(contract.is_expired_on(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(!contract.is_expired_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
    }
}
