use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Perusahaan registered with the labor office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    /// Tax number (NPWP)
    #[serde(default)]
    pub npwp: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub employee_count: u32,
    pub created_at: DateTime<Utc>,
}
