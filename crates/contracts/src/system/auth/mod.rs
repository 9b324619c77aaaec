use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Labor office staff, sees every company
    Admin,
    /// Company HR operator, scoped to one company
    Company,
}

/// Identity handed over by the authentication boundary.
///
/// Company scoping is read from `company_id`; it is never derived from the
/// company or user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Company filter to apply to list queries, `None` for admins.
    pub fn company_scope(&self) -> Option<&str> {
        match self.role {
            Role::Admin => None,
            Role::Company => self.company_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_scope() {
        let hr: Session = serde_json::from_str(
            r#"{"user_id":"u-2","username":"hrd","role":"COMPANY","company_id":"c-9"}"#,
        )
        .unwrap();
        assert_eq!(hr.company_scope(), Some("c-9"));
        assert!(!hr.is_admin());

        let admin = Session {
            user_id: "u-1".into(),
            username: "disnaker".into(),
            role: Role::Admin,
            company_id: Some("c-9".into()),
        };
        assert_eq!(admin.company_scope(), None);
    }
}
