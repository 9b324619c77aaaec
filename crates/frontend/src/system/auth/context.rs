use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub session: Option<Session>,
}

impl AuthState {
    /// Reads what the login page left in localStorage.
    pub fn restore() -> Self {
        let state = Self {
            access_token: storage::get_access_token(),
            session: storage::get_session(),
        };
        match &state.session {
            Some(session) => log::info!(
                "session restored for {} ({:?})",
                session.username,
                session.role
            ),
            None => log::info!("no stored session"),
        }
        state
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    /// Company id every list query must be narrowed to.
    pub fn company_scope(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(|s| s.company_scope())
            .map(str::to_string)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(AuthState::restore()));
    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().unwrap_or_else(|| {
        log::warn!("AuthProvider not found in component tree, reading storage directly");
        RwSignal::new(AuthState::restore())
    })
}

/// Forget the stored token and identity
pub fn sign_out(auth: RwSignal<AuthState>) {
    log::info!("signing out");
    storage::clear_session();
    auth.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn hr_session() -> Session {
        Session {
            user_id: "u-7".into(),
            username: "hrd.sinar".into(),
            role: Role::Company,
            company_id: Some("c-3".into()),
        }
    }

    #[test]
    fn test_company_scope_comes_from_session() {
        let state = AuthState {
            access_token: Some("t".into()),
            session: Some(hr_session()),
        };
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
        assert_eq!(state.company_scope(), Some("c-3".to_string()));
    }

    #[test]
    fn test_token_without_session_is_not_authenticated() {
        let state = AuthState {
            access_token: Some("t".into()),
            session: None,
        };
        assert!(!state.is_authenticated());
        assert_eq!(state.company_scope(), None);
    }
}
