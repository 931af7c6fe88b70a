use dioxus::prelude::*;
use shared_types::{AuthUser, ClinicRole};

/// The signed-in session, provided as context by `App`.
///
/// Authentication proper lives outside this app; a session only records who
/// is acting and in which role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::with_user(None)
    }

    pub fn with_user(user: Option<AuthUser>) -> Self {
        Self {
            current_user: Signal::new(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn role(&self) -> Option<ClinicRole> {
        self.current_user.read().as_ref().map(|u| u.role)
    }

    /// Start a demo session for `role`.
    pub fn sign_in(&mut self, role: ClinicRole) {
        let user = AuthUser::demo(role);
        tracing::info!(user = %user.id, role = role.as_str(), "signed in");
        self.current_user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.current_user.write().take() {
            tracing::info!(user = %user.id, "signed out");
        }
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, if any.
pub fn use_role() -> Option<ClinicRole> {
    use_auth().role()
}

/// Provides a demo session for `role` (or none) to its children.
#[cfg(test)]
#[component]
pub fn WithSession(#[props(!optional)] role: Option<ClinicRole>, children: Element) -> Element {
    use_context_provider(|| AuthState::with_user(role.map(AuthUser::demo)));
    rsx! { {children} }
}
