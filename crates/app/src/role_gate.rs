use crate::auth::use_role;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_types::ClinicRole;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Whether a (possibly signed-out) user may see content requiring `required`.
pub fn can_access(role: Option<ClinicRole>, required: &ClinicRole) -> bool {
    role.map(|r| r.satisfies(required)).unwrap_or(false)
}

/// Conditionally render children based on the signed-in user's role.
///
/// Shows an access-denied card when the role is insufficient, or nothing at
/// all when `suppress_warning` is set.
#[component]
pub fn RoleGate(
    required: ClinicRole,
    #[props(default = false)] suppress_warning: bool,
    children: Element,
) -> Element {
    let role = use_role();

    if can_access(role, &required) {
        return rsx! { {children} };
    }

    if suppress_warning {
        return rsx! {};
    }

    tracing::warn!(
        required = required.as_str(),
        actual = role.map(|r| r.as_str()).unwrap_or("none"),
        "role gate denied access"
    );
    rsx! { AccessDenied { required } }
}

#[component]
fn AccessDenied(required: ClinicRole) -> Element {
    rsx! {
        Card { class: "access-denied",
            CardHeader {
                div { class: "access-denied-icon", Icon::<LdLock> { icon: LdLock, width: 24, height: 24 } }
                CardTitle { "Access restricted" }
                CardDescription { "This page requires the {required.label()} role." }
            }
            CardContent {
                p { "Sign in with an account that holds this role to continue." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::WithSession;

    fn gate(role: Option<ClinicRole>, required: ClinicRole, suppress_warning: bool) -> String {
        dioxus_ssr::render_element(rsx! {
            WithSession { role,
                RoleGate { required, suppress_warning,
                    p { class: "gated", "Clinic health" }
                }
            }
        })
    }

    #[test]
    fn signed_out_users_never_pass() {
        assert!(!can_access(None, &ClinicRole::Receptionist));
        assert!(!can_access(None, &ClinicRole::SuperAdmin));
    }

    #[test]
    fn roles_pass_their_own_gate() {
        assert!(can_access(Some(ClinicRole::Receptionist), &ClinicRole::Receptionist));
        assert!(can_access(Some(ClinicRole::Doctor), &ClinicRole::Doctor));
    }

    #[test]
    fn super_admin_passes_every_gate() {
        assert!(can_access(Some(ClinicRole::SuperAdmin), &ClinicRole::Receptionist));
        assert!(can_access(Some(ClinicRole::SuperAdmin), &ClinicRole::Doctor));
    }

    #[test]
    fn staff_cannot_reach_admin_pages() {
        assert!(!can_access(Some(ClinicRole::Receptionist), &ClinicRole::SuperAdmin));
        assert!(!can_access(Some(ClinicRole::Doctor), &ClinicRole::SuperAdmin));
    }

    #[test]
    fn access_denied_names_the_role() {
        let html = dioxus_ssr::render_element(rsx! {
            AccessDenied { required: ClinicRole::SuperAdmin }
        });
        assert!(html.contains("requires the Super Admin role"));
    }

    #[test]
    fn sufficient_role_sees_children() {
        let html = gate(Some(ClinicRole::SuperAdmin), ClinicRole::Receptionist, false);
        assert!(html.contains(r#"<p class="gated">Clinic health</p>"#));
        assert!(!html.contains("access-denied"));
    }

    #[test]
    fn insufficient_role_sees_access_denied() {
        let html = gate(Some(ClinicRole::Doctor), ClinicRole::SuperAdmin, false);
        assert!(html.contains("access-denied"));
        assert!(html.contains("Access restricted"));
        assert!(!html.contains("Clinic health"));

        let html = gate(None, ClinicRole::Receptionist, false);
        assert!(html.contains("Access restricted"));
    }

    #[test]
    fn suppressed_gate_renders_nothing() {
        let html = gate(Some(ClinicRole::Receptionist), ClinicRole::SuperAdmin, true);
        assert!(!html.contains("access-denied"));
        assert!(!html.contains("Clinic health"));
    }
}
