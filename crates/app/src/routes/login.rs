use dioxus::prelude::*;
use shared_types::{ClinicRole, ALL_ROLES};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::auth::use_auth;
use crate::routes::{home_for, Route};

/// What a demo account can reach, shown under each sign-in button.
fn role_summary(role: ClinicRole) -> &'static str {
    match role {
        ClinicRole::Receptionist => "Front desk: browse your clinic's consultations.",
        ClinicRole::Doctor => "Join and end your video consultations.",
        ClinicRole::SuperAdmin => "Every clinic, statistics, summaries and system health.",
    }
}

/// Demo sign-in. Authentication proper is handled outside this app; each
/// button starts a session for one role.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();

    if let Some(role) = auth.role() {
        navigator().replace(home_for(role));
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }
        document::Title { "Sign in · Clinic Console" }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    CardTitle { "Clinic Console" }
                    CardDescription { "Choose a demo account to continue." }
                }
                CardContent {
                    div { class: "login-roles",
                        for role in ALL_ROLES.iter().copied() {
                            div { key: "{role.as_str()}", class: "login-role",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    action: "sign-in",
                                    onclick: move |_| {
                                        auth.sign_in(role);
                                        navigator().push(home_for(role));
                                    },
                                    "Sign in as {role.label()}"
                                }
                                p { class: "login-role-summary", {role_summary(role)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_summary() {
        for role in ALL_ROLES {
            assert!(!role_summary(*role).is_empty());
        }
    }
}
