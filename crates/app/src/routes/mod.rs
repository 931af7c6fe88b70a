pub mod doctor;
pub mod home;
pub mod login;
pub mod not_found;
pub mod receptionist;
pub mod super_admin;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogOut, LdVideo};
use dioxus_free_icons::Icon;
use shared_types::ClinicRole;
use shared_ui::{class_names, Badge, BadgeVariant, Button, ButtonVariant};

use doctor::DoctorVideoConsultations;
use home::Home;
use login::Login;
use not_found::NotFound;
use receptionist::{ReceptionistDashboard, ReceptionistVideoConsultations};
use super_admin::{SuperAdminDashboard, SuperAdminVideoConsultations};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/receptionist/dashboard")]
    ReceptionistDashboard {},
    #[route("/receptionist/video-consultations")]
    ReceptionistVideoConsultations {},
    #[route("/doctor/video-consultations")]
    DoctorVideoConsultations {},
    #[route("/super-admin/dashboard")]
    SuperAdminDashboard {},
    #[route("/super-admin/video-consultations")]
    SuperAdminVideoConsultations {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Landing page for a role after sign-in.
pub fn home_for(role: ClinicRole) -> Route {
    match role {
        ClinicRole::Receptionist => Route::ReceptionistDashboard {},
        ClinicRole::Doctor => Route::DoctorVideoConsultations {},
        ClinicRole::SuperAdmin => Route::SuperAdminDashboard {},
    }
}

/// What a navbar link points at; drives the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    Dashboard,
    Consultations,
}

/// Navbar links shown to a role.
pub fn nav_links(role: ClinicRole) -> Vec<(Route, &'static str, NavKind)> {
    match role {
        ClinicRole::Receptionist => vec![
            (Route::ReceptionistDashboard {}, "Dashboard", NavKind::Dashboard),
            (
                Route::ReceptionistVideoConsultations {},
                "Video Consultations",
                NavKind::Consultations,
            ),
        ],
        ClinicRole::Doctor => vec![(
            Route::DoctorVideoConsultations {},
            "Video Consultations",
            NavKind::Consultations,
        )],
        ClinicRole::SuperAdmin => vec![
            (Route::SuperAdminDashboard {}, "Dashboard", NavKind::Dashboard),
            (
                Route::SuperAdminVideoConsultations {},
                "Video Consultations",
                NavKind::Consultations,
            ),
        ],
    }
}

fn nav_class(current: &Route, target: &Route) -> String {
    class_names(&["app-nav-link", if current == target { "active" } else { "" }])
}

/// Redirects to /login when nobody is signed in.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    if auth.is_authenticated() {
        return rsx! { Outlet::<Route> {} };
    }

    navigator().push(Route::Login {});
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting to login..." }
        }
    }
}

/// Top navbar with per-role links, the signed-in user and sign-out.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let Some(user) = auth.current_user.read().clone() else {
        return rsx! {};
    };
    let links = nav_links(user.role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "app-navbar",
            span { class: "app-brand", "Clinic Console" }
            nav { class: "app-nav",
                for (target, label, kind) in links {
                    Link {
                        key: "{label}",
                        to: target.clone(),
                        class: nav_class(&route, &target),
                        match kind {
                            NavKind::Dashboard => rsx! {
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                            },
                            NavKind::Consultations => rsx! {
                                Icon::<LdVideo> { icon: LdVideo, width: 16, height: 16 }
                            },
                        }
                        "{label}"
                    }
                }
            }
            div { class: "app-user",
                span { class: "app-user-name", "{user.display_name}" }
                Badge { variant: BadgeVariant::Secondary, "{user.role.label()}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        auth.sign_out();
                        navigator().push(Route::Login {});
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Sign out"
                }
            }
        }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
