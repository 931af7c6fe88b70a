use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::auth::use_role;
use crate::routes::{home_for, Route};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let back = use_role().map(home_for).unwrap_or(Route::Login {});

    rsx! {
        document::Title { "Not found · Clinic Console" }
        div { class: "not-found-page",
            Card {
                CardHeader {
                    CardTitle { "404" }
                    CardDescription { "Nothing lives at " code { "{path}" } "." }
                }
                CardContent {
                    Link { to: back, class: "not-found-link", "Back to Clinic Console" }
                }
            }
        }
    }
}
