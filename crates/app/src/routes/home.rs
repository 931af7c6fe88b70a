use dioxus::prelude::*;

use crate::auth::use_role;
use crate::routes::{home_for, Route};

/// `/` sends signed-in users to their role's landing page.
#[component]
pub fn Home() -> Element {
    let target = use_role().map(home_for).unwrap_or(Route::Login {});
    navigator().replace(target);
    rsx! {}
}
