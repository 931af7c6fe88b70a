use dioxus::prelude::*;

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(#[props(default = "1rem".to_string())] height: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton", style: "height: {height};", "aria-hidden": "true" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_configurable() {
        let html = dioxus_ssr::render_element(rsx! { Skeleton { height: "2rem" } });
        assert!(html.contains("height: 2rem;"));
        let html = dioxus_ssr::render_element(rsx! { Skeleton {} });
        assert!(html.contains("height: 1rem;"));
    }
}
