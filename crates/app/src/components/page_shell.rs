use dioxus::prelude::*;
use shared_ui::{PageDescription, PageHeader, PageTitle};

/// Page header plus document title around a page's content.
#[component]
pub fn PageShell(
    title: String,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        document::Title { "{title} · Clinic Console" }
        div { class: "page-shell",
            PageHeader {
                PageTitle { "{title}" }
                if !description.is_empty() {
                    PageDescription { "{description}" }
                }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_children() {
        let html = dioxus_ssr::render_element(rsx! {
            PageShell { title: "Front Desk",
                p { "body" }
            }
        });
        assert!(html.contains(r#"<h1 class="page-title">Front Desk</h1>"#));
        assert!(html.contains("<p>body</p>"));
        assert!(!html.contains("page-description"));
    }

    #[test]
    fn description_is_optional() {
        let html = dioxus_ssr::render_element(rsx! {
            PageShell { title: "Front Desk", description: "Today at a glance", "x" }
        });
        assert!(html.contains(">Today at a glance</p>"));
    }
}
