use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// A themed button component.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Rendered as `data-action`, naming what the button does for styling
    /// hooks and tests.
    #[props(default)]
    pub action: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: props.disabled,
            "data-action": props.action.clone(),
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

/// A link styled as a button. Disabled links render without `href`;
/// `new_tab` opens the target without handing it `window.opener`.
#[component]
pub fn LinkButton(
    #[props(default)] variant: ButtonVariant,
    #[props(into)] href: String,
    #[props(default)] action: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] new_tab: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if disabled {
            a {
                class: "button",
                "data-style": variant.class(),
                "aria-disabled": "true",
                "data-action": action,
                {children}
            }
        } else {
            a {
                class: "button",
                "data-style": variant.class(),
                "data-action": action,
                href,
                target: new_tab.then_some("_blank"),
                rel: new_tab.then_some("noopener noreferrer"),
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_variant_and_action() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Destructive, action: "end", "End" }
        });
        assert!(html.contains(r#"data-style="destructive""#));
        assert!(html.contains(r#"data-action="end""#));
        assert!(html.contains(">End</button>"));
    }

    #[test]
    fn omits_action_when_unset() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { "Retry" }
        });
        assert!(!html.contains("data-action"));
        assert!(html.contains(r#"data-style="primary""#));
    }

    #[test]
    fn disabled_flag_is_rendered() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { disabled: true, "Join" }
        });
        assert!(html.contains("disabled"));
    }

    #[test]
    fn link_button_opens_in_new_tab() {
        let html = dioxus_ssr::render_element(rsx! {
            LinkButton { href: "https://meet.example.com/room", action: "join", new_tab: true, "Join" }
        });
        assert!(html.contains(r#"href="https://meet.example.com/room""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"data-action="join""#));
        assert!(!html.contains("aria-disabled"));
    }

    #[test]
    fn disabled_link_button_has_no_href() {
        let html = dioxus_ssr::render_element(rsx! {
            LinkButton { href: "/api/consultations/x/summary", disabled: true, "Download" }
        });
        assert!(!html.contains("href="));
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(html.contains(">Download</a>"));
    }

    #[test]
    fn same_tab_link_has_no_target() {
        let html = dioxus_ssr::render_element(rsx! {
            LinkButton { href: "/summary", "Download" }
        });
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }
}
