use dioxus::prelude::*;

/// A `(value, label)` pair for [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Labelled native select.
///
/// `placeholder`, when set, is rendered first with an empty value so "no
/// selection" stays reachable.
#[component]
pub fn FormSelect(
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    options: Vec<SelectOption>,
    #[props(default = false)] disabled: bool,
    #[props(default)] onchange: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-wrapper",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: "{value}",
                disabled: disabled,
                onchange: move |evt| onchange.call(evt.value()),
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
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
    fn placeholder_comes_first() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect {
                label: "Clinic",
                placeholder: "All clinics",
                options: vec![SelectOption::new("north", "Northside Family Clinic")],
            }
        });
        let placeholder = html.find("All clinics").unwrap();
        let clinic = html.find("Northside Family Clinic").unwrap();
        assert!(placeholder < clinic);
        assert!(html.contains(">Clinic</span>"));
    }

    #[test]
    fn no_placeholder_when_unset() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect { options: vec![SelectOption::new("a", "A")] }
        });
        assert_eq!(html.matches("<option").count(), 1);
    }
}
