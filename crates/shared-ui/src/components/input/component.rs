use dioxus::prelude::*;

/// Labelled text input.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

/// File picker. The host widget owns the selection; `on_change` receives
/// the event carrying the picked files.
#[component]
pub fn FileInput(
    #[props(default)] on_change: EventHandler<FormEvent>,
    #[props(default)] label: String,
    #[props(default = false)] multiple: bool,
    #[props(default)] accept: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                class: "input file-input",
                r#type: "file",
                multiple: multiple,
                accept: accept,
                disabled: disabled,
                onchange: move |evt| on_change.call(evt),
            }
        }
    }
}
