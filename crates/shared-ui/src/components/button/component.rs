use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Themed button. Icons go in `children` ahead of the label.
///
/// Also sets `aria-disabled`, and swallows clicks while disabled.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
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
    let disabled = props.disabled;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: disabled,
            aria_disabled: "{disabled}",
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
