use dioxus::prelude::*;

/// Card container.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Header row of a Card: title on the left, actions on the right.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "card-title", {children} }
    }
}

/// Action area within a CardHeader, typically an icon button.
#[component]
pub fn CardAction(children: Element) -> Element {
    rsx! {
        div { class: "card-action", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
