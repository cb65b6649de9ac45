use dioxus::prelude::*;

/// Page header: an `h1` title with action buttons to its right.
#[component]
pub fn PageHeader(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            h1 { class: "page-title", "{title}" }
            div { class: "page-actions", {children} }
        }
    }
}
