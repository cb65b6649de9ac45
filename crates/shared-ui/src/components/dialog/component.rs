use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal overlay. Open state and dismissal come from `prim::DialogRootProps`
/// (`open`, `on_open_change`).
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

/// Row of dialog actions, right-aligned.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "dialog-footer", {children} }
    }
}
