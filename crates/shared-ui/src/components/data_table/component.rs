use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section — wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Body row. `index` picks the stripe so consecutive rows alternate.
#[component]
pub fn DataTableRow(index: usize, children: Element) -> Element {
    let stripe = if index % 2 == 0 { "even" } else { "odd" };
    rsx! {
        tr { class: "data-table-row {stripe}", {children} }
    }
}

#[component]
pub fn DataTableCell(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        td { ..attributes, {children} }
    }
}
