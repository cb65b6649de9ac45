use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page-based pagination bar: Previous, "Page X of Y", Next.
///
/// Previous is disabled on the first page and Next on the last; the bar
/// never hides the controls.
#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    #[props(default)] on_previous: EventHandler<MouseEvent>,
    #[props(default)] on_next: EventHandler<MouseEvent>,
) -> Element {
    let total_pages = total_pages.max(1);
    let at_first = current_page <= 1;
    let at_last = current_page >= total_pages;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination",
            Button {
                variant: ButtonVariant::Secondary,
                disabled: at_first,
                onclick: move |evt| on_previous.call(evt),
                "Previous"
            }
            span { class: "pagination-info", "Page {current_page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: at_last,
                onclick: move |evt| on_next.call(evt),
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn shows_page_position() {
        let html = render(|| rsx! { Pagination { current_page: 2, total_pages: 3 } });
        assert!(html.contains("Page 2 of 3"));
        assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 0);
    }

    #[test]
    fn single_page_disables_both_controls() {
        let html = render(|| rsx! { Pagination { current_page: 1, total_pages: 1 } });
        assert!(html.contains("Page 1 of 1"));
        assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 2);
    }

    #[test]
    fn first_page_disables_previous_only() {
        let html = render(|| rsx! { Pagination { current_page: 1, total_pages: 4 } });
        assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-disabled="false""#).count(), 1);
        let previous = html.find("Previous").unwrap();
        let disabled = html.find(r#"aria-disabled="true""#).unwrap();
        assert!(disabled < previous);
    }

    #[test]
    fn zero_pages_render_as_one() {
        let html = render(|| rsx! { Pagination { current_page: 1, total_pages: 0 } });
        assert!(html.contains("Page 1 of 1"));
    }
}
