use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::header::HEADER_ID;
use crate::navigation::{fragment_target, scroll_target};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that glides to its target instead of jumping, stopping just
/// below the fixed header. Falls back to the browser's own navigation when the
/// target isn't on the page.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(id) = fragment_target(&href) else { return };
            let Some(window) = web_sys::window() else { return };
            let Some(document) = window.document() else { return };
            let Some(target) = document.get_element_by_id(id) else { return };

            e.prevent_default();
            let header_height = document
                .get_element_by_id(HEADER_ID)
                .and_then(|header| header.dyn_into::<HtmlElement>().ok())
                .map(|header| header.offset_height() as f64)
                .unwrap_or(0.0);
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
                header_height,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
