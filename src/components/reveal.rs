use web_sys::Element;
use yew::prelude::*;

use crate::config::use_site_config;
use crate::hooks::use_window_scroll_effect;
use crate::reveal::RevealLatch;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that fades its content in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let latch = use_mut_ref(RevealLatch::default);
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.setter();
        let offset = config.reveal_offset;
        use_window_scroll_effect(move || {
            if latch.borrow().is_revealed() {
                return;
            }
            let (Some(window), Some(element)) = (web_sys::window(), node.cast::<Element>()) else {
                return;
            };
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let top = element.get_bounding_client_rect().top();
            if latch.borrow_mut().observe(top, viewport_height, offset) {
                revealed.set(true);
            }
        });
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), (*revealed).then_some("active"))}>
            { for props.children.iter() }
        </div>
    }
}
