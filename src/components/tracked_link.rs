use yew::prelude::*;

use crate::tracking::track_click;

#[derive(Properties, PartialEq)]
pub struct TrackedLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TrackedLink)]
pub fn tracked_link(props: &TrackedLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |_: MouseEvent| track_click(&href))
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
