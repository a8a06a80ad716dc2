use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::use_site_config;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Starts watching `target`; `on_visible` fires once, the first time it intersects.
fn observe_once(
    target: &Element,
    root_margin: &str,
    threshold: f64,
    on_visible: impl Fn() + 'static,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible();
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);
    Ok((observer, callback))
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that holds its source in `data-src` until it nears the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let loaded = use_state_eq(|| false);

    {
        let node = node.clone();
        let loaded = loaded.setter();
        let root_margin = config.lazy_root_margin;
        let threshold = config.lazy_threshold;
        use_effect_with_deps(
            move |_| {
                let watching = node.cast::<Element>().and_then(|img| {
                    let mark_loaded = loaded.clone();
                    match observe_once(&img, root_margin, threshold, move || mark_loaded.set(true)) {
                        Ok(watching) => Some(watching),
                        Err(e) => {
                            // No IntersectionObserver here, load straight away.
                            debug!("Lazy loading unavailable: {:?}", e);
                            loaded.set(true);
                            None
                        }
                    }
                });
                move || {
                    if let Some((observer, _callback)) = watching {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let src = (*loaded).then(|| props.src.clone());
    let data_src = (!*loaded).then(|| props.src.clone());

    html! {
        <img
            ref={node}
            src={src}
            data-src={data_src}
            alt={props.alt.clone()}
            class={props.class.clone()}
        />
    }
}
