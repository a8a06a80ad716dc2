use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Runs `on_scroll` once on mount and again on every window scroll until the
/// component unmounts.
#[hook]
pub fn use_window_scroll_effect<F>(on_scroll: F)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |_| {
            on_scroll();

            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let callback = Closure::<dyn Fn()>::new(on_scroll);
                let _ = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            destructor
        },
        (),
    );
}
