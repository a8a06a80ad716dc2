use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::components::tracked_link::TrackedLink;
use crate::config::use_site_config;
use crate::hooks::use_window_scroll_effect;
use crate::navigation::{header_is_scrolled, is_active_link, path_or_root, MenuAction, MenuState};
use crate::Route;

pub const HEADER_ID: &str = "header";

const NAV_ENTRIES: [(&str, Route); 3] = [
    ("Hjem", Route::Home),
    ("Prosjekter", Route::Projects),
    ("Kontakt", Route::Contact),
];

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_site_config();
    let menu = use_reducer_eq(MenuState::default);
    let is_scrolled = use_state_eq(|| false);
    let location = use_location();
    let current_path = path_or_root(location.as_ref().map(|l| l.path())).to_string();

    {
        let is_scrolled = is_scrolled.setter();
        let threshold = config.header_scroll_threshold;
        use_window_scroll_effect(move || {
            if let Some(window) = web_sys::window() {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                is_scrolled.set(header_is_scrolled(scroll_y, threshold));
            }
        });
    }

    {
        let menu = menu.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            menu.dispatch(MenuAction::Key(e.key()));
        });
    }

    // Lock the page behind the open menu.
    use_effect_with_deps(
        move |menu: &MenuState| {
            debug!("Mobile menu open: {}", menu.is_open());
            set_body_overflow(menu.body_overflow());
            || ()
        },
        *menu,
    );

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    let open = menu.is_open();
    // Mobile links close the menu, so each gets its own click wrapper.
    let nav_links = |link_class: &'static str, on_click: Option<Callback<MouseEvent>>| {
        NAV_ENTRIES
            .iter()
            .map(|(label, route)| {
                let active = is_active_link(&current_path, &route.to_path());
                let link = html! {
                    <Link<Route> to={route.clone()} classes={classes!(link_class, active.then_some("active"))}>
                        {*label}
                    </Link<Route>>
                };
                match &on_click {
                    Some(onclick) => html! { <div onclick={onclick.clone()}>{link}</div> },
                    None => link,
                }
            })
            .collect::<Html>()
    };

    html! {
        <>
            <header id={HEADER_ID} class={classes!("header", (*is_scrolled).then_some("scrolled"))}>
                <div class="container header-inner">
                    <Link<Route> to={Route::Home} classes="logo">
                        {config.site_name}
                    </Link<Route>>
                    <nav class="nav">
                        { nav_links("nav-link", None) }
                    </nav>
                    <TrackedLink href={config.phone_href()} class="header-phone">
                        {"Ring oss"}
                    </TrackedLink>
                    <button
                        id="nav-toggle"
                        class={classes!("nav-toggle", open.then_some("active"))}
                        aria-label="Meny"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <nav id="mobile-nav" class={classes!("mobile-nav", open.then_some("active"))}>
                { nav_links("mobile-nav-link", Some(close_menu)) }
            </nav>
        </>
    }
}
