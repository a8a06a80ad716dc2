use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod consent;
mod contact;
mod filter;
mod hooks;
mod navigation;
mod phone;
mod reveal;
mod tracking;
mod components {
    pub mod anchor;
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod footer;
    pub mod header;
    pub mod lazy_image;
    pub mod project_gallery;
    pub mod reveal;
    pub mod tracked_link;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod projects;
}

use components::{cookie_consent::CookieConsent, footer::Footer, header::Header};
use config::SiteConfig;
use pages::{contact::Contact, home::Home, projects::Projects};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/prosjekter")]
    Projects,
    #[at("/kontakt")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="section not-found">
                    <div class="container">
                        <h1>{"Siden finnes ikke"}</h1>
                        <Link<Route> to={Route::Home} classes="btn btn-primary">{"Til forsiden"}</Link<Route>>
                    </div>
                </section>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::default(), ());

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Header />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <CookieConsent />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("Failed to initialize logging:", e.to_string());
    }

    yew::Renderer::<App>::new().render();
    info!("{} website initialized", SiteConfig::default().site_name);
}
