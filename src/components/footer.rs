use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::tracked_link::TrackedLink;
use crate::config::use_site_config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();

    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="logo">{config.site_name}</Link<Route>>
                    <p>{"Rørlegger for bad, kjøkken og varme."}</p>
                </div>
                <div class="footer-contact">
                    <h4>{"Kontakt"}</h4>
                    <TrackedLink href={config.phone_href()}>{config.contact_phone}</TrackedLink>
                    <TrackedLink href={config.email_href()}>{config.contact_email}</TrackedLink>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Projects}>{"Prosjekter"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Kontakt oss"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}
