use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::tracked_link::TrackedLink;
use crate::config::use_site_config;

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_site_config();

    html! {
        <section class="section contact-page">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h1>{"Kontakt oss"}</h1>
                    <p>{"Fortell kort hva du trenger hjelp til, så ringer vi deg tilbake."}</p>
                    <ul class="contact-list">
                        <li>
                            <span>{"Telefon"}</span>
                            <TrackedLink href={config.phone_href()}>{config.contact_phone}</TrackedLink>
                        </li>
                        <li>
                            <span>{"E-post"}</span>
                            <TrackedLink href={config.email_href()}>{config.contact_email}</TrackedLink>
                        </li>
                    </ul>
                </div>
                <div class="contact-form-wrapper">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
