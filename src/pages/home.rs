use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::lazy_image::LazyImage;
use crate::components::reveal::Reveal;
use crate::components::tracked_link::TrackedLink;
use crate::config::use_site_config;
use crate::Route;

const SERVICES: [(&str, &str); 4] = [
    ("Baderom", "Totalrenovering og nye bad, fra rør i vegg til ferdig montert."),
    ("Kjøkken", "Tilkobling av vask, oppvaskmaskin og vannfilter."),
    ("Varme", "Vannbåren varme, varmtvannsberedere og varmepumper."),
    ("Reparasjon", "Lekkasjer, tette avløp og akutte utrykninger."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_site_config();

    html! {
        <>
            <section class="hero">
                <div class="container hero-content">
                    <h1>{"Din lokale rørlegger"}</h1>
                    <p class="hero-lead">
                        {"Vi tar oppdrag innen bad, kjøkken og varme. Fast pris og ryddig arbeid."}
                    </p>
                    <div class="hero-actions">
                        <AnchorLink href="#tjenester" class="btn btn-primary">{"Våre tjenester"}</AnchorLink>
                        <TrackedLink href={config.phone_href()} class="btn btn-outline">
                            {"Ring "}{config.contact_phone}
                        </TrackedLink>
                    </div>
                </div>
            </section>

            <section id="tjenester" class="section services">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Tjenester"}</h2>
                    </Reveal>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(title, text)| html! {
                            <Reveal class="service-card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="om-oss" class="section about">
                <div class="container about-grid">
                    <Reveal class="about-image">
                        <LazyImage src="/assets/images/team.jpg" alt="Rørleggerne i arbeid" />
                    </Reveal>
                    <Reveal class="about-text">
                        <h2>{"Om oss"}</h2>
                        <p>{"Et lite team med fagbrev og sentral godkjenning. Vi svarer på telefonen og møter når vi har sagt."}</p>
                        <AnchorLink href="#tjenester" class="text-link">{"Se hva vi gjør"}</AnchorLink>
                    </Reveal>
                </div>
            </section>

            <section class="section cta">
                <Reveal class="container cta-inner">
                    <h2>{"Trenger du en rørlegger?"}</h2>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Be om befaring"}</Link<Route>>
                    <TrackedLink href={config.email_href()} class="btn btn-outline">{config.contact_email}</TrackedLink>
                </Reveal>
            </section>
        </>
    }
}
