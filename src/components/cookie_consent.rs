use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;

use crate::config::use_site_config;
use crate::consent::{ConsentDecision, ConsentFlag, DocumentCookieJar};

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let config = use_site_config();
    let visible = use_state_eq(|| false);

    // Only visitors without a stored decision see the banner, and only after a short pause.
    {
        let visible = visible.setter();
        let cookie = config.consent_cookie;
        let delay = config.consent_prompt_delay_ms;
        use_effect_with_deps(
            move |_| {
                let flag = ConsentFlag::new(DocumentCookieJar, cookie);
                let timeout = flag
                    .prompt_after(delay)
                    .map(|delay| Timeout::new(delay, move || visible.set(true)));
                move || drop(timeout)
            },
            (),
        );
    }

    let decide = |decision: ConsentDecision| {
        let visible = visible.clone();
        let cookie = config.consent_cookie;
        let ttl_days = config.consent_ttl_days;
        Callback::from(move |_: MouseEvent| {
            let flag = ConsentFlag::new(DocumentCookieJar, cookie);
            match flag.write(decision, ttl_days) {
                Ok(()) => info!("Cookie consent {}", decision.as_str()),
                Err(e) => warn!("Could not store cookie consent: {}", e),
            }
            visible.set(false);
        })
    };

    html! {
        <div
            id="cookie-consent"
            class={classes!("cookie-consent", (*visible).then_some("show"))}
            role="dialog"
            aria-live="polite"
        >
            <p class="cookie-text">
                {"Vi bruker informasjonskapsler for å gi deg en bedre opplevelse på nettsiden vår."}
            </p>
            <div class="cookie-buttons">
                <button id="decline-cookies" class="btn btn-outline" onclick={decide(ConsentDecision::Declined)}>
                    {"Avslå"}
                </button>
                <button id="accept-cookies" class="btn btn-primary" onclick={decide(ConsentDecision::Accepted)}>
                    {"Godta"}
                </button>
            </div>
        </div>
    }
}
