use log::Level;
use yew::prelude::*;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Values every page reaction reads. Provided once at the root of the tree
/// instead of each component reaching for its own constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub site_name: &'static str,
    pub consent_cookie: &'static str,
    pub consent_ttl_days: i64,
    /// Milliseconds before the consent banner first slides in.
    pub consent_prompt_delay_ms: u32,
    /// Scroll offset in px after which the header switches to its compact look.
    pub header_scroll_threshold: f64,
    /// Distance in px above the viewport bottom an element must reach before it reveals.
    pub reveal_offset: f64,
    pub phone_max_digits: usize,
    pub lazy_root_margin: &'static str,
    pub lazy_threshold: f64,
    pub contact_phone: &'static str,
    pub contact_email: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Flipp VVS",
            consent_cookie: "cookieConsent",
            consent_ttl_days: 365,
            consent_prompt_delay_ms: 1000,
            header_scroll_threshold: 50.0,
            reveal_offset: 150.0,
            phone_max_digits: 8,
            lazy_root_margin: "50px 0px",
            lazy_threshold: 0.01,
            contact_phone: "+4712345678",
            contact_email: "post@flippvvs.no",
        }
    }
}

impl SiteConfig {
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.contact_phone)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

/// Reads the config from the nearest provider, falling back to the defaults
/// when a component is rendered outside the app root.
#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
