use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentDecision {
    Accepted,
    Declined,
}

impl ConsentDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentDecision::Accepted => "accepted",
            ConsentDecision::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ConsentDecision::Accepted),
            "declined" => Some(ConsentDecision::Declined),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("no document to store cookies on")]
    NoDocument,
    #[error("browser refused the cookie: {0}")]
    Rejected(String),
}

/// Anything that behaves like `document.cookie`: reading yields every visible
/// pair joined by `; `, writing takes one serialized cookie.
pub trait CookieJar {
    fn cookies(&self) -> String;
    fn store(&self, cookie: &str) -> Result<(), CookieError>;
}

/// The browser's own cookie store.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentCookieJar;

impl DocumentCookieJar {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CookieJar for DocumentCookieJar {
    fn cookies(&self) -> String {
        Self::document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn store(&self, cookie: &str) -> Result<(), CookieError> {
        let doc = Self::document().ok_or(CookieError::NoDocument)?;
        doc.set_cookie(cookie)
            .map_err(|e| CookieError::Rejected(format!("{:?}", e)))
    }
}

/// Looks up `name` in a `document.cookie` style string.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let pair = pair.trim_start_matches(' ');
        pair.strip_prefix(name)?.strip_prefix('=')
    })
}

/// Serializes a consent cookie expiring `ttl_days` after `now`.
pub fn consent_cookie(name: &str, decision: ConsentDecision, now: DateTime<Utc>, ttl_days: i64) -> String {
    let expires = now + Duration::days(ttl_days);
    format!(
        "{}={};expires={};path=/;SameSite=Lax",
        name,
        decision.as_str(),
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

/// The visitor's recorded cookie decision.
pub struct ConsentFlag<J> {
    jar: J,
    name: String,
}

impl<J: CookieJar> ConsentFlag<J> {
    pub fn new(jar: J, name: impl Into<String>) -> Self {
        Self { jar, name: name.into() }
    }

    /// `None` when no decision is stored. Empty or unknown values count as no decision.
    pub fn read(&self) -> Option<ConsentDecision> {
        let cookies = self.jar.cookies();
        find_cookie(&cookies, &self.name).and_then(ConsentDecision::parse)
    }

    pub fn write(&self, decision: ConsentDecision, ttl_days: i64) -> Result<(), CookieError> {
        let cookie = consent_cookie(&self.name, decision, Utc::now(), ttl_days);
        self.jar.store(&cookie)
    }

    pub fn should_prompt(&self) -> bool {
        self.read().is_none()
    }

    /// How long to wait before prompting, or `None` when the visitor already decided.
    pub fn prompt_after(&self, delay_ms: u32) -> Option<u32> {
        self.should_prompt().then_some(delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Keeps name=value pairs the way a browser would, dropping attributes.
    #[derive(Default)]
    struct MemoryJar {
        pairs: RefCell<Vec<(String, String)>>,
        disabled: bool,
    }

    impl MemoryJar {
        fn with(raw: &str) -> Self {
            let jar = MemoryJar::default();
            for pair in raw.split("; ").filter(|p| !p.is_empty()) {
                let (k, v) = pair.split_once('=').unwrap();
                jar.pairs.borrow_mut().push((k.to_string(), v.to_string()));
            }
            jar
        }
    }

    impl CookieJar for MemoryJar {
        fn cookies(&self) -> String {
            self.pairs
                .borrow()
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ")
        }

        fn store(&self, cookie: &str) -> Result<(), CookieError> {
            if self.disabled {
                return Err(CookieError::Rejected("cookies disabled".into()));
            }
            let pair = cookie.split(';').next().unwrap();
            let (k, v) = pair.split_once('=').unwrap();
            let mut pairs = self.pairs.borrow_mut();
            pairs.retain(|(name, _)| name != k);
            pairs.push((k.to_string(), v.to_string()));
            Ok(())
        }
    }

    #[test]
    fn finds_cookie_among_others() {
        let cookies = "theme=dark; cookieConsent=accepted; lang=nb";
        assert_eq!(find_cookie(cookies, "cookieConsent"), Some("accepted"));
        assert_eq!(find_cookie(cookies, "lang"), Some("nb"));
        assert_eq!(find_cookie(cookies, "missing"), None);
    }

    #[test]
    fn prefix_names_do_not_match() {
        assert_eq!(find_cookie("cookieConsentOld=accepted", "cookieConsent"), None);
    }

    #[test]
    fn absent_flag_prompts_after_delay() {
        let flag = ConsentFlag::new(MemoryJar::with("theme=dark"), "cookieConsent");
        assert_eq!(flag.read(), None);
        assert!(flag.should_prompt());
        assert_eq!(flag.prompt_after(1000), Some(1000));
    }

    #[test]
    fn stored_decision_suppresses_prompt() {
        for stored in ["cookieConsent=accepted", "cookieConsent=declined"] {
            let flag = ConsentFlag::new(MemoryJar::with(stored), "cookieConsent");
            assert!(!flag.should_prompt());
            assert_eq!(flag.prompt_after(1000), None);
        }
    }

    #[test]
    fn unknown_value_reads_as_absent() {
        let flag = ConsentFlag::new(MemoryJar::with("cookieConsent=maybe"), "cookieConsent");
        assert_eq!(flag.read(), None);
        let flag = ConsentFlag::new(MemoryJar::with("cookieConsent="), "cookieConsent");
        assert!(flag.should_prompt());
    }

    #[test]
    fn write_then_read_round_trips_decision() {
        let flag = ConsentFlag::new(MemoryJar::default(), "cookieConsent");
        flag.write(ConsentDecision::Declined, 365).unwrap();
        assert_eq!(flag.read(), Some(ConsentDecision::Declined));
        flag.write(ConsentDecision::Accepted, 365).unwrap();
        assert_eq!(flag.read(), Some(ConsentDecision::Accepted));
    }

    #[test]
    fn failed_write_leaves_prompt_in_place() {
        let jar = MemoryJar {
            disabled: true,
            ..MemoryJar::default()
        };
        let flag = ConsentFlag::new(jar, "cookieConsent");
        assert!(flag.write(ConsentDecision::Accepted, 365).is_err());
        assert!(flag.should_prompt());
    }

    #[test]
    fn cookie_carries_expiry_path_and_same_site() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let cookie = consent_cookie("cookieConsent", ConsentDecision::Accepted, now, 365);
        assert_eq!(
            cookie,
            "cookieConsent=accepted;expires=Sat, 01 Mar 2025 12:30:00 GMT;path=/;SameSite=Lax"
        );
    }
}
