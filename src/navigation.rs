use std::rc::Rc;
use yew::Reducible;

/// Whether the header should switch to its scrolled style.
pub fn header_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Element id an in-page anchor points at. The bare `#` and anything that is
/// not a fragment yields `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target lands just under the fixed header.
pub fn scroll_target(target_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    target_top + page_y_offset - header_height
}

/// Router path, or the site root when the router has no location yet.
pub fn path_or_root(path: Option<&str>) -> &str {
    path.filter(|p| !p.is_empty()).unwrap_or("/")
}

/// Active-link rule for nav entries: the current path contains the link's
/// target, or we are at the root and the link points at the index page.
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    let at_root = current_path == "/" || current_path.ends_with("/index.html");
    if href == "/" || href == "index.html" || href == "/index.html" {
        return at_root;
    }
    current_path.contains(href)
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Escape only matters while the menu is showing.
    pub fn on_key(self, key: &str) -> Self {
        if key == "Escape" && self.open {
            self.closed()
        } else {
            self
        }
    }

    /// `overflow` value for `<body>` so the page behind the menu can't scroll.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

pub enum MenuAction {
    Toggle,
    Close,
    Key(String),
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggled(),
            MenuAction::Close => self.closed(),
            MenuAction::Key(key) => self.on_key(&key),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_is_scrolled(0.0, 50.0));
        assert!(!header_is_scrolled(50.0, 50.0));
        assert!(header_is_scrolled(50.5, 50.0));
    }

    #[test]
    fn fragment_targets() {
        assert_eq!(fragment_target("#tjenester"), Some("tjenester"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/kontakt"), None);
        assert_eq!(fragment_target("tel:+4712345678"), None);
    }

    #[test]
    fn scroll_lands_below_header() {
        assert_eq!(scroll_target(400.0, 1200.0, 80.0), 1520.0);
        assert_eq!(scroll_target(-300.0, 1200.0, 80.0), 820.0);
    }

    #[test]
    fn active_links() {
        assert!(is_active_link("/prosjekter", "/prosjekter"));
        assert!(is_active_link("/prosjekter/bad", "/prosjekter"));
        assert!(!is_active_link("/kontakt", "/prosjekter"));
        assert!(is_active_link("/", "/"));
        assert!(is_active_link("/", "index.html"));
        assert!(!is_active_link("/kontakt", "/"));
        assert!(!is_active_link("/", "#tjenester"));
    }

    #[test]
    fn missing_location_counts_as_root() {
        assert_eq!(path_or_root(None), "/");
        assert_eq!(path_or_root(Some("")), "/");
        assert_eq!(path_or_root(Some("/kontakt")), "/kontakt");
        assert!(is_active_link(path_or_root(None), "/"));
    }

    #[test]
    fn menu_toggles_and_escapes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");

        let menu = menu.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.body_overflow(), "hidden");

        assert!(menu.on_key("Enter").is_open());
        let menu = menu.on_key("Escape");
        assert!(!menu.is_open());
        assert_eq!(menu.on_key("Escape"), menu);
    }

    #[test]
    fn reducer_follows_actions() {
        let menu = Rc::new(MenuState::default());
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.is_open());
        let menu = menu.reduce(MenuAction::Key("Escape".into()));
        assert!(!menu.is_open());
        let menu = menu.reduce(MenuAction::Toggle).reduce(MenuAction::Close);
        assert!(!menu.is_open());
    }
}
