use log::info;

/// Contact links worth counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedClick {
    Phone,
    Email,
}

impl TrackedClick {
    pub fn classify(href: &str) -> Option<Self> {
        if href.starts_with("tel:") {
            Some(TrackedClick::Phone)
        } else if href.starts_with("mailto:") {
            Some(TrackedClick::Email)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackedClick::Phone => "Phone click",
            TrackedClick::Email => "Email click",
        }
    }
}

/// Line written to the console for a tracked click, if the link is tracked.
pub fn click_line(href: &str) -> Option<String> {
    TrackedClick::classify(href).map(|kind| format!("{}: {}", kind.label(), href))
}

// Console only for now. An analytics call would go here.
pub fn track_click(href: &str) {
    if let Some(line) = click_line(href) {
        info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_contact_links() {
        assert_eq!(TrackedClick::classify("tel:+4712345678"), Some(TrackedClick::Phone));
        assert_eq!(TrackedClick::classify("mailto:post@flippvvs.no"), Some(TrackedClick::Email));
        assert_eq!(TrackedClick::classify("/kontakt"), None);
        assert_eq!(TrackedClick::classify("#tel:"), None);
    }

    #[test]
    fn click_lines() {
        assert_eq!(click_line("tel:+4712345678").as_deref(), Some("Phone click: tel:+4712345678"));
        assert_eq!(click_line("mailto:a@b.no").as_deref(), Some("Email click: mailto:a@b.no"));
        assert_eq!(click_line("https://example.no"), None);
    }
}
