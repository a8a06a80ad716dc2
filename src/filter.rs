/// Which project cards are showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a button's `data-filter` value.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            other => CategoryFilter::Only(other.to_string()),
        }
    }

    pub fn as_attr(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }

    /// Whether the button carrying `data-filter="attr"` is the active one.
    pub fn is_selected(&self, attr: &str) -> bool {
        self.as_attr() == attr
    }

    pub fn shows(&self, card_category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => card_category == Some(wanted.as_str()),
        }
    }

    /// Inline `display` value for a card.
    pub fn display(&self, card_category: Option<&str>) -> &'static str {
        if self.shows(card_category) {
            "block"
        } else {
            "none"
        }
    }
}
