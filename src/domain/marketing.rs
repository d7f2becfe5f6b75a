use serde::Deserialize;

/// Marketing medium a request arrived through, taken from `utm_medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarketingMedium {
    #[default]
    None,
    Social,
    Email,
    Organic,
    Other,
}

/// Query parameters the tagging step cares about.
#[derive(Debug, Default, Deserialize)]
pub struct MediumQuery {
    pub utm_medium: Option<String>,
}

impl MarketingMedium {
    /// Classify a raw `utm_medium` value. Matching is exact and case-sensitive.
    pub fn classify(raw: &str) -> Self {
        // ---
        match raw {
            "" => MarketingMedium::None,
            "social" => MarketingMedium::Social,
            "email" => MarketingMedium::Email,
            "organic" => MarketingMedium::Organic,
            _ => MarketingMedium::Other,
        }
    }

    /// Classify from parsed query parameters; an absent parameter counts as empty.
    pub fn from_query(query: &MediumQuery) -> Self {
        Self::classify(query.utm_medium.as_deref().unwrap_or_default())
    }

    /// Tag value attached to HTTP metrics.
    pub fn as_str(self) -> &'static str {
        // ---
        match self {
            MarketingMedium::None => "none",
            MarketingMedium::Social => "social",
            MarketingMedium::Email => "email",
            MarketingMedium::Organic => "organic",
            MarketingMedium::Other => "other",
        }
    }
}

impl std::fmt::Display for MarketingMedium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
