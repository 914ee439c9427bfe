pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Base URL baked in at build time through `DECK_API_BASE`, falling back
    /// to [`DEFAULT_API_BASE`] when unset or empty.
    pub fn from_env() -> Self {
        Self::new(resolve_base(option_env!("DECK_API_BASE")))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn resolve_base(configured: Option<&str>) -> &str {
    match configured {
        Some(base) if !base.trim().is_empty() => base,
        _ => DEFAULT_API_BASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_value_uses_default() {
        assert_eq!(resolve_base(None), DEFAULT_API_BASE);
        assert_eq!(resolve_base(Some("")), DEFAULT_API_BASE);
        assert_eq!(resolve_base(Some("https://cards.example/api")), "https://cards.example/api");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://localhost:5000/api/");
        assert_eq!(config.base_url(), "http://localhost:5000/api");
    }
}
