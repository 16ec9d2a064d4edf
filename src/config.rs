//! Where the review listing lives.
//!
//! The browser bundle has no process environment, so the base URL is baked
//! in at build time from `REVIEWS_API_URL`. Components never read it
//! themselves; they get an `ApiConfig` handed to them.

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const REVIEWS_PATH: &str = "/api/reviews";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Uses `base_url` unless it is missing or blank.
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();
        Self { base_url }
    }

    pub fn from_build_env() -> Self {
        Self::new(option_env!("REVIEWS_API_URL"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn reviews_url(&self) -> String {
        format!("{}{}", self.base_url, REVIEWS_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
