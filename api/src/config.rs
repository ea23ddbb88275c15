//! Build-time configuration of the analysis service location.

/// Where the analysis service lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    base_url: String,
}

impl AnalyzerConfig {
    /// Used when `ANALYZER_API_URL` was not set at build time.
    pub const DEFAULT_BASE_URL: &'static str = "https://screenshot-analyzer-mdpu.onrender.com";

    /// Path of the analysis endpoint, relative to the base url.
    pub const ANALYZE_PATH: &'static str = "analyze";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads the base url baked in at compile time.
    ///
    /// # Environment Variables (read by the compiler, not at runtime):
    /// - `ANALYZER_API_URL`: base url of the service, e.g. `http://localhost:8000`.
    ///   defaults to [`Self::DEFAULT_BASE_URL`]
    pub fn from_build_env() -> Self {
        match option_env!("ANALYZER_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(Self::DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full url of the analysis endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            Self::ANALYZE_PATH
        )
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_analyze_path() {
        let config = AnalyzerConfig::new("http://localhost:8000");
        assert_eq!(config.endpoint(), "http://localhost:8000/analyze");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = AnalyzerConfig::new("http://localhost:8000//");
        assert_eq!(config.endpoint(), "http://localhost:8000/analyze");
    }

    #[test]
    fn build_env_falls_back_to_default() {
        if option_env!("ANALYZER_API_URL").is_none() {
            assert_eq!(
                AnalyzerConfig::from_build_env().base_url(),
                AnalyzerConfig::DEFAULT_BASE_URL
            );
        }
    }
}
