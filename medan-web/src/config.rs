//! Frontend configuration.
//!
//! The only knob the console has is where the backend lives. The base
//! path can be baked in at build time; everything else is convention.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base path every API call is issued against.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("MEDAN_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base path.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the compiled default base path
    #[test]
    fn test_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.api_base_url.starts_with('/') || config.api_base_url.starts_with("http"));
    }

    /// Tests accessor and clone agree
    #[test]
    fn test_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
