use serde::{Deserialize, Serialize};

/// Configuration for the language preference module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguagePrefsConfig {
    #[serde(default = "default_geo_api_url")]
    pub geo_api_url: String,
}

impl Default for LanguagePrefsConfig {
    fn default() -> Self {
        Self {
            geo_api_url: default_geo_api_url(),
        }
    }
}

fn default_geo_api_url() -> String {
    "https://ipapi.co/json/".to_string()
}
