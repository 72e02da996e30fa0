use async_trait::async_trait;
use uuid::Uuid;

/// Public API trait for the language preference module that other modules can use.
///
/// Lookup and write failures are logged internally and collapse to the
/// negative value (`None` / `false`); none of these operations surface an
/// error to the caller.
#[async_trait]
pub trait LanguagePrefsApi: Send + Sync {
    /// Stored language for a user, if any
    async fn get_user_language_preference(&self, user_id: Uuid) -> Option<String>;

    /// Full-replace upsert of the user's preference row
    async fn save_user_language_preference(
        &self,
        user_id: Uuid,
        language: &str,
        country: Option<String>,
        browser_language: Option<String>,
    ) -> bool;

    /// Partial update of `language` only; `country` and `browser_language` are untouched
    async fn update_user_language(&self, user_id: Uuid, language: &str) -> bool;

    /// Supported language inferred from the environment locale; falls back to "en"
    fn detect_browser_language(&self) -> String;

    /// Country code reported by the IP geolocation endpoint, if reachable
    async fn detect_country(&self) -> Option<String>;
}
