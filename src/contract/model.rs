use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Pure preference model for inter-module communication (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLanguagePreference {
    pub user_id: Uuid,
    /// Two-letter language code; not validated beyond the detection allow-list.
    pub language: String,
    /// Optional two-letter-ish country code, free text.
    pub country: Option<String>,
    /// Raw locale string as reported by the client environment.
    pub browser_language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
