use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::model::UserLanguagePreference;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Load the preference row for a user, if any.
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<UserLanguagePreference>>;

    /// Full-replace upsert keyed on `user_id`.
    ///
    /// Service computes timestamps; repo persists. On conflict every
    /// field except `created_at` is overwritten, including optional
    /// fields set to `None`.
    async fn upsert(&self, pref: UserLanguagePreference) -> anyhow::Result<()>;

    /// Update only `language` and `updated_at` on the row matching `user_id`.
    /// Returns the number of rows touched (zero when no row exists).
    async fn update_language(
        &self,
        user_id: Uuid,
        language: &str,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<u64>;
}
