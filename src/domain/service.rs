use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::contract::model::UserLanguagePreference;
use crate::domain::detect;
use crate::domain::error::DomainError;
use crate::domain::ports::{GeolocationPort, LocaleSource};
use crate::domain::repo::PreferencesRepository;

/// Domain service for language preferences.
/// Depends only on the ports, not on infra types.
///
/// Every failure is logged with its tagged cause and collapsed to the
/// operation's negative value; callers cannot distinguish "no preference
/// set" from "lookup failed".
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PreferencesRepository>,
    geo: Arc<dyn GeolocationPort>,
    locale: Arc<dyn LocaleSource>,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn PreferencesRepository>,
        geo: Arc<dyn GeolocationPort>,
        locale: Arc<dyn LocaleSource>,
    ) -> Self {
        Self { repo, geo, locale }
    }

    #[instrument(
        name = "language_prefs.service.get_preference",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn get_user_language_preference(&self, user_id: Uuid) -> Option<String> {
        match self.repo.find_by_user(user_id).await {
            Ok(Some(pref)) if !pref.language.is_empty() => {
                debug!("Found stored language preference");
                Some(pref.language)
            }
            Ok(_) => {
                debug!("No stored language preference");
                None
            }
            Err(e) => {
                let cause = DomainError::database(e.to_string());
                warn!(error = %cause, "Language preference lookup failed");
                None
            }
        }
    }

    #[instrument(
        name = "language_prefs.service.save_preference",
        skip(self, country, browser_language),
        fields(user_id = %user_id, language = %language)
    )]
    pub async fn save_user_language_preference(
        &self,
        user_id: Uuid,
        language: &str,
        country: Option<String>,
        browser_language: Option<String>,
    ) -> bool {
        let now = Utc::now();
        let pref = UserLanguagePreference {
            user_id,
            language: language.to_string(),
            country,
            browser_language,
            created_at: now,
            updated_at: now,
        };

        match self.repo.upsert(pref).await {
            Ok(()) => {
                debug!("Saved language preference");
                true
            }
            Err(e) => {
                let cause = DomainError::database(e.to_string());
                warn!(error = %cause, "Saving language preference failed");
                false
            }
        }
    }

    #[instrument(
        name = "language_prefs.service.update_language",
        skip(self),
        fields(user_id = %user_id, language = %language)
    )]
    pub async fn update_user_language(&self, user_id: Uuid, language: &str) -> bool {
        match self.repo.update_language(user_id, language, Utc::now()).await {
            Ok(0) => {
                // The store reports zero-row updates as success; no row is
                // created and the call still succeeds.
                debug!("Language update matched no existing row");
                true
            }
            Ok(_) => {
                debug!("Updated language");
                true
            }
            Err(e) => {
                let cause = DomainError::database(e.to_string());
                warn!(error = %cause, "Language update failed");
                false
            }
        }
    }

    /// Pure environment read; no I/O, no failure path.
    pub fn detect_browser_language(&self) -> String {
        detect::supported_language(self.locale.current_locale().as_deref())
    }

    #[instrument(name = "language_prefs.service.detect_country", skip(self))]
    pub async fn detect_country(&self) -> Option<String> {
        match self.geo.lookup_country().await {
            Ok(Some(code)) => {
                debug!(country = %code, "Detected country");
                Some(code)
            }
            Ok(None) => {
                debug!("Geolocation response carried no country code");
                None
            }
            Err(cause) => {
                warn!(error = %cause, "Country detection failed");
                None
            }
        }
    }
}
