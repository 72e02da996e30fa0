use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::client::LanguagePrefsApi;
use crate::domain::service::Service;

/// Local implementation of the LanguagePrefsApi trait that delegates to the domain service
pub struct LanguagePrefsLocalClient {
    service: Arc<Service>,
}

impl LanguagePrefsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LanguagePrefsApi for LanguagePrefsLocalClient {
    async fn get_user_language_preference(&self, user_id: Uuid) -> Option<String> {
        self.service.get_user_language_preference(user_id).await
    }

    async fn save_user_language_preference(
        &self,
        user_id: Uuid,
        language: &str,
        country: Option<String>,
        browser_language: Option<String>,
    ) -> bool {
        self.service
            .save_user_language_preference(user_id, language, country, browser_language)
            .await
    }

    async fn update_user_language(&self, user_id: Uuid, language: &str) -> bool {
        self.service.update_user_language(user_id, language).await
    }

    fn detect_browser_language(&self) -> String {
        self.service.detect_browser_language()
    }

    async fn detect_country(&self) -> Option<String> {
        self.service.detect_country().await
    }
}
