//! Geolocation adapter tests against a mocked HTTP endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use httpmock::prelude::*;
use url::Url;
use uuid::Uuid;

use language_prefs::config::LanguagePrefsConfig;
use language_prefs::contract::model::UserLanguagePreference;
use language_prefs::domain::error::DomainError;
use language_prefs::domain::ports::{GeolocationPort, LocaleSource};
use language_prefs::domain::repo::PreferencesRepository;
use language_prefs::domain::service::Service;
use language_prefs::infra::geo::http_geo_client::HttpGeoClient;

fn geo_client(server: &MockServer) -> HttpGeoClient {
    let endpoint = Url::parse(&server.url("/json/")).expect("mock server url");
    HttpGeoClient::new(reqwest::Client::new(), endpoint)
}

#[test]
fn builds_from_config() {
    let config = LanguagePrefsConfig::default();
    assert!(HttpGeoClient::from_config(reqwest::Client::new(), &config).is_ok());

    let bad = LanguagePrefsConfig {
        geo_api_url: "not a url".to_string(),
    };
    assert!(HttpGeoClient::from_config(reqwest::Client::new(), &bad).is_err());
}

#[tokio::test]
async fn returns_country_code_from_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/json/");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"ip":"1.2.3.4","country":"Turkey","country_code":"TR"}"#);
        })
        .await;

    let got = geo_client(&server).lookup_country().await.expect("lookup");

    mock.assert_async().await;
    assert_eq!(got, Some("TR".to_string()));
}

#[tokio::test]
async fn missing_country_code_field_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/json/");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"ip":"1.2.3.4"}"#);
        })
        .await;

    let got = geo_client(&server).lookup_country().await.expect("lookup");
    assert_eq!(got, None);
}

#[tokio::test]
async fn empty_country_code_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/json/");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"country_code":""}"#);
        })
        .await;

    let got = geo_client(&server).lookup_country().await.expect("lookup");
    assert_eq!(got, None);
}

#[tokio::test]
async fn malformed_body_is_tagged_malformed_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/json/");
            then.status(200).body("not json at all");
        })
        .await;

    let err = geo_client(&server)
        .lookup_country()
        .await
        .expect_err("should fail");
    assert!(matches!(err, DomainError::MalformedResponse { .. }));
}

#[tokio::test]
async fn error_status_is_tagged_transport() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/json/");
            then.status(500);
        })
        .await;

    let err = geo_client(&server)
        .lookup_country()
        .await
        .expect_err("should fail");
    assert!(matches!(err, DomainError::Transport { .. }));
}

// --- service-level collapse ---

struct NullRepo;

#[async_trait]
impl PreferencesRepository for NullRepo {
    async fn find_by_user(&self, _user_id: Uuid) -> anyhow::Result<Option<UserLanguagePreference>> {
        Ok(None)
    }

    async fn upsert(&self, _pref: UserLanguagePreference) -> anyhow::Result<()> {
        Ok(())
    }

    async fn update_language(
        &self,
        _user_id: Uuid,
        _language: &str,
        _updated_at: DateTime<Utc>,
    ) -> anyhow::Result<u64> {
        Ok(0)
    }
}

struct NullLocale;

impl LocaleSource for NullLocale {
    fn current_locale(&self) -> Option<String> {
        None
    }
}

#[tokio::test]
async fn service_collapses_malformed_response_to_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/json/");
            then.status(200).body("<html>not the api you wanted</html>");
        })
        .await;

    let service = Service::new(
        Arc::new(NullRepo),
        Arc::new(geo_client(&server)),
        Arc::new(NullLocale),
    );

    assert_eq!(service.detect_country().await, None);
}
