use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::config::LanguagePrefsConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::GeolocationPort;

/// Body shape of the geolocation endpoint; only `country_code` is read,
/// everything else in the provider's response is ignored.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    country_code: Option<String>,
}

/// HTTP adapter implementing the GeolocationPort against an
/// ipapi.co-style unauthenticated JSON endpoint.
///
/// Single round trip: no retry, no caching, no explicit timeout beyond
/// the client's own defaults.
pub struct HttpGeoClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpGeoClient {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Build the adapter from module config, parsing the endpoint URL once
    /// at wiring time.
    pub fn from_config(
        client: reqwest::Client,
        config: &LanguagePrefsConfig,
    ) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&config.geo_api_url)
            .with_context(|| format!("invalid geolocation endpoint: {}", config.geo_api_url))?;
        Ok(Self::new(client, endpoint))
    }
}

#[async_trait]
impl GeolocationPort for HttpGeoClient {
    #[instrument(
        name = "language_prefs.http.geo.lookup_country",
        skip_all,
        fields(endpoint = %self.endpoint)
    )]
    async fn lookup_country(&self) -> Result<Option<String>, DomainError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::transport(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GeoResponse = response
            .json()
            .await
            .map_err(|e| DomainError::malformed_response(e.to_string()))?;

        Ok(body.country_code.filter(|code| !code.is_empty()))
    }
}
