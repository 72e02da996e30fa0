use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Outbound port for IP-based geolocation.
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Country code for the caller's IP, if the provider reports one.
    async fn lookup_country(&self) -> Result<Option<String>, DomainError>;
}

/// Synchronous source of the environment's reported locale.
///
/// Kept separate from the async ports: locale access is a pure
/// environment read with no failure path.
pub trait LocaleSource: Send + Sync {
    fn current_locale(&self) -> Option<String>;
}
