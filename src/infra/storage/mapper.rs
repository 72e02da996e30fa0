use crate::contract::model::UserLanguagePreference;
use crate::infra::storage::entity::Model as PreferenceEntity;

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: PreferenceEntity) -> UserLanguagePreference {
    UserLanguagePreference {
        user_id: entity.user_id,
        language: entity.language,
        country: entity.country,
        browser_language: entity.browser_language,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}
