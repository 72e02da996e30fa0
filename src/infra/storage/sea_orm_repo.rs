//! SeaORM-backed repository implementation for the domain port.
//!
//! This struct is generic over `C: ConnectionTrait`, so you can construct it
//! with a `DatabaseConnection` **or** a transactional connection.

use anyhow::Context;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::contract::model::UserLanguagePreference;
use crate::domain::repo::PreferencesRepository;
use crate::infra::storage::entity::{
    ActiveModel as PreferenceAM, Column, Entity as PreferenceEntity,
};
use crate::infra::storage::mapper::entity_to_contract;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmPreferencesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmPreferencesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> PreferencesRepository for SeaOrmPreferencesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<UserLanguagePreference>> {
        let found = PreferenceEntity::find_by_id(user_id)
            .one(&self.conn)
            .await
            .context("find_by_user failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn upsert(&self, pref: UserLanguagePreference) -> anyhow::Result<()> {
        let m = PreferenceAM {
            user_id: Set(pref.user_id),
            language: Set(pref.language),
            country: Set(pref.country),
            browser_language: Set(pref.browser_language),
            created_at: Set(pref.created_at),
            updated_at: Set(pref.updated_at),
        };

        // `created_at` is absent from the conflict update set, so the
        // first insert's value survives later saves.
        PreferenceEntity::insert(m)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::Language,
                        Column::Country,
                        Column::BrowserLanguage,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await
            .context("upsert failed")?;
        Ok(())
    }

    async fn update_language(
        &self,
        user_id: Uuid,
        language: &str,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<u64> {
        let res = PreferenceEntity::update_many()
            .col_expr(Column::Language, Expr::value(language))
            .col_expr(Column::UpdatedAt, Expr::value(updated_at))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await
            .context("update_language failed")?;
        Ok(res.rows_affected)
    }
}
