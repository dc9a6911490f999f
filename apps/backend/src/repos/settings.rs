//! Auction settings repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;

use crate::adapters::settings_sea;
use crate::entities::auction_settings;
use crate::errors::domain::{DomainError, InvalidStateKind, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Settings domain model (singleton)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub base_price: i64,
    pub min_increment: i64,
    pub max_players_per_team: i16,
    pub current_player_id: Option<i64>,
    pub auction_active: bool,
}

impl Settings {
    /// The player currently on the block. Every mutation that needs one
    /// makes this check before touching any row.
    pub fn require_current_player(&self) -> Result<i64, DomainError> {
        self.current_player_id.ok_or_else(|| {
            DomainError::invalid_state(
                InvalidStateKind::NoActivePlayer,
                "No player is currently up for bidding",
            )
        })
    }
}

/// Partial settings patch (admin update)
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
pub struct SettingsPatch {
    pub base_price: Option<i64>,
    pub min_increment: Option<i64>,
    pub max_players_per_team: Option<i16>,
    pub auction_active: Option<bool>,
}

impl From<SettingsPatch> for settings_sea::SettingsUpdate {
    fn from(patch: SettingsPatch) -> Self {
        Self {
            base_price: patch.base_price,
            min_increment: patch.min_increment,
            max_players_per_team: patch.max_players_per_team,
            auction_active: patch.auction_active,
        }
    }
}

/// Load the singleton. A missing row means the schema was never seeded,
/// which is an operational fault rather than a user error.
pub async fn require_settings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Settings, DomainError> {
    let settings = settings_sea::get(conn).await.map_err(map_db_err)?;
    settings.map(Settings::from).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Settings, "Auction settings row missing")
    })
}

pub async fn update_settings(
    txn: &DatabaseTransaction,
    patch: SettingsPatch,
) -> Result<Settings, DomainError> {
    let model = settings_sea::get(txn).await.map_err(map_db_err)?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Settings, "Auction settings row missing")
    })?;
    let updated = settings_sea::update(txn, model, patch.into())
        .await
        .map_err(map_db_err)?;
    Ok(Settings::from(updated))
}

/// Move the current-player pointer. Only the session controller calls this.
pub async fn set_current_player(
    txn: &DatabaseTransaction,
    player_id: Option<i64>,
) -> Result<Settings, DomainError> {
    let model = settings_sea::get(txn).await.map_err(map_db_err)?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Settings, "Auction settings row missing")
    })?;
    let updated = settings_sea::set_current_player(txn, model, player_id)
        .await
        .map_err(map_db_err)?;
    Ok(Settings::from(updated))
}

// Conversions between SeaORM models and domain models

impl From<auction_settings::Model> for Settings {
    fn from(model: auction_settings::Model) -> Self {
        Self {
            base_price: model.base_price,
            min_increment: model.min_increment,
            max_players_per_team: model.max_players_per_team,
            current_player_id: model.current_player_id,
            auction_active: model.auction_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(current_player_id: Option<i64>) -> Settings {
        Settings {
            base_price: 2500,
            min_increment: 500,
            max_players_per_team: 15,
            current_player_id,
            auction_active: true,
        }
    }

    #[test]
    fn current_player_resolves_when_set() {
        assert_eq!(settings(Some(7)).require_current_player().unwrap(), 7);
    }

    #[test]
    fn missing_current_player_is_invalid_state() {
        let err = settings(None).require_current_player().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidState(InvalidStateKind::NoActivePlayer, _)
        ));
    }
}
