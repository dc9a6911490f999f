//! SeaORM adapter for the auction settings singleton.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Set};

use crate::entities::auction_settings;

pub mod dto;

pub use dto::SettingsUpdate;

/// The settings row is seeded by the init migration with this id.
pub const SETTINGS_ID: i64 = 1;

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<auction_settings::Model>, sea_orm::DbErr> {
    auction_settings::Entity::find_by_id(SETTINGS_ID).one(conn).await
}

/// Partial update of the tunable fields
pub async fn update(
    txn: &DatabaseTransaction,
    model: auction_settings::Model,
    patch: SettingsUpdate,
) -> Result<auction_settings::Model, sea_orm::DbErr> {
    let mut settings: auction_settings::ActiveModel = model.into();
    if let Some(base_price) = patch.base_price {
        settings.base_price = Set(base_price);
    }
    if let Some(min_increment) = patch.min_increment {
        settings.min_increment = Set(min_increment);
    }
    if let Some(max_players) = patch.max_players_per_team {
        settings.max_players_per_team = Set(max_players);
    }
    if let Some(auction_active) = patch.auction_active {
        settings.auction_active = Set(auction_active);
    }
    settings.updated_at = Set(time::OffsetDateTime::now_utc());
    settings.update(txn).await
}

/// Move the global current-player pointer (session controller only)
pub async fn set_current_player(
    txn: &DatabaseTransaction,
    model: auction_settings::Model,
    player_id: Option<i64>,
) -> Result<auction_settings::Model, sea_orm::DbErr> {
    let mut settings: auction_settings::ActiveModel = model.into();
    settings.current_player_id = Set(player_id);
    settings.updated_at = Set(time::OffsetDateTime::now_utc());
    settings.update(txn).await
}
