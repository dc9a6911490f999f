use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Singleton row (id = 1) seeded by the init migration. The session
/// controller is the only writer of `current_player_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "auction_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(column_name = "base_price")]
    pub base_price: i64,
    #[sea_orm(column_name = "min_increment")]
    pub min_increment: i64,
    #[sea_orm(column_name = "max_players_per_team")]
    pub max_players_per_team: i16,
    #[sea_orm(column_name = "current_player_id")]
    pub current_player_id: Option<i64>,
    #[sea_orm(column_name = "auction_active")]
    pub auction_active: bool,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::CurrentPlayerId",
        to = "super::players::Column::Id"
    )]
    CurrentPlayer,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CurrentPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
