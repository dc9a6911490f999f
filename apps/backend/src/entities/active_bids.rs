use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The single live bidding record for a player up for auction.
///
/// Lifecycle: created lazily on the first raise (seeded at the player's base
/// price), deactivated on sale (history preserved for last-sold read-back),
/// deleted outright on player select/reset.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "active_bids")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "current_amount")]
    pub current_amount: i64,
    #[sea_orm(column_name = "current_team_id")]
    pub current_team_id: Option<i64>,
    pub active: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::CurrentTeamId",
        to = "super::teams::Column::Id"
    )]
    CurrentTeam,
    #[sea_orm(has_many = "super::bid_raises::Entity")]
    Raises,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::bid_raises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
