//! SeaORM adapter for team purchase records.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::team_purchases;

/// All purchases for a team in settlement order
pub async fn find_all_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<team_purchases::Model>, sea_orm::DbErr> {
    team_purchases::Entity::find()
        .filter(team_purchases::Column::TeamId.eq(team_id))
        .order_by(team_purchases::Column::CreatedAt, Order::Asc)
        .order_by(team_purchases::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// The most recent settlement across all teams (drives the last-sold
/// read-back when no player is up)
pub async fn find_latest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<team_purchases::Model>, sea_orm::DbErr> {
    team_purchases::Entity::find()
        .order_by(team_purchases::Column::CreatedAt, Order::Desc)
        .order_by(team_purchases::Column::Id, Order::Desc)
        .one(conn)
        .await
}

/// Append a purchase row (settlement only)
pub async fn create(
    txn: &DatabaseTransaction,
    team_id: i64,
    player_id: i64,
    price: i64,
) -> Result<team_purchases::Model, sea_orm::DbErr> {
    let purchase = team_purchases::ActiveModel {
        id: sea_orm::NotSet,
        team_id: Set(team_id),
        player_id: Set(player_id),
        price: Set(price),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    purchase.insert(txn).await
}
