//! SeaORM adapter for the players repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::{PlayerCreate, PlayerUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(id).one(conn).await
}

/// List players, optionally filtered on the sold flag, in registration order
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sold: Option<bool>,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    let mut query = players::Entity::find();
    if let Some(sold) = sold {
        query = query.filter(players::Column::Sold.eq(sold));
    }
    query
        .order_by(players::Column::CreatedAt, Order::Asc)
        .all(conn)
        .await
}

pub async fn create(
    txn: &DatabaseTransaction,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let player = players::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(dto.name),
        batch: Set(dto.batch),
        house: Set(dto.house),
        strength: Set(dto.strength),
        phone_number: Set(dto.phone_number),
        total_matches: Set(dto.total_matches),
        total_score: Set(dto.total_score),
        total_wickets: Set(dto.total_wickets),
        base_price: Set(dto.base_price),
        photo_url: Set(dto.photo_url),
        is_captain: Set(dto.is_captain),
        is_icon: Set(dto.is_icon),
        is_retained: Set(dto.is_retained),
        is_traded: Set(dto.is_traded),
        sold: Set(false),
        sold_to_team: Set(None),
        sold_price: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    player.insert(txn).await
}

/// Partial update of admin-editable fields
pub async fn update(
    txn: &DatabaseTransaction,
    model: players::Model,
    dto: PlayerUpdate,
) -> Result<players::Model, sea_orm::DbErr> {
    let mut player: players::ActiveModel = model.into();
    if let Some(name) = dto.name {
        player.name = Set(name);
    }
    if let Some(batch) = dto.batch {
        player.batch = Set(batch);
    }
    if let Some(house) = dto.house {
        player.house = Set(house);
    }
    if let Some(strength) = dto.strength {
        player.strength = Set(strength);
    }
    if let Some(phone_number) = dto.phone_number {
        player.phone_number = Set(phone_number);
    }
    if let Some(base_price) = dto.base_price {
        player.base_price = Set(base_price);
    }
    if let Some(photo_url) = dto.photo_url {
        player.photo_url = Set(photo_url);
    }
    player.updated_at = Set(time::OffsetDateTime::now_utc());
    player.update(txn).await
}

/// Settlement write: sold flag, winning team, and price as one atomic
/// single-record update
pub async fn mark_sold(
    txn: &DatabaseTransaction,
    model: players::Model,
    team_id: i64,
    price: i64,
) -> Result<players::Model, sea_orm::DbErr> {
    let mut player: players::ActiveModel = model.into();
    player.sold = Set(true);
    player.sold_to_team = Set(Some(team_id));
    player.sold_price = Set(Some(price));
    player.updated_at = Set(time::OffsetDateTime::now_utc());
    player.update(txn).await
}
