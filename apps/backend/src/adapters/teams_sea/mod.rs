//! SeaORM adapter for the teams repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::teams;

pub mod dto;

pub use dto::{TeamCreate, TeamUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find_by_id(id).one(conn).await
}

/// Resolve a team by its join code
pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .filter(teams::Column::Code.eq(code))
        .one(conn)
        .await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .order_by(teams::Column::Name, Order::Asc)
        .all(conn)
        .await
}

pub async fn create(
    txn: &DatabaseTransaction,
    dto: TeamCreate,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let team = teams::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(dto.name),
        code: Set(dto.code),
        logo_url: Set(dto.logo_url),
        wallet: Set(dto.wallet),
        max_players: Set(dto.max_players),
        created_at: Set(now),
        updated_at: Set(now),
    };

    team.insert(txn).await
}

/// Partial update of admin-editable fields
pub async fn update(
    txn: &DatabaseTransaction,
    model: teams::Model,
    dto: TeamUpdate,
) -> Result<teams::Model, sea_orm::DbErr> {
    let mut team: teams::ActiveModel = model.into();
    if let Some(name) = dto.name {
        team.name = Set(name);
    }
    if let Some(code) = dto.code {
        team.code = Set(code);
    }
    if let Some(logo_url) = dto.logo_url {
        team.logo_url = Set(logo_url);
    }
    if let Some(wallet) = dto.wallet {
        team.wallet = Set(wallet);
    }
    if let Some(max_players) = dto.max_players {
        team.max_players = Set(max_players);
    }
    team.updated_at = Set(time::OffsetDateTime::now_utc());
    team.update(txn).await
}

/// Absolute wallet adjustment (admin operation)
pub async fn set_wallet(
    txn: &DatabaseTransaction,
    model: teams::Model,
    amount: i64,
) -> Result<teams::Model, sea_orm::DbErr> {
    let mut team: teams::ActiveModel = model.into();
    team.wallet = Set(amount);
    team.updated_at = Set(time::OffsetDateTime::now_utc());
    team.update(txn).await
}
