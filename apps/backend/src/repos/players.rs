//! Players repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;

use crate::adapters::players_sea;
use crate::entities::players;
use crate::entities::players::{House, Strength};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};

/// Player domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub batch: i16,
    pub house: House,
    pub strength: Strength,
    pub phone_number: Option<String>,
    pub total_matches: i32,
    pub total_score: i32,
    pub total_wickets: i32,
    pub base_price: i64,
    pub photo_url: Option<String>,
    pub is_captain: bool,
    pub is_icon: bool,
    pub is_retained: bool,
    pub is_traded: bool,
    pub sold: bool,
    pub sold_to_team: Option<i64>,
    pub sold_price: Option<i64>,
}

pub async fn find_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_sea::find_by_id(conn, id).await.map_err(map_db_err)?;
    Ok(player.map(Player::from))
}

/// Load a player or fail with a domain NotFound
pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Player, DomainError> {
    find_player(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
    })
}

pub async fn list_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sold: Option<bool>,
) -> Result<Vec<Player>, DomainError> {
    let players = players_sea::find_all(conn, sold).await.map_err(map_db_err)?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn create_player(
    txn: &DatabaseTransaction,
    dto: PlayerCreate,
) -> Result<Player, DomainError> {
    let player = players_sea::create(txn, dto).await.map_err(map_db_err)?;
    Ok(Player::from(player))
}

pub async fn update_player(
    txn: &DatabaseTransaction,
    id: i64,
    dto: PlayerUpdate,
) -> Result<Player, DomainError> {
    let model = players_sea::find_by_id(txn, id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
        })?;
    let player = players_sea::update(txn, model, dto).await.map_err(map_db_err)?;
    Ok(Player::from(player))
}

/// Settlement write: mark a player sold to a team at a price
pub async fn mark_sold(
    txn: &DatabaseTransaction,
    id: i64,
    team_id: i64,
    price: i64,
) -> Result<Player, DomainError> {
    let model = players_sea::find_by_id(txn, id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
        })?;
    let player = players_sea::mark_sold(txn, model, team_id, price)
        .await
        .map_err(map_db_err)?;
    Ok(Player::from(player))
}

// Conversions between SeaORM models and domain models

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            batch: model.batch,
            house: model.house,
            strength: model.strength,
            phone_number: model.phone_number,
            total_matches: model.total_matches,
            total_score: model.total_score,
            total_wickets: model.total_wickets,
            base_price: model.base_price,
            photo_url: model.photo_url,
            is_captain: model.is_captain,
            is_icon: model.is_icon,
            is_retained: model.is_retained,
            is_traded: model.is_traded,
            sold: model.sold,
            sold_to_team: model.sold_to_team,
            sold_price: model.sold_price,
        }
    }
}
