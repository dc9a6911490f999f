//! Active-bid repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::bids_sea;
use crate::entities::{active_bids, bid_raises};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::infra::db_errors::map_db_err;

/// Active-bid domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bid {
    pub id: i64,
    pub player_id: i64,
    pub current_amount: i64,
    pub current_team_id: Option<i64>,
    pub active: bool,
}

/// One raise in a bid's history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Raise {
    pub team_id: i64,
    pub amount: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

pub async fn find_bid_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Bid>, DomainError> {
    let bid = bids_sea::find_by_player(conn, player_id)
        .await
        .map_err(map_db_err)?;
    Ok(bid.map(Bid::from))
}

pub async fn find_active_bid<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Bid>, DomainError> {
    let bid = bids_sea::find_active_by_player(conn, player_id)
        .await
        .map_err(map_db_err)?;
    Ok(bid.map(Bid::from))
}

/// Seed the bid row for a player at `seed_amount` (first raise). Racing
/// seeders collapse onto one row; whichever survived is read back. A
/// missing row after the insert means the bid was deactivated underneath
/// us, reported as a lost race for the caller to retry.
pub async fn seed_bid(
    txn: &DatabaseTransaction,
    player_id: i64,
    seed_amount: i64,
) -> Result<Bid, DomainError> {
    bids_sea::seed_if_absent(txn, player_id, seed_amount)
        .await
        .map_err(map_db_err)?;
    find_active_bid(txn, player_id).await?.ok_or_else(|| {
        DomainError::conflict(
            ConflictKind::OptimisticLock,
            format!("Bid for player {player_id} changed while seeding"),
        )
    })
}

/// Conditional raise commit; false means a concurrent raise won the race
pub async fn raise_if_amount(
    txn: &DatabaseTransaction,
    bid_id: i64,
    expected_amount: i64,
    next_amount: i64,
    team_id: i64,
) -> Result<bool, DomainError> {
    bids_sea::raise_if_amount(txn, bid_id, expected_amount, next_amount, team_id)
        .await
        .map_err(map_db_err)
}

pub async fn append_raise(
    txn: &DatabaseTransaction,
    bid_id: i64,
    team_id: i64,
    amount: i64,
) -> Result<Raise, DomainError> {
    let raise = bids_sea::append_raise(txn, bid_id, team_id, amount)
        .await
        .map_err(map_db_err)?;
    Ok(Raise::from(raise))
}

pub async fn raise_history<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bid_id: i64,
) -> Result<Vec<Raise>, DomainError> {
    let raises = bids_sea::find_raises(conn, bid_id).await.map_err(map_db_err)?;
    Ok(raises.into_iter().map(Raise::from).collect())
}

/// Delete any bid state for a player (history cascades)
pub async fn clear_bids_for_player(
    txn: &DatabaseTransaction,
    player_id: i64,
) -> Result<u64, DomainError> {
    bids_sea::delete_by_player(txn, player_id)
        .await
        .map_err(map_db_err)
}

/// Deactivate a bid, keeping it readable for last-sold display
pub async fn deactivate_bid(txn: &DatabaseTransaction, bid: Bid) -> Result<Bid, DomainError> {
    let model = bids_sea::find_by_player(txn, bid.player_id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| {
            DomainError::not_found(
                crate::errors::domain::NotFoundKind::Bid,
                format!("Bid for player {} vanished", bid.player_id),
            )
        })?;
    let updated = bids_sea::deactivate(txn, model).await.map_err(map_db_err)?;
    Ok(Bid::from(updated))
}

/// Deactivate every active bid (session reset)
pub async fn deactivate_all(txn: &DatabaseTransaction) -> Result<u64, DomainError> {
    bids_sea::deactivate_all(txn).await.map_err(map_db_err)
}

// Conversions between SeaORM models and domain models

impl From<active_bids::Model> for Bid {
    fn from(model: active_bids::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            current_amount: model.current_amount,
            current_team_id: model.current_team_id,
            active: model.active,
        }
    }
}

impl From<bid_raises::Model> for Raise {
    fn from(model: bid_raises::Model) -> Self {
        Self {
            team_id: model.team_id,
            amount: model.amount,
            at: model.created_at,
        }
    }
}
