//! Purchase-history repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::purchases_sea;
use crate::entities::team_purchases;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// One settled sale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Purchase {
    pub id: i64,
    pub team_id: i64,
    pub player_id: i64,
    pub price: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

pub async fn find_all_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<Purchase>, DomainError> {
    let purchases = purchases_sea::find_all_by_team(conn, team_id)
        .await
        .map_err(map_db_err)?;
    Ok(purchases.into_iter().map(Purchase::from).collect())
}

/// Most recent settlement across all teams, if any
pub async fn find_latest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<Purchase>, DomainError> {
    let purchase = purchases_sea::find_latest(conn).await.map_err(map_db_err)?;
    Ok(purchase.map(Purchase::from))
}

/// Append a purchase (settlement only)
pub async fn create_purchase(
    txn: &DatabaseTransaction,
    team_id: i64,
    player_id: i64,
    price: i64,
) -> Result<Purchase, DomainError> {
    let purchase = purchases_sea::create(txn, team_id, player_id, price)
        .await
        .map_err(map_db_err)?;
    Ok(Purchase::from(purchase))
}

// Conversions between SeaORM models and domain models

impl From<team_purchases::Model> for Purchase {
    fn from(model: team_purchases::Model) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            player_id: model.player_id,
            price: model.price,
            at: model.created_at,
        }
    }
}
