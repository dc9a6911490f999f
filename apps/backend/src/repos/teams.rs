//! Teams repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;

use crate::adapters::{purchases_sea, teams_sea};
use crate::domain::affordability;
use crate::entities::teams;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub use crate::adapters::teams_sea::{TeamCreate, TeamUpdate};

/// Team domain model. The join code is deliberately not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub code: String,
    pub logo_url: Option<String>,
    pub wallet: i64,
    pub max_players: i16,
}

/// Derived budget/roster position for a team. Remaining wallet and slots
/// are never stored; they are recomputed from the purchase history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamState {
    pub spent: i64,
    pub remaining: i64,
    pub owned: i64,
    pub remaining_slots: i64,
}

pub async fn find_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Team>, DomainError> {
    let team = teams_sea::find_by_id(conn, id).await.map_err(map_db_err)?;
    Ok(team.map(Team::from))
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Team, DomainError> {
    find_team(conn, id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Team, format!("Team {id} not found")))
}

/// Resolve a team by join code; invalid codes are a team NotFound
pub async fn require_team_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Team, DomainError> {
    let team = teams_sea::find_by_code(conn, code).await.map_err(map_db_err)?;
    team.map(Team::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Team, "Invalid team code"))
}

pub async fn list_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Team>, DomainError> {
    let teams = teams_sea::find_all(conn).await.map_err(map_db_err)?;
    Ok(teams.into_iter().map(Team::from).collect())
}

/// Compute the team's derived wallet/roster position from its purchases
pub async fn load_team_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team: &Team,
) -> Result<TeamState, DomainError> {
    let purchases = purchases_sea::find_all_by_team(conn, team.id)
        .await
        .map_err(map_db_err)?;
    let spent: i64 = purchases.iter().map(|p| p.price).sum();
    let owned = purchases.len() as i64;
    Ok(TeamState {
        spent,
        remaining: affordability::remaining_wallet(team.wallet, spent),
        owned,
        remaining_slots: affordability::remaining_slots(i64::from(team.max_players), owned),
    })
}

pub async fn create_team(txn: &DatabaseTransaction, dto: TeamCreate) -> Result<Team, DomainError> {
    let team = teams_sea::create(txn, dto).await.map_err(map_db_err)?;
    Ok(Team::from(team))
}

pub async fn update_team(
    txn: &DatabaseTransaction,
    id: i64,
    dto: TeamUpdate,
) -> Result<Team, DomainError> {
    let model = teams_sea::find_by_id(txn, id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Team, format!("Team {id} not found")))?;
    let team = teams_sea::update(txn, model, dto).await.map_err(map_db_err)?;
    Ok(Team::from(team))
}

/// Absolute wallet adjustment (admin operation)
pub async fn set_wallet(
    txn: &DatabaseTransaction,
    id: i64,
    amount: i64,
) -> Result<Team, DomainError> {
    let model = teams_sea::find_by_id(txn, id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Team, format!("Team {id} not found")))?;
    let team = teams_sea::set_wallet(txn, model, amount)
        .await
        .map_err(map_db_err)?;
    Ok(Team::from(team))
}

// Conversions between SeaORM models and domain models

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            logo_url: model.logo_url,
            wallet: model.wallet,
            max_players: model.max_players,
        }
    }
}
