//! Team-facing read orchestration: login by join code and the public
//! team detail view.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::domain::snapshot::AuctionSnapshot;
use crate::errors::domain::DomainError;
use crate::repos::purchases::Purchase;
use crate::repos::teams::{Team, TeamState};
use crate::repos::{purchases, teams};
use crate::services::snapshot;

/// What a team sees after logging in with its join code.
#[derive(Debug, Clone, Serialize)]
pub struct TeamLoginView {
    pub team: Team,
    #[serde(flatten)]
    pub state: TeamState,
    pub purchases: Vec<Purchase>,
    pub snapshot: AuctionSnapshot,
}

/// Public per-team detail (no snapshot, no join code).
#[derive(Debug, Clone, Serialize)]
pub struct TeamDetailView {
    pub team: Team,
    #[serde(flatten)]
    pub state: TeamState,
    pub purchases: Vec<Purchase>,
}

/// Resolve a join code to the team's full auction-floor view.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<TeamLoginView, DomainError> {
    let team = teams::require_team_by_code(conn, code).await?;
    let state = teams::load_team_state(conn, &team).await?;
    let purchases = purchases::find_all_by_team(conn, team.id).await?;
    let snapshot = snapshot::load_snapshot(conn).await?;
    Ok(TeamLoginView {
        team,
        state,
        purchases,
        snapshot,
    })
}

pub async fn team_detail<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<TeamDetailView, DomainError> {
    let team = teams::require_team(conn, team_id).await?;
    let state = teams::load_team_state(conn, &team).await?;
    let purchases = purchases::find_all_by_team(conn, team.id).await?;
    Ok(TeamDetailView {
        team,
        state,
        purchases,
    })
}
