//! Auction session controller: the single owner of the
//! current-player pointer and the settlement path.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::errors::domain::{DomainError, InvalidStateKind};
use crate::repos::bids::Bid;
use crate::repos::players::Player;
use crate::repos::settings::{Settings, SettingsPatch};
use crate::repos::teams::Team;
use crate::repos::{bids, players, purchases, settings, teams};

/// A settled sale, as reported to the caller and broadcast to viewers.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleOutcome {
    pub player_id: i64,
    pub player_name: String,
    pub team_id: i64,
    pub team_name: String,
    pub price: i64,
}

/// Put a player up for bidding. Valid from any state, including an
/// already-sold player (a re-auction); sold players are turned away at
/// raise and settle time instead. Any stale bid state for the player is
/// removed so the round starts clean.
pub async fn select_player(
    txn: &DatabaseTransaction,
    player_id: i64,
) -> Result<Player, DomainError> {
    let player = players::require_player(txn, player_id).await?;
    bids::clear_bids_for_player(txn, player_id).await?;
    settings::set_current_player(txn, Some(player_id)).await?;
    info!(player_id, "player selected for bidding");
    Ok(player)
}

/// Clear the block and deactivate every live bid.
pub async fn reset(txn: &DatabaseTransaction) -> Result<u64, DomainError> {
    let deactivated = bids::deactivate_all(txn).await?;
    settings::set_current_player(txn, None).await?;
    info!(deactivated, "auction session reset");
    Ok(deactivated)
}

/// Settle the current player to the leading team.
///
/// Write order inside the transaction: sale facts first (player row,
/// purchase row), then bid deactivation, then the pointer clear.
pub async fn settle_sale(txn: &DatabaseTransaction) -> Result<SaleOutcome, DomainError> {
    let current = settings::require_settings(txn).await?;
    let player_id = current.require_current_player()?;
    let player = players::require_player(txn, player_id).await?;

    let bid = bids::find_active_bid(txn, player_id).await?;
    let (bid, team_id) = resolve_winner(bid)?;
    let team = teams::require_team(txn, team_id).await?;
    let price = bid.current_amount;

    players::mark_sold(txn, player_id, team_id, price).await?;
    purchases::create_purchase(txn, team_id, player_id, price).await?;
    bids::deactivate_bid(txn, bid).await?;
    settings::set_current_player(txn, None).await?;

    info!(player_id, team_id, price, "player sold");
    Ok(SaleOutcome {
        player_id,
        player_name: player.name,
        team_id,
        team_name: team.name,
        price,
    })
}

/// Decide who wins settlement for the current player. A sale needs a
/// live bid with a leading team attached; anything else is rejected
/// before any row is touched.
fn resolve_winner(bid: Option<Bid>) -> Result<(Bid, i64), DomainError> {
    let bid = bid.ok_or_else(|| {
        DomainError::invalid_state(
            InvalidStateKind::NoBidsPlaced,
            "No bids have been placed for this player",
        )
    })?;
    let team_id = bid.current_team_id.ok_or_else(|| {
        DomainError::invalid_state(
            InvalidStateKind::NoBidsPlaced,
            "No team is leading the bid for this player",
        )
    })?;
    Ok((bid, team_id))
}

/// Partial settings update (admin).
pub async fn update_settings(
    txn: &DatabaseTransaction,
    patch: SettingsPatch,
) -> Result<Settings, DomainError> {
    if let Some(base_price) = patch.base_price {
        if base_price < 0 {
            return Err(DomainError::validation("base_price must be non-negative"));
        }
    }
    if let Some(min_increment) = patch.min_increment {
        if min_increment <= 0 {
            return Err(DomainError::validation("min_increment must be positive"));
        }
    }
    if let Some(max_players) = patch.max_players_per_team {
        if max_players <= 0 {
            return Err(DomainError::validation(
                "max_players_per_team must be positive",
            ));
        }
    }
    settings::update_settings(txn, patch).await
}

/// Absolute wallet set (admin).
pub async fn adjust_wallet(
    txn: &DatabaseTransaction,
    team_id: i64,
    amount: i64,
) -> Result<Team, DomainError> {
    if amount < 0 {
        return Err(DomainError::validation("wallet must be non-negative"));
    }
    teams::set_wallet(txn, team_id, amount).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(team: Option<i64>) -> Bid {
        Bid {
            id: 1,
            player_id: 7,
            current_amount: 4500,
            current_team_id: team,
            active: true,
        }
    }

    #[test]
    fn resolve_winner_returns_leading_team_and_bid() {
        let (won, team_id) = resolve_winner(Some(bid(Some(3)))).unwrap();
        assert_eq!(team_id, 3);
        assert_eq!(won.current_amount, 4500);
    }

    #[test]
    fn resolve_winner_rejects_missing_bid() {
        let err = resolve_winner(None).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidState(InvalidStateKind::NoBidsPlaced, _)
        ));
    }

    #[test]
    fn resolve_winner_rejects_bid_without_leader() {
        let err = resolve_winner(Some(bid(None))).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidState(InvalidStateKind::NoBidsPlaced, _)
        ));
    }
}
