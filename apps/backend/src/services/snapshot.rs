//! Assembles the read-side snapshot clients render from.

use sea_orm::ConnectionTrait;

use crate::domain::snapshot::{AuctionSnapshot, CurrentBidView, LastSoldView};
use crate::errors::domain::DomainError;
use crate::repos::{bids, players, purchases, settings, teams};

/// Project the auction into a single payload. Reads only; identical
/// back-to-back calls against unchanged state yield identical payloads.
pub async fn load_snapshot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<AuctionSnapshot, DomainError> {
    let current = settings::require_settings(conn).await?;

    let mut player = None;
    let mut current_bid = None;
    let mut last_sold = None;

    if let Some(player_id) = current.current_player_id {
        player = players::find_player(conn, player_id).await?;

        if let Some(bid) = bids::find_active_bid(conn, player_id).await? {
            let leading_team = match bid.current_team_id {
                Some(team_id) => teams::find_team(conn, team_id).await?,
                None => None,
            };
            current_bid = Some(CurrentBidView {
                amount: bid.current_amount,
                team_name: leading_team.as_ref().map(|t| t.name.clone()),
                team_logo_url: leading_team.and_then(|t| t.logo_url),
            });
        }
    } else if let Some(purchase) = purchases::find_latest(conn).await? {
        let sold_player = players::find_player(conn, purchase.player_id).await?;
        let buyer = teams::find_team(conn, purchase.team_id).await?;
        if let (Some(sold_player), Some(buyer)) = (sold_player, buyer) {
            last_sold = Some(LastSoldView {
                player_id: sold_player.id,
                player_name: sold_player.name,
                team_name: buyer.name,
                price: purchase.price,
            });
        }
    }

    Ok(AuctionSnapshot {
        base_price: current.base_price,
        min_increment: current.min_increment,
        player,
        current_bid,
        last_sold,
    })
}
