//! Read-side view of the auction for clients joining or refreshing.

use serde::Serialize;

use crate::repos::players::Player;

/// Everything a client needs to render the auction floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionSnapshot {
    pub base_price: i64,
    pub min_increment: i64,
    /// The player currently up for bidding, if any
    pub player: Option<Player>,
    /// Live bid on the current player
    pub current_bid: Option<CurrentBidView>,
    /// The most recent sale, shown only between players
    pub last_sold: Option<LastSoldView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentBidView {
    pub amount: i64,
    pub team_name: Option<String>,
    pub team_logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastSoldView {
    pub player_id: i64,
    pub player_name: String,
    pub team_name: String,
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_snapshot_serializes_with_nulls() {
        let snapshot = AuctionSnapshot {
            base_price: 2500,
            min_increment: 500,
            player: None,
            current_bid: None,
            last_sold: None,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["base_price"], 2500);
        assert_eq!(json["min_increment"], 500);
        assert!(json["player"].is_null());
        assert!(json["current_bid"].is_null());
        assert!(json["last_sold"].is_null());
    }

    #[test]
    fn current_bid_carries_leading_team() {
        let bid = CurrentBidView {
            amount: 3500,
            team_name: Some("Aravali".into()),
            team_logo_url: None,
        };
        let json = serde_json::to_value(&bid).unwrap();
        assert_eq!(json["amount"], 3500);
        assert_eq!(json["team_name"], "Aravali");
        assert!(json["team_logo_url"].is_null());
    }
}
