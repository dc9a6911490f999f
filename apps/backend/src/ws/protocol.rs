//! Event envelopes pushed to every connected viewer.

use serde::{Deserialize, Serialize};

/// Server-to-client auction events, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuctionEvent {
    /// The admin put a new player up, or cleared the block
    CurrentPlayerChanged { player_id: Option<i64> },
    /// A raise committed
    BidUpdated {
        player_id: i64,
        amount: i64,
        team_name: Option<String>,
        team_logo_url: Option<String>,
    },
    /// The current player was settled to the leading team
    PlayerSold {
        player_id: i64,
        team_name: String,
        price: i64,
    },
    /// Auction settings changed
    SettingsUpdated { min_increment: i64, base_price: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_tag_by_snake_case_type() {
        let event = AuctionEvent::BidUpdated {
            player_id: 7,
            amount: 3000,
            team_name: Some("Shivalik".into()),
            team_logo_url: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "bid_updated");
        assert_eq!(json["player_id"], 7);
        assert_eq!(json["amount"], 3000);
        assert_eq!(json["team_name"], "Shivalik");
    }

    #[test]
    fn cleared_player_serializes_null_id() {
        let event = AuctionEvent::CurrentPlayerChanged { player_id: None };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "current_player_changed");
        assert!(json["player_id"].is_null());
    }

    #[test]
    fn player_sold_round_trips() {
        let event = AuctionEvent::PlayerSold {
            player_id: 3,
            team_name: "Nilgiri".into(),
            price: 4500,
        };
        let text = serde_json::to_string(&event).unwrap();
        let back: AuctionEvent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, event);
    }
}
