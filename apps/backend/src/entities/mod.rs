pub mod active_bids;
pub mod auction_settings;
pub mod bid_raises;
pub mod players;
pub mod team_purchases;
pub mod teams;

pub use active_bids::Entity as ActiveBids;
pub use active_bids::Model as ActiveBid;
pub use auction_settings::Entity as AuctionSettings;
pub use auction_settings::Model as AuctionSetting;
pub use bid_raises::Entity as BidRaises;
pub use bid_raises::Model as BidRaise;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use team_purchases::Entity as TeamPurchases;
pub use team_purchases::Model as TeamPurchase;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
