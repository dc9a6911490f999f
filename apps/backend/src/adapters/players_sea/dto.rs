//! DTOs for the players_sea adapter.

use crate::entities::players::{House, Strength};

/// DTO for registering a player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
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
}

impl PlayerCreate {
    pub fn new(name: impl Into<String>, batch: i16, house: House, strength: Strength) -> Self {
        Self {
            name: name.into(),
            batch,
            house,
            strength,
            phone_number: None,
            total_matches: 0,
            total_score: 0,
            total_wickets: 0,
            base_price: 1000,
            photo_url: None,
            is_captain: false,
            is_icon: false,
            is_retained: false,
            is_traded: false,
        }
    }

    pub fn with_base_price(mut self, base_price: i64) -> Self {
        self.base_price = base_price;
        self
    }
}

/// Partial update of admin-editable player fields.
///
/// Option fields that are themselves optional in the schema use the
/// three-state convention: None = no change, Some(None) = clear.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub batch: Option<i16>,
    pub house: Option<House>,
    pub strength: Option<Strength>,
    pub phone_number: Option<Option<String>>,
    pub base_price: Option<i64>,
    pub photo_url: Option<Option<String>>,
}
