//! DTOs for the settings_sea adapter.

/// Partial update of the tunable settings fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsUpdate {
    pub base_price: Option<i64>,
    pub min_increment: Option<i64>,
    pub max_players_per_team: Option<i16>,
    pub auction_active: Option<bool>,
}
