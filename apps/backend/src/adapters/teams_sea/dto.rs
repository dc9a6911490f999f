//! DTOs for the teams_sea adapter.

/// DTO for creating a team.
#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub name: String,
    pub code: String,
    pub logo_url: Option<String>,
    pub wallet: i64,
    pub max_players: i16,
}

impl TeamCreate {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            logo_url: None,
            wallet: 100_000,
            max_players: 15,
        }
    }

    pub fn with_wallet(mut self, wallet: i64) -> Self {
        self.wallet = wallet;
        self
    }

    pub fn with_max_players(mut self, max_players: i16) -> Self {
        self.max_players = max_players;
        self
    }
}

/// Partial update of admin-editable team fields.
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    /// None = no change, Some(None) = clear
    pub logo_url: Option<Option<String>>,
    pub wallet: Option<i64>,
    pub max_players: Option<i16>,
}
