//! Error codes for the auction backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

/// Centralized error codes for the auction backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Admin operation attempted without a valid admin token
    Unauthorized,

    // Request Validation
    /// Team join code missing from the request body
    CodeRequired,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Session / bidding state
    /// No player is currently up for auction
    NoActivePlayer,
    /// The current player is already sold (or otherwise not biddable)
    PlayerNotAvailable,
    /// Settlement attempted with no raises on record
    NoBidsPlaced,
    /// Raise would push the team past its affordability cap
    BidTooHigh,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,
    /// Team not found (includes invalid join code)
    TeamNotFound,
    /// Active bid not found
    BidNotFound,
    /// Settings singleton missing (schema not seeded)
    SettingsNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Team name already exists
    UniqueTeamName,
    /// Join code already exists
    JoinCodeConflict,
    /// Optimistic lock conflict (lost a concurrent raise race)
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",

            Self::CodeRequired => "CODE_REQUIRED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::NoActivePlayer => "NO_ACTIVE_PLAYER",
            Self::PlayerNotAvailable => "PLAYER_NOT_AVAILABLE",
            Self::NoBidsPlaced => "NO_BIDS_PLACED",
            Self::BidTooHigh => "BID_TOO_HIGH",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::BidNotFound => "BID_NOT_FOUND",
            Self::SettingsNotFound => "SETTINGS_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueTeamName => "UNIQUE_TEAM_NAME",
            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(ErrorCode::CodeRequired.as_str(), "CODE_REQUIRED");
        assert_eq!(ErrorCode::NoActivePlayer.as_str(), "NO_ACTIVE_PLAYER");
        assert_eq!(
            ErrorCode::PlayerNotAvailable.as_str(),
            "PLAYER_NOT_AVAILABLE"
        );
        assert_eq!(ErrorCode::NoBidsPlaced.as_str(), "NO_BIDS_PLACED");
        assert_eq!(ErrorCode::BidTooHigh.as_str(), "BID_TOO_HIGH");
        assert_eq!(ErrorCode::PlayerNotFound.as_str(), "PLAYER_NOT_FOUND");
        assert_eq!(ErrorCode::TeamNotFound.as_str(), "TEAM_NOT_FOUND");
        assert_eq!(ErrorCode::BidNotFound.as_str(), "BID_NOT_FOUND");
        assert_eq!(ErrorCode::SettingsNotFound.as_str(), "SETTINGS_NOT_FOUND");
        assert_eq!(ErrorCode::UniqueTeamName.as_str(), "UNIQUE_TEAM_NAME");
        assert_eq!(ErrorCode::JoinCodeConflict.as_str(), "JOIN_CODE_CONFLICT");
        assert_eq!(ErrorCode::OptimisticLock.as_str(), "OPTIMISTIC_LOCK");
        assert_eq!(ErrorCode::DbError.as_str(), "DB_ERROR");
        assert_eq!(ErrorCode::DbUnavailable.as_str(), "DB_UNAVAILABLE");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::Unauthorized), "UNAUTHORIZED");
        assert_eq!(format!("{}", ErrorCode::BidTooHigh), "BID_TOO_HIGH");
        assert_eq!(format!("{}", ErrorCode::OptimisticLock), "OPTIMISTIC_LOCK");
    }
}
