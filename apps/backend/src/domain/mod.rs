//! Pure auction rules with no persistence or transport concerns.

pub mod affordability;
pub mod raise;
pub mod snapshot;
