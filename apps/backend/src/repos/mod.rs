//! Repository functions for the domain layer.
//!
//! Repos wrap the `*_sea` adapters, translate `DbErr` into `DomainError`,
//! and hand out domain models instead of entity models.

pub mod bids;
pub mod players;
pub mod purchases;
pub mod settings;
pub mod teams;
