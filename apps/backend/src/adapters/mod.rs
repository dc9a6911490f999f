//! SeaORM adapters: one module per entity, raw queries only.
//!
//! Adapters return entity models and `sea_orm::DbErr`; repos translate both
//! into domain terms.

pub mod bids_sea;
pub mod players_sea;
pub mod purchases_sea;
pub mod settings_sea;
pub mod teams_sea;
