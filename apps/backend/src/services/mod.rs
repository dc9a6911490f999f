//! Orchestration over repos and transactions.

pub mod bid_ledger;
pub mod broadcast;
pub mod session;
pub mod snapshot;
pub mod teams;
