//! Transaction helpers shared by routes and services.

pub mod txn;
pub mod txn_policy;
