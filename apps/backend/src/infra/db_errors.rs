//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `DomainError` here; higher layers
//! then map `DomainError` to `AppError` via `From`.

use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Map Postgres unique-constraint names to domain-specific conflicts.
fn map_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_teams_name") {
        return Some((ConflictKind::UniqueTeamName, "Team name already exists"));
    }
    if error_msg.contains("ux_teams_code") {
        return Some((ConflictKind::JoinCodeConflict, "Join code already exists"));
    }
    if error_msg.contains("ux_active_bids_player_id") {
        // Two lazy-create races for the same player; caller re-reads
        return Some((
            ConflictKind::OptimisticLock,
            "Bid already created for player",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) => {
            warn!(trace_id = %trace_ctx::trace_id(), "db connection unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    // Unique violations (SQLSTATE 23505) surface as Query/Exec errors whose
    // message names the violated constraint
    if error_msg.contains("23505") || error_msg.contains("duplicate key") {
        if let Some((kind, detail)) = map_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(ConflictKind::Other("Unique".into()), "Duplicate record");
    }

    warn!(trace_id = %trace_ctx::trace_id(), error = %error_msg, "unmapped db error");
    DomainError::infra(InfraErrorKind::Other("db".into()), error_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(sea_orm::DbErr::RecordNotFound("players".into()));
        assert!(matches!(err, DomainError::NotFound(_, _)));
    }

    #[test]
    fn team_name_unique_violation_maps_to_conflict() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "duplicate key value violates unique constraint \"ux_teams_name\"".into(),
        ));
        assert_eq!(
            err,
            DomainError::conflict(ConflictKind::UniqueTeamName, "Team name already exists")
        );
    }

    #[test]
    fn join_code_unique_violation_maps_to_conflict() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "ERROR: duplicate key value violates unique constraint \"ux_teams_code\" SQLSTATE(23505)".into(),
        ));
        assert_eq!(
            err,
            DomainError::conflict(ConflictKind::JoinCodeConflict, "Join code already exists")
        );
    }
}
