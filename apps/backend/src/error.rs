use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, InvalidStateKind, NotFoundKind};
use crate::errors::{domain, ErrorCode};
use crate::trace_ctx;

/// RFC 7807 problem+json body. `max_allowed` is an extension member carried
/// only by BID_TOO_HIGH rejections so owner screens can render the cap.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed: Option<i64>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bid too high: max allowed is {max_allowed}")]
    BidTooHigh { max_allowed: i64 },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::BidTooHigh { .. } => ErrorCode::BidTooHigh,
            AppError::NotFound { code, .. } => *code,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::BadRequest { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::BidTooHigh { max_allowed } => {
                format!("Raise exceeds the affordability cap of {max_allowed}")
            }
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Unauthorized => "Admin authorization required".to_string(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Db { detail, .. } => detail.clone(),
            AppError::DbUnavailable { detail, .. } => detail.clone(),
            AppError::Internal { detail, .. } => detail.clone(),
            AppError::Config { detail, .. } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BidTooHigh { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn bad_request(code: ErrorCode, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn conflict(code: ErrorCode, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn db(detail: String) -> Self {
        Self::Db { detail }
    }

    pub fn db_unavailable(detail: String) -> Self {
        Self::DbUnavailable { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::internal(format!("env var error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::Validation {
                code: ErrorCode::ValidationError,
                detail,
            },
            DomainError::InvalidState(kind, detail) => AppError::Validation {
                code: match kind {
                    InvalidStateKind::NoActivePlayer => ErrorCode::NoActivePlayer,
                    InvalidStateKind::PlayerNotAvailable => ErrorCode::PlayerNotAvailable,
                    InvalidStateKind::NoBidsPlaced => ErrorCode::NoBidsPlaced,
                },
                detail,
            },
            DomainError::BidTooHigh { max_allowed } => AppError::BidTooHigh { max_allowed },
            DomainError::Conflict(kind, detail) => AppError::Conflict {
                code: match kind {
                    domain::ConflictKind::UniqueTeamName => ErrorCode::UniqueTeamName,
                    domain::ConflictKind::JoinCodeConflict => ErrorCode::JoinCodeConflict,
                    domain::ConflictKind::OptimisticLock => ErrorCode::OptimisticLock,
                    _ => ErrorCode::Conflict,
                },
                detail,
            },
            DomainError::NotFound(kind, detail) => AppError::NotFound {
                code: match kind {
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Team => ErrorCode::TeamNotFound,
                    NotFoundKind::Bid => ErrorCode::BidNotFound,
                    NotFoundKind::Settings => ErrorCode::SettingsNotFound,
                    _ => ErrorCode::NotFound,
                },
                detail,
            },
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DbUnavailable => AppError::DbUnavailable { detail },
                InfraErrorKind::Timeout => AppError::Db { detail },
                InfraErrorKind::DataCorruption => AppError::Internal { detail },
                InfraErrorKind::Other(_) => AppError::Db { detail },
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().to_string();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();
        let max_allowed = match self {
            AppError::BidTooHigh { max_allowed } => Some(*max_allowed),
            _ => None,
        };

        let problem_details = ProblemDetails {
            type_: format!("https://auction.example/errors/{code}"),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
            trace_id: trace_id.clone(),
            max_allowed,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::ConflictKind;

    #[test]
    fn domain_not_found_maps_to_404_with_entity_code() {
        let err: AppError =
            DomainError::not_found(NotFoundKind::Team, "no team with code X").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), ErrorCode::TeamNotFound);
    }

    #[test]
    fn domain_invalid_state_maps_to_400() {
        let err: AppError =
            DomainError::invalid_state(InvalidStateKind::NoActivePlayer, "nothing up").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), ErrorCode::NoActivePlayer);
    }

    #[test]
    fn bid_too_high_carries_max_allowed() {
        let err: AppError = DomainError::bid_too_high(2000).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        match err {
            AppError::BidTooHigh { max_allowed } => assert_eq!(max_allowed, 2000),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn optimistic_lock_maps_to_409() {
        let err: AppError =
            DomainError::conflict(ConflictKind::OptimisticLock, "raise lost the race").into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), ErrorCode::OptimisticLock);
    }

    #[test]
    fn humanize_code_title_case() {
        assert_eq!(AppError::humanize_code("BID_TOO_HIGH"), "Bid Too High");
        assert_eq!(AppError::humanize_code("UNAUTHORIZED"), "Unauthorized");
    }
}
