use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::state::app_state::AppState;
use crate::AppError;

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Admin gate: proves the request carried the configured admin token.
///
/// Extracting this before any other state guarantees unauthorized
/// requests are rejected without touching the database.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

impl FromRequest for AdminToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState missing from request".to_string()))?;

            let presented = req
                .headers()
                .get(ADMIN_TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(AppError::unauthorized)?;

            if !state.security.is_admin(presented) {
                return Err(AppError::unauthorized());
            }

            Ok(AdminToken)
        })
    }
}
