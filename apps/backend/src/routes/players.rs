//! Public player read-side.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::error::AppError;
use crate::repos::players;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct PlayerListQuery {
    sold: Option<bool>,
}

/// GET /api/players?sold=
async fn list_players(
    app_state: web::Data<AppState>,
    query: web::Query<PlayerListQuery>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let players = players::list_players(db, query.sold)
        .await
        .map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(players))
}

/// GET /api/players/{id}
async fn get_player(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let player = players::require_player(db, path.into_inner())
        .await
        .map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(player))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/players", web::get().to(list_players))
        .route("/api/players/{id}", web::get().to(get_player));
}
