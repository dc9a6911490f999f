//! Public team read-side. Join codes never serialize.

use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::repos::teams;
use crate::services::teams as team_service;
use crate::state::app_state::AppState;

/// GET /api/teams
async fn list_teams(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let teams = teams::list_teams(db).await.map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(teams))
}

/// GET /api/teams/{id}
async fn get_team(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let view = team_service::team_detail(db, path.into_inner())
        .await
        .map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/teams", web::get().to(list_teams))
        .route("/api/teams/{id}", web::get().to(get_team));
}
