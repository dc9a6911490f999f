//! Public auction routes: snapshot, team login, and the raise endpoint.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::snapshot::CurrentBidView;
use crate::error::AppError;
use crate::services::{bid_ledger, snapshot, teams};
use crate::state::app_state::AppState;
use crate::ws::protocol::AuctionEvent;

#[derive(Debug, Deserialize)]
struct TeamCodeBody {
    code: String,
}

#[derive(Serialize)]
struct RaiseResponse {
    current_bid: CurrentBidView,
    max_allowed: i64,
}

/// GET /api/auction/state
async fn get_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let snapshot = snapshot::load_snapshot(db).await.map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/auction/team/login
///
/// Resolves a team by its join code and returns the team's budget
/// position together with the current auction snapshot.
async fn team_login(
    app_state: web::Data<AppState>,
    body: web::Json<TeamCodeBody>,
) -> Result<HttpResponse, AppError> {
    let code = body.into_inner().code;
    if code.trim().is_empty() {
        return Err(AppError::bad_request(
            crate::errors::ErrorCode::CodeRequired,
            "Team code is required".to_string(),
        ));
    }

    let db = app_state.require_db()?;
    let view = teams::login(db, &code).await.map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/auction/bid/raise
///
/// Commits a raise on behalf of the team identified by `code`. The
/// `bid_updated` event is published only after the transaction commits.
async fn raise_bid(
    app_state: web::Data<AppState>,
    body: web::Json<TeamCodeBody>,
) -> Result<HttpResponse, AppError> {
    let code = body.into_inner().code;
    if code.trim().is_empty() {
        return Err(AppError::bad_request(
            crate::errors::ErrorCode::CodeRequired,
            "Team code is required".to_string(),
        ));
    }

    let outcome = with_txn(&app_state, |txn| {
        let code = code.clone();
        Box::pin(async move { Ok(bid_ledger::place_raise(txn, &code).await?) })
    })
    .await?;

    app_state.broadcaster().publish(AuctionEvent::BidUpdated {
        player_id: outcome.player_id,
        amount: outcome.amount,
        team_name: Some(outcome.team_name.clone()),
        team_logo_url: outcome.team_logo_url.clone(),
    });

    Ok(HttpResponse::Ok().json(RaiseResponse {
        current_bid: CurrentBidView {
            amount: outcome.amount,
            team_name: Some(outcome.team_name),
            team_logo_url: outcome.team_logo_url,
        },
        max_allowed: outcome.max_allowed,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/auction/state", web::get().to(get_state))
        .route("/api/auction/team/login", web::post().to(team_login))
        .route("/api/auction/bid/raise", web::post().to(raise_bid));
    cfg.route("/ws", web::get().to(crate::ws::session::upgrade));
}
