//! Admin routes. Everything here sits behind the `AdminToken` extractor,
//! so unauthorized requests bounce before any state is touched.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::adapters::teams_sea::{TeamCreate, TeamUpdate};
use crate::db::txn::with_txn;
use crate::entities::players::{House, Strength};
use crate::error::AppError;
use crate::extractors::admin_token::AdminToken;
use crate::repos::settings::SettingsPatch;
use crate::repos::{players, settings, teams};
use crate::services::session;
use crate::state::app_state::AppState;
use crate::ws::protocol::AuctionEvent;

#[derive(Debug, Deserialize)]
struct SelectPlayerBody {
    player_id: i64,
}

#[derive(Debug, Deserialize)]
struct WalletBody {
    amount: i64,
}

#[derive(Debug, Deserialize)]
struct PlayerCreateBody {
    name: String,
    batch: i16,
    house: House,
    strength: Strength,
    phone_number: Option<String>,
    base_price: Option<i64>,
    photo_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PlayerUpdateBody {
    name: Option<String>,
    batch: Option<i16>,
    house: Option<House>,
    strength: Option<Strength>,
    phone_number: Option<Option<String>>,
    base_price: Option<i64>,
    photo_url: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct TeamCreateBody {
    name: String,
    code: String,
    logo_url: Option<String>,
    wallet: Option<i64>,
    max_players: Option<i16>,
}

#[derive(Debug, Deserialize, Default)]
struct TeamUpdateBody {
    name: Option<String>,
    code: Option<String>,
    logo_url: Option<Option<String>>,
    wallet: Option<i64>,
    max_players: Option<i16>,
}

/// GET /api/admin/settings
async fn get_settings(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let settings = settings::require_settings(db).await.map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(settings))
}

/// PUT /api/admin/settings
async fn put_settings(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
    body: web::Json<SettingsPatch>,
) -> Result<HttpResponse, AppError> {
    let patch = body.into_inner();
    let updated = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(session::update_settings(txn, patch).await?) })
    })
    .await?;

    app_state.broadcaster().publish(AuctionEvent::SettingsUpdated {
        min_increment: updated.min_increment,
        base_price: updated.base_price,
    });

    Ok(HttpResponse::Ok().json(updated))
}

/// POST /api/admin/current-player
async fn select_current_player(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
    body: web::Json<SelectPlayerBody>,
) -> Result<HttpResponse, AppError> {
    let player_id = body.into_inner().player_id;
    let player = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(session::select_player(txn, player_id).await?) })
    })
    .await?;

    app_state
        .broadcaster()
        .publish(AuctionEvent::CurrentPlayerChanged {
            player_id: Some(player.id),
        });

    Ok(HttpResponse::Ok().json(player))
}

/// POST /api/admin/sell
async fn sell_current_player(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let sale = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(session::settle_sale(txn).await?) })
    })
    .await?;

    let broadcaster = app_state.broadcaster();
    broadcaster.publish(AuctionEvent::PlayerSold {
        player_id: sale.player_id,
        team_name: sale.team_name.clone(),
        price: sale.price,
    });
    broadcaster.publish(AuctionEvent::CurrentPlayerChanged { player_id: None });

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "player_id": sale.player_id,
        "player_name": sale.player_name,
        "team_id": sale.team_id,
        "team_name": sale.team_name,
        "price": sale.price,
    })))
}

/// POST /api/admin/reset
async fn reset_session(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let deactivated = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(session::reset(txn).await?) })
    })
    .await?;

    app_state
        .broadcaster()
        .publish(AuctionEvent::CurrentPlayerChanged { player_id: None });

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deactivated_bids": deactivated })))
}

/// PUT /api/admin/teams/{id}/wallet
async fn put_team_wallet(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<WalletBody>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let amount = body.into_inner().amount;
    let team = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(session::adjust_wallet(txn, team_id, amount).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(team))
}

/// POST /api/admin/players
async fn create_player(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
    body: web::Json<PlayerCreateBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.name.trim().is_empty() {
        return Err(AppError::bad_request(
            crate::errors::ErrorCode::ValidationError,
            "Player name is required".to_string(),
        ));
    }

    let mut dto = PlayerCreate::new(body.name, body.batch, body.house, body.strength);
    dto.phone_number = body.phone_number;
    dto.photo_url = body.photo_url;
    if let Some(base_price) = body.base_price {
        dto = dto.with_base_price(base_price);
    }

    let player = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(players::create_player(txn, dto).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(player))
}

/// PUT /api/admin/players/{id}
async fn update_player(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PlayerUpdateBody>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let body = body.into_inner();
    let dto = PlayerUpdate {
        name: body.name,
        batch: body.batch,
        house: body.house,
        strength: body.strength,
        phone_number: body.phone_number,
        base_price: body.base_price,
        photo_url: body.photo_url,
    };

    let player = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(players::update_player(txn, player_id, dto).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(player))
}

/// POST /api/admin/teams
async fn create_team(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
    body: web::Json<TeamCreateBody>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.name.trim().is_empty() || body.code.trim().is_empty() {
        return Err(AppError::bad_request(
            crate::errors::ErrorCode::ValidationError,
            "Team name and code are required".to_string(),
        ));
    }

    let mut dto = TeamCreate::new(body.name, body.code);
    dto.logo_url = body.logo_url;
    if let Some(wallet) = body.wallet {
        dto = dto.with_wallet(wallet);
    }
    if let Some(max_players) = body.max_players {
        dto = dto.with_max_players(max_players);
    }

    let team = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(teams::create_team(txn, dto).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(team))
}

/// PUT /api/admin/teams/{id}
async fn update_team(
    _admin: AdminToken,
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<TeamUpdateBody>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let body = body.into_inner();
    let dto = TeamUpdate {
        name: body.name,
        code: body.code,
        logo_url: body.logo_url,
        wallet: body.wallet,
        max_players: body.max_players,
    };

    let team = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(teams::update_team(txn, team_id, dto).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(team))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/admin/settings", web::get().to(get_settings))
        .route("/api/admin/settings", web::put().to(put_settings))
        .route(
            "/api/admin/current-player",
            web::post().to(select_current_player),
        )
        .route("/api/admin/sell", web::post().to(sell_current_player))
        .route("/api/admin/reset", web::post().to(reset_session))
        .route(
            "/api/admin/teams/{id}/wallet",
            web::put().to(put_team_wallet),
        )
        .route("/api/admin/players", web::post().to(create_player))
        .route("/api/admin/players/{id}", web::put().to(update_player))
        .route("/api/admin/teams", web::post().to(create_team))
        .route("/api/admin/teams/{id}", web::put().to(update_team));
}
