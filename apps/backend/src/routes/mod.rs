use actix_web::web;

pub mod admin;
pub mod auction;
pub mod health;
pub mod players;
pub mod teams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auction::configure_routes)
        .configure(players::configure_routes)
        .configure(teams::configure_routes)
        .configure(admin::configure_routes);
}
