//! SeaORM adapter for active bids and their raise history.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::{active_bids, bid_raises};

/// The bid row for a player, active or not (at most one exists)
pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<active_bids::Model>, sea_orm::DbErr> {
    active_bids::Entity::find()
        .filter(active_bids::Column::PlayerId.eq(player_id))
        .one(conn)
        .await
}

pub async fn find_active_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<active_bids::Model>, sea_orm::DbErr> {
    active_bids::Entity::find()
        .filter(active_bids::Column::PlayerId.eq(player_id))
        .filter(active_bids::Column::Active.eq(true))
        .one(conn)
        .await
}

/// Insert the bid row for a player, seeded at `seed_amount` with no
/// leading team. `ON CONFLICT DO NOTHING` on the player_id unique index
/// keeps a lost seed race from aborting the enclosing transaction; the
/// caller re-reads whichever row survived. Returns the number of rows
/// actually inserted (0 when another seeder won).
pub async fn seed_if_absent(
    txn: &DatabaseTransaction,
    player_id: i64,
    seed_amount: i64,
) -> Result<u64, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let bid = active_bids::ActiveModel {
        id: sea_orm::NotSet,
        player_id: Set(player_id),
        current_amount: Set(seed_amount),
        current_team_id: Set(None),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active_bids::Entity::insert(bid)
        .on_conflict(
            OnConflict::column(active_bids::Column::PlayerId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await
}

/// Conditional raise commit: move the bid to `next_amount` with `team_id`
/// leading, but only if `current_amount` still equals `expected_amount`.
///
/// Returns false when the guard fails (a concurrent raise won the race);
/// the caller re-reads and retries or rejects.
pub async fn raise_if_amount(
    txn: &DatabaseTransaction,
    bid_id: i64,
    expected_amount: i64,
    next_amount: i64,
    team_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let res = active_bids::Entity::update_many()
        .col_expr(active_bids::Column::CurrentAmount, Expr::value(next_amount))
        .col_expr(active_bids::Column::CurrentTeamId, Expr::value(team_id))
        .col_expr(
            active_bids::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .filter(active_bids::Column::Id.eq(bid_id))
        .filter(active_bids::Column::CurrentAmount.eq(expected_amount))
        .filter(active_bids::Column::Active.eq(true))
        .exec(txn)
        .await?;
    Ok(res.rows_affected == 1)
}

/// Append a raise history row
pub async fn append_raise(
    txn: &DatabaseTransaction,
    bid_id: i64,
    team_id: i64,
    amount: i64,
) -> Result<bid_raises::Model, sea_orm::DbErr> {
    let raise = bid_raises::ActiveModel {
        id: sea_orm::NotSet,
        bid_id: Set(bid_id),
        team_id: Set(team_id),
        amount: Set(amount),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    raise.insert(txn).await
}

/// Raise history for a bid in chronological order
pub async fn find_raises<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bid_id: i64,
) -> Result<Vec<bid_raises::Model>, sea_orm::DbErr> {
    bid_raises::Entity::find()
        .filter(bid_raises::Column::BidId.eq(bid_id))
        .order_by(bid_raises::Column::CreatedAt, Order::Asc)
        .order_by(bid_raises::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Delete any bid rows for a player (select/reset path; history cascades)
pub async fn delete_by_player(
    txn: &DatabaseTransaction,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = active_bids::Entity::delete_many()
        .filter(active_bids::Column::PlayerId.eq(player_id))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}

/// Deactivate one bid, preserving it for last-sold read-back
pub async fn deactivate(
    txn: &DatabaseTransaction,
    model: active_bids::Model,
) -> Result<active_bids::Model, sea_orm::DbErr> {
    let mut bid: active_bids::ActiveModel = model.into();
    bid.active = Set(false);
    bid.updated_at = Set(time::OffsetDateTime::now_utc());
    bid.update(txn).await
}

/// Deactivate every active bid (session reset)
pub async fn deactivate_all(txn: &DatabaseTransaction) -> Result<u64, sea_orm::DbErr> {
    let res = active_bids::Entity::update_many()
        .col_expr(active_bids::Column::Active, Expr::value(false))
        .col_expr(
            active_bids::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .filter(active_bids::Column::Active.eq(true))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}
