//! Bid ledger: the only writer of `active_bids` raise state.
//!
//! Raises commit through a conditional update keyed on the previously
//! read `current_amount`, so two teams racing on the same amount resolve
//! to exactly one winner; the loser re-reads and retries against the new
//! amount up to a small bound.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::debug;

use crate::domain::{affordability, raise};
use crate::errors::domain::{ConflictKind, DomainError, InvalidStateKind};
use crate::repos::bids::{self, Bid};
use crate::repos::players::Player;
use crate::repos::settings::Settings;
use crate::repos::teams::{self, TeamState};
use crate::repos::{players, settings};

const MAX_RAISE_ATTEMPTS: u32 = 3;

/// A committed raise, as reported to the caller and broadcast to viewers.
#[derive(Debug, Clone, PartialEq)]
pub struct RaiseOutcome {
    pub player_id: i64,
    pub amount: i64,
    pub team_name: String,
    pub team_logo_url: Option<String>,
    pub max_allowed: i64,
}

/// Pre-flight decision for a raise, independent of the live bid amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RaisePlan {
    player_id: i64,
    seed_amount: i64,
    max_allowed: i64,
    min_increment: i64,
}

/// Pure guard logic: everything about a raise that does not depend on
/// the current bid amount.
fn plan_raise(
    settings: &Settings,
    player: &Player,
    team_state: &TeamState,
) -> Result<RaisePlan, DomainError> {
    if !settings.auction_active {
        return Err(DomainError::validation("Auction is not active"));
    }
    if player.sold {
        return Err(DomainError::invalid_state(
            InvalidStateKind::PlayerNotAvailable,
            format!("Player {} has already been sold", player.name),
        ));
    }
    if team_state.remaining_slots <= 0 {
        return Err(DomainError::validation("Team roster is already full"));
    }

    let max_allowed = affordability::max_allowed_bid(
        team_state.remaining,
        team_state.remaining_slots,
        settings.base_price,
    );
    let seed_amount = if player.base_price > 0 {
        player.base_price
    } else {
        settings.base_price
    };

    Ok(RaisePlan {
        player_id: player.id,
        seed_amount,
        max_allowed,
        min_increment: settings.min_increment,
    })
}

/// Storage the raise loop drives. One impl delegates to the bids repo
/// over the caller's transaction; tests swap in an in-memory one to
/// exercise the retry behavior under contention.
trait RaiseStore {
    async fn active_bid(&self, player_id: i64) -> Result<Option<Bid>, DomainError>;
    async fn seed_bid(&self, player_id: i64, seed_amount: i64) -> Result<Bid, DomainError>;
    async fn commit_raise(
        &self,
        bid_id: i64,
        expected: i64,
        next: i64,
        team_id: i64,
    ) -> Result<bool, DomainError>;
    async fn record_raise(&self, bid_id: i64, team_id: i64, amount: i64)
        -> Result<(), DomainError>;
}

struct TxnStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl RaiseStore for TxnStore<'_> {
    async fn active_bid(&self, player_id: i64) -> Result<Option<Bid>, DomainError> {
        bids::find_active_bid(self.txn, player_id).await
    }

    async fn seed_bid(&self, player_id: i64, seed_amount: i64) -> Result<Bid, DomainError> {
        bids::seed_bid(self.txn, player_id, seed_amount).await
    }

    async fn commit_raise(
        &self,
        bid_id: i64,
        expected: i64,
        next: i64,
        team_id: i64,
    ) -> Result<bool, DomainError> {
        bids::raise_if_amount(self.txn, bid_id, expected, next, team_id).await
    }

    async fn record_raise(
        &self,
        bid_id: i64,
        team_id: i64,
        amount: i64,
    ) -> Result<(), DomainError> {
        bids::append_raise(self.txn, bid_id, team_id, amount).await?;
        Ok(())
    }
}

/// Load-or-seed the bid, then commit `current + min_increment` with a
/// conditional update. A failed condition means a concurrent raise moved
/// the amount; re-read and try again up to `MAX_RAISE_ATTEMPTS`, then
/// report the contention as a conflict.
async fn run_raise_loop<S: RaiseStore>(
    store: &S,
    plan: &RaisePlan,
    team_id: i64,
) -> Result<i64, DomainError> {
    for attempt in 0..MAX_RAISE_ATTEMPTS {
        let bid = match store.active_bid(plan.player_id).await? {
            Some(bid) => bid,
            None => match store.seed_bid(plan.player_id, plan.seed_amount).await {
                Ok(bid) => bid,
                Err(DomainError::Conflict(ConflictKind::OptimisticLock, _)) => continue,
                Err(err) => return Err(err),
            },
        };

        let next = raise::next_raise(bid.current_amount, plan.min_increment, plan.max_allowed)?;

        if store
            .commit_raise(bid.id, bid.current_amount, next, team_id)
            .await?
        {
            store.record_raise(bid.id, team_id, next).await?;
            return Ok(next);
        }

        debug!(
            player_id = plan.player_id,
            attempt, "raise lost the race, re-reading"
        );
    }

    Err(DomainError::conflict(
        ConflictKind::OptimisticLock,
        "Bid moved too quickly, try again",
    ))
}

pub async fn active_bid<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Bid>, DomainError> {
    bids::find_active_bid(conn, player_id).await
}

/// Raise the bid on the current player on behalf of the team identified
/// by `team_code`. Seeds the bid row lazily on the first raise.
pub async fn place_raise(
    txn: &DatabaseTransaction,
    team_code: &str,
) -> Result<RaiseOutcome, DomainError> {
    let team = teams::require_team_by_code(txn, team_code).await?;
    let current = settings::require_settings(txn).await?;
    let player_id = current.require_current_player()?;
    let player = players::require_player(txn, player_id).await?;
    let team_state = teams::load_team_state(txn, &team).await?;
    let plan = plan_raise(&current, &player, &team_state)?;

    let store = TxnStore { txn };
    let amount = run_raise_loop(&store, &plan, team.id).await?;

    Ok(RaiseOutcome {
        player_id,
        amount,
        team_name: team.name,
        team_logo_url: team.logo_url,
        max_allowed: plan.max_allowed,
    })
}

/// Remove bid state for a player so a new round starts clean.
pub async fn clear_bids_for_player(
    txn: &DatabaseTransaction,
    player_id: i64,
) -> Result<u64, DomainError> {
    bids::clear_bids_for_player(txn, player_id).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn settings() -> Settings {
        Settings {
            base_price: 2500,
            min_increment: 500,
            max_players_per_team: 15,
            current_player_id: Some(1),
            auction_active: true,
        }
    }

    fn player(sold: bool, base_price: i64) -> Player {
        use crate::entities::players::{House, Strength};
        Player {
            id: 1,
            name: "Test Player".into(),
            batch: 2024,
            house: House::Aravali,
            strength: Strength::Batsman,
            phone_number: None,
            total_matches: 0,
            total_score: 0,
            total_wickets: 0,
            base_price,
            photo_url: None,
            is_captain: false,
            is_icon: false,
            is_retained: false,
            is_traded: false,
            sold,
            sold_to_team: None,
            sold_price: None,
        }
    }

    fn fresh_team_state() -> TeamState {
        TeamState {
            spent: 0,
            remaining: 100_000,
            owned: 0,
            remaining_slots: 15,
        }
    }

    #[test]
    fn plan_caps_by_affordability() {
        let plan = plan_raise(&settings(), &player(false, 1000), &fresh_team_state()).unwrap();
        // 100_000 - 14 * 2500
        assert_eq!(plan.max_allowed, 65_000);
        assert_eq!(plan.seed_amount, 1000);
        assert_eq!(plan.min_increment, 500);
    }

    #[test]
    fn plan_rejects_paused_auction() {
        let mut paused = settings();
        paused.auction_active = false;
        let err = plan_raise(&paused, &player(false, 1000), &fresh_team_state()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn plan_rejects_sold_player() {
        let err = plan_raise(&settings(), &player(true, 1000), &fresh_team_state()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidState(InvalidStateKind::PlayerNotAvailable, _)
        ));
    }

    #[test]
    fn plan_falls_back_to_global_base_price() {
        let plan = plan_raise(&settings(), &player(false, 0), &fresh_team_state()).unwrap();
        assert_eq!(plan.seed_amount, 2500);
    }

    #[test]
    fn plan_rejects_full_roster() {
        let state = TeamState {
            spent: 37_500,
            remaining: 62_500,
            owned: 15,
            remaining_slots: 0,
        };
        let err = plan_raise(&settings(), &player(false, 1000), &state).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    /// In-memory raise store: one bid row whose amount can be nudged by a
    /// scripted rival between the re-read and the conditional commit.
    struct FakeStore {
        bid: Mutex<Option<Bid>>,
        rival_raises: Mutex<Vec<i64>>,
        commit_calls: Mutex<u32>,
    }

    impl FakeStore {
        fn empty() -> Self {
            Self {
                bid: Mutex::new(None),
                rival_raises: Mutex::new(Vec::new()),
                commit_calls: Mutex::new(0),
            }
        }

        fn with_bid(amount: i64) -> Self {
            let store = Self::empty();
            *store.bid.lock().unwrap() = Some(Bid {
                id: 1,
                player_id: 1,
                current_amount: amount,
                current_team_id: Some(99),
                active: true,
            });
            store
        }

        /// Queue amounts a rival moves the bid to, one per commit attempt.
        fn rival_will_raise_to(self, amounts: &[i64]) -> Self {
            *self.rival_raises.lock().unwrap() = amounts.to_vec();
            self
        }

        fn commit_calls(&self) -> u32 {
            *self.commit_calls.lock().unwrap()
        }
    }

    impl RaiseStore for FakeStore {
        async fn active_bid(&self, _player_id: i64) -> Result<Option<Bid>, DomainError> {
            Ok(self.bid.lock().unwrap().clone())
        }

        async fn seed_bid(&self, player_id: i64, seed_amount: i64) -> Result<Bid, DomainError> {
            let mut bid = self.bid.lock().unwrap();
            let seeded = bid.get_or_insert(Bid {
                id: 1,
                player_id,
                current_amount: seed_amount,
                current_team_id: None,
                active: true,
            });
            Ok(seeded.clone())
        }

        async fn commit_raise(
            &self,
            _bid_id: i64,
            expected: i64,
            next: i64,
            team_id: i64,
        ) -> Result<bool, DomainError> {
            *self.commit_calls.lock().unwrap() += 1;
            let mut bid = self.bid.lock().unwrap();
            let row = bid.as_mut().unwrap();
            if let Some(rival_amount) = {
                let mut rivals = self.rival_raises.lock().unwrap();
                (!rivals.is_empty()).then(|| rivals.remove(0))
            } {
                row.current_amount = rival_amount;
            }
            if row.current_amount != expected {
                return Ok(false);
            }
            row.current_amount = next;
            row.current_team_id = Some(team_id);
            Ok(true)
        }

        async fn record_raise(
            &self,
            _bid_id: i64,
            _team_id: i64,
            _amount: i64,
        ) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn plan() -> RaisePlan {
        RaisePlan {
            player_id: 1,
            seed_amount: 1000,
            max_allowed: 65_000,
            min_increment: 500,
        }
    }

    #[tokio::test]
    async fn first_raise_seeds_then_steps_once() {
        let store = FakeStore::empty();
        let amount = run_raise_loop(&store, &plan(), 5).await.unwrap();
        assert_eq!(amount, 1500);
        assert_eq!(
            store.bid.lock().unwrap().as_ref().unwrap().current_team_id,
            Some(5)
        );
    }

    #[tokio::test]
    async fn lost_race_re_reads_and_commits_on_the_new_amount() {
        let store = FakeStore::with_bid(2500).rival_will_raise_to(&[3000]);
        let amount = run_raise_loop(&store, &plan(), 5).await.unwrap();
        // first attempt expected 2500 and lost; retry stepped from 3000
        assert_eq!(amount, 3500);
        assert_eq!(store.commit_calls(), 2);
    }

    #[tokio::test]
    async fn sustained_contention_is_a_conflict_after_bounded_attempts() {
        let store = FakeStore::with_bid(2500).rival_will_raise_to(&[3000, 3500, 4000]);
        let err = run_raise_loop(&store, &plan(), 5).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::OptimisticLock, _)
        ));
        assert_eq!(store.commit_calls(), MAX_RAISE_ATTEMPTS);
    }

    #[tokio::test]
    async fn retry_still_enforces_the_cap() {
        let store = FakeStore::with_bid(2500).rival_will_raise_to(&[64_800]);
        let err = run_raise_loop(&store, &plan(), 5).await.unwrap_err();
        assert!(matches!(err, DomainError::BidTooHigh { max_allowed: 65_000 }));
    }
}
