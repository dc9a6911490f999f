//! Affordability arithmetic for team wallets.
//!
//! A team must always be able to fill its remaining roster slots at the
//! base price, so the ceiling on any single bid reserves base_price for
//! every slot beyond the one being contested.

/// Wallet left after purchases. Floors at zero so an over-spent wallet
/// (manual admin adjustment) never yields a negative budget.
pub fn remaining_wallet(wallet: i64, spent: i64) -> i64 {
    (wallet - spent).max(0)
}

/// Roster slots left. Floors at zero for rosters already over the cap.
pub fn remaining_slots(max_players: i64, owned: i64) -> i64 {
    (max_players - owned).max(0)
}

/// Maximum amount a team may bid on the current player.
///
/// Reserves `base_price` for each remaining slot other than the one the
/// team is bidding on. At zero slots nothing is reserved and the full
/// remaining wallet comes back; whether a full roster may bid at all is
/// decided by the ledger, not here.
pub fn max_allowed_bid(remaining: i64, remaining_slots: i64, base_price: i64) -> i64 {
    let reserve = (remaining_slots - 1).max(0) * base_price.max(0);
    (remaining - reserve).max(0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn full_wallet_single_slot_can_go_all_in() {
        assert_eq!(max_allowed_bid(2000, 1, 2500), 2000);
    }

    #[test]
    fn reserves_base_price_per_extra_slot() {
        // 100_000 wallet, 15 slots, 2500 base: reserve 14 * 2500 = 35_000
        assert_eq!(max_allowed_bid(100_000, 15, 2500), 65_000);
    }

    #[test]
    fn zero_slots_reserves_nothing() {
        assert_eq!(max_allowed_bid(2000, 0, 2500), 2000);
        assert_eq!(max_allowed_bid(100_000, 0, 2500), 100_000);
    }

    #[test]
    fn floors_at_zero_when_reserve_exceeds_wallet() {
        assert_eq!(max_allowed_bid(5000, 15, 2500), 0);
    }

    #[test]
    fn remaining_wallet_floors_at_zero() {
        assert_eq!(remaining_wallet(100_000, 40_000), 60_000);
        assert_eq!(remaining_wallet(100_000, 120_000), 0);
    }

    #[test]
    fn remaining_slots_floors_at_zero() {
        assert_eq!(remaining_slots(15, 3), 12);
        assert_eq!(remaining_slots(15, 20), 0);
    }

    proptest! {
        #[test]
        fn never_negative(
            remaining in -1_000_000i64..1_000_000,
            slots in -10i64..30,
            base in -10_000i64..10_000,
        ) {
            prop_assert!(max_allowed_bid(remaining, slots, base) >= 0);
        }

        #[test]
        fn never_exceeds_remaining_wallet(
            remaining in 0i64..1_000_000,
            slots in 0i64..30,
            base in 0i64..10_000,
        ) {
            prop_assert!(max_allowed_bid(remaining, slots, base) <= remaining);
        }

        #[test]
        fn monotone_in_remaining(
            remaining in 0i64..1_000_000,
            extra in 0i64..100_000,
            slots in 0i64..30,
            base in 0i64..10_000,
        ) {
            prop_assert!(
                max_allowed_bid(remaining + extra, slots, base)
                    >= max_allowed_bid(remaining, slots, base)
            );
        }

        #[test]
        fn antitone_in_slots(
            remaining in 0i64..1_000_000,
            slots in 0i64..29,
            base in 0i64..10_000,
        ) {
            prop_assert!(
                max_allowed_bid(remaining, slots + 1, base)
                    <= max_allowed_bid(remaining, slots, base)
            );
        }
    }
}
