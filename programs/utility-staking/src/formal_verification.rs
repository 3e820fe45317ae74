// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. State invariants checked over generated operation sequences
// 2. Fuzzing sweeps over the math helpers (edge cases)
// 3. Failure atomicity: a rejected call leaves its record untouched
// ============================================================================

#[cfg(test)]
mod formal_tests {
    use crate::constants::*;
    use crate::helpers::math::*;
    use crate::state::{Comment, KeywordVault, StakeRecord, UtilityToken};
    use anchor_lang::prelude::Pubkey;
    use std::collections::HashMap;

    const T0: i64 = 1_700_000_000;

    /// Deterministic xorshift generator so sweeps are reproducible
    struct Rng(u64);

    impl Rng {
        fn next(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        fn below(&mut self, n: u64) -> u64 {
            self.next() % n
        }
    }

    fn token(threshold: u64) -> UtilityToken {
        let mut t = UtilityToken::default();
        t.initialize(Pubkey::new_unique(), Pubkey::new_unique(), "UTIL".into(), threshold, T0, 1, 1)
            .unwrap();
        t
    }

    fn vault() -> KeywordVault {
        let mut v = KeywordVault::default();
        v.initialize(Pubkey::new_unique(), "EVM".into(), T0, 1, 1).unwrap();
        v
    }

    // ========================================================================
    // STATE INVARIANTS
    // ========================================================================

    mod invariants {
        use super::*;

        /// Launch funds are fully accounted for: tax + liquidity == collected
        #[test]
        fn launch_split_conserves_funds() {
            let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
            let mut cases: Vec<u64> = vec![0, 1, 19, 20, 99, 100, 1_100_000, u64::MAX - 1, u64::MAX];
            cases.extend((0..500).map(|_| rng.next()));

            for funds in cases {
                let (tax, liquidity) = calculate_launch_split(funds).unwrap();
                assert_eq!(
                    tax as u128 + liquidity as u128,
                    funds as u128,
                    "split leaked value for funds={}",
                    funds
                );
                // tax is the floor of 5%
                assert!(tax as u128 * 100 <= funds as u128 * TAX_PERCENT as u128);
                assert!((tax as u128 + 1) * 100 > funds as u128 * TAX_PERCENT as u128);
            }
        }

        /// funds_collected equals the sum of accepted contributions
        #[test]
        fn funds_collected_is_sum_of_contributions() {
            let mut rng = Rng(42);
            let mut t = token(u64::MAX);
            let mut expected: u64 = 0;

            for _ in 0..1_000 {
                let amount = rng.below(1_000_000);
                match t.record_contribution(amount) {
                    Ok(total) => {
                        expected += amount;
                        assert_eq!(total, expected);
                    }
                    Err(_) => assert_eq!(amount, 0, "only zero contributions may fail here"),
                }
                assert_eq!(t.funds_collected, expected);
            }
        }

        /// Once launched, a token stays launched and stops accepting funds
        #[test]
        fn launch_is_irreversible() {
            let mut t = token(1_000);
            t.record_contribution(1_000).unwrap();
            t.launch(T0 + 1).unwrap();
            let frozen_funds = t.funds_collected;

            for i in 0..50 {
                assert!(t.launch(T0 + 2 + i).is_err());
                assert!(t.record_contribution(1 + i as u64).is_err());
                assert!(t.launched);
                assert_eq!(t.funds_collected, frozen_funds);
                assert_eq!(t.launched_at, T0 + 1);
            }
        }

        /// staker_count equals the number of distinct stakers, and
        /// total_staked equals the sum of their records
        #[test]
        fn vault_aggregates_match_records() {
            let mut rng = Rng(7);
            let mut v = vault();
            let vault_key = Pubkey::new_unique();
            let stakers: Vec<Pubkey> = (0..12).map(|_| Pubkey::new_unique()).collect();
            let mut records: HashMap<Pubkey, StakeRecord> = HashMap::new();

            for step in 0..400 {
                let staker = stakers[rng.below(stakers.len() as u64) as usize];
                let amount = 1 + rng.below(50_000);
                let record = records.entry(staker).or_default();

                let mut next = record.clone();
                let created = next.add_stake(vault_key, staker, amount, T0 + step, 1).unwrap();
                v.record_stake(amount, created).unwrap();
                *record = next;

                let sum: u64 = records.values().map(|r| r.amount).sum();
                assert_eq!(v.total_staked, sum);
                assert_eq!(v.staker_count, records.len() as u64);
            }
        }

        /// An eliminated vault never holds stake again
        #[test]
        fn elimination_is_terminal() {
            let mut v = vault();
            v.record_stake(200_000, true).unwrap();
            v.eliminate(200_000).unwrap();

            for amount in [1u64, 10, 1_000_000, u64::MAX] {
                assert!(v.record_stake(amount, true).is_err());
                assert!(v.record_stake(amount, false).is_err());
            }
            assert!(v.lock().is_err());
            assert!(v.eliminate(0).is_err());
            assert_eq!(v.total_staked, 0);
            assert!(v.eliminated);
            assert_eq!(v.total_burned, 200_000);
        }

        /// Distributions are at least REWARD_INTERVAL apart
        #[test]
        fn reward_interval_is_enforced() {
            let mut t = token(1);
            t.record_contribution(1).unwrap();
            t.launch(T0).unwrap();

            let mut last = t.last_reward_time;
            let mut now = T0;
            let mut rng = Rng(99);
            for _ in 0..300 {
                now += rng.below(REWARD_INTERVAL as u64 * 2) as i64;
                let ready = now - last >= REWARD_INTERVAL;
                assert_eq!(t.record_distribution(1, now).is_ok(), ready);
                if ready {
                    last = now;
                }
                assert_eq!(t.last_reward_time, last);
            }
        }
    }

    // ========================================================================
    // FAILURE ATOMICITY
    // ========================================================================

    mod atomicity {
        use super::*;

        #[test]
        fn rejected_token_operations_leave_state_unchanged() {
            let mut t = token(1_100_000);
            t.record_contribution(500_000).unwrap();

            let before = t.clone();
            assert!(t.record_contribution(0).is_err());
            assert!(t.launch(T0 + 5).is_err());
            assert!(t.record_distribution(10, T0 + REWARD_INTERVAL).is_err());
            assert!(t
                .initialize(Pubkey::new_unique(), Pubkey::new_unique(), "X".into(), 1, T0, 0, 0)
                .is_err());
            assert_eq!(t, before);
        }

        #[test]
        fn rejected_vault_operations_leave_state_unchanged() {
            let mut v = vault();
            v.record_stake(u64::MAX - 5, true).unwrap();

            let before = v.clone();
            assert!(v.record_stake(0, false).is_err());
            assert!(v.record_stake(6, false).is_err()); // overflow
            assert!(v.initialize(Pubkey::new_unique(), "EVM".into(), T0, 0, 0).is_err());
            assert_eq!(v, before);

            v.lock().unwrap();
            let locked = v.clone();
            assert!(v.record_stake(1, true).is_err());
            assert_eq!(v, locked);
        }

        #[test]
        fn rejected_boost_leaves_comment_unchanged() {
            let mut c = Comment::default();
            c.initialize(Pubkey::new_unique(), Pubkey::new_unique(), 3, "hello".into(), 10_000, T0, 1)
                .unwrap();
            c.apply_boost(5_000, T0 + 10).unwrap();

            let before = c.clone();
            assert!(c.apply_boost(0, T0 + 20).is_err());
            assert!(c.apply_boost(0, T0 + 10 * BOOST_DECAY_PERIOD).is_err());
            assert_eq!(c, before);
            assert_eq!(c.boost, 15_000);
        }

        #[test]
        fn rejected_comment_post_writes_nothing() {
            let mut c = Comment::default();
            let long = "z".repeat(MAX_COMMENT_LEN + 1);
            assert!(c
                .initialize(Pubkey::new_unique(), Pubkey::new_unique(), 0, long, 10, T0, 1)
                .is_err());
            assert_eq!(c, Comment::default());
        }
    }

    // ========================================================================
    // FUZZING SWEEPS
    // ========================================================================

    mod fuzzing {
        use super::*;

        /// A single payout never exceeds the released slice (floored at 1 unit)
        /// or the pool, and any eligible stake on a funded pool is paid
        #[test]
        fn reward_bounded_by_slice() {
            let mut rng = Rng(0xDEAD_BEEF);
            let mut cases: Vec<(u64, u64, u64)> = (1..=9).map(|pool| (pool, 100, 100)).collect();
            cases.push((1_000_000, 1, 1_000_000));
            cases.push((1, 1, u64::MAX));
            for _ in 0..2_000 {
                let pool = rng.next();
                let total = 1 + rng.below(u64::MAX - 1);
                let stake = rng.below(total + 1);
                cases.push((pool, stake, total));
            }

            for (pool, stake, total) in cases {
                let payout = calculate_reward(pool, stake, total).unwrap();
                let slice = pool as u128 * REWARD_POOL_SLICE_BPS as u128 / BPS_DENOMINATOR as u128;
                assert!(payout as u128 <= slice.max(1));
                assert!(payout <= pool);
                assert_eq!(payout > 0, stake > 0 && pool > 0, "pool={} stake={}/{}", pool, stake, total);
            }
        }

        /// Payouts across all stakers of a vault sum to at most the slice
        /// plus one floor unit per staker
        #[test]
        fn reward_shares_do_not_overpay() {
            let mut rng = Rng(1234);
            for _ in 0..200 {
                let pool = rng.below(1_000_000_000_000);
                let stakes: Vec<u64> = (0..1 + rng.below(20)).map(|_| 1 + rng.below(1_000_000)).collect();
                let total: u64 = stakes.iter().sum();

                let paid: u128 = stakes
                    .iter()
                    .map(|s| calculate_reward(pool, *s, total).unwrap() as u128)
                    .sum();
                let slice = pool as u128 * REWARD_POOL_SLICE_BPS as u128 / BPS_DENOMINATOR as u128;
                let n = stakes.len() as u128;
                assert!(paid <= slice + n, "overpaid {} > {} + {}", paid, slice, n);
                // truncation loses less than one unit per staker
                assert!(paid + n > slice);
            }
        }

        /// Larger stake never earns less
        #[test]
        fn reward_monotone_in_stake() {
            let pool = 987_654_321;
            let total = 1_000_000;
            let mut prev = 0;
            for stake in (0..=total).step_by(7_919) {
                let payout = calculate_reward(pool, stake, total).unwrap();
                assert!(payout >= prev);
                prev = payout;
            }
        }

        /// Boost never grows with time and never exceeds its stored value
        #[test]
        fn decay_monotone_non_increasing() {
            let mut rng = Rng(31337);
            for _ in 0..200 {
                let boost = rng.next();
                let mut prev = boost;
                let mut elapsed: i64 = 0;
                while elapsed < 80 * BOOST_DECAY_PERIOD {
                    let now = decayed_boost(boost, elapsed);
                    assert!(now <= prev);
                    assert!(now <= boost);
                    if elapsed < BOOST_DECAY_PERIOD {
                        assert_eq!(now, boost);
                    }
                    prev = now;
                    elapsed += 1 + rng.below(BOOST_DECAY_PERIOD as u64) as i64;
                }
                assert_eq!(decayed_boost(boost, 64 * BOOST_DECAY_PERIOD), 0);
            }
        }

        /// Reading the boost is pure: same inputs, same value
        #[test]
        fn current_boost_is_pure() {
            let mut c = Comment::default();
            c.initialize(Pubkey::new_unique(), Pubkey::new_unique(), 0, "p".into(), 123_456, T0, 1)
                .unwrap();
            let snapshot = c.clone();
            for offset in [0, 1, BOOST_DECAY_PERIOD, 5 * BOOST_DECAY_PERIOD] {
                assert_eq!(c.current_boost(T0 + offset), c.current_boost(T0 + offset));
            }
            assert_eq!(c, snapshot);
        }

        /// Boosting adds exactly `amount` on top of the decayed value
        #[test]
        fn boost_adds_to_decayed_value() {
            let mut rng = Rng(555);
            let mut c = Comment::default();
            c.initialize(Pubkey::new_unique(), Pubkey::new_unique(), 0, "p".into(), 1_000_000, T0, 1)
                .unwrap();

            let mut now = T0;
            for _ in 0..100 {
                now += rng.below(3 * BOOST_DECAY_PERIOD as u64) as i64;
                let amount = 1 + rng.below(1_000_000);
                let expected = c.current_boost(now) + amount;
                let decayed = c.apply_boost(amount, now).unwrap();
                assert_eq!(c.boost, expected);
                assert_eq!(decayed + amount, expected);
                assert_eq!(c.last_boost_time, now);
            }
            assert_eq!(c.boost_count, 100);
        }
    }

    // ========================================================================
    // STATE MACHINE
    // ========================================================================

    mod state_machine {
        use super::*;

        /// Open -> Locked -> Eliminated, and Open -> Eliminated; no way back
        #[test]
        fn keyword_vault_transitions() {
            let mut open = vault();
            assert!(open.is_open());

            let mut locked = open.clone();
            locked.lock().unwrap();
            assert!(!locked.is_open() && !locked.eliminated);

            locked.eliminate(0).unwrap();
            assert!(locked.eliminated);
            assert!(locked.lock().is_err());

            open.eliminate(0).unwrap();
            assert!(!open.is_open());
            assert!(open.lock().is_err());
        }

        /// Created -> Launched only via launch with the threshold met
        #[test]
        fn utility_token_transitions() {
            let mut t = token(10);
            assert!(!t.launched);
            assert!(t.check_reward_ready(T0 + REWARD_INTERVAL).is_err());

            t.record_contribution(9).unwrap();
            assert!(t.launch(T0).is_err());
            assert!(!t.launched);

            t.record_contribution(1).unwrap();
            t.launch(T0).unwrap();
            assert!(t.launched);
            assert!(t.check_reward_ready(T0 + REWARD_INTERVAL).is_ok());
        }
    }
}
