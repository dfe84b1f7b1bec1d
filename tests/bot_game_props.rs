use number_guess::{BotGame, CheckResult, HintSpread};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn started(seed: u64, min: i32, width: i32, spread: HintSpread) -> (BotGame, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = BotGame::new();
    game.start(&mut rng, min, min + width, spread);
    (game, rng)
}

/// Bisect on what the hints so far allow, returning the secret and attempts used.
fn solve(game: &mut BotGame) -> (i32, u32) {
    let (mut lo, mut hi) = (game.lower_bound(), game.upper_bound());
    loop {
        let answer = lo + (hi - lo) / 2;
        match game.check_answer(answer) {
            CheckResult::Equal => return (answer, game.attempt_count()),
            CheckResult::GreaterThan => lo = answer + 1,
            CheckResult::LessThan => hi = answer - 1,
            CheckResult::Invalid => panic!("answer {} outside the hint window", answer),
        }
        assert!(lo <= hi, "hints contradict each other");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The hint window stays inside the range and around the secret.
    #[test]
    fn start_window_contains_secret(
        seed in any::<u64>(),
        min in -10_000i32..10_000,
        width in 0i32..5_000,
        low in 0u32..2_000,
        extra in 0u32..2_000,
    ) {
        let (mut game, _) = started(seed, min, width, HintSpread::new(low, low + extra));
        let (lo, hi) = (game.lower_bound(), game.upper_bound());
        prop_assert!(min <= lo && lo <= hi && hi <= min + width);
        prop_assert_eq!(game.attempt_count(), 0);

        let (secret, _) = solve(&mut game);
        prop_assert!(lo <= secret && secret <= hi);
    }

    /// Answers inside the window only ever move the bounds inward.
    #[test]
    fn bounds_are_monotonic(
        seed in any::<u64>(),
        min in -1_000i32..1_000,
        width in 0i32..2_000,
        steps in 1usize..60,
    ) {
        let (mut game, mut rng) = started(seed, min, width, HintSpread::new(0, 2_000));
        for _ in 0..steps {
            let (lo, hi) = (game.lower_bound(), game.upper_bound());
            let answer = rng.random_range(lo..=hi);
            let result = game.check_answer(answer);
            prop_assert!(game.lower_bound() >= lo);
            prop_assert!(game.upper_bound() <= hi);
            prop_assert!(game.lower_bound() <= game.upper_bound());
            match result {
                CheckResult::Equal => break,
                CheckResult::GreaterThan => prop_assert_eq!(game.lower_bound(), answer),
                CheckResult::LessThan => prop_assert_eq!(game.upper_bound(), answer),
                CheckResult::Invalid => prop_assert!(false, "in-window answer rejected"),
            }
        }
    }

    /// Outside answers are rejected without touching the window but still count.
    #[test]
    fn outside_answers_are_invalid(
        seed in any::<u64>(),
        min in -1_000i32..1_000,
        width in 0i32..2_000,
        below in 1i32..500,
        above in 1i32..500,
    ) {
        let (mut game, _) = started(seed, min, width, HintSpread::fixed(300));
        let (lo, hi) = (game.lower_bound(), game.upper_bound());
        prop_assert_eq!(game.check_answer(lo - below), CheckResult::Invalid);
        prop_assert_eq!(game.check_answer(hi + above), CheckResult::Invalid);
        prop_assert_eq!((game.lower_bound(), game.upper_bound()), (lo, hi));
        prop_assert_eq!(game.attempt_count(), 2);
    }

    /// Re-checking the secret keeps answering equal without moving the bounds.
    #[test]
    fn secret_is_always_equal(seed in any::<u64>(), width in 0i32..3_000) {
        let (mut game, _) = started(seed, 0, width, HintSpread::default());
        let (secret, attempts) = solve(&mut game);
        let bounds = (game.lower_bound(), game.upper_bound());
        prop_assert_eq!(game.check_answer(secret), CheckResult::Equal);
        prop_assert_eq!((game.lower_bound(), game.upper_bound()), bounds);
        prop_assert_eq!(game.attempt_count(), attempts + 1);
    }
}

#[test]
fn same_seed_same_round() {
    let (a, _) = started(42, 0, 1000, HintSpread::new(100, 400));
    let (b, _) = started(42, 0, 1000, HintSpread::new(100, 400));
    assert_eq!(
        (a.lower_bound(), a.upper_bound()),
        (b.lower_bound(), b.upper_bound())
    );
}

#[test]
fn zero_spread_pins_the_window() {
    let (mut game, _) = started(9, 0, 1000, HintSpread::fixed(0));
    assert_eq!(game.lower_bound(), game.upper_bound());
    let only = game.lower_bound();
    assert_eq!(game.check_answer(only), CheckResult::Equal);
}
