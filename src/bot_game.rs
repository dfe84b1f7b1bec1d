use crate::{common::CheckResult, config::HintSpread, source::NumberSource};

/// Secret-holder logic: the program picks a number and the player narrows
/// the hint window until they hit it.
#[derive(Debug, Clone, Default)]
pub struct BotGame {
    secret: i32,
    lower_bound: i32,
    upper_bound: i32,
    attempt_count: u32,
    solved: bool,
}

impl BotGame {
    /// Create an idle game. Call [`BotGame::start`] before checking answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new round with a secret from `[min, max]` and a hint window
    /// placed a random distance on each side of it, clipped to the range.
    pub fn start<R: NumberSource + ?Sized>(
        &mut self,
        rng: &mut R,
        min: i32,
        max: i32,
        spread: HintSpread,
    ) {
        debug_assert!(min <= max);
        debug_assert!(spread.min_distance <= spread.max_distance);

        self.attempt_count = 0;
        self.solved = false;
        self.secret = rng.pick(min, max);
        let lower_distance = rng.pick_distance(spread.min_distance, spread.max_distance);
        let upper_distance = rng.pick_distance(spread.min_distance, spread.max_distance);
        self.lower_bound = (self.secret as i64 - lower_distance as i64).max(min as i64) as i32;
        self.upper_bound = (self.secret as i64 + upper_distance as i64).min(max as i64) as i32;

        log::info!(
            "bot game started: secret={} lower_bound={} upper_bound={}",
            self.secret,
            self.lower_bound,
            self.upper_bound
        );
    }

    /// Compare an answer with the secret, tightening the hint window on a miss.
    pub fn check_answer(&mut self, answer: i32) -> CheckResult {
        self.attempt_count += 1;
        log::debug!(
            "checking answer={} window=[{}, {}]",
            answer,
            self.lower_bound,
            self.upper_bound
        );

        if answer < self.lower_bound || answer > self.upper_bound {
            CheckResult::Invalid
        } else if answer < self.secret {
            self.lower_bound = answer;
            CheckResult::GreaterThan
        } else if answer > self.secret {
            self.upper_bound = answer;
            CheckResult::LessThan
        } else {
            self.solved = true;
            CheckResult::Equal
        }
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    /// Number of answers checked since the round started.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Whether the secret has been found this round.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> i32 {
        self.secret
    }
}
