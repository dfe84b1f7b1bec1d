use crate::{common::GuessStatus, source::NumberSource};

/// Guesser logic: the player holds a number and the program searches for it,
/// narrowing its bounds with every piece of feedback.
#[derive(Debug, Clone, Default)]
pub struct UserGame {
    lower_bound: i32,
    upper_bound: i32,
    current_guess: i32,
    confirmed: bool,
    guess_count: u32,
}

impl UserGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the bounds to `[min, max]` and make the first guess.
    pub fn start<R: NumberSource + ?Sized>(
        &mut self,
        rng: &mut R,
        min: i32,
        max: i32,
    ) -> GuessStatus {
        self.lower_bound = min;
        self.upper_bound = max;
        self.confirmed = false;
        self.guess_count = 0;

        let status = self.guess(rng);
        log::info!(
            "user game started: guess={} lower_bound={} upper_bound={}",
            self.current_guess,
            self.lower_bound,
            self.upper_bound
        );
        status
    }

    /// Sample a new candidate between the bounds. Leaves the state untouched
    /// and reports [`GuessStatus::Exhausted`] once the bounds have crossed.
    pub fn guess<R: NumberSource + ?Sized>(&mut self, rng: &mut R) -> GuessStatus {
        if self.lower_bound > self.upper_bound {
            log::info!(
                "no candidate left: lower_bound={} upper_bound={}",
                self.lower_bound,
                self.upper_bound
            );
            return GuessStatus::Exhausted;
        }
        self.current_guess = rng.pick(self.lower_bound, self.upper_bound);
        self.guess_count += 1;
        log::debug!(
            "guess #{}: {} from [{}, {}]",
            self.guess_count,
            self.current_guess,
            self.lower_bound,
            self.upper_bound
        );
        GuessStatus::Ok
    }

    /// The player's number is below the current guess.
    pub fn record_too_low<R: NumberSource + ?Sized>(&mut self, rng: &mut R) -> GuessStatus {
        if self.confirmed {
            log::warn!("feedback after confirmation ignored");
            return GuessStatus::Ok;
        }
        match self.current_guess.checked_sub(1) {
            Some(upper) => self.upper_bound = upper,
            None => return GuessStatus::Exhausted,
        }
        self.guess(rng)
    }

    /// The player's number is above the current guess.
    pub fn record_too_high<R: NumberSource + ?Sized>(&mut self, rng: &mut R) -> GuessStatus {
        if self.confirmed {
            log::warn!("feedback after confirmation ignored");
            return GuessStatus::Ok;
        }
        match self.current_guess.checked_add(1) {
            Some(lower) => self.lower_bound = lower,
            None => return GuessStatus::Exhausted,
        }
        self.guess(rng)
    }

    /// The player confirmed the current guess.
    pub fn record_correct(&mut self) {
        self.confirmed = true;
        log::info!(
            "guess {} confirmed after {} guesses",
            self.current_guess,
            self.guess_count
        );
    }

    pub fn current_guess(&self) -> i32 {
        self.current_guess
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    /// Guesses made since the round started, including the opening one.
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }
}
