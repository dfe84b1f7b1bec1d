use alloc::{format, string::String};

use super::{
    Button, InputEvent, Route, RoundOutcome, Scene, SceneContext, Surface, Transition, UserResult,
};
use crate::{common::GuessStatus, user_game::UserGame};

/// The player holds the secret; the program guesses and the player answers
/// lower, higher or correct.
#[derive(Debug, Default)]
pub struct GameUserScene {
    game: UserGame,
    question: String,
}

impl GameUserScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &UserGame {
        &self.game
    }

    fn after_feedback(&self, status: GuessStatus) -> Option<Transition> {
        match status {
            GuessStatus::Ok => None,
            GuessStatus::Exhausted => Some(Transition::Push(Route::End(RoundOutcome::UserHost(
                UserResult::Tricked {
                    guesses: self.game.guess_count(),
                },
            )))),
        }
    }
}

impl Scene for GameUserScene {
    fn on_enter(&mut self, _route: &Route, ctx: &mut SceneContext<'_>) {
        let (min, max) = (ctx.config.min_value, ctx.config.max_value);
        // The navigator validated the config, so the range is never empty.
        let _ = self.game.start(&mut *ctx.rng, min, max);
        self.question = format!("Think of some number between {} and {}", min, max);
    }

    fn on_input(&mut self, event: InputEvent, ctx: &mut SceneContext<'_>) -> Option<Transition> {
        match event {
            InputEvent::Click(Button::Lower) => {
                let status = self.game.record_too_low(&mut *ctx.rng);
                self.after_feedback(status)
            }
            InputEvent::Click(Button::Higher) => {
                let status = self.game.record_too_high(&mut *ctx.rng);
                self.after_feedback(status)
            }
            InputEvent::Click(Button::Correct) => {
                self.game.record_correct();
                Some(Transition::Push(Route::End(RoundOutcome::UserHost(
                    UserResult::Found {
                        number: self.game.current_guess(),
                        guesses: self.game.guess_count(),
                    },
                ))))
            }
            _ => None,
        }
    }

    fn on_draw(&self, surface: &mut dyn Surface) {
        surface.fill_background();
        surface.draw_label("I will guess your number");
        surface.draw_label(&self.question);
        surface.draw_label(&format!("Is {} your number?", self.game.current_guess()));
        surface.draw_button(Button::Lower);
        surface.draw_button(Button::Higher);
        surface.draw_button(Button::Correct);
    }
}
