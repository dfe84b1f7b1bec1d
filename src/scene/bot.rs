use alloc::{format, string::String};

use super::{
    Button, InputEvent, Key, Route, RoundOutcome, Scene, SceneContext, Surface, Transition,
};
use crate::{answer_input::AnswerInput, bot_game::BotGame, common::CheckResult};

/// The program holds the secret; the player types answers and checks them.
#[derive(Debug, Default)]
pub struct GameBotScene {
    game: BotGame,
    answer: AnswerInput,
    message: String,
}

impl GameBotScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &BotGame {
        &self.game
    }

    fn on_check(&mut self) -> Option<Transition> {
        let Some(answer) = self.answer.value() else {
            self.message = String::from("Please input a number");
            return None;
        };

        let result = self.game.check_answer(answer);
        log::info!("answer {} checked: {:?}", answer, result);
        self.message = match result {
            CheckResult::Equal => {
                return Some(Transition::Push(Route::End(RoundOutcome::BotHost {
                    attempts: self.game.attempt_count(),
                })));
            }
            CheckResult::Invalid => format!("{} is out of range", answer),
            CheckResult::GreaterThan => format!("My number is greater than {}", answer),
            CheckResult::LessThan => format!("My number is less than {}", answer),
        };
        self.answer.clear();
        None
    }
}

impl Scene for GameBotScene {
    fn on_enter(&mut self, _route: &Route, ctx: &mut SceneContext<'_>) {
        self.answer = AnswerInput::new(ctx.config.max_answer_digits);
        self.message.clear();
        self.game.start(
            &mut *ctx.rng,
            ctx.config.min_value,
            ctx.config.max_value,
            ctx.config.hint,
        );
    }

    fn on_input(&mut self, event: InputEvent, _ctx: &mut SceneContext<'_>) -> Option<Transition> {
        match event {
            InputEvent::Key(Key::Digit(d)) => {
                self.answer.push_digit(d);
                None
            }
            InputEvent::Key(Key::Backspace) => {
                self.answer.pop();
                None
            }
            InputEvent::Click(Button::Check) => self.on_check(),
            _ => None,
        }
    }

    fn on_draw(&self, surface: &mut dyn Surface) {
        surface.fill_background();
        surface.draw_label("Guess my number");
        surface.draw_label(&format!(
            "Your number is between {} and {}",
            self.game.lower_bound(),
            self.game.upper_bound()
        ));
        surface.draw_label(&format!("You tried {} times", self.game.attempt_count()));
        surface.draw_label(&self.message);
        surface.draw_text_input(self.answer.text());
        surface.draw_button(Button::Check);
    }
}
