use alloc::{format, string::String};

use super::{
    Button, InputEvent, Route, RoundOutcome, Scene, SceneContext, Surface, Transition, UserResult,
};

/// Result screen shown after either game mode.
#[derive(Debug, Default)]
pub struct EndScene {
    message: String,
}

impl EndScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn outcome_message(outcome: &RoundOutcome) -> String {
    match outcome {
        RoundOutcome::BotHost { attempts } => {
            format!("Congratulations!! You tried {} times", attempts)
        }
        RoundOutcome::UserHost(UserResult::Found { number, .. }) => {
            format!("Your number is {}", number)
        }
        RoundOutcome::UserHost(UserResult::Tricked { .. }) => {
            String::from("You tricked me. I'm not playing")
        }
    }
}

impl Scene for EndScene {
    fn on_enter(&mut self, route: &Route, _ctx: &mut SceneContext<'_>) {
        self.message = match route {
            Route::End(outcome) => outcome_message(outcome),
            other => {
                log::warn!("end scene entered through {:?}", other);
                String::new()
            }
        };
    }

    fn on_input(&mut self, event: InputEvent, _ctx: &mut SceneContext<'_>) -> Option<Transition> {
        match event {
            InputEvent::Click(Button::Return) => Some(Transition::Reset(Route::Start)),
            _ => None,
        }
    }

    fn on_draw(&self, surface: &mut dyn Surface) {
        surface.fill_background();
        surface.draw_label(&self.message);
        surface.draw_button(Button::Return);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_per_outcome() {
        assert_eq!(
            outcome_message(&RoundOutcome::BotHost { attempts: 7 }),
            "Congratulations!! You tried 7 times"
        );
        assert_eq!(
            outcome_message(&RoundOutcome::UserHost(UserResult::Found {
                number: 42,
                guesses: 3
            })),
            "Your number is 42"
        );
        assert_eq!(
            outcome_message(&RoundOutcome::UserHost(UserResult::Tricked { guesses: 9 })),
            "You tricked me. I'm not playing"
        );
    }
}
