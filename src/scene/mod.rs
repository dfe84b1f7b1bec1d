//! Scene navigation: a stack of scenes where only the top one receives
//! input and draw calls.
//!
//! Scenes never touch the navigator. They answer input with an optional
//! [`Transition`] and the [`SceneNavigator`] applies it.

mod bot;
mod end;
mod navigator;
mod start;
mod user;

pub use bot::GameBotScene;
pub use end::EndScene;
pub use navigator::SceneNavigator;
pub use start::StartScene;
pub use user::GameUserScene;

use crate::{common::GameMode, config::GameConfig, source::NumberSource};

/// Key of a scene in the registry. One instance exists per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SceneId {
    Start,
    GameBot,
    GameUser,
    End(GameMode),
}

/// How the player-hosted round finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserResult {
    /// The player confirmed `number` after `guesses` guesses.
    Found { number: i32, guesses: u32 },
    /// The feedback ruled out every candidate.
    Tricked { guesses: u32 },
}

/// Data handed from a finished game scene to its end scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    BotHost { attempts: u32 },
    UserHost(UserResult),
}

impl RoundOutcome {
    pub fn mode(&self) -> GameMode {
        match self {
            RoundOutcome::BotHost { .. } => GameMode::BotHost,
            RoundOutcome::UserHost(_) => GameMode::UserHost,
        }
    }
}

/// Navigation target together with the data the entered scene needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Start,
    GameBot,
    GameUser,
    End(RoundOutcome),
}

impl Route {
    pub fn id(&self) -> SceneId {
        match self {
            Route::Start => SceneId::Start,
            Route::GameBot => SceneId::GameBot,
            Route::GameUser => SceneId::GameUser,
            Route::End(outcome) => SceneId::End(outcome.mode()),
        }
    }
}

/// Navigation request returned by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Enter a scene on top of the current one.
    Push(Route),
    /// Drop the whole history, then enter the scene.
    Reset(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    StartBotHost,
    StartUserHost,
    Check,
    Lower,
    Higher,
    Correct,
    Return,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::StartBotHost => "Guess my number",
            Button::StartUserHost => "Let me guess yours",
            Button::Check => "Check",
            Button::Lower => "Lower",
            Button::Higher => "Higher",
            Button::Correct => "Correct",
            Button::Return => "Return",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Click(Button),
}

/// Drawing target for scenes.
pub trait Surface {
    /// Start a new frame.
    fn fill_background(&mut self);
    fn draw_label(&mut self, text: &str);
    fn draw_text_input(&mut self, text: &str);
    fn draw_button(&mut self, button: Button);
}

/// Shared resources lent to the active scene for one call.
pub struct SceneContext<'a> {
    pub rng: &'a mut dyn NumberSource,
    pub config: &'a GameConfig,
}

/// One navigable screen.
pub trait Scene {
    /// Called once per push, before the scene becomes active.
    fn on_enter(&mut self, route: &Route, ctx: &mut SceneContext<'_>);

    /// Handle one input event while the scene is on top of the stack.
    fn on_input(&mut self, event: InputEvent, ctx: &mut SceneContext<'_>) -> Option<Transition>;

    fn on_draw(&self, surface: &mut dyn Surface);
}
