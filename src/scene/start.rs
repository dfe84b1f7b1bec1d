use super::{Button, InputEvent, Route, Scene, SceneContext, Surface, Transition};

/// Lobby offering both game modes.
#[derive(Debug, Default)]
pub struct StartScene;

impl StartScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene for StartScene {
    fn on_enter(&mut self, _route: &Route, _ctx: &mut SceneContext<'_>) {}

    fn on_input(&mut self, event: InputEvent, _ctx: &mut SceneContext<'_>) -> Option<Transition> {
        match event {
            InputEvent::Click(Button::StartBotHost) => Some(Transition::Push(Route::GameBot)),
            InputEvent::Click(Button::StartUserHost) => Some(Transition::Push(Route::GameUser)),
            _ => None,
        }
    }

    fn on_draw(&self, surface: &mut dyn Surface) {
        surface.fill_background();
        surface.draw_label("Number Guess");
        surface.draw_button(Button::StartBotHost);
        surface.draw_button(Button::StartUserHost);
    }
}
