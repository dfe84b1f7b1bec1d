use alloc::{boxed::Box, collections::BTreeMap, vec::Vec};

use super::{
    EndScene, GameBotScene, GameUserScene, InputEvent, Route, Scene, SceneContext, SceneId,
    StartScene, Surface, Transition,
};
use crate::{common::ConfigError, config::GameConfig, source::NumberSource};

fn build_scene(id: SceneId) -> Box<dyn Scene> {
    match id {
        SceneId::Start => Box::new(StartScene::new()),
        SceneId::GameBot => Box::new(GameBotScene::new()),
        SceneId::GameUser => Box::new(GameUserScene::new()),
        SceneId::End(_) => Box::new(EndScene::new()),
    }
}

/// Stack-based scene manager. Scenes are built on first navigation and kept
/// for the lifetime of the navigator; re-entering a scene only runs its
/// `on_enter` hook.
pub struct SceneNavigator {
    config: GameConfig,
    rng: Box<dyn NumberSource>,
    stack: Vec<SceneId>,
    scenes: BTreeMap<SceneId, Box<dyn Scene>>,
}

impl SceneNavigator {
    /// Create a navigator with an empty stack. The config is validated here
    /// so every scene can rely on a non-empty, typeable range.
    pub fn new(config: GameConfig, rng: Box<dyn NumberSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            stack: Vec::new(),
            scenes: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Enter the scene for `route` on top of the stack.
    pub fn push(&mut self, route: Route) {
        let id = route.id();
        let scene = self.scenes.entry(id).or_insert_with(|| build_scene(id));
        let mut ctx = SceneContext {
            rng: &mut *self.rng,
            config: &self.config,
        };
        scene.on_enter(&route, &mut ctx);
        self.stack.push(id);
        log::info!("entered {:?}, depth={}", id, self.stack.len());
    }

    /// Drop every scene from the stack. Registered scenes are kept.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Forward an input event to the active scene and apply its transition.
    pub fn dispatch_input(&mut self, event: InputEvent) {
        let Some(&id) = self.stack.last() else {
            return;
        };
        let Some(scene) = self.scenes.get_mut(&id) else {
            return;
        };
        let mut ctx = SceneContext {
            rng: &mut *self.rng,
            config: &self.config,
        };
        if let Some(transition) = scene.on_input(event, &mut ctx) {
            self.apply(transition);
        }
    }

    /// Draw the active scene, if any.
    pub fn dispatch_draw(&self, surface: &mut dyn Surface) {
        if let Some(scene) = self.stack.last().and_then(|id| self.scenes.get(id)) {
            scene.on_draw(surface);
        }
    }

    pub fn active(&self) -> Option<SceneId> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn stack(&self) -> &[SceneId] {
        &self.stack
    }

    fn apply(&mut self, transition: Transition) {
        log::debug!("applying {:?}", transition);
        match transition {
            Transition::Push(route) => self.push(route),
            Transition::Reset(route) => {
                self.clear();
                self.push(route);
            }
        }
    }
}
