//! Commonly used types and utilities for ease of import.

pub use crate::scene::{Button, InputEvent, Key, Route, SceneId, SceneNavigator, Surface};
pub use crate::{
    BotGame, CheckResult, GameConfig, GameMode, GuessStatus, HintSpread, NumberSource,
    TextSurface, UserGame,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
