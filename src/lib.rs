#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod answer_input;
mod bot_game;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod scene;
mod source;
mod text_surface;
mod user_game;

pub use answer_input::AnswerInput;
pub use bot_game::BotGame;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use source::{Midpoint, NumberSource};
pub use text_surface::TextSurface;
pub use user_game::UserGame;
