pub mod app;
pub mod audio;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
pub mod rules;
pub mod wave;

// Re-export the core types used by integration tests
pub use entities::{
    AppliedEffect, Bounds, Bullet, Enemy, Player, PowerUp, PowerUpKind, apply_effect,
};
pub use game::{FrameEvents, FrameInput, Game, GameState};
pub use rules::{PowerUpPolicy, Rules, SlowRule};
pub use wave::WaveState;
