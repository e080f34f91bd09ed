//! ridgelander — a wireframe lunar-landing simulator.
//!
//! A piloted craft descends over procedurally generated ridge terrain, burning
//! fuel against gravity, and is scored on how softly and how close to the pad
//! it touches down. Gravity and retro power ratchet up after every clean
//! landing; a crash resets them.

pub mod config;
pub mod hud;
pub mod lander;
pub mod models;
pub mod sim;
pub mod state;

pub use config::GameConfig;
pub use lander::Lander;
pub use sim::Simulation;
pub use state::{Phase, Scoreboard};
