//! Game phase and score/difficulty bookkeeping.

use crate::config::GameConfig;

/// Game phase. `Crashed` and `Landed` show their outcome banner and behave
/// like `Paused`: any press starts the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Paused,
    Flying,
    Crashed,
    Landed,
}

/// Cumulative score and the difficulty constants that ratchet after each
/// on-pad landing. Score and difficulty reset only on a crash.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    score: i32,
    gravity: f32,
    retro_thrust: f32,
    base_gravity: f32,
    base_retro: f32,
    difficulty_ratio: f32,
}

impl Scoreboard {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            gravity: config.gravity,
            retro_thrust: config.retro_thrust,
            base_gravity: config.gravity,
            base_retro: config.retro_thrust,
            difficulty_ratio: config.difficulty_ratio,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Current gravity acceleration (negative).
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Current retro thruster power.
    pub fn retro_thrust(&self) -> f32 {
        self.retro_thrust
    }

    /// A crash wipes the score and restores base difficulty.
    pub fn record_crash(&mut self) {
        self.score = 0;
        self.gravity = self.base_gravity;
        self.retro_thrust = self.base_retro;
    }

    /// Award points for an on-pad landing and make things a little tougher.
    /// The award can be negative for a hard-but-survivable landing; it is
    /// never clamped.
    pub fn record_pad_landing(&mut self, vert_speed: f32, lat_veloc: f32) -> i32 {
        let points = (100.0 * (1.0 - (vert_speed + lat_veloc) / 80.0)) as i32;
        self.score += points;
        self.gravity *= self.difficulty_ratio;
        self.retro_thrust *= self.difficulty_ratio;
        points
    }
}
