//! Craft state and the per-tick flight integrator.
//!
//! One `Lander` lives per landing attempt. The camera reference point
//! `(px, py, pz)` trails the true craft position (held as the craft database
//! offset) by one fifth of the remaining delta each tick, which gives the
//! viewport its deliberate lag.

use engine_core::{Angle, WorldBounds};
use glam::IVec3;
use input::{Button, InputState};
use renderer::ViewPose;

use crate::config::GameConfig;

/// How far behind the craft the camera reference sits on Z, in world pixels.
const CAMERA_SETBACK: i32 = 2000;

/// Craft state for one landing attempt.
#[derive(Debug, Clone)]
pub struct Lander {
    /// Camera reference point, world pixels.
    pub px: i32,
    pub py: i32,
    pub pz: i32,
    /// Orientation as trig-table indices.
    pub pitch: Angle,
    pub roll: Angle,
    pub yaw: Angle,
    /// Thruster activation levels (ft/s^2 for retro, ft/s per tick for the
    /// laterals). Zero when idle.
    pub retro_thruster: f32,
    pub front_thruster: f32,
    pub rear_thruster: f32,
    pub left_thruster: f32,
    pub right_thruster: f32,
    /// Vertical speed, ft/s. Negative is descending.
    pub vert_speed: f32,
    /// Direction of lateral travel, radians.
    pub heading: f32,
    /// Lateral speed magnitude, ft/s.
    pub lat_veloc: f32,
    pub fuel: f32,
    /// Altitude in feet.
    pub alt: f32,
}

impl Lander {
    /// Fresh craft at the drop point, plus its initial world offset. Called at
    /// the start of every attempt.
    pub fn start(config: &GameConfig) -> (Self, IVec3) {
        let offset = IVec3::new(0, 8000, -(config.world_length / 2));
        let lander = Self {
            px: offset.x,
            py: offset.y,
            pz: offset.z - CAMERA_SETBACK,
            pitch: Angle::ZERO,
            roll: Angle::ZERO,
            yaw: Angle::ZERO,
            retro_thruster: 0.0,
            front_thruster: 0.0,
            rear_thruster: 0.0,
            left_thruster: 0.0,
            right_thruster: 0.0,
            vert_speed: 0.0,
            heading: 1.36,
            lat_veloc: 100.0,
            fuel: config.full_tank,
            alt: offset.y as f32 / config.pixels_per_foot,
        };
        (lander, offset)
    }

    /// Camera pose for this tick's render.
    pub fn view_pose(&self) -> ViewPose {
        ViewPose {
            position: IVec3::new(self.px, self.py, self.pz),
            pitch: self.pitch,
            roll: self.roll,
            yaw: self.yaw,
        }
    }

    /// Map this tick's controls onto the five thruster channels. An empty
    /// tank overrides everything: all channels force to zero.
    pub fn apply_controls(&mut self, input: &InputState, config: &GameConfig, retro_power: f32) {
        if self.fuel <= 0.0 {
            self.retro_thruster = 0.0;
            self.front_thruster = 0.0;
            self.rear_thruster = 0.0;
            self.left_thruster = 0.0;
            self.right_thruster = 0.0;
            return;
        }
        let lateral = config.lateral_thrust;
        self.rear_thruster = if input.is_held(Button::Up) { lateral } else { 0.0 };
        self.front_thruster = if input.is_held(Button::Down) { lateral } else { 0.0 };
        self.left_thruster = if input.is_held(Button::Left) { lateral } else { 0.0 };
        self.right_thruster = if input.is_held(Button::Right) { lateral } else { 0.0 };
        self.retro_thruster = if input.retro_engaged() { retro_power } else { 0.0 };
    }

    /// Advance one tick: burn fuel, integrate vertical and lateral motion,
    /// ease the camera, and wrap at the world edge. `craft_offset` is the
    /// craft's render offset, moved in place.
    pub fn advance(
        &mut self,
        craft_offset: &mut IVec3,
        config: &GameConfig,
        gravity: f32,
        bounds: &WorldBounds,
    ) {
        let ticks = config.ticks_per_second as f32;

        // Fuel depletes per active thruster; the tank never reads negative.
        if self.retro_thruster > 0.0 {
            self.fuel -= config.retro_burn;
        }
        if self.front_thruster > 0.0 {
            self.fuel -= config.lateral_burn;
        }
        if self.rear_thruster > 0.0 {
            self.fuel -= config.lateral_burn;
        }
        if self.left_thruster > 0.0 {
            self.fuel -= config.lateral_burn;
        }
        if self.right_thruster > 0.0 {
            self.fuel -= config.lateral_burn;
        }
        self.fuel = self.fuel.max(0.0);

        self.vert_speed += (self.retro_thruster + gravity) / ticks;
        self.alt += self.vert_speed / ticks;

        // Lateral motion: decompose through the heading, add thrust deltas,
        // recombine.
        let accel_x = self.right_thruster - self.left_thruster;
        let accel_z = self.rear_thruster - self.front_thruster;
        let veloc_x = self.lat_veloc * self.heading.cos() + accel_x;
        let veloc_z = self.lat_veloc * self.heading.sin() + accel_z;
        craft_offset.x =
            (craft_offset.x as f32 + (veloc_x / ticks) * config.pixels_per_foot) as i32;
        craft_offset.z =
            (craft_offset.z as f32 + (veloc_z / ticks) * config.pixels_per_foot) as i32;
        self.lat_veloc = (veloc_x * veloc_x + veloc_z * veloc_z).sqrt();

        // Runaway-integration clamps.
        if self.lat_veloc > config.max_velocity {
            self.lat_veloc = config.max_velocity;
        }
        self.vert_speed = self.vert_speed.clamp(-config.max_velocity, config.max_velocity);

        // A zero X component forces the heading to exactly zero.
        self.heading = if veloc_x != 0.0 {
            veloc_z.atan2(veloc_x)
        } else {
            0.0
        };

        // The view follows the craft with a little lag.
        self.px += (craft_offset.x - self.px) / 5;
        self.py += (craft_offset.y - self.py) / 5;
        self.pz += (craft_offset.z - CAMERA_SETBACK - self.pz) / 5;

        // Wrap the coordinates as the craft hits the world boundary, shifting
        // the camera reference with it so the view stays continuous.
        if craft_offset.x < bounds.min_x {
            craft_offset.x = bounds.max_x;
            self.px += bounds.width();
        } else if craft_offset.x > bounds.max_x {
            craft_offset.x = bounds.min_x;
            self.px -= bounds.width();
        }
        if craft_offset.z < bounds.min_z {
            craft_offset.z = bounds.max_z;
            self.pz += bounds.length();
        } else if craft_offset.z > bounds.max_z {
            craft_offset.z = bounds.min_z;
            self.pz -= bounds.length();
        }

        let tau = std::f32::consts::TAU;
        if self.heading < 0.0 {
            self.heading += tau;
        } else if self.heading > tau {
            self.heading -= tau;
        }

        craft_offset.y = self.alt as i32 * config.pixels_per_foot as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(buttons: &[Button]) -> InputState {
        let mut input = InputState::new();
        for &b in buttons {
            input.press(b);
        }
        input
    }

    #[test]
    fn fuel_never_goes_negative_and_cuts_thrusters() {
        let config = GameConfig::default();
        let bounds = config.world_bounds();
        let (mut lander, mut offset) = Lander::start(&config);
        lander.fuel = 1.0;

        let input = held(&[Button::A, Button::Up, Button::Down, Button::Left, Button::Right]);
        lander.apply_controls(&input, &config, config.retro_thrust);
        assert_eq!(lander.retro_thruster, config.retro_thrust);
        lander.advance(&mut offset, &config, config.gravity, &bounds);
        // 1.0 - 1.6 - 4*0.4 floors at zero.
        assert_eq!(lander.fuel, 0.0);

        // With the tank dry, a tick requesting everything leaves all channels
        // at zero.
        lander.apply_controls(&input, &config, config.retro_thrust);
        assert_eq!(lander.retro_thruster, 0.0);
        assert_eq!(lander.front_thruster, 0.0);
        assert_eq!(lander.rear_thruster, 0.0);
        assert_eq!(lander.left_thruster, 0.0);
        assert_eq!(lander.right_thruster, 0.0);
    }

    #[test]
    fn speeds_clamp_exactly_at_maximum() {
        let config = GameConfig::default();
        let bounds = config.world_bounds();
        let (mut lander, mut offset) = Lander::start(&config);
        lander.alt = 10000.0;
        lander.vert_speed = -(config.max_velocity - 1.0);
        lander.lat_veloc = config.max_velocity - 1.0;
        lander.heading = 0.0;

        let input = held(&[Button::Right]);
        lander.apply_controls(&input, &config, config.retro_thrust);
        lander.advance(&mut offset, &config, config.gravity, &bounds);
        assert_eq!(lander.vert_speed, -config.max_velocity);
        assert_eq!(lander.lat_veloc, config.max_velocity);
    }

    #[test]
    fn heading_zeroes_when_x_component_is_zero() {
        let config = GameConfig::default();
        let bounds = config.world_bounds();
        let (mut lander, mut offset) = Lander::start(&config);
        lander.alt = 10000.0;
        lander.lat_veloc = 0.0;
        lander.heading = 1.0;

        lander.advance(&mut offset, &config, config.gravity, &bounds);
        assert_eq!(lander.heading, 0.0);
    }

    #[test]
    fn camera_eases_by_a_fifth_per_tick() {
        let config = GameConfig::default();
        let bounds = config.world_bounds();
        let (mut lander, mut offset) = Lander::start(&config);
        lander.alt = 10000.0;
        lander.lat_veloc = 0.0;
        lander.heading = 0.0;

        let px = lander.px;
        offset.x = px + 1000;
        lander.advance(&mut offset, &config, config.gravity, &bounds);
        assert_eq!(lander.px, px + 200);
    }

    #[test]
    fn world_wrap_teleports_offset_and_shifts_camera() {
        let config = GameConfig::default();
        let bounds = config.world_bounds();
        let (mut lander, mut offset) = Lander::start(&config);
        lander.alt = 10000.0;
        lander.lat_veloc = 100.0;
        lander.heading = 0.0;
        offset.x = bounds.max_x - 1;
        lander.px = offset.x;

        let px_unwrapped = lander.px;
        lander.advance(&mut offset, &config, config.gravity, &bounds);
        assert_eq!(offset.x, bounds.min_x);
        assert!(lander.px < px_unwrapped - bounds.width() / 2);
    }

    #[test]
    fn heading_wraps_into_full_circle() {
        let config = GameConfig::default();
        let bounds = config.world_bounds();
        let (mut lander, mut offset) = Lander::start(&config);
        lander.alt = 10000.0;
        lander.lat_veloc = 50.0;
        // Slight downward-left drift produces a negative atan2.
        lander.heading = -0.5;

        lander.advance(&mut offset, &config, config.gravity, &bounds);
        assert!(lander.heading >= 0.0 && lander.heading <= std::f32::consts::TAU);
    }
}
