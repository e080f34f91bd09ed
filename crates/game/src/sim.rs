//! The simulation: owns every runtime system and advances them once per host
//! frame callback.
//!
//! Single-threaded and tick-driven. All shared state — craft, databases,
//! score, difficulty — is mutated only inside [`Simulation::tick`].

use anyhow::Context;
use engine_core::{TickClock, TrigTable, WorldBounds};
use glam::IVec3;
use input::InputState;
use procgen::Pad;
use renderer::{Color, LineDb, Projector, Surface};

use crate::config::GameConfig;
use crate::hud;
use crate::lander::Lander;
use crate::models;
use crate::state::{Phase, Scoreboard};

pub struct Simulation {
    config: GameConfig,
    trig: TrigTable,
    bounds: WorldBounds,
    clock: TickClock,
    /// Static terrain plus the landing pad; offset stays zero.
    world: LineDb,
    craft: LineDb,
    shadow: LineDb,
    flame: LineDb,
    pad: Pad,
    lander: Lander,
    scoreboard: Scoreboard,
    phase: Phase,
    banner: String,
    /// Near-plane contacts observed in the last rendered frame. Diagnostic
    /// only; termination is altitude-based.
    clip_contacts: usize,
}

impl Simulation {
    /// Build every database and generate the world. Allocation failure aborts
    /// startup — there is no degraded mode for an undersized renderer.
    pub fn new(config: GameConfig, seed: u64) -> anyhow::Result<Self> {
        let trig = TrigTable::build();
        let bounds = config.world_bounds();

        let mut world = LineDb::new();
        let pad = procgen::generate(&config.terrain_config(seed), &mut world)
            .context("world generation failed")?;
        let craft = LineDb::from_lines(&models::CRAFT).context("craft model")?;
        let shadow = LineDb::from_lines(&models::SHADOW).context("shadow model")?;
        let flame = LineDb::from_lines(&models::FLAME).context("flame model")?;

        let scoreboard = Scoreboard::new(&config);
        let (lander, start_offset) = Lander::start(&config);
        let clock = TickClock::new(config.ticks_per_second);

        let mut sim = Self {
            config,
            trig,
            bounds,
            clock,
            world,
            craft,
            shadow,
            flame,
            pad,
            lander,
            scoreboard,
            phase: Phase::Paused,
            banner: hud::BEGIN_BANNER.to_string(),
            clip_contacts: 0,
        };
        sim.place_craft(start_offset);
        Ok(sim)
    }

    /// Replace the terrain with a freshly generated world. The craft, shadow,
    /// and flame databases are never rebuilt, only repositioned.
    pub fn regenerate_world(&mut self, seed: u64) -> anyhow::Result<()> {
        self.world.reset();
        self.pad = procgen::generate(&self.config.terrain_config(seed), &mut self.world)
            .context("world regeneration failed")?;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lander(&self) -> &Lander {
        &self.lander
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Near-plane clip contacts from the last frame.
    pub fn clip_contacts(&self) -> usize {
        self.clip_contacts
    }

    /// One update-and-render pass. Call once per display refresh.
    pub fn tick(&mut self, input: &InputState, surface: &mut dyn Surface) {
        self.clock.advance();
        match self.phase {
            Phase::Paused | Phase::Crashed | Phase::Landed => {
                if input.any_pressed() {
                    self.start_attempt();
                } else {
                    hud::draw_banner(&self.config, &self.banner, surface);
                }
            }
            Phase::Flying => self.flying_tick(input, surface),
        }
    }

    fn start_attempt(&mut self) {
        let (lander, offset) = Lander::start(&self.config);
        self.lander = lander;
        self.place_craft(offset);
        self.phase = Phase::Flying;
        log::info!(
            "attempt started: gravity {:.2}, retro {:.2}, score {}",
            self.scoreboard.gravity(),
            self.scoreboard.retro_thrust(),
            self.scoreboard.score()
        );
    }

    fn place_craft(&mut self, offset: IVec3) {
        self.craft.offset = offset;
        self.shadow.offset = IVec3::new(offset.x, 0, offset.z);
        self.flame.offset = offset;
    }

    fn flying_tick(&mut self, input: &InputState, surface: &mut dyn Surface) {
        surface.clear(Color::White);
        surface.set_clip(0, 0, self.config.view_width, self.config.screen_height());
        hud::draw_panel(
            &self.config,
            self.scoreboard.score(),
            self.scoreboard.gravity(),
            surface,
        );

        self.lander
            .apply_controls(input, &self.config, self.scoreboard.retro_thrust());
        let mut offset = self.craft.offset;
        self.lander
            .advance(&mut offset, &self.config, self.scoreboard.gravity(), &self.bounds);
        self.craft.offset = offset;

        hud::draw_instruments(&self.config, &self.lander, offset, &self.pad, surface);

        self.render_world(surface);

        if self.clock.on_second_boundary() {
            log::debug!(
                "t={:.0}s alt={:.0}ft vert={:+.1} lat={:.1} fuel={:.0}",
                self.clock.seconds(),
                self.lander.alt,
                self.lander.vert_speed,
                self.lander.lat_veloc,
                self.lander.fuel
            );
        }

        if self.lander.alt < 0.0 {
            self.evaluate_touchdown(surface);
        }
    }

    /// Project and draw every database for this frame's camera pose.
    fn render_world(&mut self, surface: &mut dyn Surface) {
        surface.set_clip(0, 0, self.config.view_width, self.config.view_height);
        let projector = Projector::new(
            &self.trig,
            self.bounds,
            self.config.viewport(),
            self.config.focal_length,
        );
        let pose = self.lander.view_pose();

        let mut contacts = 0;
        contacts += self.world.render(&projector, &pose, surface).clip_contacts;
        contacts += self.craft.render(&projector, &pose, surface).clip_contacts;

        // Exhaust flames only while the retro is firing
        if self.lander.retro_thruster > 0.0 {
            self.flame.offset = self.craft.offset;
            contacts += self.flame.render(&projector, &pose, surface).clip_contacts;
        }
        self.shadow.offset.x = self.craft.offset.x;
        self.shadow.offset.z = self.craft.offset.z;
        contacts += self.shadow.render(&projector, &pose, surface).clip_contacts;

        self.clip_contacts = contacts;
    }

    /// The craft reached the ground. Too fast in any direction is a crash;
    /// otherwise rate the landing against the pad.
    fn evaluate_touchdown(&mut self, surface: &mut dyn Surface) {
        let too_fast = -self.lander.vert_speed > self.config.safe_vertical_speed
            || self.lander.lat_veloc > self.config.safe_lateral_speed;

        if too_fast {
            self.banner = hud::crash_banner(self.scoreboard.score());
            self.scoreboard.record_crash();
            self.phase = Phase::Crashed;
            log::info!(
                "crashed: vert {:.1} ft/s, lat {:.1} ft/s",
                self.lander.vert_speed,
                self.lander.lat_veloc
            );
        } else {
            let dx = (self.craft.offset.x - self.pad.center_x()).abs();
            let dz = (self.craft.offset.z - self.pad.center_z()).abs();
            if dx > self.config.pad_tolerance || dz > self.config.pad_tolerance {
                self.banner = hud::off_pad_banner(self.scoreboard.score());
                log::info!("landed off pad: {} px east, {} px north of center", dx, dz);
            } else {
                let points = self
                    .scoreboard
                    .record_pad_landing(self.lander.vert_speed, self.lander.lat_veloc);
                self.banner = hud::landed_banner(self.scoreboard.score());
                log::info!(
                    "landed on pad for {} points; gravity now {:.2}",
                    points,
                    self.scoreboard.gravity()
                );
            }
            self.phase = Phase::Landed;
        }
        hud::draw_banner(&self.config, &self.banner, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::Button;
    use renderer::RecordingTarget;

    fn press_any(sim: &mut Simulation, surface: &mut RecordingTarget) {
        let mut input = InputState::new();
        input.press(Button::A);
        sim.tick(&input, surface);
    }

    fn run_until_grounded(sim: &mut Simulation, surface: &mut RecordingTarget) {
        let idle = InputState::new();
        for _ in 0..2000 {
            surface.reset();
            sim.tick(&idle, surface);
            if sim.phase() != Phase::Flying {
                return;
            }
        }
        panic!("craft never reached the ground");
    }

    #[test]
    fn any_press_leaves_pause_and_starts_flying() {
        let mut sim = Simulation::new(GameConfig::default(), 1).unwrap();
        let mut surface = RecordingTarget::new();
        assert_eq!(sim.phase(), Phase::Paused);
        assert_eq!(sim.banner(), hud::BEGIN_BANNER);

        press_any(&mut sim, &mut surface);
        assert_eq!(sim.phase(), Phase::Flying);
        assert_eq!(sim.lander().fuel, sim.config().full_tank);
    }

    #[test]
    fn freefall_crash_resets_score_and_difficulty() {
        let mut sim = Simulation::new(GameConfig::default(), 1).unwrap();
        let mut surface = RecordingTarget::new();
        let base_gravity = sim.config().gravity;
        let base_retro = sim.config().retro_thrust;

        // Pretend a previous attempt already ratcheted the difficulty.
        sim.scoreboard.record_pad_landing(-10.0, 5.0);
        assert!(sim.scoreboard.gravity() < base_gravity);

        press_any(&mut sim, &mut surface);
        // No thrust: the craft free-falls from 8000 px and its initial
        // 100 ft/s drift alone exceeds the safe lateral speed.
        run_until_grounded(&mut sim, &mut surface);

        assert_eq!(sim.phase(), Phase::Crashed);
        assert!(-sim.lander().vert_speed > sim.config().safe_vertical_speed);
        assert_eq!(sim.scoreboard().score(), 0);
        assert_eq!(sim.scoreboard().gravity(), base_gravity);
        assert_eq!(sim.scoreboard().retro_thrust(), base_retro);
        assert!(sim.banner().starts_with("CRASH!!"));
    }

    #[test]
    fn soft_pad_landing_scores_and_ratchets_difficulty() {
        let config = GameConfig::default();
        let mut sim = Simulation::new(config.clone(), 1).unwrap();
        let mut surface = RecordingTarget::new();
        press_any(&mut sim, &mut surface);

        // Park the craft just over the pad center, drifting gently.
        let pad = sim.pad;
        sim.craft.offset = IVec3::new(pad.center_x(), 6, pad.center_z());
        sim.lander.alt = 1.0;
        sim.lander.vert_speed = -5.0;
        sim.lander.lat_veloc = 10.0;
        sim.lander.heading = 0.7;

        surface.reset();
        sim.tick(&InputState::new(), &mut surface);

        assert_eq!(sim.phase(), Phase::Landed);
        // vert ends at -5 - 5.31/4 = -6.3275, drift stays 10:
        // trunc(100*(1 - 3.6725/80)) = 95.
        assert_eq!(sim.scoreboard().score(), 95);
        let phi = config.difficulty_ratio;
        assert!((sim.scoreboard().gravity() - config.gravity * phi).abs() < 1e-3);
        assert!((sim.scoreboard().retro_thrust() - config.retro_thrust * phi).abs() < 1e-3);
        assert_eq!(sim.banner(), hud::landed_banner(95));
    }

    #[test]
    fn soft_landing_off_pad_changes_nothing() {
        let config = GameConfig::default();
        let mut sim = Simulation::new(config.clone(), 1).unwrap();
        let mut surface = RecordingTarget::new();
        press_any(&mut sim, &mut surface);

        // Well clear of the pad on X, still inside the world.
        let pad = sim.pad;
        let off_x = if pad.center_x() > 0 {
            pad.center_x() - 5000
        } else {
            pad.center_x() + 5000
        };
        sim.craft.offset = IVec3::new(off_x, 6, pad.center_z());
        sim.lander.alt = 1.0;
        sim.lander.vert_speed = -5.0;
        sim.lander.lat_veloc = 10.0;
        sim.lander.heading = 0.7;

        surface.reset();
        sim.tick(&InputState::new(), &mut surface);

        assert_eq!(sim.phase(), Phase::Landed);
        assert_eq!(sim.scoreboard().score(), 0);
        assert_eq!(sim.scoreboard().gravity(), config.gravity);
        assert_eq!(sim.scoreboard().retro_thrust(), config.retro_thrust);
        assert!(sim.banner().starts_with("Landed Off Pad"));
    }

    #[test]
    fn outcome_banner_then_restart_flies_fresh() {
        let mut sim = Simulation::new(GameConfig::default(), 1).unwrap();
        let mut surface = RecordingTarget::new();
        press_any(&mut sim, &mut surface);
        run_until_grounded(&mut sim, &mut surface);
        assert_eq!(sim.phase(), Phase::Crashed);

        // The banner keeps showing while grounded...
        surface.reset();
        sim.tick(&InputState::new(), &mut surface);
        assert_eq!(surface.texts().len(), 1);

        // ...until any button starts a fresh attempt.
        press_any(&mut sim, &mut surface);
        assert_eq!(sim.phase(), Phase::Flying);
        assert_eq!(sim.lander().fuel, sim.config().full_tank);
        assert_eq!(sim.lander().lat_veloc, 100.0);
    }

    #[test]
    fn flame_renders_only_while_retro_fires() {
        let mut sim = Simulation::new(GameConfig::default(), 1).unwrap();
        let mut surface = RecordingTarget::new();
        press_any(&mut sim, &mut surface);

        // Render the identical pose twice, retro off then on. At the drop
        // point the craft hangs 2000 px ahead of the camera, so all four
        // flame lines land in view.
        sim.lander.retro_thruster = 0.0;
        surface.reset();
        sim.render_world(&mut surface);
        let idle_lines = surface.lines_drawn();

        sim.lander.retro_thruster = sim.scoreboard.retro_thrust();
        surface.reset();
        sim.render_world(&mut surface);
        assert_eq!(surface.lines_drawn(), idle_lines + models::FLAME.len());
    }

    #[test]
    fn regenerated_world_moves_the_pad() {
        let mut sim = Simulation::new(GameConfig::default(), 1).unwrap();
        let before = sim.pad;
        let lines_before = sim.world.len();
        sim.regenerate_world(2).unwrap();
        assert_ne!(sim.pad, before);
        assert!(sim.world.len() > 0);
        // Same tiling step, same line count.
        assert_eq!(sim.world.len(), lines_before);
    }
}
