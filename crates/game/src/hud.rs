//! Control-panel instruments and message banners.
//!
//! Everything here draws into the panel strip below the view window: heading
//! dial, fuel gauge, radar, and the telemetry labels. Label text comes from
//! typed builder functions so the formats live in one place.

use procgen::Pad;
use renderer::{Color, Surface};

use crate::config::GameConfig;
use crate::lander::Lander;

// ── Label builders ──────────────────────────────────────────────────────────

pub const BEGIN_BANNER: &str = "Press any button to begin";

pub fn score_label(score: i32) -> String {
    format!("Score: {}", score)
}

pub fn gravity_label(gravity: f32) -> String {
    format!("Gravity: {:.2} ft*s^-2", gravity)
}

pub fn velocity_label(vert_speed: f32) -> String {
    format!("Velocity: {:06.2} ft/s", vert_speed)
}

pub fn crash_banner(score: i32) -> String {
    format!("CRASH!!     Final Score: {}", score)
}

pub fn landed_banner(score: i32) -> String {
    format!("Nice Landing!  Score: {}", score)
}

pub fn off_pad_banner(score: i32) -> String {
    format!("Landed Off Pad!  Score: {}", score)
}

// ── Radar mapping ───────────────────────────────────────────────────────────

/// World X to radar-screen X.
pub fn radar_x(config: &GameConfig, world_x: i32) -> i32 {
    180 + (world_x + config.world_width / 2) / 384
}

/// World Z to radar-screen Y (radar north is +Z).
pub fn radar_y(config: &GameConfig, world_z: i32) -> i32 {
    config.view_height + 56 - (world_z + config.world_length / 2) / 384
}

// ── Drawing ─────────────────────────────────────────────────────────────────

/// Panel chrome: dithered backing, heading dial, radar screen, and the
/// telemetry labels that change every tick.
pub fn draw_panel(config: &GameConfig, score: i32, gravity: f32, surface: &mut dyn Surface) {
    let vh = config.view_height;
    surface.fill_rect(0, vh, config.view_width, config.panel_height, Color::Checker);

    // Heading indicator dial
    surface.fill_ellipse(4, vh + 4, 52, 52, 0.0, 359.0, Color::White);
    draw_label(60, vh + 22, 2, "Heading", surface);

    // Radar screen
    surface.fill_rect(180, vh + 4, 52, 52, Color::White);

    draw_label(240, vh + 3, 2, &score_label(score), surface);
    draw_label(240, vh + 21, 2, &gravity_label(gravity), surface);
}

/// Per-tick instruments: heading needle, fuel gauge, velocity readout, and
/// the radar blips. Leaves the clip region on the radar rectangle.
pub fn draw_instruments(
    config: &GameConfig,
    lander: &Lander,
    craft_offset: glam::IVec3,
    pad: &Pad,
    surface: &mut dyn Surface,
) {
    let vh = config.view_height;

    // Heading needle from the dial center
    let needle_x = 30 + (24.0 * lander.heading.cos()) as i32;
    let needle_y = 30 - (24.0 * lander.heading.sin()) as i32;
    surface.draw_line(30, vh + 30, needle_x, vh + needle_y, 2, Color::Xor);

    // Fuel gauge
    let level = (lander.fuel / 6.0) as i32;
    surface.fill_rect(140, vh + 4, 20, 53, Color::White);
    surface.fill_rect(140, vh + 4 + 53 - level, 20, level, Color::Xor);
    draw_label(160, vh + 4, 2, "F", surface);
    draw_label(160, vh + 39, 2, "E", surface);

    draw_label(240, vh + 39, 2, &velocity_label(lander.vert_speed), surface);

    // Radar: pad blip, then the craft
    surface.set_clip(180, vh + 4, 52, 52);
    surface.fill_ellipse(
        radar_x(config, pad.origin_x),
        radar_y(config, pad.origin_z),
        5,
        5,
        0.0,
        360.0,
        Color::Xor,
    );
    surface.fill_ellipse(
        radar_x(config, craft_offset.x),
        radar_y(config, craft_offset.z),
        3,
        3,
        0.0,
        360.0,
        Color::Xor,
    );
}

/// Text on a filled backing box.
pub fn draw_label(x: i32, y: i32, pad: i32, text: &str, surface: &mut dyn Surface) {
    let (w, h) = surface.measure_text(text);
    surface.fill_rect(x, y, w + 2 * pad, h + 2 * pad, Color::Black);
    surface.draw_text(x + pad, y + pad, text);
}

/// Outcome/pause banner centered over the whole screen.
pub fn draw_banner(config: &GameConfig, text: &str, surface: &mut dyn Surface) {
    let (w, h) = surface.measure_text(text);
    let x = (config.view_width - w) / 2;
    let y = (config.screen_height() - h) / 2;
    draw_label(x, y, 2, text, surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use renderer::RecordingTarget;

    #[test]
    fn labels_format_like_the_panel_expects() {
        assert_eq!(score_label(120), "Score: 120");
        assert_eq!(gravity_label(-5.31), "Gravity: -5.31 ft*s^-2");
        assert_eq!(velocity_label(-3.5), "Velocity: -03.50 ft/s");
        assert_eq!(velocity_label(12.0), "Velocity: 012.00 ft/s");
        assert_eq!(crash_banner(40), "CRASH!!     Final Score: 40");
        assert_eq!(landed_banner(95), "Nice Landing!  Score: 95");
        assert_eq!(off_pad_banner(0), "Landed Off Pad!  Score: 0");
    }

    #[test]
    fn radar_maps_world_extremes_onto_screen() {
        let config = GameConfig::default();
        // World center lands mid-radar.
        assert_eq!(radar_x(&config, 0), 180 + 10000 / 384);
        // The west edge maps to the radar's left column.
        assert_eq!(radar_x(&config, -config.world_width / 2), 180);
        // North edge (max Z) maps to the radar's top.
        let top = radar_y(&config, config.world_length / 2);
        let bottom = radar_y(&config, -config.world_length / 2);
        assert!(top < bottom);
        assert_eq!(bottom, config.view_height + 56);
    }

    #[test]
    fn banner_centers_on_screen() {
        let config = GameConfig::default();
        let mut surface = RecordingTarget::new();
        draw_banner(&config, "Press any button to begin", &mut surface);
        let texts = surface.texts();
        assert_eq!(texts, vec!["Press any button to begin"]);
        // 25 glyphs at 6px = 150px wide: label box starts near x = 125.
        match &surface.ops()[0] {
            renderer::DrawOp::Rect { x, .. } => assert_eq!(*x, (400 - 150) / 2),
            other => panic!("expected backing rect, got {:?}", other),
        }
    }
}
