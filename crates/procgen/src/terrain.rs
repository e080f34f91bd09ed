//! Ridge-line terrain generation.
//!
//! **Seed-based determinism:** every line comes from `config.seed`, so the
//! same seed always produces a bit-identical terrain set and pad location.
//!
//! The world is marched in a hexagonal/triangular tiling: the outer loop steps
//! X by `edge + edge·cos 60°` while toggling a row-parity bit, the inner loop
//! steps Z by `2·edge·sin 60°` starting at the parity offset. Each vertex gets
//! a random height (one tile in three is elevated) and connects to its
//! neighbors by three edges, producing a jagged but connected wireframe ridge.

use engine_core::Line3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use renderer::{DbError, LineDb};

/// The landing pad: an 8-line flat platform with a directional marker, in
/// local coordinates with the origin at one corner. Translated once to its
/// world spot during generation.
const PAD_LINES: [Line3; 8] = [
    Line3::new(0.0, 0.0, 0.0, 750.0, 0.0, 0.0),
    Line3::new(0.0, 0.0, 0.0, 0.0, 0.0, 750.0),
    Line3::new(750.0, 0.0, 0.0, 750.0, 0.0, 750.0),
    Line3::new(0.0, 0.0, 750.0, 750.0, 0.0, 750.0),
    // Marker flag on the near corner
    Line3::new(0.0, 0.0, 0.0, 0.0, 750.0, 0.0),
    Line3::new(0.0, 750.0, 0.0, 150.0, 750.0, 0.0),
    Line3::new(150.0, 750.0, 0.0, 150.0, 550.0, 0.0),
    Line3::new(150.0, 550.0, 0.0, 0.0, 550.0, 0.0),
];

/// Pad platform extent in world pixels.
pub const PAD_WIDTH: i32 = 750;
pub const PAD_LENGTH: i32 = 750;

/// Configuration for terrain generation.
#[derive(Debug, Clone)]
pub struct TerrainConfig {
    /// World width in pixels (X axis).
    pub world_width: i32,
    /// World length in pixels (Z axis).
    pub world_length: i32,
    /// Tile edge length in pixels.
    pub edge_length: i32,
    /// Maximum ridge height in pixels (exclusive).
    pub max_height: i32,
    /// Seed for random generation.
    pub seed: u64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            world_width: 20000,
            world_length: 20000,
            edge_length: 1000,
            max_height: 2500,
            seed: 0,
        }
    }
}

/// Where the landing pad ended up, for scoring and the radar blip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pad {
    /// World position of the pad's near corner.
    pub origin_x: i32,
    pub origin_z: i32,
}

impl Pad {
    pub fn center_x(&self) -> i32 {
        self.origin_x + PAD_WIDTH / 2
    }

    pub fn center_z(&self) -> i32 {
        self.origin_z + PAD_LENGTH / 2
    }
}

/// Generate the world's terrain and landing pad into `db`, then finalize it.
/// Deterministic given `config.seed`. Allocation failure from the database is
/// fatal and propagates.
pub fn generate(config: &TerrainConfig, db: &mut LineDb) -> Result<Pad, DbError> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let half_width = config.world_width / 2;
    let half_length = config.world_length / 2;
    let edge = config.edge_length;
    let x_offset = (edge as f32 * 60f32.to_radians().cos()) as i32;
    let z_offset = (edge as f32 * 60f32.to_radians().sin()) as i32;

    let mut parity = 0;
    let mut x = -half_width;
    while x < half_width {
        let mut z = parity * z_offset - half_length;
        while z < half_length {
            // One vertex in three is elevated, up to max_height.
            let height = if rng.gen_range(0..3) != 0 {
                0
            } else {
                rng.gen_range(0..config.max_height)
            };
            let (xf, zf, hf) = (x as f32, z as f32, height as f32);
            db.insert(Line3::new(xf, hf, zf, (x + edge) as f32, 0.0, zf));
            db.insert(Line3::new(
                xf,
                hf,
                zf,
                (x - x_offset) as f32,
                0.0,
                (z - z_offset) as f32,
            ));
            db.insert(Line3::new(
                xf,
                hf,
                zf,
                (x - x_offset) as f32,
                0.0,
                (z + z_offset) as f32,
            ));
            z += 2 * z_offset;
        }
        parity ^= 1;
        x += edge + x_offset;
    }

    // Drop the landing pad somewhere on the ground.
    let pad = Pad {
        origin_x: rng.gen_range(0..config.world_width) - half_width,
        origin_z: rng.gen_range(0..config.world_length) - half_length,
    };
    for line in PAD_LINES {
        db.insert(line.translated(glam::Vec3::new(
            pad.origin_x as f32,
            0.0,
            pad.origin_z as f32,
        )));
    }

    db.finalize()?;
    log::info!(
        "generated world: {} lines, pad at ({}, {})",
        db.len(),
        pad.origin_x,
        pad.origin_z
    );
    Ok(pad)
}
