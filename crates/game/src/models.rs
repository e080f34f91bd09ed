//! Authored wireframe models: craft, shadow silhouette, thrust flame.
//!
//! Coordinate system: Y-up, world pixel units, origin under the craft's
//! center. Each set lives in its own database and is repositioned via the
//! database offset, never rebuilt.

use engine_core::Line3;

/// The craft: a double pyramid body on four legs.
pub const CRAFT: [Line3; 16] = [
    // Top half
    Line3::new(0.0, 800.0, 0.0, 300.0, 500.0, 0.0),
    Line3::new(0.0, 800.0, 0.0, -300.0, 500.0, 0.0),
    Line3::new(0.0, 800.0, 0.0, 0.0, 500.0, 300.0),
    Line3::new(0.0, 800.0, 0.0, 0.0, 500.0, -300.0),
    // Waist
    Line3::new(0.0, 500.0, 300.0, 300.0, 500.0, 0.0),
    Line3::new(300.0, 500.0, 0.0, 0.0, 500.0, -300.0),
    Line3::new(0.0, 500.0, -300.0, -300.0, 500.0, 0.0),
    Line3::new(-300.0, 500.0, 0.0, 0.0, 500.0, 300.0),
    // Bottom half
    Line3::new(0.0, 200.0, 0.0, 300.0, 500.0, 0.0),
    Line3::new(0.0, 200.0, 0.0, -300.0, 500.0, 0.0),
    Line3::new(0.0, 200.0, 0.0, 0.0, 500.0, 300.0),
    Line3::new(0.0, 200.0, 0.0, 0.0, 500.0, -300.0),
    // Legs
    Line3::new(300.0, 500.0, 0.0, 300.0, 0.0, 0.0),
    Line3::new(-300.0, 500.0, 0.0, -300.0, 0.0, 0.0),
    Line3::new(0.0, 500.0, 300.0, 0.0, 0.0, 300.0),
    Line3::new(0.0, 500.0, -300.0, 0.0, 0.0, -300.0),
];

/// Ground-level diamond under the craft.
pub const SHADOW: [Line3; 4] = [
    Line3::new(300.0, 0.0, 0.0, 0.0, 0.0, 300.0),
    Line3::new(0.0, 0.0, 300.0, -300.0, 0.0, 0.0),
    Line3::new(-300.0, 0.0, 0.0, 0.0, 0.0, -300.0),
    Line3::new(0.0, 0.0, -300.0, 300.0, 0.0, 0.0),
];

/// Retro exhaust streaks below the body; drawn only while the retro fires.
pub const FLAME: [Line3; 4] = [
    Line3::new(0.0, 200.0, 0.0, 100.0, -100.0, 30.0),
    Line3::new(0.0, 200.0, 0.0, -50.0, -100.0, 100.0),
    Line3::new(0.0, 200.0, 0.0, 10.0, -100.0, 40.0),
    Line3::new(0.0, 200.0, 0.0, -100.0, -100.0, -40.0),
];
