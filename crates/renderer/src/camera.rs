//! Camera pose and viewport for the projection pipeline.

use engine_core::Angle;
use glam::IVec3;

/// Six-value camera reference frame used each frame to project world lines to
/// screen space: integer world position plus orientation as trig-table
/// indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewPose {
    /// Camera reference point in world pixels (lagged behind the craft).
    pub position: IVec3,
    pub pitch: Angle,
    pub roll: Angle,
    pub yaw: Angle,
}

impl ViewPose {
    /// Level pose at the given position.
    pub fn at(position: IVec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Device viewport the pipeline projects into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f32 {
        (self.width / 2) as f32
    }

    pub fn quarter_width(&self) -> f32 {
        (self.width / 4) as f32
    }
}
