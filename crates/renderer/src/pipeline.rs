//! The camera/projection pipeline: world-space line in, device-space segment
//! out.
//!
//! Stages, in order: toroidal wrap, view translation, table-driven
//! yaw→pitch→roll rotation, near-plane clip, perspective divide, viewport
//! rejection, integer device conversion. A discarded line is a normal,
//! frequent outcome of clipping, not an error.
//!
//! All arithmetic is `f32`; integer world positions enter the pipeline as
//! floats and leave as `i16` device pixels.

use engine_core::{Line3, Segment2, TrigTable, WorldBounds};
use glam::{Vec2, Vec3};

use crate::camera::{ViewPose, Viewport};

/// Result of pushing one world line through the pipeline.
///
/// `contact` is raised when a near-plane clip intersection lands strictly
/// inside the view rectangle — the craft is about to pass through geometry.
/// It is a diagnostic signal; gameplay termination is altitude-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projected {
    pub segment: Option<Segment2>,
    pub contact: bool,
}

/// Projects world lines into a viewport for a given camera pose.
///
/// Borrows the trig table; cheap to construct per frame.
pub struct Projector<'a> {
    trig: &'a TrigTable,
    bounds: WorldBounds,
    viewport: Viewport,
    focal: f32,
}

enum NearClip {
    /// Entirely behind the viewer; nothing to project.
    Behind,
    Kept { contact: bool },
}

impl<'a> Projector<'a> {
    pub fn new(trig: &'a TrigTable, bounds: WorldBounds, viewport: Viewport, focal: f32) -> Self {
        Self {
            trig,
            bounds,
            viewport,
            focal,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Run the full pipeline on one world-space line.
    pub fn project(&self, line: Line3, pose: &ViewPose) -> Projected {
        let line = self.wrap(line, pose);

        // Translate the viewpoint to the world origin (homogeneous W = 1).
        let eye = pose.position.as_vec3();
        let mut p1 = self.rotate(line.a - eye, pose);
        let mut p2 = self.rotate(line.b - eye, pose);

        // Camera-X is centered on the viewport before clipping so the
        // clip-contact test works in screen terms.
        p1.x += self.viewport.half_width();
        p2.x += self.viewport.half_width();

        let contact = match self.clip_near(&mut p1, &mut p2) {
            NearClip::Behind => return Projected::default(),
            NearClip::Kept { contact } => contact,
        };

        let mut d1 = self.perspective(p1);
        let mut d2 = self.perspective(p2);
        d1.y = self.viewport.height as f32 - d1.y;
        d2.y = self.viewport.height as f32 - d2.y;

        // Reject segments wholly outside the viewport on one side. No partial
        // clipping against the rectangle edges beyond the near-plane step.
        let w = self.viewport.width as f32;
        let h = self.viewport.height as f32;
        if (d1.x < 0.0 && d2.x < 0.0)
            || (d1.y < 0.0 && d2.y < 0.0)
            || (d1.x > w && d2.x > w)
            || (d1.y > h && d2.y > h)
        {
            return Projected {
                segment: None,
                contact,
            };
        }

        Projected {
            segment: Some(Segment2 {
                x1: d1.x as i16,
                y1: d1.y as i16,
                x2: d2.x as i16,
                y2: d2.y as i16,
            }),
            contact,
        }
    }

    /// Shift the line into the nearest wrapped copy of the world so the finite
    /// tile reads as unbounded terrain. The first endpoint decides the wrap.
    fn wrap(&self, mut line: Line3, pose: &ViewPose) -> Line3 {
        let length = self.bounds.length() as f32;
        let width = self.bounds.width() as f32;
        let pz = pose.position.z as f32;
        let px = pose.position.x as f32;

        if line.a.z < pz {
            line.a.z += length;
            line.b.z += length;
        } else if line.a.z > pz + length {
            line.a.z -= length;
            line.b.z -= length;
        }

        if line.a.x < px - width / 2.0 {
            line.a.x += width;
            line.b.x += width;
        } else if line.a.x > px + width / 2.0 {
            line.a.x -= width;
            line.b.x -= width;
        }

        line
    }

    /// Rotate world axes into camera axes. Coefficients come straight from the
    /// lookup table; composition order is yaw, then pitch, then roll.
    fn rotate(&self, p: Vec3, pose: &ViewPose) -> Vec3 {
        let sp = self.trig.sin(pose.pitch);
        let cp = self.trig.cos(pose.pitch);
        let sr = self.trig.sin(pose.roll);
        let cr = self.trig.cos(pose.roll);
        let sy = self.trig.sin(pose.yaw);
        let cy = self.trig.cos(pose.yaw);

        Vec3::new(
            p.x * (cr * cy + sr * sp * sy) + p.y * (-sr * cy + cr * sp * sy) + p.z * cp * sy,
            p.x * sr * cp + p.y * cr * cp - p.z * sp,
            p.x * (-cr * sy + sr * sp * cy) + p.y * (sr * sy + cr * sp * cy) + p.z * cp * cy,
        )
    }

    /// Clip the segment at camera depth 0. A straddling segment gets its
    /// behind endpoint replaced by the interpolated intersection at depth
    /// exactly 0; if that point lies strictly inside the view rectangle the
    /// contact flag is raised.
    fn clip_near(&self, p1: &mut Vec3, p2: &mut Vec3) -> NearClip {
        if p1.z < 0.0 && p2.z < 0.0 {
            return NearClip::Behind;
        }
        if p1.z >= 0.0 && p2.z >= 0.0 {
            return NearClip::Kept { contact: false };
        }
        // Equal depths cannot straddle zero; the guard keeps the division
        // below well-defined.
        if p1.z == p2.z {
            return NearClip::Kept { contact: false };
        }

        let mut hit = *p2 - (*p1 - *p2) * (p2.z / (p1.z - p2.z));
        hit.z = 0.0;

        let contact = hit.x > 0.0
            && hit.x < self.viewport.width as f32
            && hit.y > 0.0
            && hit.y < self.viewport.height as f32;

        if p1.z < 0.0 {
            *p1 = hit;
        } else {
            *p2 = hit;
        }
        NearClip::Kept { contact }
    }

    /// Perspective divide with a fixed focal distance. A depth of exactly
    /// `-focal` yields a zero scale factor instead of a fault.
    fn perspective(&self, p: Vec3) -> Vec2 {
        let denom = p.z + self.focal;
        let s = if denom != 0.0 { self.focal / denom } else { 0.0 };
        Vec2::new(
            s * p.x + (1.0 - s) * self.viewport.half_width(),
            s * p.y + (1.0 - s) * self.viewport.quarter_width(),
        )
    }
}
