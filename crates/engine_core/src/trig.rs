//! Precomputed sine/cosine table for fast rotation math.
//!
//! Orientation angles are stored as wrapped integer indices into the table, so
//! rotation lookups are O(1) with exact wraparound — no transcendental calls
//! inside the projection loop.

/// Number of samples covering one full revolution (~0.01 rad resolution).
pub const ANGLE_STEPS: usize = 628;

/// An orientation angle stored as a wrapped index into [`TrigTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Angle(usize);

impl Angle {
    pub const ZERO: Self = Self(0);

    /// Wrap an arbitrary signed index into `0..ANGLE_STEPS`.
    pub fn from_index(index: isize) -> Self {
        Self(index.rem_euclid(ANGLE_STEPS as isize) as usize)
    }

    /// Convert an angle in radians to the nearest table index.
    pub fn from_radians(radians: f32) -> Self {
        let step = std::f32::consts::TAU / ANGLE_STEPS as f32;
        Self::from_index((radians / step).round() as isize)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Add a signed step count, wrapping around the full circle.
    pub fn offset(self, delta: isize) -> Self {
        Self::from_index(self.0 as isize + delta)
    }
}

/// Sine and cosine sampled at evenly spaced angles over one revolution.
#[derive(Debug, Clone)]
pub struct TrigTable {
    sin: Box<[f32; ANGLE_STEPS]>,
    cos: Box<[f32; ANGLE_STEPS]>,
}

impl TrigTable {
    /// Fill both tables. Pure precomputation with no failure mode; must run
    /// once before any projection occurs.
    pub fn build() -> Self {
        let mut sin = Box::new([0.0f32; ANGLE_STEPS]);
        let mut cos = Box::new([0.0f32; ANGLE_STEPS]);
        let step = std::f32::consts::TAU / ANGLE_STEPS as f32;
        let mut t = 0.0f32;
        for i in 0..ANGLE_STEPS {
            sin[i] = t.sin();
            cos[i] = t.cos();
            t += step;
        }
        Self { sin, cos }
    }

    #[inline]
    pub fn sin(&self, angle: Angle) -> f32 {
        self.sin[angle.index()]
    }

    #[inline]
    pub fn cos(&self, angle: Angle) -> f32 {
        self.cos[angle.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_transcendentals_at_cardinal_points() {
        let table = TrigTable::build();
        assert_eq!(table.sin(Angle::ZERO), 0.0);
        assert_eq!(table.cos(Angle::ZERO), 1.0);

        // A quarter revolution is ANGLE_STEPS/4 = 157 steps.
        let quarter = Angle::from_index(ANGLE_STEPS as isize / 4);
        assert!(table.sin(quarter) > 0.999);
        assert!(table.cos(quarter).abs() < 0.01);
    }

    #[test]
    fn angle_wraps_exactly() {
        let full = ANGLE_STEPS as isize;
        assert_eq!(Angle::from_index(full), Angle::ZERO);
        assert_eq!(Angle::from_index(-1), Angle::from_index(full - 1));
        assert_eq!(Angle::from_index(3).offset(full), Angle::from_index(3));
        assert_eq!(Angle::from_index(0).offset(-2), Angle::from_index(full - 2));
    }

    #[test]
    fn radians_round_trip() {
        let half_turn = Angle::from_radians(std::f32::consts::PI);
        assert_eq!(half_turn.index(), ANGLE_STEPS / 2);
    }
}
