//! Core types for the wireframe flight simulator.
//!
//! This crate provides the foundational types used across all systems:
//! - Trigonometric lookup table and wrapped angle indices
//! - World-space line and device-space segment geometry
//! - World bounds for toroidal wraparound
//! - Fixed-rate tick clock

pub mod geometry;
pub mod time;
pub mod trig;

pub use geometry::*;
pub use time::*;
pub use trig::*;

// Re-export commonly used types
pub use glam::{IVec3, Vec2, Vec3};
