//! Procedural world generation: ridge-line terrain and landing pad placement.

pub mod terrain;

pub use terrain::*;
