//! Observation loading and generation.
//!
//! - `pantheon`: whitespace-delimited supernova distance table → `SnSample`
//! - `bao`: the fixed DESI DR2 BAO measurement table
//! - `synth`: seeded synthetic observations for demos and round-trip tests
//!
//! Observation sets are loaded once, before optimization starts, and are
//! immutable afterwards; a load failure is fatal (no meaningful fit without
//! data) and surfaces before any optimization work.

pub mod bao;
pub mod pantheon;
pub mod synth;

pub use bao::*;
pub use pantheon::*;
pub use synth::*;
