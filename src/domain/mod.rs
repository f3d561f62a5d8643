//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the equation-of-state parameter vector (`Params`) and its search box
//!   (`ParamBounds`)
//! - immutable observation sets (`SnSample`, `BaoPoint`)
//! - fit outputs (`FitResult`, `FitQuality`)
//! - the resolved run configuration (`FitConfig`)

pub mod types;

pub use types::*;
