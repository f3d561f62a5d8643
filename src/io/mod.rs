//! Read/write of fit artifacts.

pub mod export;

pub use export::*;
