//! Joint objective and global optimizer.
//!
//! Responsibilities:
//!
//! - score one candidate parameter vector against both observation sets
//!   (`objective`), with domain gating and explicit failure reporting
//! - search the bounded parameter box with differential evolution (`de`),
//!   evaluating each generation's candidates in parallel

pub mod de;
pub mod objective;

pub use de::*;
pub use objective::*;
