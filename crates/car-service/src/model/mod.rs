//! Pure data structures: the persisted [`CarEntity`], the wire [`CarResource`] and the
//! field rules applied to incoming bodies.

pub mod car;
pub mod validation;

pub use car::*;
pub use validation::*;
