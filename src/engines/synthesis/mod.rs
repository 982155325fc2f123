pub mod field;
pub mod grid;

pub use field::{fbm, turbulence, FieldGenerator};
pub use grid::{partition, Extent, Field};
