//! Procedural pattern synthesis.
//!
//! Two engines compute a scalar for every point of a 2D domain:
//! randomly grown expression trees evaluated per coordinate, and
//! fractal (fBm / turbulence) noise fields computed over a whole grid
//! in parallel.

pub mod config;
pub mod engines;
pub mod error;
pub mod functions;
pub mod types;

pub use engines::evaluation::Evaluator;
pub use engines::generation::{random_leaf, random_operator, TreeGrower};
pub use engines::synthesis::{Extent, Field, FieldGenerator};
pub use error::{Result, TexgenError};
pub use functions::{NoisePrimitive, SimplexNoise};
pub use types::{BinaryOp, ExprNode, NodeCounts, NoiseType, TernaryOp, UnaryOp};
