pub mod grower;
pub mod notation;
pub mod operators;

pub use grower::TreeGrower;
pub use operators::{random_leaf, random_operator};
