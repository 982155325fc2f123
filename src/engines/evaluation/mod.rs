pub mod expression;

pub use expression::Evaluator;
