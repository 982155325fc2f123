use crate::engines::synthesis::grid::{fill_parallel, Field};
use crate::error::{Result, TexgenError};
use crate::functions::NoisePrimitive;
use crate::types::{BinaryOp, ExprNode, Slot, TernaryOp, UnaryOp};

/// Scale applied to the noise primitive by the `SimplexNoise` operator.
/// The result is not range-corrected.
pub const NOISE_OP_SCALE: f32 = 80.0;
pub const NOISE_OP_OFFSET: f32 = 2.0;

/// Evaluates expression trees against a noise primitive.
pub struct Evaluator<N: NoisePrimitive> {
    noise: N,
    workers: usize,
}

impl<N: NoisePrimitive> Evaluator<N> {
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            workers: rayon::current_num_threads(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Value of `node` at `(x, y)`.
    ///
    /// Division by zero and domain errors propagate as infinities or NaN.
    /// Fails with `IncompleteTree` if an empty slot is reached.
    pub fn eval(&self, node: &ExprNode, x: f32, y: f32) -> Result<f32> {
        self.eval_node(node, x, y).ok_or_else(|| TexgenError::IncompleteTree {
            empty: node.node_counts().empty,
        })
    }

    /// Evaluate a complete tree at each integer cell of a grid
    pub fn sample_grid(&self, node: &ExprNode, width: usize, height: usize) -> Result<Field> {
        let counts = node.node_counts();
        if !counts.is_complete() {
            return Err(TexgenError::IncompleteTree {
                empty: counts.empty,
            });
        }
        if width == 0 || height == 0 {
            return Err(TexgenError::Configuration(format!(
                "Grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        width.checked_mul(height).ok_or_else(|| {
            TexgenError::Configuration(format!("Grid {}x{} is too large", width, height))
        })?;

        let field = fill_parallel(width, height, self.workers, |x, y| {
            self.eval_node(node, x, y).unwrap_or(f32::NAN)
        });

        if field.samples.iter().any(|v| !v.is_finite()) {
            log::warn!("Sampled tree produced non-finite values: {}", node);
        }
        log::debug!(
            "Sampled {} nodes over {}x{}: range [{}, {}]",
            counts.filled,
            width,
            height,
            field.min,
            field.max
        );

        Ok(field)
    }

    fn eval_node(&self, node: &ExprNode, x: f32, y: f32) -> Option<f32> {
        match node {
            ExprNode::Constant(value) => Some(*value),
            ExprNode::VarX => Some(x),
            ExprNode::VarY => Some(y),
            ExprNode::Unary { op, children } => self.eval_unary(*op, children, x, y),
            ExprNode::Binary { op, children } => self.eval_binary(*op, children, x, y),
            ExprNode::Ternary { op, children } => self.eval_ternary(*op, children, x, y),
        }
    }

    fn eval_slot(&self, slot: &Slot, x: f32, y: f32) -> Option<f32> {
        self.eval_node(slot.as_deref()?, x, y)
    }

    fn eval_unary(&self, op: UnaryOp, children: &[Slot; 1], x: f32, y: f32) -> Option<f32> {
        let v = self.eval_slot(&children[0], x, y)?;
        Some(match op {
            UnaryOp::Sine => v.sin(),
            UnaryOp::Cosine => v.cos(),
            UnaryOp::ArcTangent => v.atan(),
        })
    }

    fn eval_binary(&self, op: BinaryOp, children: &[Slot; 2], x: f32, y: f32) -> Option<f32> {
        let left = self.eval_slot(&children[0], x, y)?;
        let right = self.eval_slot(&children[1], x, y)?;
        Some(match op {
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => left / right,
            BinaryOp::ArcTangent2 => left.atan2(right),
            BinaryOp::Noise => NOISE_OP_SCALE * self.noise.noise2d(left, right) - NOISE_OP_OFFSET,
        })
    }

    fn eval_ternary(&self, op: TernaryOp, children: &[Slot; 3], x: f32, y: f32) -> Option<f32> {
        match op {
            TernaryOp::Lerp => {
                let b1 = self.eval_slot(&children[0], x, y)?;
                let b2 = self.eval_slot(&children[1], x, y)?;
                let pct = self.eval_slot(&children[2], x, y)?.abs();
                Some(b1 + pct * (b1 - b2))
            }
        }
    }
}
