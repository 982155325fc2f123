use crate::types::{BinaryOp, ExprNode, NodeCounts, TernaryOp, UnaryOp};
use rand::Rng;

/// Pick one of the ten non-leaf operators uniformly, all slots empty
pub fn random_operator<R: Rng + ?Sized>(rng: &mut R) -> ExprNode {
    match rng.gen_range(0..10) {
        0 => ExprNode::binary(BinaryOp::Add),
        1 => ExprNode::binary(BinaryOp::Subtract),
        2 => ExprNode::binary(BinaryOp::Multiply),
        3 => ExprNode::binary(BinaryOp::Divide),
        4 => ExprNode::binary(BinaryOp::ArcTangent2),
        5 => ExprNode::unary(UnaryOp::ArcTangent),
        6 => ExprNode::unary(UnaryOp::Cosine),
        7 => ExprNode::unary(UnaryOp::Sine),
        8 => ExprNode::binary(BinaryOp::Noise),
        9 => ExprNode::ternary(TernaryOp::Lerp),
        other => unreachable!("operator selector out of range: {}", other),
    }
}

/// Pick X, Y or a constant in [-1, 1) uniformly
pub fn random_leaf<R: Rng + ?Sized>(rng: &mut R) -> ExprNode {
    match rng.gen_range(0..3) {
        0 => ExprNode::VarX,
        1 => ExprNode::VarY,
        2 => ExprNode::Constant(rng.gen_range(-1.0f32..1.0)),
        other => unreachable!("leaf selector out of range: {}", other),
    }
}

impl ExprNode {
    /// Insert `node` into the first empty slot found along one randomly
    /// chosen path from this node.
    ///
    /// Single-slot nodes always descend into their only slot; two- and
    /// three-slot nodes pick a slot uniformly at every level. Only the
    /// chosen slot is tried, so the call gives up (returns `false` and
    /// drops `node`) if the path ends on a leaf. Calling this on a leaf
    /// is a no-op.
    pub fn add_random<R: Rng + ?Sized>(&mut self, node: ExprNode, rng: &mut R) -> bool {
        let slots = self.slots_mut();
        let idx = match slots.len() {
            0 => return false,
            1 => 0,
            n => rng.gen_range(0..n),
        };

        let slot = &mut slots[idx];
        if let Some(child) = slot {
            return child.add_random(node, rng);
        }
        *slot = Some(Box::new(node));
        true
    }

    /// Count nodes present and slots left open, recursively.
    ///
    /// A leaf is `(1, 0)`; an operator is itself plus its children, with
    /// each empty slot contributing one to `empty`.
    pub fn node_counts(&self) -> NodeCounts {
        let mut counts = NodeCounts { filled: 1, empty: 0 };
        for slot in self.slots() {
            match slot {
                Some(child) => {
                    let child_counts = child.node_counts();
                    counts.filled += child_counts.filled;
                    counts.empty += child_counts.empty;
                }
                None => counts.empty += 1,
            }
        }
        counts
    }

    pub fn is_complete(&self) -> bool {
        self.node_counts().is_complete()
    }
}
