use serde::{Deserialize, Serialize};

/// A child position on an operator node. `None` is an open growth point.
pub type Slot = Option<Box<ExprNode>>;

/// Operators taking one child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Sine,
    Cosine,
    ArcTangent,
}

/// Operators taking two children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    ArcTangent2, // atan2(left, right)
    Noise,       // 80 * noise2d(left, right) - 2
}

/// Operators taking three children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TernaryOp {
    Lerp, // left + |right| * (left - mid)
}

/// Expression tree node.
///
/// Each operator carries a fixed-size array of child slots sized by its
/// arity and owns its children exclusively, so a tree is always a tree
/// (no sharing, no cycles) and is dropped as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprNode {
    Constant(f32),
    VarX,
    VarY,
    Unary { op: UnaryOp, children: [Slot; 1] },
    Binary { op: BinaryOp, children: [Slot; 2] },
    Ternary { op: TernaryOp, children: [Slot; 3] },
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Sine => "Sine",
            UnaryOp::Cosine => "Cos",
            UnaryOp::ArcTangent => "Atan",
        }
    }
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::ArcTangent2 => "Atan2",
            BinaryOp::Noise => "SimplexNoise",
        }
    }
}

impl TernaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            TernaryOp::Lerp => "Lerp",
        }
    }
}

impl ExprNode {
    /// Operator with all slots empty
    pub fn unary(op: UnaryOp) -> Self {
        ExprNode::Unary { op, children: [None] }
    }

    pub fn binary(op: BinaryOp) -> Self {
        ExprNode::Binary { op, children: [None, None] }
    }

    pub fn ternary(op: TernaryOp) -> Self {
        ExprNode::Ternary { op, children: [None, None, None] }
    }

    /// Operator with its slot filled
    pub fn unary_with(op: UnaryOp, child: ExprNode) -> Self {
        ExprNode::Unary { op, children: [Some(Box::new(child))] }
    }

    pub fn binary_with(op: BinaryOp, left: ExprNode, right: ExprNode) -> Self {
        ExprNode::Binary {
            op,
            children: [Some(Box::new(left)), Some(Box::new(right))],
        }
    }

    pub fn ternary_with(op: TernaryOp, left: ExprNode, mid: ExprNode, right: ExprNode) -> Self {
        ExprNode::Ternary {
            op,
            children: [
                Some(Box::new(left)),
                Some(Box::new(mid)),
                Some(Box::new(right)),
            ],
        }
    }

    /// Number of child slots (0 for leaves)
    pub fn arity(&self) -> usize {
        self.slots().len()
    }

    pub fn is_leaf(&self) -> bool {
        self.arity() == 0
    }

    pub fn slots(&self) -> &[Slot] {
        match self {
            ExprNode::Constant(_) | ExprNode::VarX | ExprNode::VarY => &[],
            ExprNode::Unary { children, .. } => children.as_slice(),
            ExprNode::Binary { children, .. } => children.as_slice(),
            ExprNode::Ternary { children, .. } => children.as_slice(),
        }
    }

    pub fn slots_mut(&mut self) -> &mut [Slot] {
        match self {
            ExprNode::Constant(_) | ExprNode::VarX | ExprNode::VarY => &mut [],
            ExprNode::Unary { children, .. } => children.as_mut_slice(),
            ExprNode::Binary { children, .. } => children.as_mut_slice(),
            ExprNode::Ternary { children, .. } => children.as_mut_slice(),
        }
    }

    /// Longest root-to-node path, counting the root as 1. Empty slots add nothing.
    pub fn depth(&self) -> usize {
        1 + self
            .slots()
            .iter()
            .flatten()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }
}

/// Result of counting a tree: nodes present and slots still open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeCounts {
    pub filled: usize,
    pub empty: usize,
}

impl NodeCounts {
    pub fn is_complete(&self) -> bool {
        self.empty == 0
    }
}

/// Fractal noise flavour computed by the field generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    Fbm,
    Turbulence,
}
