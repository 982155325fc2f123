use crate::config::GrowthConfig;
use crate::engines::generation::operators::{random_leaf, random_operator};
use crate::types::ExprNode;
use rand::Rng;

/// Grows complete random trees with a leaves-last policy: operators are
/// inserted first, then leaves until no slot is left open.
pub struct TreeGrower {
    config: GrowthConfig,
}

impl TreeGrower {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Build a complete tree holding `operator_count` operators
    pub fn grow<R: Rng + ?Sized>(&self, rng: &mut R) -> ExprNode {
        let mut root = random_operator(rng);

        // Without leaves in the tree every descent ends on an open slot
        for _ in 1..self.config.operator_count.max(1) {
            root.add_random(random_operator(rng), rng);
        }

        let mut attempts = 0usize;
        let mut placed = 0usize;
        while !root.is_complete() {
            attempts += 1;
            if root.add_random(random_leaf(rng), rng) {
                placed += 1;
            }
        }

        log::debug!(
            "Grew tree: {} operators, {} leaves placed in {} attempts, depth {}",
            self.config.operator_count,
            placed,
            attempts,
            root.depth()
        );

        root
    }

    /// Fill the open slots of an existing tree with random leaves
    pub fn complete<R: Rng + ?Sized>(&self, tree: &mut ExprNode, rng: &mut R) {
        while !tree.is_complete() {
            tree.add_random(random_leaf(rng), rng);
        }
    }
}
