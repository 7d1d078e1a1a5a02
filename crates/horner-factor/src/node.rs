//! Factorization trees stored in a flat arena.
//!
//! Nodes live in a `Vec` and refer to their children by [`NodeId`]. Every
//! child precedes its parent and the root is the last node, so evaluation,
//! cost counting and dropping are single passes over the vector no matter
//! how deep the tree is.

use std::fmt;

use horner_poly::{powu, OpCount, ValidationError};
use smallvec::SmallVec;

/// Residual `(variable, power)` pairs of a leaf, nonzero powers only.
pub type Powers = SmallVec<[(usize, u32); 4]>;

/// Index of a node within its [`FactorTree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a handle from an index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the index into the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A node of the nested Horner form.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FactorNode {
    /// `coefficient * Π x_d^k` over the residual powers.
    Leaf {
        /// Coefficient of the monomial.
        coefficient: f64,
        /// Powers not factored out on the way from the root.
        powers: Powers,
    },

    /// `x_variable^power * factored + rest`.
    Factor {
        /// Index of the factored variable.
        variable: usize,
        /// Power pulled out of every monomial in `factored`.
        power: u32,
        /// Monomials that contained the variable, with the power removed.
        factored: NodeId,
        /// Monomials that did not contain the variable.
        rest: Option<NodeId>,
    },
}

impl FactorNode {
    /// Returns true for leaves.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Operations spent by this node alone, excluding its children.
    #[must_use]
    pub fn cost(&self) -> OpCount {
        match self {
            Self::Leaf { powers, .. } => powers
                .iter()
                .map(|&(_, k)| OpCount::scale_by_power(k))
                .sum(),
            Self::Factor { power, rest, .. } => {
                let scale = OpCount::scale_by_power(*power);
                if rest.is_some() {
                    scale + OpCount::join()
                } else {
                    scale
                }
            }
        }
    }

    fn children(&self) -> impl Iterator<Item = NodeId> {
        let (factored, rest) = match self {
            Self::Leaf { .. } => (None, None),
            Self::Factor { factored, rest, .. } => (Some(*factored), *rest),
        };
        factored.into_iter().chain(rest)
    }
}

/// A complete factorization tree.
///
/// Built bottom-up by the engine and never modified afterwards.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<FactorNode>", into = "Vec<FactorNode>")
)]
pub struct FactorTree {
    nodes: Vec<FactorNode>,
}

impl FactorTree {
    /// Returns the root handle.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new((self.nodes.len() - 1) as u32)
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &FactorNode {
        &self.nodes[id.index()]
    }

    /// Returns all nodes, children before parents.
    #[must_use]
    pub fn nodes(&self) -> &[FactorNode] {
        &self.nodes
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluates the tree at `x`.
    ///
    /// # Panics
    ///
    /// Panics if a variable index is out of range for `x`.
    #[must_use]
    pub fn eval(&self, x: &[f64]) -> f64 {
        let mut values: Vec<f64> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let value = match node {
                FactorNode::Leaf {
                    coefficient,
                    powers,
                } => powers
                    .iter()
                    .fold(*coefficient, |acc, &(d, k)| acc * powu(x[d], k)),
                FactorNode::Factor {
                    variable,
                    power,
                    factored,
                    rest,
                } => {
                    let scaled = values[factored.index()] * powu(x[*variable], *power);
                    match rest {
                        Some(rest) => scaled + values[rest.index()],
                        None => scaled,
                    }
                }
            };
            values.push(value);
        }
        values.last().copied().unwrap_or(0.0)
    }

    /// Counts the operations [`FactorTree::eval`] performs.
    #[must_use]
    pub fn num_ops(&self) -> OpCount {
        self.nodes.iter().map(FactorNode::cost).sum()
    }

    /// Returns the number of leaves, i.e. monomials.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depths: Vec<usize> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let below = node.children().map(|c| depths[c.index()]).max();
            depths.push(1 + below.unwrap_or(0));
        }
        depths.last().copied().unwrap_or(0)
    }

    /// Returns the largest variable index referenced, if any.
    #[must_use]
    pub fn max_variable(&self) -> Option<usize> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                FactorNode::Leaf { powers, .. } => powers.iter().map(|&(d, _)| d).max(),
                FactorNode::Factor { variable, .. } => Some(*variable),
            })
            .max()
    }
}

impl TryFrom<Vec<FactorNode>> for FactorTree {
    type Error = ValidationError;

    /// Checks that `nodes` form one tree: children precede their parent, no
    /// node has two parents and every node but the last has one.
    fn try_from(nodes: Vec<FactorNode>) -> Result<Self, Self::Error> {
        if nodes.is_empty() {
            return Err(ValidationError::MalformedTree {
                node: 0,
                reason: "tree has no nodes",
            });
        }
        if u32::try_from(nodes.len()).is_err() {
            return Err(ValidationError::MalformedTree {
                node: nodes.len() - 1,
                reason: "too many nodes",
            });
        }

        let mut has_parent = vec![false; nodes.len()];
        for (i, node) in nodes.iter().enumerate() {
            for child in node.children() {
                let c = child.index();
                if c >= i {
                    return Err(ValidationError::MalformedTree {
                        node: i,
                        reason: "child does not precede its parent",
                    });
                }
                if std::mem::replace(&mut has_parent[c], true) {
                    return Err(ValidationError::MalformedTree {
                        node: c,
                        reason: "node has two parents",
                    });
                }
            }
        }
        if let Some(orphan) = has_parent[..nodes.len() - 1].iter().position(|&p| !p) {
            return Err(ValidationError::MalformedTree {
                node: orphan,
                reason: "node is unreachable from the root",
            });
        }

        Ok(Self { nodes })
    }
}

impl From<FactorTree> for Vec<FactorNode> {
    fn from(tree: FactorTree) -> Self {
        tree.nodes
    }
}

/// Appends nodes bottom-up; the last node pushed becomes the root.
#[derive(Debug, Default)]
pub(crate) struct TreeBuilder {
    nodes: Vec<FactorNode>,
}

impl TreeBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, node: FactorNode) -> NodeId {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Tree capacity exceeded");
        self.nodes.push(node);
        NodeId::new(index as u32)
    }

    pub(crate) fn leaf(&mut self, coefficient: f64, powers: Powers) -> NodeId {
        self.push(FactorNode::Leaf {
            coefficient,
            powers,
        })
    }

    /// Children must come from this builder.
    pub(crate) fn factor(
        &mut self,
        variable: usize,
        power: u32,
        factored: NodeId,
        rest: Option<NodeId>,
    ) -> NodeId {
        debug_assert!(factored.index() < self.nodes.len());
        debug_assert!(rest.map_or(true, |r| r.index() < self.nodes.len()));
        self.push(FactorNode::Factor {
            variable,
            power,
            factored,
            rest,
        })
    }

    /// Returns `None` if nothing was pushed.
    pub(crate) fn finish(self) -> Option<FactorTree> {
        (!self.nodes.is_empty()).then_some(FactorTree { nodes: self.nodes })
    }
}
