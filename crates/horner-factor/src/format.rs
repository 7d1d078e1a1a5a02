//! Nested rendering of factorization trees.
//!
//! An internal node prints as `x_d^k [ <factored> ] + <rest>`, a leaf as
//! `x_a^i x_b^j [ c ]`, or just `c` when nothing is left to multiply.
//! Variables are 1-based, as in the flat rendering of `MultivarPoly`.

use std::fmt;

use horner_poly::monomial::write_powers;

use crate::node::{FactorNode, FactorTree, NodeId};
use crate::recipe::HornerPoly;

/// Output still to be written, last in first out.
enum Piece {
    Node(NodeId),
    Text(&'static str),
}

fn render(tree: &FactorTree, out: &mut String) {
    let mut pending = vec![Piece::Node(tree.root())];
    while let Some(piece) = pending.pop() {
        let id = match piece {
            Piece::Text(text) => {
                out.push_str(text);
                continue;
            }
            Piece::Node(id) => id,
        };
        match tree.node(id) {
            FactorNode::Leaf {
                coefficient,
                powers,
            } => {
                if powers.is_empty() {
                    out.push_str(&format!("{coefficient:?}"));
                } else {
                    let mut prefix = String::new();
                    write_powers(&mut prefix, powers.iter().copied());
                    out.push_str(&format!("{prefix} [ {coefficient:?} ]"));
                }
            }
            FactorNode::Factor {
                variable,
                power,
                factored,
                rest,
            } => {
                out.push_str(&format!("x_{}^{} [ ", variable + 1, power));
                if let Some(rest) = rest {
                    pending.push(Piece::Node(*rest));
                    pending.push(Piece::Text(" + "));
                }
                pending.push(Piece::Text(" ]"));
                pending.push(Piece::Node(*factored));
            }
        }
    }
}

impl fmt::Display for FactorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        render(self, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for HornerPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] p(x) = {}", self.num_ops().total(), self.tree())
    }
}
