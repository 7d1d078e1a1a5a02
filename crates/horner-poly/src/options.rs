//! Construction options.

use crate::ordering::MonomialOrder;

/// Options for [`MultivarPoly`](crate::MultivarPoly) construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolyOptions {
    /// Sort the monomials into `order` (ascending).
    pub rectify: bool,
    /// Reject duplicate exponent vectors and check evaluation points.
    pub validate: bool,
    /// Ordering used when rectifying.
    pub order: MonomialOrder,
}

impl Default for PolyOptions {
    fn default() -> Self {
        Self {
            rectify: false,
            validate: true,
            order: MonomialOrder::default(),
        }
    }
}

impl PolyOptions {
    /// Options with both rectification and validation turned on.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            rectify: true,
            validate: true,
            order: MonomialOrder::default(),
        }
    }

    /// Options that skip the duplicate scan and point checks.
    #[must_use]
    pub fn unchecked() -> Self {
        Self {
            rectify: false,
            validate: false,
            order: MonomialOrder::default(),
        }
    }

    /// Sets the rectification order.
    #[must_use]
    pub fn with_order(mut self, order: MonomialOrder) -> Self {
        self.order = order;
        self
    }
}
