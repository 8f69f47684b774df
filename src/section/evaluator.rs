//! Per-candidate evaluation with reusable scratch polynomials

use crate::algebra::{FieldPoly, PrimeField};

/// Power of t multiplying the linear term
pub const TWIST_SHIFT: usize = 7;

/// Constant term of the right-hand side
pub const CONSTANT_TERM: u64 = 1;

/// Evaluates the section predicate for one candidate x at a time
///
/// Holds the right-hand side, the shifted term and the root across calls so
/// their buffers are reused; every call overwrites all three before reading
/// them, so no result leaks from one candidate into the next.
#[derive(Debug, Clone)]
pub struct SectionEvaluator {
    rhs: FieldPoly,
    shifted: FieldPoly,
    root: FieldPoly,
}

impl SectionEvaluator {
    /// Evaluator for candidates over `field` with at most `len_x` coefficients
    pub fn new(field: PrimeField, len_x: usize) -> Self {
        // deg(x^3) and deg(t^7 x) bound every scratch buffer
        let rhs_len = (3 * len_x).max(len_x + TWIST_SHIFT) + 1;
        Self {
            rhs: FieldPoly::with_capacity(field, rhs_len),
            shifted: FieldPoly::with_capacity(field, len_x + TWIST_SHIFT),
            root: FieldPoly::with_capacity(field, rhs_len / 2 + 1),
        }
    }

    /// Test x and return a root y of x³ + t⁷·x + 1 when one exists
    pub fn evaluate(&mut self, x: &FieldPoly) -> Option<&FieldPoly> {
        self.load_rhs(x);
        if self.root.sqrt_into(&self.rhs) {
            Some(&self.root)
        } else {
            None
        }
    }

    /// Right-hand side computed by the most recent [`evaluate`](Self::evaluate)
    pub fn rhs(&self) -> &FieldPoly {
        &self.rhs
    }

    fn load_rhs(&mut self, x: &FieldPoly) {
        self.rhs.pow_into(x, 3);
        self.shifted.shift_left_into(x, TWIST_SHIFT);
        self.rhs.add_assign(&self.shifted);
        let constant = self.rhs.coeff(0) + CONSTANT_TERM;
        self.rhs.set_coeff(0, constant);
    }
}
