//! Finite-field arithmetic
//!
//! The two pieces the search needs from a computer-algebra backend:
//! - 𝔽_p for a prime p below 2^32
//! - dense polynomials in 𝔽_p[t] with in-place, buffer-reusing operations
//!   and a square-root test

mod field;
mod polynomial;

pub use field::{FieldError, PrimeField, MAX_MODULUS};
pub use polynomial::{FieldPoly, Pretty};
