//! Dense univariate polynomials over 𝔽_p
//!
//! Coefficients are stored low degree first and kept normalised (no trailing
//! zeros), so the zero polynomial has length 0. Every operation that produces
//! a polynomial writes into `self` and reuses its buffer: once the buffers of
//! a working set have grown to their steady-state size, repeated evaluation
//! does not touch the allocator.

use super::PrimeField;
use std::fmt;

/// Polynomial in 𝔽_p[t]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldPoly {
    field: PrimeField,
    coeffs: Vec<u64>,
}

impl FieldPoly {
    /// Zero polynomial over `field`
    pub fn new(field: PrimeField) -> Self {
        Self {
            field,
            coeffs: Vec::new(),
        }
    }

    /// Zero polynomial with room for `len` coefficients
    pub fn with_capacity(field: PrimeField, len: usize) -> Self {
        Self {
            field,
            coeffs: Vec::with_capacity(len),
        }
    }

    /// Build from coefficients (low degree first), reducing each mod p
    pub fn from_coeffs(field: PrimeField, coeffs: &[u64]) -> Self {
        let mut poly = Self {
            field,
            coeffs: coeffs.iter().map(|&c| field.reduce(c)).collect(),
        };
        poly.normalize();
        poly
    }

    /// Coefficient field
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Number of stored coefficients (degree + 1, or 0 for zero)
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Coefficients, low degree first
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Coefficient of t^i (0 beyond the degree)
    pub fn coeff(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Set the coefficient of t^i to `value mod p`
    pub fn set_coeff(&mut self, i: usize, value: u64) {
        let value = self.field.reduce(value);
        if i < self.coeffs.len() {
            self.coeffs[i] = value;
            if i + 1 == self.coeffs.len() {
                self.normalize();
            }
        } else if value != 0 {
            self.coeffs.resize(i + 1, 0);
            self.coeffs[i] = value;
        }
    }

    /// Reset to zero, keeping the buffer
    pub fn clear(&mut self) {
        self.coeffs.clear();
    }

    /// Reset to the constant 1
    pub fn set_one(&mut self) {
        self.coeffs.clear();
        self.coeffs.push(1 % self.field.modulus());
        self.normalize();
    }

    /// Copy `src` into `self`, keeping the buffer
    pub fn set_from(&mut self, src: &FieldPoly) {
        debug_assert_eq!(self.field, src.field, "mixing polynomials over different fields");
        self.coeffs.clear();
        self.coeffs.extend_from_slice(&src.coeffs);
    }

    /// self += other
    pub fn add_assign(&mut self, other: &FieldPoly) {
        debug_assert_eq!(self.field, other.field, "mixing polynomials over different fields");
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), 0);
        }
        for (a, &b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = self.field.add(*a, b);
        }
        self.normalize();
    }

    /// self := src · t^k
    pub fn shift_left_into(&mut self, src: &FieldPoly, k: usize) {
        debug_assert_eq!(self.field, src.field, "mixing polynomials over different fields");
        self.coeffs.clear();
        if src.is_zero() {
            return;
        }
        self.coeffs.resize(k, 0);
        self.coeffs.extend_from_slice(&src.coeffs);
    }

    /// self *= other, in place
    ///
    /// Output coefficients are produced from the top degree down; the one at
    /// degree k only reads stored coefficients at degrees ≤ k, which are still
    /// the original ones at that point.
    pub fn mul_assign(&mut self, other: &FieldPoly) {
        debug_assert_eq!(self.field, other.field, "mixing polynomials over different fields");
        if self.is_zero() || other.is_zero() {
            self.coeffs.clear();
            return;
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        self.coeffs.resize(n + m - 1, 0);

        for k in (0..n + m - 1).rev() {
            let lo = k.saturating_sub(m - 1);
            let hi = k.min(n - 1);
            let mut acc = 0;
            for i in lo..=hi {
                acc = self.field.add(acc, self.field.mul(self.coeffs[i], other.coeffs[k - i]));
            }
            self.coeffs[k] = acc;
        }
        self.normalize();
    }

    /// self := base^exp by repeated multiplication (intended for small exponents)
    pub fn pow_into(&mut self, base: &FieldPoly, exp: u32) {
        if exp == 0 {
            self.set_one();
            return;
        }
        self.set_from(base);
        for _ in 1..exp {
            self.mul_assign(base);
        }
    }

    /// Try to write a square root of `src` into `self`
    ///
    /// Returns `true` and leaves y with y² = src in `self` when `src` is a
    /// square in 𝔽_p[t]; otherwise returns `false` and leaves `self` zero. The
    /// zero polynomial is its own root. For odd p the root is built from the
    /// low end by the power-series recurrence, seeded with the smaller square
    /// root of the lowest non-zero coefficient, then checked by squaring.
    pub fn sqrt_into(&mut self, src: &FieldPoly) -> bool {
        debug_assert_eq!(self.field, src.field, "mixing polynomials over different fields");
        self.coeffs.clear();
        if src.is_zero() {
            return true;
        }
        if self.field.modulus() == 2 {
            return self.sqrt_char_two(src);
        }

        let valuation = src.coeffs.iter().take_while(|&&c| c == 0).count();
        if valuation % 2 == 1 {
            return false;
        }
        let unit = &src.coeffs[valuation..];
        let degree = unit.len() - 1;
        if degree % 2 == 1 {
            return false;
        }
        let half = degree / 2;

        let field = self.field;
        let h0 = match field.sqrt(unit[0]) {
            Some(r) => r,
            None => return false,
        };
        // h0 is non-zero because unit[0] is
        let inv_two_h0 = match field.inv(field.add(h0, h0)) {
            Some(inv) => inv,
            None => return false,
        };

        let offset = valuation / 2;
        self.coeffs.resize(offset + half + 1, 0);
        self.coeffs[offset] = h0;
        for k in 1..=half {
            let mut acc = unit[k];
            for i in 1..k {
                acc = field.sub(acc, field.mul(self.coeffs[offset + i], self.coeffs[offset + k - i]));
            }
            self.coeffs[offset + k] = field.mul(acc, inv_two_h0);
        }
        self.normalize();

        if self.squares_to(src) {
            true
        } else {
            self.coeffs.clear();
            false
        }
    }

    /// Over 𝔽_2 every coefficient is its own square, so a polynomial is a
    /// square exactly when its odd coefficients vanish.
    fn sqrt_char_two(&mut self, src: &FieldPoly) -> bool {
        if src.coeffs.iter().skip(1).step_by(2).any(|&c| c != 0) {
            return false;
        }
        self.coeffs.extend(src.coeffs.iter().step_by(2).copied());
        self.normalize();
        true
    }

    /// Whether self² == target, without materialising the square
    fn squares_to(&self, target: &FieldPoly) -> bool {
        let n = self.coeffs.len();
        if n == 0 {
            return target.is_zero();
        }
        if 2 * n - 1 != target.coeffs.len() {
            return false;
        }
        (0..2 * n - 1).all(|k| {
            let lo = k.saturating_sub(n - 1);
            let hi = k.min(n - 1);
            let sq = (lo..=hi).fold(0, |acc, i| {
                self.field.add(acc, self.field.mul(self.coeffs[i], self.coeffs[k - i]))
            });
            sq == target.coeffs[k]
        })
    }

    /// Human-readable form such as `2*t^7 + t + 1`
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }

    fn normalize(&mut self) {
        while let Some(&0) = self.coeffs.last() {
            self.coeffs.pop();
        }
    }
}

/// Canonical print form: `<len> <p>` then each coefficient, low degree first,
/// separated from the header by two spaces (`8 43  2 0 0 0 0 0 0 1`).
impl fmt::Display for FieldPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coeffs.len(), self.field.modulus())?;
        if self.coeffs.is_empty() {
            return Ok(());
        }
        f.write_str(" ")?;
        for c in &self.coeffs {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

/// Display adapter returned by [`FieldPoly::pretty`]
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a>(&'a FieldPoly);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs = &self.0.coeffs;
        if coeffs.is_empty() {
            return f.write_str("0");
        }

        let mut first = true;
        for (i, &c) in coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            match (i, c) {
                (0, _) => write!(f, "{}", c)?,
                (1, 1) => f.write_str("t")?,
                (1, _) => write!(f, "{}*t", c)?,
                (_, 1) => write!(f, "t^{}", i)?,
                _ => write!(f, "{}*t^{}", c, i)?,
            }
        }
        Ok(())
    }
}
