//! Prime field 𝔽_p
//!
//! Residues are stored as `u64` in `[0, p)`. The modulus is capped below 2^32
//! so that a product of two residues never overflows before reduction.

use thiserror::Error;

/// Largest admissible modulus (exclusive)
pub const MAX_MODULUS: u64 = 1 << 32;

/// Errors raised when constructing a field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Modulus below 2
    #[error("field modulus must be at least 2, got {0}")]
    ModulusTooSmall(u64),

    /// Modulus does not fit the single-word arithmetic
    #[error("field modulus {0} does not fit in 32 bits")]
    ModulusTooLarge(u64),

    /// Modulus is composite, so 𝔽_p would not be a field
    #[error("field modulus {0} is not prime")]
    NotPrime(u64),
}

/// Prime field of size p
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Create 𝔽_p, rejecting composite or out-of-range moduli
    pub fn new(modulus: u64) -> Result<Self, FieldError> {
        if modulus < 2 {
            return Err(FieldError::ModulusTooSmall(modulus));
        }
        if modulus >= MAX_MODULUS {
            return Err(FieldError::ModulusTooLarge(modulus));
        }
        if !is_prime(modulus) {
            return Err(FieldError::NotPrime(modulus));
        }
        Ok(Self { modulus })
    }

    /// Field characteristic p
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduce an arbitrary integer into `[0, p)`
    pub fn reduce(&self, a: u64) -> u64 {
        a % self.modulus
    }

    /// a + b
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let sum = a + b;
        if sum >= self.modulus {
            sum - self.modulus
        } else {
            sum
        }
    }

    /// a - b
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.modulus - b
        }
    }

    /// -a
    pub fn neg(&self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.modulus - a
        }
    }

    /// a * b
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        (a * b) % self.modulus
    }

    /// a^e by square-and-multiply
    pub fn pow(&self, a: u64, mut e: u64) -> u64 {
        let mut result = 1 % self.modulus;
        let mut base = self.reduce(a);
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            e >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem, `None` for zero
    pub fn inv(&self, a: u64) -> Option<u64> {
        let a = self.reduce(a);
        if a == 0 {
            return None;
        }
        Some(self.pow(a, self.modulus - 2))
    }

    /// Legendre symbol (a/p) as `0`, `1` or `-1`
    ///
    /// Every element of 𝔽_2 is a square, so p = 2 never yields `-1`.
    pub fn legendre(&self, a: u64) -> i8 {
        let a = self.reduce(a);
        if a == 0 {
            return 0;
        }
        if self.modulus == 2 {
            return 1;
        }
        if self.pow(a, (self.modulus - 1) / 2) == 1 {
            1
        } else {
            -1
        }
    }

    /// Whether a is a square in 𝔽_p
    pub fn is_square(&self, a: u64) -> bool {
        self.legendre(a) >= 0
    }

    /// Square root by Tonelli–Shanks
    ///
    /// Returns the smaller of the two roots so the choice is deterministic.
    pub fn sqrt(&self, a: u64) -> Option<u64> {
        let p = self.modulus;
        let a = self.reduce(a);
        if a == 0 || p == 2 {
            return Some(a);
        }
        if self.legendre(a) != 1 {
            return None;
        }

        let root = if p % 4 == 3 {
            self.pow(a, (p + 1) / 4)
        } else {
            // p - 1 = q * 2^s with q odd
            let mut q = p - 1;
            let mut s = 0u32;
            while q % 2 == 0 {
                q /= 2;
                s += 1;
            }

            let mut z = 2;
            while self.legendre(z) != -1 {
                z += 1;
            }

            let mut m = s;
            let mut c = self.pow(z, q);
            let mut t = self.pow(a, q);
            let mut r = self.pow(a, (q + 1) / 2);

            while t != 1 {
                // least i with t^(2^i) = 1
                let mut i = 0;
                let mut t2 = t;
                while t2 != 1 {
                    t2 = self.mul(t2, t2);
                    i += 1;
                }
                let b = self.pow(c, 1 << (m - i - 1));
                m = i;
                c = self.mul(b, b);
                t = self.mul(t, c);
                r = self.mul(r, b);
            }
            r
        };

        Some(root.min(p - root))
    }
}

/// Deterministic trial division; moduli are below 2^32
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
