//! # Brute-force search for sections of y² = x³ + t⁷·x + 1
//!
//! Enumerates every polynomial x ∈ 𝔽_p[t] of degree < `len_x` (optionally
//! with one fixed coefficient at degree `len_x`) and reports those for which
//! x³ + t⁷·x + 1 is a perfect square in 𝔽_p[t].
//!
//! ## Pipeline
//!
//! 1. **Enumeration**: a reflected mixed-radix Gray code walks the coefficient
//!    vectors, changing one coefficient by ±1 per step in O(1) amortised time
//! 2. **Incremental candidate**: only the changed coefficient of x is rewritten
//! 3. **Predicate**: the right-hand side is rebuilt in reusable buffers and
//!    tested for a square root
//! 4. **Reporting**: matches go to a [`SectionSink`]
//!
//! ## Usage Example
//!
//! ```
//! use section_bf::{SearchConfig, Section, SectionSearch};
//!
//! let search = SectionSearch::new(SearchConfig::new(5, 2))?;
//! let mut sections: Vec<Section> = Vec::new();
//! let report = search.run(&mut sections)?;
//! assert_eq!(report.visited, 25);
//! assert_eq!(report.sections, sections.len() as u64);
//! # Ok::<(), section_bf::SearchError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // 𝔽_p and 𝔽_p[t]
pub mod enumerate; // Gray-code tuple generator
pub mod section; // Section predicate and sinks

pub use algebra::{FieldError, FieldPoly, PrimeField};
pub use enumerate::{TupleGenerator, Visit};
pub use section::{Section, SectionEvaluator, SectionSink, WriterSink};

use std::ops::ControlFlow;
use thiserror::Error;
use tracing::{debug, info};

/// Prime used by the research runs
pub const DEFAULT_PRIME: u64 = 43;

/// Number of enumerated coefficients (degree of x below 4)
pub const DEFAULT_LEN_X: usize = 4;

/// Search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Field characteristic p
    pub prime: u64,

    /// Number of enumerated low-order coefficients of x
    pub len_x: usize,

    /// Fixed coefficient of t^len_x, never touched by the enumeration
    pub leading_coeff: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRIME, DEFAULT_LEN_X)
    }
}

impl SearchConfig {
    /// Search over all x of degree < `len_x` in 𝔽_prime[t]
    pub fn new(prime: u64, len_x: usize) -> Self {
        Self {
            prime,
            len_x,
            leading_coeff: None,
        }
    }

    /// Pin the coefficient of t^len_x
    pub fn with_leading_coeff(mut self, coeff: u64) -> Self {
        self.leading_coeff = Some(coeff);
        self
    }

    /// Number of candidates, prime^len_x, if it fits in a `u64`
    pub fn search_space(&self) -> Option<u64> {
        let exp = u32::try_from(self.len_x).ok()?;
        self.prime.checked_pow(exp)
    }
}

/// Errors raised by the search
#[derive(Error, Debug)]
pub enum SearchError {
    /// The modulus does not define a supported prime field
    #[error("invalid field: {0}")]
    Field(#[from] FieldError),

    /// Leading coefficient is not a residue mod p
    #[error("leading coefficient {coeff} is out of range for 𝔽_{prime} (expected 0..{prime})")]
    LeadingCoefficientOutOfRange {
        /// Requested coefficient
        coeff: u64,
        /// Field characteristic
        prime: u64,
    },

    /// prime^len_x overflows the visit counter
    #[error("search space {prime}^{len_x} is too large to enumerate")]
    SearchSpaceTooLarge {
        /// Field characteristic
        prime: u64,
        /// Number of enumerated coefficients
        len_x: usize,
    },

    /// Writing results failed
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-candidate hook driven by [`SectionSearch::drive`]
///
/// `x` is the search's working polynomial and is overwritten on the next
/// step.
pub trait CandidateVisitor {
    /// Inspect one candidate; `Break` stops the enumeration
    fn visit(&mut self, x: &FieldPoly) -> Result<ControlFlow<()>, SearchError>;
}

/// Outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchReport {
    /// Candidates handed to the visitor
    pub visited: u64,

    /// Sections found (zero for plain [`SectionSearch::drive`] runs)
    pub sections: u64,

    /// False when the visitor or sink stopped the run early
    pub completed: bool,
}

/// Validated search over one configuration
#[derive(Debug, Clone)]
pub struct SectionSearch {
    config: SearchConfig,
    field: PrimeField,
    space: u64,
}

impl SectionSearch {
    /// Validate `config`; every configuration error surfaces here, before any
    /// candidate is visited
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let field = PrimeField::new(config.prime)?;

        if let Some(coeff) = config.leading_coeff {
            if coeff >= config.prime {
                return Err(SearchError::LeadingCoefficientOutOfRange {
                    coeff,
                    prime: config.prime,
                });
            }
        }

        let space = config.search_space().ok_or(SearchError::SearchSpaceTooLarge {
            prime: config.prime,
            len_x: config.len_x,
        })?;

        Ok(Self {
            config,
            field,
            space,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Coefficient field
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Number of candidates a complete run visits
    pub fn search_space(&self) -> u64 {
        self.space
    }

    /// Enumerate every candidate x and hand it to `visitor`
    ///
    /// A single working polynomial is kept for the whole run; each step
    /// rewrites only the coefficient the generator changed.
    pub fn drive<V: CandidateVisitor>(&self, visitor: &mut V) -> Result<SearchReport, SearchError> {
        let len_x = self.config.len_x;
        let mut x = FieldPoly::with_capacity(self.field, len_x + 1);
        if let Some(coeff) = self.config.leading_coeff {
            x.set_coeff(len_x, coeff);
        }

        let mut generator = TupleGenerator::new(len_x, self.field.modulus());
        let mut visited = 0;
        let mut completed = true;

        while let Some(visit) = generator.advance() {
            if let Some(j) = visit.changed {
                x.set_coeff(j, visit.digits[j]);
            }
            visited += 1;
            if visitor.visit(&x)?.is_break() {
                completed = false;
                break;
            }
        }

        Ok(SearchReport {
            visited,
            sections: 0,
            completed,
        })
    }

    /// Run the section predicate over every candidate, reporting matches to
    /// `sink`
    pub fn run<S: SectionSink>(&self, sink: &mut S) -> Result<SearchReport, SearchError> {
        info!(
            prime = self.config.prime,
            len_x = self.config.len_x,
            leading_coeff = ?self.config.leading_coeff,
            candidates = self.space,
            "starting section search"
        );

        sink.begin(self.config.leading_coeff)?;

        let mut check = SectionCheck {
            evaluator: SectionEvaluator::new(self.field, self.config.len_x + 1),
            sink,
            found: 0,
        };
        let mut report = self.drive(&mut check)?;
        report.sections = check.found;

        check.sink.finish()?;

        info!(
            visited = report.visited,
            sections = report.sections,
            completed = report.completed,
            "section search finished"
        );
        Ok(report)
    }
}

/// Adapts the evaluator and a sink to the visitor interface
struct SectionCheck<'s, S> {
    evaluator: SectionEvaluator,
    sink: &'s mut S,
    found: u64,
}

impl<S: SectionSink> CandidateVisitor for SectionCheck<'_, S> {
    fn visit(&mut self, x: &FieldPoly) -> Result<ControlFlow<()>, SearchError> {
        match self.evaluator.evaluate(x) {
            Some(y) => {
                self.found += 1;
                debug!(x = %x.pretty(), y = %y.pretty(), "section found");
                self.sink.record(x, y)
            }
            None => Ok(ControlFlow::Continue(())),
        }
    }
}
