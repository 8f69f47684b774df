//! Section predicate for y² = x³ + t⁷·x + 1 over 𝔽_p[t]
//!
//! A candidate x is a section when the right-hand side is a perfect square
//! in 𝔽_p[t]. Matches are handed to a [`SectionSink`].

mod evaluator;
mod sink;

pub use evaluator::{SectionEvaluator, CONSTANT_TERM, TWIST_SHIFT};
pub use sink::{Section, SectionSink, WriterSink};
