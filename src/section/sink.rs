//! Destinations for matching candidates

use crate::algebra::FieldPoly;
use crate::SearchError;
use std::io::Write;
use std::ops::ControlFlow;

/// A found section (x, y) with y² = x³ + t⁷·x + 1
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    /// x-coordinate
    pub x: FieldPoly,
    /// y-coordinate (one of the two roots)
    pub y: FieldPoly,
}

/// Consumer of search results
///
/// `record` receives borrowed views of the search's working polynomials;
/// implementations that keep a match must copy it.
pub trait SectionSink {
    /// Called once before enumeration with the fixed leading coefficient, if any
    fn begin(&mut self, _leading_coeff: Option<u64>) -> Result<(), SearchError> {
        Ok(())
    }

    /// Called for every section; `Break` stops the search early
    fn record(&mut self, x: &FieldPoly, y: &FieldPoly) -> Result<ControlFlow<()>, SearchError>;

    /// Called once after enumeration ends, including after an early stop
    fn finish(&mut self) -> Result<(), SearchError> {
        Ok(())
    }
}

/// Collects owned copies of every section
impl SectionSink for Vec<Section> {
    fn record(&mut self, x: &FieldPoly, y: &FieldPoly) -> Result<ControlFlow<()>, SearchError> {
        self.push(Section {
            x: x.clone(),
            y: y.clone(),
        });
        Ok(ControlFlow::Continue(()))
    }
}

/// Writes the plain-text report: the leading coefficient on its own line when
/// one is fixed, then an `x = ...` / `y = ...` pair per section
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
    limit: Option<u64>,
    written: u64,
}

impl<W: Write> WriterSink<W> {
    /// Report every section to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            limit: None,
            written: 0,
        }
    }

    /// Stop the search after `limit` sections
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sections written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SectionSink for WriterSink<W> {
    fn begin(&mut self, leading_coeff: Option<u64>) -> Result<(), SearchError> {
        if let Some(c) = leading_coeff {
            writeln!(self.out, "{}", c)?;
        }
        Ok(())
    }

    fn record(&mut self, x: &FieldPoly, y: &FieldPoly) -> Result<ControlFlow<()>, SearchError> {
        writeln!(self.out, "x = {}", x)?;
        writeln!(self.out, "y = {}", y)?;
        self.written += 1;

        match self.limit {
            Some(limit) if self.written >= limit => Ok(ControlFlow::Break(())),
            _ => Ok(ControlFlow::Continue(())),
        }
    }

    fn finish(&mut self) -> Result<(), SearchError> {
        self.out.flush()?;
        Ok(())
    }
}
