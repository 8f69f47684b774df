//! Reflected mixed-radix tuple generation
//!
//! Visits every tuple in {0, …, radix-1}^n exactly once, starting from the
//! all-zero tuple. Consecutive tuples differ in a single digit by ±1 (a Gray
//! code over an arbitrary radix), and each step costs O(1) amortised thanks to
//! the focus chain.
//!
//! The generator owns one digit buffer for the whole run and lends it out on
//! every step, so consumers see a borrowed view that is only valid until the
//! next call to [`TupleGenerator::advance`].

mod focus;

pub use focus::{Direction, FocusChain};

use std::ops::ControlFlow;

/// One step of the traversal
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Current tuple, least significant digit first
    pub digits: &'a [u64],

    /// Position changed by this step (`None` for the initial tuple)
    pub changed: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Streaming generator over all n-tuples of a fixed radix
#[derive(Debug, Clone)]
pub struct TupleGenerator {
    radix: u64,
    digits: Vec<u64>,
    directions: Vec<Direction>,
    focus: FocusChain,
    phase: Phase,
}

impl TupleGenerator {
    /// Generator over {0, …, radix-1}^len
    ///
    /// # Panics
    ///
    /// If `radix < 2`.
    pub fn new(len: usize, radix: u64) -> Self {
        assert!(radix >= 2, "radix must be at least 2, got {}", radix);
        Self {
            radix,
            digits: vec![0; len],
            directions: vec![Direction::Up; len],
            focus: FocusChain::new(len),
            phase: Phase::Fresh,
        }
    }

    /// Tuple length n
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the tuples are empty (n = 0)
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Alphabet size
    pub fn radix(&self) -> u64 {
        self.radix
    }

    /// Current orientation of every digit
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Focus pointers, including the sentinel slot
    pub fn focus(&self) -> &FocusChain {
        &self.focus
    }

    /// Whether every tuple has been produced
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Produce the next tuple, or `None` once all radix^n have been visited
    pub fn advance(&mut self) -> Option<Visit<'_>> {
        match self.phase {
            Phase::Done => return None,
            Phase::Fresh => {
                self.phase = Phase::Running;
                return Some(Visit {
                    digits: &self.digits,
                    changed: None,
                });
            }
            Phase::Running => {}
        }

        let j = self.focus.take_head();
        if j == self.focus.sentinel() {
            self.phase = Phase::Done;
            return None;
        }

        let digit = self.directions[j].apply(self.digits[j]);
        self.digits[j] = digit;
        if digit == 0 || digit == self.radix - 1 {
            self.directions[j] = self.directions[j].flipped();
            self.focus.retire(j);
        }

        Some(Visit {
            digits: &self.digits,
            changed: Some(j),
        })
    }

    /// Feed every remaining tuple to `f`, stopping early on `Break`
    ///
    /// Returns the number of tuples passed to `f`.
    pub fn for_each<F>(&mut self, mut f: F) -> u64
    where
        F: FnMut(&[u64]) -> ControlFlow<()>,
    {
        let mut visited = 0;
        while let Some(visit) = self.advance() {
            visited += 1;
            if f(visit.digits).is_break() {
                break;
            }
        }
        visited
    }

    /// Owning iterator that copies each tuple out
    pub fn into_tuples(self) -> Tuples {
        Tuples { inner: self }
    }
}

/// Iterator adapter yielding owned tuples
///
/// Allocates one `Vec` per item; the streaming [`TupleGenerator::advance`]
/// API is the allocation-free path.
#[derive(Debug, Clone)]
pub struct Tuples {
    inner: TupleGenerator,
}

impl Iterator for Tuples {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.advance().map(|visit| visit.digits.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_three_pairs_in_reflected_order() {
        let order: Vec<Vec<u64>> = TupleGenerator::new(2, 3).into_tuples().collect();
        assert_eq!(
            order,
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![2, 0],
                vec![2, 1],
                vec![1, 1],
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![2, 2],
            ]
        );
    }

    #[test]
    fn terminal_state_is_signalled_by_focus_head() {
        let mut gen = TupleGenerator::new(2, 3);
        let mut visits = 0;
        while gen.advance().is_some() {
            visits += 1;
        }
        assert_eq!(visits, 9);
        assert!(gen.is_finished());
        assert!(gen.advance().is_none(), "exhausted generator must stay exhausted");
    }

    #[test]
    fn focus_head_reaches_sentinel_on_last_tuple() {
        let mut gen = TupleGenerator::new(2, 3);
        for _ in 0..9 {
            gen.advance();
        }
        assert!(gen.focus().is_exhausted());
    }

    #[test]
    fn empty_tuple_is_visited_once() {
        let mut gen = TupleGenerator::new(0, 43);
        let first = gen.advance().map(|v| (v.digits.len(), v.changed));
        assert_eq!(first, Some((0, None)));
        assert!(gen.advance().is_none());
    }

    #[test]
    fn changed_position_matches_digit_delta() {
        let mut gen = TupleGenerator::new(3, 4);
        let mut prev = gen.advance().map(|v| v.digits.to_vec()).unwrap();
        while let Some(visit) = gen.advance() {
            let j = visit.changed.unwrap();
            assert_eq!(visit.digits[j].abs_diff(prev[j]), 1);
            prev = visit.digits.to_vec();
        }
    }

    #[test]
    fn binary_radix_is_reflected_gray_code() {
        let order: Vec<Vec<u64>> = TupleGenerator::new(3, 2).into_tuples().collect();
        assert_eq!(order.len(), 8);
        assert_eq!(order[0], vec![0, 0, 0]);
        assert_eq!(order[1], vec![1, 0, 0]);
        assert_eq!(order[2], vec![1, 1, 0]);
        assert_eq!(order[3], vec![0, 1, 0]);
        assert_eq!(order[7], vec![0, 0, 1]);
    }

    #[test]
    fn for_each_supports_early_exit() {
        let mut gen = TupleGenerator::new(4, 5);
        let mut seen = Vec::new();
        let visited = gen.for_each(|digits| {
            seen.push(digits.to_vec());
            if seen.len() == 7 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visited, 7);
        assert!(!gen.is_finished());
        // resuming picks up right after the break
        let rest = gen.for_each(|_| ControlFlow::Continue(()));
        assert_eq!(visited + rest, 5u64.pow(4));
    }

    #[test]
    #[should_panic]
    fn rejects_unary_alphabet() {
        TupleGenerator::new(2, 1);
    }
}
