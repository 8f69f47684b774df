//! Focus pointers and digit orientation
//!
//! The focus chain is a singly linked list stored in an array of length
//! n + 1: following `focus[0]` yields the next digit to move, and index n is
//! the sentinel. A digit that reaches a boundary is unlinked until the digit
//! above it has moved, which is what makes every step O(1) amortised.

/// Which way a digit is currently moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Counting towards radix - 1
    Up,

    /// Counting towards 0
    Down,
}

impl Direction {
    /// Opposite orientation
    pub fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Move `digit` one step in this direction
    pub fn apply(self, digit: u64) -> u64 {
        match self {
            Direction::Up => digit + 1,
            Direction::Down => digit - 1,
        }
    }
}

/// Linked list over digit positions `0..n`, terminated by sentinel `n`
#[derive(Debug, Clone)]
pub struct FocusChain {
    focus: Vec<usize>,
}

impl FocusChain {
    /// Fresh chain over `len` positions: every pointer refers to itself
    pub fn new(len: usize) -> Self {
        Self {
            focus: (0..=len).collect(),
        }
    }

    /// Sentinel index (number of positions)
    pub fn sentinel(&self) -> usize {
        self.focus.len() - 1
    }

    /// Head of the chain without consuming it
    pub fn head(&self) -> usize {
        self.focus[0]
    }

    /// Whether the head has reached the sentinel
    pub fn is_exhausted(&self) -> bool {
        self.head() == self.sentinel()
    }

    /// Pop the head, pointing the head slot back at position 0
    pub fn take_head(&mut self) -> usize {
        let j = self.focus[0];
        self.focus[0] = 0;
        j
    }

    /// Unlink a position that just hit a boundary
    ///
    /// `j` inherits the pointer of `j + 1`, and `j + 1` becomes active again.
    pub fn retire(&mut self, j: usize) {
        self.focus[j] = self.focus[j + 1];
        self.focus[j + 1] = j + 1;
    }

    /// Raw pointer array
    pub fn as_slice(&self) -> &[usize] {
        &self.focus
    }
}
