//! Inclusive domains of the input quantities.

use std::fmt;

use serde::Serialize;

/// The inclusive valid domain `[start, end]` of an input quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scope {
    start: f64,
    end: f64,
}

impl Scope {
    /// Scope with bounds known to be ordered at compile time.
    pub(crate) const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Whether `value` lies within the scope, both ends included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
