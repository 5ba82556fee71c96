//! Progress reporting hooks. Purely cosmetic.

use std::fmt;

/// The three phases that report progress independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enumerate,
    Scan,
    Write,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enumerate => "getting test cases",
            Self::Scan => "processing links",
            Self::Write => "writing copied test cases",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives monotonically advancing progress for one phase at a time.
pub trait ProgressSink {
    fn start(&mut self, phase: Phase, label: &str, total: usize);
    fn advance(&mut self);
    fn finish(&mut self);
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _phase: Phase, _label: &str, _total: usize) {}
    fn advance(&mut self) {}
    fn finish(&mut self) {}
}
