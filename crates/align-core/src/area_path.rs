//! Hierarchical area paths.
//!
//! An area path is a root-first list of segments joined by a single-character
//! delimiter, e.g. `ProjA\Team1\Sub`. The root is everything before the first
//! delimiter; the remainder is everything from the first delimiter onward,
//! delimiter included.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::AREA_DELIMITER;

/// A borrowed view over an area path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaPath<'a> {
    raw: &'a str,
    delimiter: char,
}

impl<'a> AreaPath<'a> {
    /// View `raw` using the standard `\` delimiter.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self::with_delimiter(raw, AREA_DELIMITER)
    }

    #[must_use]
    pub const fn with_delimiter(raw: &'a str, delimiter: char) -> Self {
        Self { raw, delimiter }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Byte index of the first delimiter, if any.
    #[must_use]
    pub fn root_index(&self) -> Option<usize> {
        self.raw.find(self.delimiter)
    }

    /// Whether the path is a bare project root with no sub-classification.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.root_index().is_none()
    }

    /// Segment before the first delimiter (the whole path for a bare root).
    #[must_use]
    pub fn root(&self) -> &'a str {
        self.root_index().map_or(self.raw, |idx| &self.raw[..idx])
    }

    /// Everything from the first delimiter onward, delimiter included.
    /// Empty for a bare root.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.root_index().map_or("", |idx| &self.raw[idx..])
    }
}

impl fmt::Display for AreaPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Which side of a root substitution contributed the sub-path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaMerge {
    /// The old item sat at its project root; the new path is kept.
    Unchanged,
    /// The new item sat at its project root; the old sub-path was appended.
    Appended,
    /// The new item's own sub-path was replaced by the old one.
    Replaced,
}

impl AreaMerge {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Appended => "appended",
            Self::Replaced => "replaced",
        }
    }
}

impl fmt::Display for AreaMerge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
