//! Aligned-region values and their textual notations.

mod types;
pub use types::*;

use crate::error::{MatchworkError, Result};
use std::fmt;
use std::str::FromStr;

/// Textual notation for a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Bracketed, range-aware rendering, e.g. `(2 -> 4, 5 -> 7)`.
    /// The default, and what [`Segment`]'s `Display` produces.
    #[default]
    Sequence,
    /// The raw fields as a comma-separated quadruple, e.g. `2, 5, 3, 3`.
    Tuple,
}

impl Notation {
    /// The tag accepted by `parse` for this notation.
    pub fn tag(&self) -> &'static str {
        match self {
            Notation::Sequence => "S",
            Notation::Tuple => "T",
        }
    }
}

impl FromStr for Notation {
    type Err = MatchworkError;

    /// Parses a notation tag: `"S"` for sequence notation, `"T"` for tuple
    /// notation. Tags are case-sensitive; anything else is
    /// [`MatchworkError::UnsupportedNotation`].
    fn from_str(s: &str) -> Result<Notation> {
        match s {
            "S" => Ok(Notation::Sequence),
            "T" => Ok(Notation::Tuple),
            other => Err(MatchworkError::UnsupportedNotation(other.to_string())),
        }
    }
}

/// Renders the start/end bounds of one run: `start` alone when the run is
/// empty, `start -> end` otherwise.
struct Bounds(Run);

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "{}", self.0.start())
        } else {
            write!(f, "{} -> {}", self.0.start(), self.0.end())
        }
    }
}

impl fmt::Display for Segment {
    /// Sequence notation. `(<>)` for a detached region, `(> ...)` for
    /// new-only material, `(< ...)` for old-only material, and
    /// `(old, new)` bounds for a paired region.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Detached => f.write_str("(<>)"),
            Segment::NewOnly(run) => write!(f, "(> {})", Bounds(*run)),
            Segment::OldOnly(run) => write!(f, "(< {})", Bounds(*run)),
            Segment::Paired { old, new } => write!(f, "({}, {})", Bounds(*old), Bounds(*new)),
        }
    }
}

impl Segment {
    /// Render in the given notation.
    pub fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Sequence => self.to_string(),
            Notation::Tuple => self.tuple(),
        }
    }

    /// Render using a raw notation tag, as handed over by callers that
    /// carry the tag as data: `"S"` or `"T"`.
    ///
    /// # Errors
    ///
    /// [`MatchworkError::UnsupportedNotation`] for any other tag; no
    /// fallback rendering is attempted.
    pub fn render_mode(&self, tag: &str) -> Result<String> {
        Ok(self.render(tag.parse()?))
    }

    /// Tuple notation: `old_start, new_start, old_len, new_len` with no
    /// branching on the variant. Absent sides print `-1` for the start and
    /// `0` for the length.
    fn tuple(&self) -> String {
        let old = self.old_run();
        let new = self.new_run();
        format!(
            "{}, {}, {}, {}",
            old.map_or(-1, |r| r.start() as isize),
            new.map_or(-1, |r| r.start() as isize),
            old.map_or(0, |r| r.len() as isize),
            new.map_or(0, |r| r.len() as isize),
        )
    }
}
