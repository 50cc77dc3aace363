use crate::error::{MatchworkError, Result};

/// A contiguous run of items within a single sequence.
///
/// Runs are always in the valid range: construction goes through the
/// [`Segment`] constructors, which reject negative positions and lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    start: usize,
    len: usize,
}

impl Run {
    pub(crate) fn at(start: usize, len: usize) -> Self {
        Run { start, len }
    }

    /// Starting position of the run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of items in the run.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the run covers no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inclusive end position, `start + len - 1`.
    ///
    /// An empty run has no last item, so this is one less than `start`
    /// (and `-1` for an empty run at position zero). Check [`Run::is_empty`]
    /// before treating the result as a real position.
    pub fn end(&self) -> isize {
        if self.len == 0 {
            self.start as isize - 1
        } else {
            (self.start + self.len - 1) as isize
        }
    }

    /// The run as a half-open index range into its sequence.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// One aligned region between an old and a new sequence.
///
/// A `Segment` is the unit a matching algorithm emits and rendering or
/// patching code consumes: a contiguous stretch judged matched (or, for the
/// one-sided variants, unmatched) between the two sequences. Values are
/// immutable and compare structurally over variant and runs. A `Segment`
/// knows nothing about its neighbours; keeping regions non-overlapping and
/// ordered is the producer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Segment {
    /// No correspondence on either side.
    #[default]
    Detached,
    /// A run present only in the old sequence (deleted material).
    OldOnly(Run),
    /// A run present only in the new sequence (inserted material).
    NewOnly(Run),
    /// Runs aligned on both sides: a common block when the lengths agree,
    /// an asymmetric region such as a replacement otherwise.
    Paired { old: Run, new: Run },
}

fn non_negative(param: &'static str, value: isize) -> Result<usize> {
    if value < 0 {
        Err(MatchworkError::OutOfRange { param, value })
    } else {
        Ok(value as usize)
    }
}

impl Segment {
    /// A block of `len` items matched between `old[old_start..]` and
    /// `new[new_start..]`, the common-subsequence form.
    ///
    /// # Errors
    ///
    /// [`MatchworkError::OutOfRange`] if any argument is negative; zero is
    /// accepted.
    pub fn common(old_start: isize, new_start: isize, len: isize) -> Result<Segment> {
        let old_start = non_negative("old_start", old_start)?;
        let new_start = non_negative("new_start", new_start)?;
        let len = non_negative("len", len)?;
        Ok(Segment::Paired {
            old: Run::at(old_start, len),
            new: Run::at(new_start, len),
        })
    }

    /// A region covering `old_len` items of the old sequence and `new_len`
    /// items of the new one, which need not agree: a replacement, or a gap
    /// that is empty on one side.
    ///
    /// With `old_len == new_len` this is the same value [`Segment::common`]
    /// produces.
    ///
    /// # Errors
    ///
    /// [`MatchworkError::OutOfRange`] if any argument is negative; zero is
    /// accepted.
    pub fn paired(
        old_start: isize,
        new_start: isize,
        old_len: isize,
        new_len: isize,
    ) -> Result<Segment> {
        let old_start = non_negative("old_start", old_start)?;
        let new_start = non_negative("new_start", new_start)?;
        let old_len = non_negative("old_len", old_len)?;
        let new_len = non_negative("new_len", new_len)?;
        Ok(Segment::Paired {
            old: Run::at(old_start, old_len),
            new: Run::at(new_start, new_len),
        })
    }

    /// A run of the old sequence with no counterpart in the new one.
    ///
    /// # Errors
    ///
    /// [`MatchworkError::OutOfRange`] if any argument is negative.
    pub fn old_only(start: isize, len: isize) -> Result<Segment> {
        let start = non_negative("start", start)?;
        let len = non_negative("len", len)?;
        Ok(Segment::OldOnly(Run::at(start, len)))
    }

    /// A run of the new sequence with no counterpart in the old one.
    ///
    /// # Errors
    ///
    /// [`MatchworkError::OutOfRange`] if any argument is negative.
    pub fn new_only(start: isize, len: isize) -> Result<Segment> {
        let start = non_negative("start", start)?;
        let len = non_negative("len", len)?;
        Ok(Segment::NewOnly(Run::at(start, len)))
    }

    /// The region with no correspondence on either side.
    ///
    /// Same value as `Segment::default()`.
    pub fn detached() -> Segment {
        Segment::Detached
    }

    // Infallible builders for in-crate producers whose positions come from
    // slice indexing and are therefore already in range.

    pub(crate) fn common_at(old_start: usize, new_start: usize, len: usize) -> Segment {
        Segment::Paired {
            old: Run::at(old_start, len),
            new: Run::at(new_start, len),
        }
    }

    pub(crate) fn paired_at(
        old_start: usize,
        new_start: usize,
        old_len: usize,
        new_len: usize,
    ) -> Segment {
        Segment::Paired {
            old: Run::at(old_start, old_len),
            new: Run::at(new_start, new_len),
        }
    }

    pub(crate) fn old_only_at(start: usize, len: usize) -> Segment {
        Segment::OldOnly(Run::at(start, len))
    }

    pub(crate) fn new_only_at(start: usize, len: usize) -> Segment {
        Segment::NewOnly(Run::at(start, len))
    }

    /// The run this region covers in the old sequence, if any.
    pub fn old_run(&self) -> Option<Run> {
        match self {
            Segment::OldOnly(run) => Some(*run),
            Segment::Paired { old, .. } => Some(*old),
            Segment::Detached | Segment::NewOnly(_) => None,
        }
    }

    /// The run this region covers in the new sequence, if any.
    pub fn new_run(&self) -> Option<Run> {
        match self {
            Segment::NewOnly(run) => Some(*run),
            Segment::Paired { new, .. } => Some(*new),
            Segment::Detached | Segment::OldOnly(_) => None,
        }
    }
}
