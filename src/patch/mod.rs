mod types;
pub use types::*;

use std::collections::VecDeque;
use std::fmt;

use crate::error::{MatchworkError, Result};
use crate::segment::Segment;

struct HunkBuilder<T> {
    old_line: usize,
    new_line: usize,
    current: Option<Hunk<T>>,
    trailing_equal_count: usize,
    context_buffer: VecDeque<Edit<T>>,
    hunks: Vec<Hunk<T>>,
}

impl<T: Eq + Clone> HunkBuilder<T> {
    fn new() -> Self {
        HunkBuilder {
            old_line: 0,
            new_line: 0,
            current: None,
            trailing_equal_count: 0,
            context_buffer: VecDeque::new(),
            hunks: vec![],
        }
    }

    fn process(&mut self, edit: Edit<T>) {
        match edit {
            Edit::Equal(el) => {
                self.context_buffer.push_back(Edit::Equal(el.clone()));
                while self.context_buffer.len() > 3 {
                    self.context_buffer.pop_front();
                }

                if let Some(ref mut c) = self.current {
                    c.changes.push(Edit::Equal(el));
                    self.trailing_equal_count += 1;
                    if self.trailing_equal_count >= 3 {
                        self.hunks.extend(self.current.take());
                        // the buffered equals are now trailing context of the
                        // closed hunk; the next hunk may not lead with them
                        self.context_buffer.clear();
                    }
                }
                self.old_line += 1;
                self.new_line += 1;
            }
            modify => {
                self.trailing_equal_count = 0;
                if let Some(ref mut c) = self.current {
                    c.changes.push(modify.clone());
                } else {
                    let mut changes = vec![];
                    let old_start = self.old_line - self.context_buffer.len();
                    let new_start = self.new_line - self.context_buffer.len();
                    while let Some(e) = self.context_buffer.pop_front() {
                        changes.push(e);
                    }
                    changes.push(modify.clone());
                    self.current = Some(Hunk {
                        old_start,
                        new_start,
                        changes,
                    });
                };

                match modify {
                    Edit::Insert(_) => self.new_line += 1,
                    _ => self.old_line += 1,
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Hunk<T>> {
        if let Some(c) = self.current {
            self.hunks.push(c);
        }
        self.hunks
    }
}

/// Expands a segment tiling over `old` and `new` into hunks.
///
/// `segments` must tile both sequences in order, the way
/// [`myers::diff`](crate::myers::diff) reports them. Matched regions become
/// context and are trimmed to 3 elements on each side of a change; a gap
/// contributes its new elements as inserts followed by its old elements as
/// deletes.
///
/// # Panics
///
/// Panics if a segment indexes outside `old` or `new`.
pub fn hunks<T: Eq + Clone>(old: &[T], new: &[T], segments: &[Segment]) -> Vec<Hunk<T>> {
    let mut builder = HunkBuilder::new();
    for segment in segments {
        match *segment {
            Segment::Detached => {}
            Segment::OldOnly(o) => {
                for el in &old[o.range()] {
                    builder.process(Edit::Delete(el.clone()));
                }
            }
            Segment::NewOnly(n) => {
                for el in &new[n.range()] {
                    builder.process(Edit::Insert(el.clone()));
                }
            }
            Segment::Paired { old: o, new: n } => {
                if o.len() == n.len() && old[o.range()] == new[n.range()] {
                    for el in &old[o.range()] {
                        builder.process(Edit::Equal(el.clone()));
                    }
                } else {
                    for el in &new[n.range()] {
                        builder.process(Edit::Insert(el.clone()));
                    }
                    for el in &old[o.range()] {
                        builder.process(Edit::Delete(el.clone()));
                    }
                }
            }
        }
    }
    builder.finish()
}

/// Replays `hunks` against `old`, checking every context element on the way.
///
/// A hunk anchored exactly at `old.len()` appends to the output. A hunk the
/// input cannot anchor is rejected with
/// [`InvalidPatch`](MatchworkError::InvalidPatch).
pub fn apply<T: Eq + Clone + fmt::Debug>(old: &[T], hunks: &[Hunk<T>]) -> Result<Vec<T>> {
    if hunks.is_empty() {
        return Ok(old.to_vec());
    }

    let mut result = vec![];
    let mut hunk_iter = hunks.iter().peekable();
    let mut old_line = 0;

    while old_line < old.len() || hunk_iter.peek().is_some() {
        if let Some(hunk) = hunk_iter.peek() {
            if old_line == hunk.old_start {
                for change in &hunk.changes {
                    match change {
                        Edit::Equal(t) => {
                            if old_line >= old.len() {
                                return Err(MatchworkError::InvalidPatch(
                                    "hunk extends past the end of the input".to_string(),
                                ));
                            }
                            if old[old_line] != *t {
                                return Err(MatchworkError::ContextMismatch {
                                    line: old_line,
                                    expected: format!("{:?}", t),
                                    found: format!("{:?}", old[old_line]),
                                });
                            }
                            result.push(old[old_line].clone());
                            old_line += 1;
                        }
                        Edit::Insert(t) => {
                            result.push(t.clone());
                        }
                        Edit::Delete(_) => {
                            if old_line >= old.len() {
                                return Err(MatchworkError::InvalidPatch(
                                    "hunk extends past the end of the input".to_string(),
                                ));
                            }
                            old_line += 1;
                        }
                    }
                }
                hunk_iter.next();
            } else if old_line < hunk.old_start {
                if old_line >= old.len() {
                    return Err(MatchworkError::InvalidPatch(
                        "hunk starts past the end of the input".to_string(),
                    ));
                }
                result.push(old[old_line].clone());
                old_line += 1;
            } else {
                return Err(MatchworkError::InvalidPatch(
                    "hunks overlap or start out of order".to_string(),
                ));
            }
        } else {
            result.push(old[old_line].clone());
            old_line += 1;
        }
    }

    Ok(result)
}
