//! Sequence alignment built around positional match regions.
//!
//! [`myers`] computes which runs of two sequences line up, [`segment`]
//! describes those runs as immutable values with textual notations, and
//! [`patch`] plus [`serialization`] turn an alignment into unified patch
//! text and back.

pub mod error;
pub mod myers;
pub mod patch;
pub mod segment;
pub mod serialization;

pub use error::{MatchworkError, Result};
pub use segment::{Notation, Run, Segment};
