use std::cmp::max;

use crate::segment::Segment;

#[derive(Clone)]
struct V {
    data: Vec<usize>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![0; 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> usize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: usize) {
        self.data[(k + self.offset) as usize] = val;
    }
}

/// Aligns two strings line by line after breaking them on newlines and
/// running `diff`.
///
/// Positions in the result count lines, not bytes, on each side.
pub fn diff_lines(old: &str, new: &str) -> Vec<Segment> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    diff(&old_lines, &new_lines)
}

/// Computes a full tiling of two sequences using the Myers algorithm.
///
/// Matched regions alternate with paired gaps: a gap couples the old run it
/// replaces with the new run replacing it, and either side of a gap may be
/// empty. Concatenating the old runs of the result reproduces `0..old.len()`,
/// and likewise for the new side.
///
/// # Examples
///
/// ```
/// use matchwork::myers::diff;
/// use matchwork::Segment;
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let result = diff(&old, &new);
/// assert_eq!(result, vec![
///     Segment::common(0, 0, 1).unwrap(),
///     Segment::paired(1, 1, 1, 0).unwrap(),
///     Segment::common(2, 1, 1).unwrap(),
///     Segment::paired(3, 2, 0, 1).unwrap(),
/// ]);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
pub fn diff<T: Eq>(old: &[T], new: &[T]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut old_pos = 0;
    let mut new_pos = 0;
    for (old_start, new_start, len) in common_blocks(old, new) {
        if old_start > old_pos || new_start > new_pos {
            segments.push(Segment::paired_at(
                old_pos,
                new_pos,
                old_start - old_pos,
                new_start - new_pos,
            ));
        }
        segments.push(Segment::common_at(old_start, new_start, len));
        old_pos = old_start + len;
        new_pos = new_start + len;
    }
    if old_pos < old.len() || new_pos < new.len() {
        segments.push(Segment::paired_at(
            old_pos,
            new_pos,
            old.len() - old_pos,
            new.len() - new_pos,
        ));
    }
    segments
}

/// Computes the maximal matched regions between two sequences, in order.
///
/// Every region pairs a run in `old` with an element-equal run of the same
/// length in `new`; together the regions carry a longest common subsequence.
pub fn matches<T: Eq>(old: &[T], new: &[T]) -> Vec<Segment> {
    common_blocks(old, new)
        .into_iter()
        .map(|(old_start, new_start, len)| Segment::common_at(old_start, new_start, len))
        .collect()
}

/// Computes the regions `diff` leaves unmatched, one side at a time.
///
/// Each gap contributes its old run before its new run; a side the gap does
/// not touch is skipped rather than reported empty.
pub fn unmatched<T: Eq>(old: &[T], new: &[T]) -> Vec<Segment> {
    let mut gaps = Vec::new();
    let mut old_pos = 0;
    let mut new_pos = 0;
    let tail = std::iter::once((old.len(), new.len(), 0));
    for (old_start, new_start, len) in common_blocks(old, new).into_iter().chain(tail) {
        if old_start > old_pos {
            gaps.push(Segment::old_only_at(old_pos, old_start - old_pos));
        }
        if new_start > new_pos {
            gaps.push(Segment::new_only_at(new_pos, new_start - new_pos));
        }
        old_pos = old_start + len;
        new_pos = new_start + len;
    }
    gaps
}

fn common_blocks<T: Eq>(old: &[T], new: &[T]) -> Vec<(usize, usize, usize)> {
    let n = old.len();
    let m = new.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    let maxi = n + m;
    let mut v = V::new(maxi);
    let mut trace: Vec<V> = Vec::new();
    let mut end_x = n;
    let mut end_y = m;
    'edits: for d in 0..=maxi as isize {
        for k in (-d..=d).step_by(2) {
            let mut x = if k == -d {
                v.get(k + 1)
            } else if k == d {
                v.get(k - 1) + 1
            } else {
                max(v.get(k + 1), v.get(k - 1) + 1)
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }
            v.set(k, x);
            if x >= n && y >= m {
                end_x = x;
                end_y = y;
                trace.push(v.clone());
                break 'edits;
            }
        }
        trace.push(v.clone());
    }
    traceback(trace, end_x, end_y)
}

fn traceback(trace: Vec<V>, mut x: usize, mut y: usize) -> Vec<(usize, usize, usize)> {
    let mut blocks = Vec::new();
    for d in (1..trace.len()).rev() {
        let v = &trace[d];
        let d = d as isize;
        let k = x as isize - y as isize;
        let prev_k = if k == -d {
            k + 1
        } else if k == d || v.get(k - 1) + 1 >= v.get(k + 1) {
            k - 1
        } else {
            k + 1
        };
        let prev_x = v.get(prev_k);
        let prev_y = (prev_x as isize - prev_k) as usize;
        // the match run ending at (x, y) starts just past the edit step
        let (run_x, run_y) = if prev_k == k - 1 {
            (prev_x + 1, prev_y)
        } else {
            (prev_x, prev_y + 1)
        };
        if x > run_x {
            blocks.push((run_x, run_y, x - run_x));
        }
        x = prev_x;
        y = prev_y;
    }
    if x > 0 && y > 0 {
        blocks.push((0, 0, x));
    }

    blocks.reverse();
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lcs_length(old: &[u8], new: &[u8]) -> usize {
        let mut table = vec![vec![0usize; new.len() + 1]; old.len() + 1];
        for i in 1..=old.len() {
            for j in 1..=new.len() {
                table[i][j] = if old[i - 1] == new[j - 1] {
                    table[i - 1][j - 1] + 1
                } else {
                    max(table[i - 1][j], table[i][j - 1])
                };
            }
        }
        table[old.len()][new.len()]
    }

    fn matched_total(segments: &[Segment]) -> usize {
        segments
            .iter()
            .filter_map(|s| s.old_run())
            .map(|r| r.len())
            .sum()
    }

    proptest! {
        #[test]
        fn test_tiling_covers_both_sequences(old: Vec<u8>, new: Vec<u8>) {
            let mut old_pos = 0;
            let mut new_pos = 0;
            for segment in diff(&old, &new) {
                match segment {
                    Segment::Paired { old: o, new: n } => {
                        prop_assert_eq!(o.start(), old_pos);
                        prop_assert_eq!(n.start(), new_pos);
                        old_pos += o.len();
                        new_pos += n.len();
                    }
                    other => prop_assert!(false, "one-sided segment in tiling: {:?}", other),
                }
            }
            prop_assert_eq!(old_pos, old.len());
            prop_assert_eq!(new_pos, new.len());
        }

        #[test]
        fn test_matched_regions_hold_equal_slices(
            old in prop::collection::vec(0u8..4, 0..40),
            new in prop::collection::vec(0u8..4, 0..40),
        ) {
            let mut old_pos = 0;
            let mut new_pos = 0;
            for segment in matches(&old, &new) {
                let o = segment.old_run().unwrap();
                let n = segment.new_run().unwrap();
                prop_assert!(!o.is_empty());
                prop_assert_eq!(o.len(), n.len());
                prop_assert!(o.start() >= old_pos);
                prop_assert!(n.start() >= new_pos);
                prop_assert_eq!(&old[o.range()], &new[n.range()]);
                old_pos = o.start() + o.len();
                new_pos = n.start() + n.len();
            }
        }

        #[test]
        fn test_matched_total_is_lcs_length(
            old in prop::collection::vec(0u8..4, 0..40),
            new in prop::collection::vec(0u8..4, 0..40),
        ) {
            let total = matched_total(&matches(&old, &new));
            prop_assert_eq!(total, lcs_length(&old, &new));
        }

        #[test]
        fn test_length_invariant(old: Vec<u8>, new: Vec<u8>) {
            let matched = matched_total(&matches(&old, &new));
            let gaps = unmatched(&old, &new);
            let deleted: usize = gaps.iter().filter_map(|s| s.old_run()).map(|r| r.len()).sum();
            let inserted: usize = gaps.iter().filter_map(|s| s.new_run()).map(|r| r.len()).sum();
            prop_assert_eq!(old.len(), matched + deleted);
            prop_assert_eq!(new.len(), matched + inserted);
        }

        #[test]
        fn test_idempotency(els: Vec<u8>) {
            let expected = if els.is_empty() {
                Vec::new()
            } else {
                vec![Segment::common_at(0, 0, els.len())]
            };
            prop_assert_eq!(diff(&els, &els), expected.clone());
            prop_assert_eq!(matches(&els, &els), expected);
            prop_assert_eq!(unmatched(&els, &els), Vec::new());
        }

        #[test]
        fn test_new_empty(els: Vec<u8>) {
            let expected = if els.is_empty() {
                Vec::new()
            } else {
                vec![Segment::paired_at(0, 0, els.len(), 0)]
            };
            prop_assert_eq!(diff(&els, &Vec::new()), expected);
            prop_assert_eq!(matches(&els, &Vec::new()), Vec::new());
        }

        #[test]
        fn test_old_empty(els: Vec<u8>) {
            let expected = if els.is_empty() {
                Vec::new()
            } else {
                vec![Segment::paired_at(0, 0, 0, els.len())]
            };
            prop_assert_eq!(diff(&Vec::new(), &els), expected);
            prop_assert_eq!(matches(&Vec::new(), &els), Vec::new());
        }

        #[test]
        fn test_symmetry(old: Vec<u8>, new: Vec<u8>) {
            let forward = unmatched(&old, &new);
            let backward = unmatched(&new, &old);
            let deleted: usize = forward.iter().filter_map(|s| s.old_run()).map(|r| r.len()).sum();
            let inserted: usize = forward.iter().filter_map(|s| s.new_run()).map(|r| r.len()).sum();
            let deleted_2: usize = backward.iter().filter_map(|s| s.old_run()).map(|r| r.len()).sum();
            let inserted_2: usize = backward.iter().filter_map(|s| s.new_run()).map(|r| r.len()).sum();
            prop_assert_eq!(deleted, inserted_2);
            prop_assert_eq!(inserted, deleted_2);

            let matched = matched_total(&matches(&old, &new));
            let matched_2 = matched_total(&matches(&new, &old));
            prop_assert_eq!(matched, matched_2);
        }

        #[test]
        fn test_matches_appear_in_diff(
            old in prop::collection::vec(0u8..4, 0..40),
            new in prop::collection::vec(0u8..4, 0..40),
        ) {
            let tiling = diff(&old, &new);
            let mut remaining = tiling.iter();
            for block in matches(&old, &new) {
                prop_assert!(remaining.any(|s| *s == block));
            }
        }
    }

    #[test]
    fn test_diff_lines() {
        let old = "hello\nworld\nfoo";
        let new = "hello\nrust\nfoo";
        let result = diff_lines(old, new);
        assert_eq!(
            result,
            vec![
                Segment::common_at(0, 0, 1),
                Segment::paired_at(1, 1, 1, 1),
                Segment::common_at(2, 2, 1),
            ]
        );
    }

    #[test]
    fn test_simple_diff() {
        let old = vec!["a", "b", "c"];
        let new = vec!["a", "x", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                Segment::common_at(0, 0, 1),
                Segment::paired_at(1, 1, 1, 1),
                Segment::common_at(2, 2, 1),
            ]
        );
    }

    #[test]
    fn test_completely_different() {
        let old = vec!["a", "b", "c"];
        let new = vec!["x", "y", "z"];
        assert_eq!(diff(&old, &new), vec![Segment::paired_at(0, 0, 3, 3)]);
        assert_eq!(matches(&old, &new), vec![]);
    }

    #[test]
    fn test_single_element_different() {
        let old = vec!["a"];
        let new = vec!["b"];
        assert_eq!(diff(&old, &new), vec![Segment::paired_at(0, 0, 1, 1)]);
    }

    #[test]
    fn test_duplicates() {
        let old = vec!["a", "a", "b"];
        let new = vec!["a", "b", "b"];
        assert_eq!(
            diff(&old, &new),
            vec![
                Segment::common_at(0, 0, 1),
                Segment::paired_at(1, 1, 1, 0),
                Segment::common_at(2, 1, 1),
                Segment::paired_at(3, 2, 0, 1),
            ]
        );
        assert_eq!(
            unmatched(&old, &new),
            vec![Segment::old_only_at(1, 1), Segment::new_only_at(2, 1)]
        );
    }

    #[test]
    fn test_insertion_in_middle() {
        let old = vec!["a", "c"];
        let new = vec!["a", "b", "c"];
        assert_eq!(
            diff(&old, &new),
            vec![
                Segment::common_at(0, 0, 1),
                Segment::paired_at(1, 1, 0, 1),
                Segment::common_at(1, 2, 1),
            ]
        );
        assert_eq!(unmatched(&old, &new), vec![Segment::new_only_at(1, 1)]);
    }

    #[test]
    fn test_long_runs_coalesce() {
        let old = vec![1, 2, 3, 4, 9, 5, 6];
        let new = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(
            diff(&old, &new),
            vec![
                Segment::common_at(0, 0, 4),
                Segment::paired_at(4, 4, 1, 0),
                Segment::common_at(5, 4, 2),
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(diff(&empty, &empty), vec![]);
        assert_eq!(diff(&empty, &vec![1, 2]), vec![Segment::paired_at(0, 0, 0, 2)]);
        assert_eq!(diff(&vec![1, 2], &empty), vec![Segment::paired_at(0, 0, 2, 0)]);
    }
}
