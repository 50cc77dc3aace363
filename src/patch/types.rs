/// Each element in an expanded tiling can be
/// new (Insert)
/// removed (Delete)
/// equal (Equal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Insert(T),
    Delete(T),
    Equal(T),
}

/// Represents a group of nearby changes cut out of a tiling.
/// Please note that `changes` will include maximum 3 context elements, i.e. `Edit::Equal`
/// and this is reflected in the `old_start` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    pub old_start: usize,
    pub new_start: usize,
    pub changes: Vec<Edit<T>>,
}
