//! Dense ordering helpers for positioned sequences.
//!
//! Columns hold tasks and tasks hold subtasks, each carrying an integer
//! position that must form the dense sequence `{0, 1, …, n-1}` within its
//! container. The functions here are pure: they consume a sequence (or a
//! pair of sequences), move one element, and renumber so the density
//! invariant holds on the way out.

/// A value carrying a dense position within its owning container.
pub trait Sequenced {
    /// Overwrites the value's position within its container.
    fn set_position(&mut self, position: usize);
}

/// Rewrites positions to the dense sequence `0..items.len()`.
pub fn renumber<T: Sequenced>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_position(index);
    }
}

/// Moves the element at `from` to `to` within one sequence and renumbers.
///
/// `to` is clamped to the last valid index. When `from` is out of bounds or
/// equals the clamped target the sequence is returned unchanged.
#[must_use]
pub fn reorder<T: Sequenced>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= items.len() {
        return items;
    }
    let target = to.min(items.len().saturating_sub(1));
    if from == target {
        return items;
    }
    let item = items.remove(from);
    items.insert(target.min(items.len()), item);
    renumber(&mut items);
    items
}

/// Moves the element at `from` in `source` into `dest` at `to`, renumbering
/// both sequences independently.
///
/// `to` is clamped to `dest.len()`, so an index past the end appends. When
/// `from` is out of bounds both sequences are returned unchanged.
#[must_use]
pub fn transfer<T: Sequenced>(
    mut source: Vec<T>,
    mut dest: Vec<T>,
    from: usize,
    to: usize,
) -> (Vec<T>, Vec<T>) {
    if from >= source.len() {
        return (source, dest);
    }
    let item = source.remove(from);
    dest.insert(to.min(dest.len()), item);
    renumber(&mut source);
    renumber(&mut dest);
    (source, dest)
}
