use serde_json::Value;
use std::ops::Range;

/// Zero-based indices `0..to`.
pub fn range(to: usize) -> Range<usize> {
    0..to
}

/// Walks `path` into a loosely structured JSON document.
///
/// Returns `None` the first time a segment is missing, lands on a non-object, or
/// resolves to `null`. Never panics on unexpected shapes.
pub fn safe_get<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.as_object()?.get(*key)?;
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Last entry that is present and not the type's zero value.
pub fn last_truthy<T>(values: &[Option<T>]) -> Option<T>
where
    T: Copy + Default + PartialEq,
{
    values
        .iter()
        .rev()
        .flatten()
        .copied()
        .find(|value| *value != T::default())
}

/// Smallest accessor value across `items`, skipping items the accessor has no value for.
pub fn min_of<T, K, F>(items: impl IntoIterator<Item = T>, accessor: F) -> Option<K>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    items
        .into_iter()
        .filter_map(|item| accessor(&item))
        .fold(None, |min, value| match min {
            Some(current) if current <= value => Some(current),
            _ => Some(value),
        })
}
