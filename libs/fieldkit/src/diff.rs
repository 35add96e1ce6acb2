//! Order-preserving set algebra over slug sequences.

/// Elements of `left` that are absent from `right`, in `left`'s order.
/// Duplicates in `left` are kept; membership is plain string equality.
#[must_use]
pub fn difference(left: &[String], right: &[String]) -> Vec<String> {
    left.iter()
        .filter(|slug| !right.contains(slug))
        .cloned()
        .collect()
}
