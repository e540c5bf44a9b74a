//! Order-preserving set union of finding lists.

use std::collections::HashSet;

/// Returns `local` followed by the entries of `external` not yet present.
///
/// Equality is exact string equality. Duplicates within either list are
/// collapsed to their first occurrence, and blank external entries are
/// skipped. Merging a list with itself returns it unchanged (minus any
/// duplicates it already had).
///
/// # Example
///
/// ```rust
/// use dfm_advisory::merge_unique;
///
/// let local = vec!["Undercuts detected in part geometry".to_string()];
/// let external = vec![
///     "Undercuts detected in part geometry".to_string(),
///     "Rib too tall".to_string(),
/// ];
/// assert_eq!(
///     merge_unique(&local, &external),
///     vec!["Undercuts detected in part geometry", "Rib too tall"]
/// );
/// ```
pub fn merge_unique(local: &[String], external: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(local.len() + external.len());
    let mut merged = Vec::with_capacity(local.len() + external.len());
    let external = external.iter().filter(|entry| !entry.trim().is_empty());

    for entry in local.iter().chain(external) {
        if seen.insert(entry.as_str()) {
            merged.push(entry.clone());
        }
    }
    merged
}
