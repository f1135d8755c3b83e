use crate::core::labels::Label;
use log::trace;
use std::collections::{BTreeSet, HashSet};

/// Replaces every missing entry with `missing`.
///
/// Returns the cleaned labels and whether at least one replacement happened.
pub fn clean<L: Label>(labels: Vec<Option<L>>, missing: &L) -> (Vec<L>, bool) {
    let mut found_missing = false;
    let cleaned = labels
        .into_iter()
        .map(|y| {
            y.unwrap_or_else(|| {
                found_missing = true;
                missing.clone()
            })
        })
        .collect();
    (cleaned, found_missing)
}

/// Drops repeated classes, keeping the first occurrence of each.
pub fn dedup_classes<L: Label>(classes: impl IntoIterator<Item = L>) -> Vec<L> {
    let mut seen = HashSet::new();
    classes
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

/// Derives the canonical class list from cleaned label sequences.
///
/// `found_missing` is the flag [`clean`] reported for either side. Explicit
/// classes are kept in caller order (first occurrence wins on duplicates) and
/// never get the sentinel appended. Otherwise the classes are the sorted union
/// of all labels, with `missing` moved to the end when a missing entry was
/// substituted.
pub fn derive_classes<L: Label>(
    ytrue: &[L],
    ypred: &[L],
    explicit_classes: Option<Vec<L>>,
    missing: &L,
    found_missing: bool,
) -> Vec<L> {
    if let Some(classes) = explicit_classes {
        return dedup_classes(classes);
    }

    let observed: BTreeSet<&L> = ytrue
        .iter()
        .chain(ypred)
        .filter(|y| !found_missing || *y != missing)
        .collect();

    let mut classes: Vec<L> = observed.into_iter().cloned().collect();
    if found_missing {
        classes.push(missing.clone());
    }

    trace!(
        "derived {} classes (found_missing={})",
        classes.len(),
        found_missing
    );
    classes
}
