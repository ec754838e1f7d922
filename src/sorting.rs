//! Result ordering for discovered projects.
//!
//! Favorites always come first. Within each group, labels are compared with
//! the Unicode Collation Algorithm (CLDR root order) rather than by raw
//! bytes, so accents and case are secondary to the base letters. Labels the
//! collator considers equal fall back to byte order, keeping the result total
//! and reproducible.

use std::cmp::Ordering;

use feruca::Collator;

use crate::discover::DiscoveredProject;

/// Collation-style comparison of two labels.
///
/// Builds a fresh collator per call; sorting many labels should go through
/// [`sort_projects`], which reuses one.
///
/// # Examples
///
/// ```
/// # use std::cmp::Ordering;
/// # use project_finder::sorting::compare_labels;
/// assert_eq!(compare_labels("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare_labels("alpha", "Alpha"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// Sort projects in place: favorites first, then by [`compare_labels`].
///
/// The sort is stable, so projects with identical labels keep their
/// discovery order.
pub fn sort_projects(projects: &mut [DiscoveredProject]) {
    let mut collator = Collator::default();
    projects.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then_with(|| collator.collate(a.label.as_str(), b.label.as_str()))
    });
}
