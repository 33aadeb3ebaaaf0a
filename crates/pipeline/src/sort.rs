//! Stable ordering of the visible list.

use crate::criterion::SortField;
use catalog::Audiobook;

/// Sort `items` in place by `field`.
///
/// The sort is stable in both directions: descending order inverts the
/// comparator rather than reversing the sorted output, so items with equal
/// keys always keep their input order.
pub fn sort_items(items: &mut [Audiobook], field: SortField, ascending: bool) {
    items.sort_by(|a, b| {
        let ordering = field.compare(a, b);
        if ascending { ordering } else { ordering.reverse() }
    });
}
