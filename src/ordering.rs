use crate::types::{DirectoryEntry, Options};

/// Put `entries` into display order.
///
/// Sorting by size is stable and descending. `reverse` flips the sorted
/// result and has no effect unless sorting by size was requested.
pub fn order_entries(entries: &mut [DirectoryEntry], options: &Options) {
    if !options.sort_by_size {
        if options.reverse {
            log::debug!("reverse ignored without size sort");
        }
        return;
    }

    // sort_by is stable: equal sizes keep their collection order
    entries.sort_by(|a, b| b.size.cmp(&a.size));

    if options.reverse {
        entries.reverse();
    }
}
