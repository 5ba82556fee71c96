//! Area path reconciliation by root substitution.
//!
//! Source and destination projects name their area roots differently but
//! share the sub-structure below the root. The reconciled path keeps the new
//! item's root and takes everything below it from the old item.

use align_core::AreaPath;
use align_core::area_path::AreaMerge;
use align_core::fields::AREA_DELIMITER;

/// Result of reconciling one pair of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub path: String,
    pub merge: AreaMerge,
}

/// Reconcile using the standard `\` delimiter.
#[must_use]
pub fn reconcile(old_path: &str, new_path: &str) -> String {
    reconcile_with(old_path, new_path, AREA_DELIMITER).path
}

/// Reconcile `old_path` onto `new_path`.
///
/// - old path is a bare root: `new_path` unchanged
/// - new path is a bare root: `new_path` + old remainder
/// - otherwise: new root + old remainder (the new sub-path is discarded)
#[must_use]
pub fn reconcile_with(old_path: &str, new_path: &str, delimiter: char) -> Reconciled {
    let old = AreaPath::with_delimiter(old_path, delimiter);
    let new = AreaPath::with_delimiter(new_path, delimiter);

    if old.is_root() {
        return Reconciled {
            path: new_path.to_string(),
            merge: AreaMerge::Unchanged,
        };
    }

    let merge = if new.is_root() {
        AreaMerge::Appended
    } else {
        AreaMerge::Replaced
    };

    Reconciled {
        path: format!("{}{}", new.root(), old.remainder()),
        merge,
    }
}
