//! Approximate key matching against canonical lookup tables

use crate::lookup::LookupTable;

/// Resolve a raw textual key against a lookup table.
///
/// Tries a verbatim (case-sensitive) hit first, then scans the table in its
/// definition order and returns the first canonical key where either
/// lowercased string contains the other. Deliberately crude: no edit
/// distance, no scoring, no uniqueness check. Ambiguous queries resolve to
/// table order, and downstream output depends on that; keep it that way.
pub fn find_match<'a>(key: &str, table: &'a LookupTable) -> Option<&'a str> {
    if let Some((canonical, _)) = table.get_key_value(key) {
        return Some(canonical);
    }

    let key_lower = key.to_lowercase();
    for canonical in table.keys() {
        let canonical_lower = canonical.to_lowercase();
        if canonical_lower.contains(&key_lower) || key_lower.contains(&canonical_lower) {
            return Some(canonical);
        }
    }

    None
}
