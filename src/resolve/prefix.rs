//! Namespace prefix filtering.

use crate::models::{Namespace, RawSetting};

/// Keep the settings under `namespace`, with the namespace stripped from
/// their keys. Relative order is preserved; everything else is dropped.
pub fn filter_prefix(settings: Vec<RawSetting>, namespace: &Namespace) -> Vec<(String, String)> {
    settings
        .into_iter()
        .filter_map(|RawSetting { key, value }| match namespace.strip(&key) {
            Some(stripped) => Some((stripped.to_string(), value)),
            None => {
                tracing::trace!(%key, %namespace, "setting outside namespace skipped");
                None
            }
        })
        .collect()
}
