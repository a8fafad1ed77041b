//! Settings consumers.
//!
//! A [`SettingsConsumer`] receives the fully resolved settings of one
//! resolution in a single call. It is never called for a resolution that
//! failed, so it never observes a partial configuration.

use indexmap::IndexMap;

use crate::models::ResolvedSetting;

/// Receives resolved, unprefixed settings.
pub trait SettingsConsumer {
    /// Take ownership of the resolved settings, in source order.
    fn apply(&mut self, settings: Vec<ResolvedSetting>);
}

impl<C: SettingsConsumer + ?Sized> SettingsConsumer for &mut C {
    fn apply(&mut self, settings: Vec<ResolvedSetting>) {
        (**self).apply(settings);
    }
}

/// Collects settings, keeping duplicates and order.
impl SettingsConsumer for Vec<ResolvedSetting> {
    fn apply(&mut self, settings: Vec<ResolvedSetting>) {
        self.extend(settings);
    }
}

/// Collects settings by key; a later duplicate overwrites the value but
/// keeps the key's first position.
impl SettingsConsumer for IndexMap<String, String> {
    fn apply(&mut self, settings: Vec<ResolvedSetting>) {
        for ResolvedSetting { key, value } in settings {
            self.insert(key, value);
        }
    }
}

/// Adapts a closure into a consumer.
pub struct FnConsumer<F>(pub F);

impl<F: FnMut(Vec<ResolvedSetting>)> SettingsConsumer for FnConsumer<F> {
    fn apply(&mut self, settings: Vec<ResolvedSetting>) {
        (self.0)(settings);
    }
}

/// Records every delivery separately.
///
/// Distinguishes "never called" from "called with nothing", which a plain
/// `Vec` cannot.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsumer {
    pub deliveries: Vec<Vec<ResolvedSetting>>,
}

impl RecordingConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `apply` was called.
    pub fn calls(&self) -> usize {
        self.deliveries.len()
    }

    /// The most recent delivery, if any.
    pub fn last(&self) -> Option<&[ResolvedSetting]> {
        self.deliveries.last().map(Vec::as_slice)
    }
}

impl SettingsConsumer for RecordingConsumer {
    fn apply(&mut self, settings: Vec<ResolvedSetting>) {
        self.deliveries.push(settings);
    }
}
