//! Resolver seam: how a label value becomes a locale-specific string.
//!
//! The crate does not implement translation lookup itself; rendering code
//! depends on [`TranslationResolver`] and the deployment wires in a store.

use crate::LabelValue;

/// Translates a label value into a locale-specific string.
///
/// Implementations look up a translation for the value's key, namespace and
/// category, and apply its format arguments. Where they store translations
/// and how they negotiate locales is up to them.
pub trait TranslationResolver {
    /// Look up a translation for `label`.
    ///
    /// # Returns
    /// * `Some(text)` when a translation exists for the label's key
    /// * `None` when the store has nothing, in which case the caller should
    ///   fall back to the default label
    fn resolve(&self, label: &LabelValue) -> Option<String>;

    /// The resolved translation, or the default label when none exists.
    fn resolve_or_default(&self, label: &LabelValue) -> String {
        self.resolve(label)
            .unwrap_or_else(|| label.default_label().to_string())
    }
}

/// A resolver without a translation store: every label falls back to its
/// default text. Useful in tests and in deployments that ship a single
/// language.
pub struct PassthroughResolver;

impl TranslationResolver for PassthroughResolver {
    fn resolve(&self, _label: &LabelValue) -> Option<String> {
        None
    }
}
