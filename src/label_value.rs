//! The `LabelValue` type: an immutable reference to a translatable piece of
//! text plus its fallback content.
//!
//! A `LabelValue` is what the rest of the application passes around instead
//! of a raw string: it remembers which label it refers to (key, namespace,
//! category) so a translation can be looked up at render time, while the
//! default label keeps it usable as plain text in the meantime.

use crate::record::{InterfaceType, LabelRecord};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Range};
use tracing::debug;

/// A reference to a translatable label plus its fallback text.
///
/// The unique `key` is used to retrieve translations from the label store.
/// The `default_label` is rendered when no translation is found, and also
/// defines the object's textual identity: `Display`, length, char access and
/// sub-ranges all delegate to it. Optional positional `args` are carried
/// along for message-format interpolation against the resolved translation.
///
/// Instances are immutable once constructed; [`LabelValue::with_namespace`]
/// and [`LabelValue::with_args`] produce new values rather than mutating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelValue {
    /// Unique key of the label within its namespace. Never normalized.
    key: String,

    /// Namespace of the label. Always stored lowercase.
    namespace: String,

    /// Category within the namespace. Always stored lowercase.
    category: String,

    /// The fallback text rendered when no translation is found.
    default_label: String,

    /// Optional positional format arguments, in insertion order.
    /// `Value::Null` entries are permitted.
    args: Vec<Value>,
}

impl LabelValue {
    /// Create a label value with no format arguments.
    ///
    /// # Arguments
    /// * `key` - Unique label identifier; stored as-is, never normalized.
    ///   Empty keys are accepted but discouraged.
    /// * `namespace` - Logical grouping (e.g., bot identifier); lowercased.
    /// * `category` - Sub-grouping within the namespace; lowercased.
    /// * `default_label` - Fallback text; may be empty.
    ///
    /// # Returns
    /// A fully initialized, immutable value. This constructor cannot fail.
    pub fn new(key: &str, namespace: &str, category: &str, default_label: &str) -> LabelValue {
        LabelValue {
            key: key.to_string(),
            namespace: namespace.to_lowercase(),
            category: category.to_lowercase(),
            default_label: default_label.to_string(),
            args: Vec::new(),
        }
    }

    /// Attach positional format arguments.
    ///
    /// Argument order is significant and preserved; `Value::Null` entries are
    /// allowed. Equality and hashing take the full sequence into account.
    pub fn with_args(mut self, args: Vec<Value>) -> LabelValue {
        self.args = args;
        self
    }

    /// Derive a label value from a repository record.
    ///
    /// Picks the **last** text-chat localization in the record (later entries
    /// represent more recent edits), and uses the record's identifier as the
    /// key. Namespace and category pass through the usual lowercasing.
    ///
    /// # Returns
    /// * `Ok(LabelValue)` with the chosen entry's text as default label
    /// * `Err` if the record contains no text-chat localization at all,
    ///   which signals a malformed upstream record
    pub fn from_record(record: &LabelRecord) -> Result<LabelValue> {
        let entry = record
            .localizations
            .iter()
            .rev()
            .find(|entry| entry.interface_type == InterfaceType::TextChat)
            .with_context(|| {
                format!("Label record '{}' has no text chat localization", record.id)
            })?;

        debug!(key = %record.id, "Derived label value from record");

        Ok(LabelValue::new(
            &record.id,
            &record.namespace,
            &record.category,
            &entry.label,
        ))
    }

    /// Return this value re-keyed under another namespace.
    ///
    /// The portion of the key before the first `_` is replaced by
    /// `new_namespace`; a key without a `_` is replaced entirely. Category,
    /// default label and args are kept; the receiver is unchanged.
    ///
    /// # Example
    /// ```ignore
    /// let value = LabelValue::new("app_greeting_1", "app", "greeting", "Hi");
    /// assert_eq!(value.with_namespace("newapp").key(), "newapp_greeting_1");
    /// ```
    pub fn with_namespace(&self, new_namespace: &str) -> LabelValue {
        let key = match self.key.find('_') {
            Some(pos) => format!("{}{}", new_namespace, &self.key[pos..]),
            None => new_namespace.to_string(),
        };

        LabelValue {
            key,
            namespace: new_namespace.to_lowercase(),
            category: self.category.clone(),
            default_label: self.default_label.clone(),
            args: self.args.clone(),
        }
    }

    /// Unique key of the label.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Namespace of the label (always lowercase).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Category of the label (always lowercase).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The fallback text rendered when no translation is found.
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Positional format arguments, in insertion order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Length of the default label in bytes, as for `str::len`.
    pub fn len(&self) -> usize {
        self.default_label.len()
    }

    /// Whether the default label is empty.
    pub fn is_empty(&self) -> bool {
        self.default_label.is_empty()
    }

    /// Character of the default label at position `index`, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.default_label.chars().nth(index)
    }

    /// Contiguous sub-range of the default label.
    ///
    /// Returns `None` when the range is out of bounds or does not fall on
    /// character boundaries, as for `str::get`.
    pub fn substring(&self, range: Range<usize>) -> Option<&str> {
        self.default_label.get(range)
    }
}

/// Displays exactly the default label, never a synthetic representation.
impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default_label)
    }
}

impl AsRef<str> for LabelValue {
    fn as_ref(&self) -> &str {
        &self.default_label
    }
}

/// A `LabelValue` can stand in wherever a `&str` is expected.
impl Deref for LabelValue {
    type Target = str;

    fn deref(&self) -> &str {
        &self.default_label
    }
}

/// Hashes the five fields in a fixed order: default label, args, key,
/// namespace, category. Consistent with `PartialEq`: equal values feed
/// identical data to the hasher. Args are hashed through their canonical
/// JSON serialization since `serde_json::Value` does not implement `Hash`.
impl Hash for LabelValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.default_label.hash(state);
        for arg in &self.args {
            arg.to_string().hash(state);
        }
        self.key.hash(state);
        self.namespace.hash(state);
        self.category.hash(state);
    }
}
