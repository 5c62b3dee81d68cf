//! Localizable label references for conversational bot responses.
//!
//! This crate provides the value object a bot's rendering code holds while a
//! translation is still pending: a [`LabelValue`] carries the lookup key, its
//! namespace/category classification, the fallback text, and optional
//! formatting arguments. Resolution happens lazily at render time through a
//! [`TranslationResolver`], but the value itself already behaves like plain
//! text wherever a string is expected.
//!
//! # Architecture
//!
//! - `label_value`: The immutable `LabelValue` type with value equality,
//!   hashing, and text-coercion accessors
//! - `record`: The richer multi-locale label record stored by the label
//!   repository, from which a `LabelValue` can be derived
//! - `resolver`: The `TranslationResolver` seam through which a value is
//!   exchanged for a locale-specific string
//!
//! # Example
//!
//! ```rust,ignore
//! use i18n_labels::{LabelValue, PassthroughResolver, TranslationResolver};
//!
//! let greeting = LabelValue::new("sales_greeting", "Sales", "GREETING", "Hello!");
//! assert_eq!(greeting.namespace(), "sales");
//!
//! // Behaves like text until a translation store is wired in.
//! let resolver = PassthroughResolver;
//! assert_eq!(resolver.resolve_or_default(&greeting), "Hello!");
//! ```

mod label_value;
mod record;
mod resolver;

pub use label_value::LabelValue;
pub use record::{InterfaceType, LabelRecord, LocalizedEntry};
pub use resolver::{PassthroughResolver, TranslationResolver};
