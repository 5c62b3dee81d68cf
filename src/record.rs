//! The multi-locale label record supplied by the label repository.
//!
//! A record holds every localization of one label: one entry per locale and
//! output channel, in edit order. [`crate::LabelValue::from_record`] collapses
//! a record into a single lightweight reference for code that only needs the
//! text-chat rendering.

use serde::{Deserialize, Serialize};

/// Output channel a localized entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterfaceType {
    /// Written conversation (chat widgets, messaging channels).
    TextChat,
    /// Spoken conversation (voice assistants, telephony).
    VoiceAssistant,
}

/// One localization of a label: the text for a given locale and channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedEntry {
    /// Locale tag (e.g., "en", "fr").
    pub locale: String,

    /// Channel this entry targets.
    pub interface_type: InterfaceType,

    /// The localized text.
    pub label: String,
}

/// A label as stored by the repository, with all of its localizations.
///
/// Entries appear in edit order: when several target the same locale and
/// channel, the later one is the more recent, authoritative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    /// Record identifier; becomes the derived value's key.
    pub id: String,

    /// Namespace of the label.
    pub namespace: String,

    /// Category within the namespace.
    pub category: String,

    /// Per-locale, per-channel entries, in edit order.
    pub localizations: Vec<LocalizedEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== JSON Shape Tests ====================

    #[test]
    fn test_record_deserializes_from_repository_json() {
        let json = r#"{
            "id": "sales_greeting_1",
            "namespace": "Sales",
            "category": "GREETING",
            "localizations": [
                {"locale": "en", "interfaceType": "textChat", "label": "Hello!"},
                {"locale": "en", "interfaceType": "voiceAssistant", "label": "Hello there"},
                {"locale": "fr", "interfaceType": "textChat", "label": "Bonjour !"}
            ]
        }"#;

        let record: LabelRecord = serde_json::from_str(json).expect("Should parse");
        assert_eq!(record.id, "sales_greeting_1");
        assert_eq!(record.localizations.len(), 3);
        assert_eq!(
            record.localizations[1].interface_type,
            InterfaceType::VoiceAssistant
        );
        assert_eq!(record.localizations[2].label, "Bonjour !");
    }

    #[test]
    fn test_interface_type_serializes_in_camel_case() {
        let json = serde_json::to_string(&InterfaceType::TextChat).expect("Should serialize");
        assert_eq!(json, r#""textChat""#);
        let json = serde_json::to_string(&InterfaceType::VoiceAssistant).expect("Should serialize");
        assert_eq!(json, r#""voiceAssistant""#);
    }

    #[test]
    fn test_unknown_interface_type_is_rejected() {
        let result: Result<InterfaceType, _> = serde_json::from_str(r#""carrierPigeon""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_localizations_preserve_edit_order() {
        let json = r#"{
            "id": "k",
            "namespace": "ns",
            "category": "cat",
            "localizations": [
                {"locale": "en", "interfaceType": "textChat", "label": "first"},
                {"locale": "en", "interfaceType": "textChat", "label": "second"}
            ]
        }"#;

        let record: LabelRecord = serde_json::from_str(json).expect("Should parse");
        assert_eq!(record.localizations[0].label, "first");
        assert_eq!(record.localizations[1].label, "second");
    }
}
