//! Per-attribute presentation overrides layered on top of the registry.
//!
//! The registry declares what an attribute *is*; an override map adjusts
//! how a particular `(kind, attribute)` pair is presented — a refined
//! value kind, an editor hint string, or hiding it outright.

use crate::element::ElementKind;
use lookedit_values::ValueKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Present the attribute as this kind instead of its declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_override: Option<ValueKind>,
    /// Free-form hint consumed by the editing surface, e.g. a widget name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_hints: Option<String>,
    /// Hidden attributes are skipped when building property categories.
    #[serde(default)]
    pub hidden: bool,
}

impl OverrideEntry {
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Default::default()
        }
    }

    pub fn retyped(kind: ValueKind) -> Self {
        Self {
            type_override: Some(kind),
            ..Default::default()
        }
    }
}

/// Override entries keyed by `(kind, attribute)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyMap {
    entries: HashMap<ElementKind, HashMap<String, OverrideEntry>>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ElementKind, attribute: impl Into<String>, entry: OverrideEntry) {
        self.entries
            .entry(kind)
            .or_default()
            .insert(attribute.into(), entry);
    }

    pub fn get(&self, kind: ElementKind, attribute: &str) -> Option<&OverrideEntry> {
        self.entries.get(&kind)?.get(attribute)
    }

    pub fn is_hidden(&self, kind: ElementKind, attribute: &str) -> bool {
        self.get(kind, attribute).map_or(false, |e| e.hidden)
    }

    /// The kind an attribute should be presented as: the override when one
    /// is registered, the declared kind otherwise.
    pub fn effective_kind(
        &self,
        kind: ElementKind,
        attribute: &str,
        declared: ValueKind,
    ) -> ValueKind {
        self.get(kind, attribute)
            .and_then(|e| e.type_override)
            .unwrap_or(declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_attribute_keeps_declared_kind() {
        let map = PropertyMap::new();
        assert_eq!(
            map.effective_kind(ElementKind::ImagerySection, "Colour", ValueKind::ColourRect),
            ValueKind::ColourRect
        );
        assert!(!map.is_hidden(ElementKind::ImagerySection, "Colour"));
    }

    #[test]
    fn test_type_override_wins() {
        let mut map = PropertyMap::new();
        map.insert(
            ElementKind::PropertyInitialiser,
            "value",
            OverrideEntry::retyped(ValueKind::Colour),
        );
        assert_eq!(
            map.effective_kind(ElementKind::PropertyInitialiser, "value", ValueKind::Text),
            ValueKind::Colour
        );
        // Same attribute name on another kind is untouched
        assert_eq!(
            map.effective_kind(ElementKind::PropertyDefinitionBase, "value", ValueKind::Text),
            ValueKind::Text
        );
    }

    #[test]
    fn test_hidden_entry() {
        let mut map = PropertyMap::new();
        map.insert(
            ElementKind::SectionSpecification,
            "controlWidget",
            OverrideEntry::hidden(),
        );
        assert!(map.is_hidden(ElementKind::SectionSpecification, "controlWidget"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut map = PropertyMap::new();
        map.insert(
            ElementKind::TextComponent,
            "Font",
            OverrideEntry {
                type_override: None,
                editor_hints: Some("fontPicker".into()),
                hidden: false,
            },
        );
        let json = serde_json::to_string(&map).unwrap();
        let back: PropertyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.get(ElementKind::TextComponent, "Font")
                .unwrap()
                .editor_hints
                .as_deref(),
            Some("fontPicker")
        );
    }
}
