//! # Attribute Properties
//!
//! Bridges element attributes into editable property objects for a
//! property-grid style surface.
//!
//! An [`AttributeProperty`] is a detached copy of one attribute's value.
//! The shell edits it, observes change notifications, and turns accepted
//! edits into commands; nothing here writes back to the element directly.

use crate::commands::ElementStore;
use crate::errors::EditorError;
use crate::session::EditingSession;
use lookedit_schema::{attribute_names, get_attribute, ElementKind, PropertyMap};
use lookedit_values::{Value, ValueFormatError, ValueKind};
use std::collections::BTreeMap;

/// Why a property's value changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeValueReason {
    Unknown,
    /// A component of a composite value was edited and the composite was
    /// rebuilt around it.
    ComponentValueChanged,
    /// The value itself was replaced, e.g. from parsed text input.
    InnerValueChanged,
}

/// One editable attribute of one element.
#[derive(Debug, Clone)]
pub struct AttributeProperty {
    pub element: String,
    pub attribute: String,
    pub kind: ValueKind,
    value: Value,
    pub default_value: Value,
    pub read_only: bool,
    pub editor_hints: Option<String>,
    events: Vec<ChangeValueReason>,
}

impl AttributeProperty {
    pub fn new(
        element: impl Into<String>,
        attribute: impl Into<String>,
        kind: ValueKind,
        value: Value,
    ) -> Self {
        Self {
            element: element.into(),
            attribute: attribute.into(),
            kind,
            value,
            default_value: kind.sentinel(),
            read_only: false,
            editor_hints: None,
            events: Vec::new(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_default(&self) -> bool {
        self.value == self.default_value
    }

    /// Replace the value. Returns false (and records nothing) when the
    /// property is read-only or the value is unchanged.
    pub fn try_update(&mut self, value: Value, reason: ChangeValueReason) -> bool {
        if self.read_only || value == self.value {
            return false;
        }
        self.value = value;
        self.events.push(reason);
        true
    }

    /// Parse text input by this property's kind and update. A parse
    /// failure rejects the edit and keeps the prior value.
    pub fn try_update_from_text(&mut self, text: &str) -> Result<bool, ValueFormatError> {
        let parsed = self.kind.parse(text)?;
        Ok(self.try_update(parsed, ChangeValueReason::InnerValueChanged))
    }

    /// Ordered components of a composite value, empty for scalars.
    pub fn components(&self) -> Vec<(&'static str, Value)> {
        self.value.decompose().unwrap_or_default()
    }

    /// Rebuild the composite around one edited component. Exactly one
    /// notification is recorded however many underlying fields the
    /// component drives (the `Degrees` child of a rotation rewrites all
    /// four quaternion scalars in this single step).
    pub fn set_component(
        &mut self,
        component: &str,
        child: Value,
    ) -> Result<bool, ValueFormatError> {
        let rebuilt = self.value.recompose(component, child)?;
        Ok(self.try_update(rebuilt, ChangeValueReason::ComponentValueChanged))
    }

    /// Take the accumulated change notifications.
    pub fn drain_events(&mut self) -> Vec<ChangeValueReason> {
        std::mem::take(&mut self.events)
    }
}

/// Attributes the schema refuses to write in place; presented read-only.
fn is_reserved(kind: ElementKind, attribute: &str) -> bool {
    matches!(
        (kind, attribute),
        (ElementKind::PropertyDefinitionBase, "name")
            | (ElementKind::PropertyDefinitionBase, "type")
            | (ElementKind::PropertyInitialiser, "name")
    )
}

/// Builds sorted property categories for display.
pub struct AttributeInspector;

impl AttributeInspector {
    /// Every visible attribute of `element`, grouped by category and
    /// sorted by name. The element's kind name is its category.
    ///
    /// A `SectionSpecification.look` value is shown de-namespaced when a
    /// session is supplied, since qualified names are an internal detail.
    pub fn build_categories(
        store: &ElementStore,
        element_id: &str,
        property_map: &PropertyMap,
        session: Option<&EditingSession>,
    ) -> Result<BTreeMap<String, BTreeMap<String, AttributeProperty>>, EditorError> {
        let element = store
            .get(element_id)
            .ok_or_else(|| EditorError::UnknownElement(element_id.to_string()))?;
        let kind = element.kind();

        let mut attributes = BTreeMap::new();
        for attribute in attribute_names(kind) {
            if property_map.is_hidden(kind, attribute) {
                continue;
            }

            let (mut value, declared) = get_attribute(element, attribute)?;
            let effective = property_map.effective_kind(kind, attribute, declared);
            if effective != declared {
                // Re-type through text; text that does not fit the override
                // becomes the override's sentinel so the value always
                // matches the advertised kind
                value = effective
                    .parse(&value.to_string())
                    .unwrap_or_else(|_| effective.sentinel());
            }

            if let (ElementKind::SectionSpecification, "look", Some(session)) =
                (kind, *attribute, session)
            {
                if let Some(original) = value.as_text().and_then(|t| session.original_name(t)) {
                    value = Value::Text(original.to_string());
                }
            }

            let mut property =
                AttributeProperty::new(element_id, *attribute, effective, value);
            property.read_only = is_reserved(kind, attribute);
            property.editor_hints = property_map
                .get(kind, attribute)
                .and_then(|entry| entry.editor_hints.clone());

            attributes.insert(attribute.to_string(), property);
        }

        let mut categories = BTreeMap::new();
        categories.insert(kind.as_str().to_string(), attributes);
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookedit_schema::{FalagardElement, SectionSpecification, WidgetComponent};
    use lookedit_values::Quaternion;

    #[test]
    fn test_try_update_reports_no_op() {
        let mut property = AttributeProperty::new(
            "widget-1",
            "autoWindow",
            ValueKind::Boolean,
            Value::Boolean(true),
        );
        assert!(!property.try_update(Value::Boolean(true), ChangeValueReason::Unknown));
        assert!(property.try_update(Value::Boolean(false), ChangeValueReason::InnerValueChanged));
        assert_eq!(
            property.drain_events(),
            vec![ChangeValueReason::InnerValueChanged]
        );
    }

    #[test]
    fn test_read_only_rejects_updates() {
        let mut property = AttributeProperty::new(
            "def-1",
            "name",
            ValueKind::Text,
            Value::Text("NormalTextColour".into()),
        );
        property.read_only = true;
        assert!(!property.try_update(Value::Text("Other".into()), ChangeValueReason::Unknown));
        assert_eq!(property.value(), &Value::Text("NormalTextColour".into()));
    }

    #[test]
    fn test_bad_text_keeps_prior_value() {
        let mut property = AttributeProperty::new(
            "area-1",
            "Area",
            ValueKind::Dim,
            ValueKind::Dim.sentinel(),
        );
        let before = property.value().clone();
        assert!(property.try_update_from_text("{0.5,").is_err());
        assert_eq!(property.value(), &before);
        assert!(property.drain_events().is_empty());
    }

    #[test]
    fn test_degrees_edit_is_one_notification() {
        let mut property = AttributeProperty::new(
            "widget-1",
            "Rotation",
            ValueKind::Rotation,
            Value::Rotation(Quaternion::default()),
        );

        let changed = property
            .set_component("Degrees", ValueKind::Euler.parse("x:0 y:90 z:0").unwrap())
            .unwrap();
        assert!(changed);
        assert_eq!(
            property.drain_events(),
            vec![ChangeValueReason::ComponentValueChanged]
        );

        // All four scalars moved in that single step
        match property.value() {
            Value::Rotation(q) => assert!((q.w - (0.5f32).sqrt()).abs() < 1e-3),
            other => panic!("expected rotation, got {other:?}"),
        }
    }

    #[test]
    fn test_categories_sorted_and_reserved_flagged() {
        let mut store = ElementStore::new();
        store.insert(
            "widget-1",
            FalagardElement::WidgetComponent(WidgetComponent::default()),
        );
        let map = PropertyMap::new();

        let categories =
            AttributeInspector::build_categories(&store, "widget-1", &map, None).unwrap();
        let attributes = categories.get("WidgetComponent").unwrap();
        assert_eq!(attributes.len(), 7);
        assert!(!attributes["autoWindow"].read_only);

        let mut def_store = ElementStore::new();
        def_store.insert(
            "def-1",
            FalagardElement::PropertyDefinitionBase(Default::default()),
        );
        let categories =
            AttributeInspector::build_categories(&def_store, "def-1", &map, None).unwrap();
        let attributes = categories.get("PropertyDefinitionBase").unwrap();
        assert!(attributes["name"].read_only);
        assert!(attributes["type"].read_only);
        assert!(!attributes["help"].read_only);
    }

    #[test]
    fn test_hidden_attributes_are_skipped() {
        let mut store = ElementStore::new();
        store.insert(
            "widget-1",
            FalagardElement::WidgetComponent(WidgetComponent::default()),
        );
        let mut map = PropertyMap::new();
        map.insert(
            ElementKind::WidgetComponent,
            "renderer",
            lookedit_schema::OverrideEntry::hidden(),
        );

        let categories =
            AttributeInspector::build_categories(&store, "widget-1", &map, None).unwrap();
        assert!(!categories["WidgetComponent"].contains_key("renderer"));
    }

    #[test]
    fn test_override_kind_always_matches_the_value() {
        use lookedit_schema::{OverrideEntry, PropertyInitialiser};
        use lookedit_values::Colour;

        let mut store = ElementStore::new();
        store.insert(
            "init-1",
            FalagardElement::PropertyInitialiser(PropertyInitialiser {
                name: "NormalTextColour".into(),
                value: "FFFF0000".into(),
                data_type: None,
            }),
        );
        store.insert(
            "init-2",
            FalagardElement::PropertyInitialiser(PropertyInitialiser {
                name: "Tooltip".into(),
                value: "not a colour".into(),
                data_type: None,
            }),
        );
        let mut map = PropertyMap::new();
        map.insert(
            ElementKind::PropertyInitialiser,
            "value",
            OverrideEntry::retyped(ValueKind::Colour),
        );

        // Text that fits the override is re-typed through it
        let categories =
            AttributeInspector::build_categories(&store, "init-1", &map, None).unwrap();
        let property = &categories["PropertyInitialiser"]["value"];
        assert_eq!(property.kind, ValueKind::Colour);
        assert_eq!(
            property.value(),
            &Value::Colour(Colour::argb(0xFF, 0xFF, 0, 0))
        );

        // Text that does not fit becomes the override's sentinel rather
        // than a value of a different kind
        let categories =
            AttributeInspector::build_categories(&store, "init-2", &map, None).unwrap();
        let property = &categories["PropertyInitialiser"]["value"];
        assert_eq!(property.kind, ValueKind::Colour);
        assert_eq!(property.value().kind(), property.kind);
        assert_eq!(property.value(), &ValueKind::Colour.sentinel());
    }

    #[test]
    fn test_section_look_is_shown_unqualified() {
        let session = EditingSession::new();
        let mut store = ElementStore::new();
        store.insert(
            "section-1",
            FalagardElement::SectionSpecification(SectionSpecification {
                section: "Frame".into(),
                look: session.qualified_name("Vanilla/Button"),
                ..Default::default()
            }),
        );
        let map = PropertyMap::new();

        let categories =
            AttributeInspector::build_categories(&store, "section-1", &map, Some(&session))
                .unwrap();
        let look = &categories["SectionSpecification"]["look"];
        assert_eq!(look.value(), &Value::Text("Vanilla/Button".into()));
    }
}
