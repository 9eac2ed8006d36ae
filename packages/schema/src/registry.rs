//! Attribute schema registry: ordered attribute lists and `(kind, name)`
//! keyed get/set dispatch.
//!
//! Attribute order within each list is significant — it is the display
//! order — and is part of the schema contract.

use crate::element::{ElementKind, FalagardElement, FrameImagePart};
use crate::error::SchemaError;
use lookedit_values::{Value, ValueKind};

const PROPERTY_DEFINITION_BASE_ATTRIBUTES: &[&str] = &[
    "name",
    "type",
    "initialValue",
    "layoutOnWrite",
    "redrawOnWrite",
    "fireEvent",
    "help",
];
const PROPERTY_INITIALISER_ATTRIBUTES: &[&str] = &["name", "value"];
const NAMED_AREA_ATTRIBUTES: &[&str] = &["name"];
const IMAGERY_SECTION_ATTRIBUTES: &[&str] = &["name", "Colour", "ColourProperty"];
const STATE_IMAGERY_ATTRIBUTES: &[&str] = &["name", "clipped"];
const WIDGET_COMPONENT_ATTRIBUTES: &[&str] = &[
    "nameSuffix",
    "type",
    "renderer",
    "look",
    "autoWindow",
    "VertAlignment",
    "HorzAlignment",
];
const IMAGERY_COMPONENT_ATTRIBUTES: &[&str] = &[
    "Image",
    "ImageProperty",
    "Colour",
    "ColourProperty",
    "VertFormat",
    "VertFormatProperty",
    "HorzFormat",
    "HorzFormatProperty",
];
const TEXT_COMPONENT_ATTRIBUTES: &[&str] = &[
    "Text",
    "TextProperty",
    "Font",
    "FontProperty",
    "Colour",
    "ColourProperty",
    "VertFormat",
    "VertFormatProperty",
    "HorzFormat",
    "HorzFormatProperty",
];
const FRAME_COMPONENT_ATTRIBUTES: &[&str] = &[
    "Colour",
    "ColourProperty",
    "TopLeftCorner",
    "TopRightCorner",
    "BottomLeftCorner",
    "BottomRightCorner",
    "LeftEdge",
    "RightEdge",
    "TopEdge",
    "BottomEdge",
    "Background",
];
const LAYER_SPECIFICATION_ATTRIBUTES: &[&str] = &["priority"];
const SECTION_SPECIFICATION_ATTRIBUTES: &[&str] = &[
    "section",
    "look",
    "controlProperty",
    "controlValue",
    "controlWidget",
    "Colour",
    "ColourProperty",
];
const COMPONENT_AREA_ATTRIBUTES: &[&str] = &[
    "AreaProperty",
    "NamedAreaSource <look>",
    "NamedAreaSource <name>",
];

/// The ordered attribute list for an element kind.
pub fn attribute_names(kind: ElementKind) -> &'static [&'static str] {
    match kind {
        ElementKind::PropertyDefinitionBase => PROPERTY_DEFINITION_BASE_ATTRIBUTES,
        ElementKind::PropertyInitialiser => PROPERTY_INITIALISER_ATTRIBUTES,
        ElementKind::NamedArea => NAMED_AREA_ATTRIBUTES,
        ElementKind::ImagerySection => IMAGERY_SECTION_ATTRIBUTES,
        ElementKind::StateImagery => STATE_IMAGERY_ATTRIBUTES,
        ElementKind::WidgetComponent => WIDGET_COMPONENT_ATTRIBUTES,
        ElementKind::ImageryComponent => IMAGERY_COMPONENT_ATTRIBUTES,
        ElementKind::TextComponent => TEXT_COMPONENT_ATTRIBUTES,
        ElementKind::FrameComponent => FRAME_COMPONENT_ATTRIBUTES,
        ElementKind::LayerSpecification => LAYER_SPECIFICATION_ATTRIBUTES,
        ElementKind::SectionSpecification => SECTION_SPECIFICATION_ATTRIBUTES,
        ElementKind::ComponentArea => COMPONENT_AREA_ATTRIBUTES,
    }
}

/// Extract the payload of an expected [`Value`] variant, or fail with a
/// [`SchemaError::TypeMismatch`] naming the attribute.
macro_rules! take {
    ($value:expr, $variant:ident, $kind:expr, $attr:expr) => {
        match $value {
            Value::$variant(inner) => inner,
            other => {
                return Err(SchemaError::TypeMismatch {
                    kind: $kind,
                    attribute: $attr.to_string(),
                    expected: ValueKind::$variant,
                    got: other.kind(),
                })
            }
        }
    };
}

fn unknown(kind: ElementKind, attribute: &str) -> SchemaError {
    SchemaError::UnknownAttribute {
        kind,
        attribute: attribute.to_string(),
    }
}

/// Read an attribute as a typed value plus its declared kind.
///
/// Unset image/font references come back as the typed no-value sentinel so
/// downstream editors always receive something type-compatible.
pub fn get_attribute(
    element: &FalagardElement,
    attribute: &str,
) -> Result<(Value, ValueKind), SchemaError> {
    let kind = element.kind();

    let pair = match element {
        FalagardElement::PropertyDefinitionBase(def) => match attribute {
            "name" => text(&def.name),
            "type" => text(&def.data_type),
            "initialValue" => {
                // The stored text is typed through the declared data type.
                let value_kind = ValueKind::from_data_type(&def.data_type);
                let value = value_kind
                    .parse(&def.initial_value)
                    .unwrap_or_else(|_| value_kind.sentinel());
                (value, value_kind)
            }
            "layoutOnWrite" => boolean(def.layout_on_write),
            "redrawOnWrite" => boolean(def.redraw_on_write),
            "fireEvent" => text(&def.fire_event),
            "help" => text(&def.help),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::PropertyInitialiser(init) => match attribute {
            "name" => text(&init.name),
            "value" => {
                let value_kind = init
                    .data_type
                    .as_deref()
                    .map(ValueKind::from_data_type)
                    .unwrap_or(ValueKind::Text);
                let value = value_kind
                    .parse(&init.value)
                    .unwrap_or_else(|_| value_kind.sentinel());
                (value, value_kind)
            }
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::NamedArea(area) => match attribute {
            "name" => text(&area.name),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::ImagerySection(section) => match attribute {
            "name" => text(&section.name),
            "Colour" => colours(section.colours),
            "ColourProperty" => text(&section.colour_property),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::StateImagery(state) => match attribute {
            "name" => text(&state.name),
            "clipped" => boolean(state.clipped),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::WidgetComponent(widget) => match attribute {
            "nameSuffix" => text(&widget.name_suffix),
            "type" => text(&widget.widget_type),
            "renderer" => text(&widget.renderer),
            "look" => text(&widget.look),
            "autoWindow" => boolean(widget.auto_window),
            "VertAlignment" => (
                Value::VertAlignment(widget.vert_alignment),
                ValueKind::VertAlignment,
            ),
            "HorzAlignment" => (
                Value::HorzAlignment(widget.horz_alignment),
                ValueKind::HorzAlignment,
            ),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::ImageryComponent(imagery) => match attribute {
            "Image" => (Value::Image(imagery.image.clone()), ValueKind::Image),
            "ImageProperty" => text(&imagery.image_property),
            "Colour" => colours(imagery.colours),
            "ColourProperty" => text(&imagery.colour_property),
            "VertFormat" => (
                Value::VertFormatting(imagery.vert_formatting),
                ValueKind::VertFormatting,
            ),
            "VertFormatProperty" => text(&imagery.vert_format_property),
            "HorzFormat" => (
                Value::HorzFormatting(imagery.horz_formatting),
                ValueKind::HorzFormatting,
            ),
            "HorzFormatProperty" => text(&imagery.horz_format_property),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::TextComponent(component) => match attribute {
            "Text" => text(&component.text),
            "TextProperty" => text(&component.text_property),
            "Font" => (Value::Font(component.font.clone()), ValueKind::Font),
            "FontProperty" => text(&component.font_property),
            "Colour" => colours(component.colours),
            "ColourProperty" => text(&component.colour_property),
            "VertFormat" => (
                Value::VertTextFormatting(component.vert_formatting),
                ValueKind::VertTextFormatting,
            ),
            "VertFormatProperty" => text(&component.vert_format_property),
            "HorzFormat" => (
                Value::HorzTextFormatting(component.horz_formatting),
                ValueKind::HorzTextFormatting,
            ),
            "HorzFormatProperty" => text(&component.horz_format_property),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::FrameComponent(frame) => match attribute {
            "Colour" => colours(frame.colours),
            "ColourProperty" => text(&frame.colour_property),
            _ => match FrameImagePart::from_attribute(attribute) {
                Some(part) => (Value::Image(frame.image(part).clone()), ValueKind::Image),
                None => return Err(unknown(kind, attribute)),
            },
        },

        FalagardElement::LayerSpecification(layer) => match attribute {
            "priority" => (Value::Integer(layer.priority), ValueKind::Integer),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::SectionSpecification(spec) => match attribute {
            "section" => text(&spec.section),
            "look" => text(&spec.look),
            "controlProperty" => text(&spec.control_property),
            "controlValue" => text(&spec.control_value),
            "controlWidget" => text(&spec.control_widget),
            "Colour" => colours(spec.colours),
            "ColourProperty" => text(&spec.colour_property),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::ComponentArea(area) => match attribute {
            "AreaProperty" => optional_text(area.area_property.as_deref()),
            "NamedAreaSource <look>" => optional_text(area.named_area_source_look.as_deref()),
            "NamedAreaSource <name>" => optional_text(area.named_area_source_name.as_deref()),
            _ => return Err(unknown(kind, attribute)),
        },
    };

    Ok(pair)
}

/// Write an attribute from a typed value.
///
/// Identity attributes (`name`/`type` of property definitions, the target
/// `name` of an initialiser) fail with [`SchemaError::UnsupportedMutation`]:
/// changing them means recreating the element.
pub fn set_attribute(
    element: &mut FalagardElement,
    attribute: &str,
    value: Value,
) -> Result<(), SchemaError> {
    let kind = element.kind();
    let unsupported = || SchemaError::UnsupportedMutation {
        kind,
        attribute: attribute.to_string(),
    };

    match element {
        FalagardElement::PropertyDefinitionBase(def) => match attribute {
            "name" | "type" => return Err(unsupported()),
            // Stored as text, typed through the declared data type on read
            "initialValue" => def.initial_value = value.to_string(),
            "layoutOnWrite" => def.layout_on_write = take!(value, Boolean, kind, attribute),
            "redrawOnWrite" => def.redraw_on_write = take!(value, Boolean, kind, attribute),
            "fireEvent" => def.fire_event = take!(value, Text, kind, attribute),
            "help" => def.help = take!(value, Text, kind, attribute),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::PropertyInitialiser(init) => match attribute {
            "name" => return Err(unsupported()),
            "value" => init.value = value.to_string(),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::NamedArea(area) => match attribute {
            "name" => area.name = take!(value, Text, kind, attribute),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::ImagerySection(section) => match attribute {
            "name" => section.name = take!(value, Text, kind, attribute),
            "Colour" => section.colours = take!(value, ColourRect, kind, attribute),
            "ColourProperty" => section.colour_property = take!(value, Text, kind, attribute),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::StateImagery(state) => match attribute {
            "name" => state.name = take!(value, Text, kind, attribute),
            "clipped" => state.clipped = take!(value, Boolean, kind, attribute),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::WidgetComponent(widget) => match attribute {
            "nameSuffix" => widget.name_suffix = take!(value, Text, kind, attribute),
            "type" => widget.widget_type = take!(value, Text, kind, attribute),
            "renderer" => widget.renderer = take!(value, Text, kind, attribute),
            "look" => widget.look = take!(value, Text, kind, attribute),
            "autoWindow" => widget.auto_window = take!(value, Boolean, kind, attribute),
            "VertAlignment" => widget.vert_alignment = take!(value, VertAlignment, kind, attribute),
            "HorzAlignment" => widget.horz_alignment = take!(value, HorzAlignment, kind, attribute),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::ImageryComponent(imagery) => match attribute {
            "Image" => imagery.image = take!(value, Image, kind, attribute),
            "ImageProperty" => imagery.image_property = take!(value, Text, kind, attribute),
            "Colour" => imagery.colours = take!(value, ColourRect, kind, attribute),
            "ColourProperty" => imagery.colour_property = take!(value, Text, kind, attribute),
            "VertFormat" => imagery.vert_formatting = take!(value, VertFormatting, kind, attribute),
            "VertFormatProperty" => {
                imagery.vert_format_property = take!(value, Text, kind, attribute)
            }
            "HorzFormat" => imagery.horz_formatting = take!(value, HorzFormatting, kind, attribute),
            "HorzFormatProperty" => {
                imagery.horz_format_property = take!(value, Text, kind, attribute)
            }
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::TextComponent(component) => match attribute {
            "Text" => component.text = take!(value, Text, kind, attribute),
            "TextProperty" => component.text_property = take!(value, Text, kind, attribute),
            "Font" => component.font = take!(value, Font, kind, attribute),
            "FontProperty" => component.font_property = take!(value, Text, kind, attribute),
            "Colour" => component.colours = take!(value, ColourRect, kind, attribute),
            "ColourProperty" => component.colour_property = take!(value, Text, kind, attribute),
            "VertFormat" => {
                component.vert_formatting = take!(value, VertTextFormatting, kind, attribute)
            }
            "VertFormatProperty" => {
                component.vert_format_property = take!(value, Text, kind, attribute)
            }
            "HorzFormat" => {
                component.horz_formatting = take!(value, HorzTextFormatting, kind, attribute)
            }
            "HorzFormatProperty" => {
                component.horz_format_property = take!(value, Text, kind, attribute)
            }
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::FrameComponent(frame) => match attribute {
            "Colour" => frame.colours = take!(value, ColourRect, kind, attribute),
            "ColourProperty" => frame.colour_property = take!(value, Text, kind, attribute),
            _ => match FrameImagePart::from_attribute(attribute) {
                Some(part) => frame.set_image(part, take!(value, Image, kind, attribute)),
                None => return Err(unknown(kind, attribute)),
            },
        },

        FalagardElement::LayerSpecification(layer) => match attribute {
            "priority" => layer.priority = take!(value, Integer, kind, attribute),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::SectionSpecification(spec) => match attribute {
            "section" => spec.section = take!(value, Text, kind, attribute),
            "look" => spec.look = take!(value, Text, kind, attribute),
            "controlProperty" => spec.control_property = take!(value, Text, kind, attribute),
            "controlValue" => spec.control_value = take!(value, Text, kind, attribute),
            "controlWidget" => spec.control_widget = take!(value, Text, kind, attribute),
            "Colour" => spec.colours = take!(value, ColourRect, kind, attribute),
            "ColourProperty" => spec.colour_property = take!(value, Text, kind, attribute),
            _ => return Err(unknown(kind, attribute)),
        },

        FalagardElement::ComponentArea(area) => match attribute {
            "AreaProperty" => {
                area.area_property = Some(take!(value, Text, kind, attribute));
            }
            "NamedAreaSource <look>" => {
                area.named_area_source_look = Some(take!(value, Text, kind, attribute));
            }
            "NamedAreaSource <name>" => {
                area.named_area_source_name = Some(take!(value, Text, kind, attribute));
            }
            _ => return Err(unknown(kind, attribute)),
        },
    }

    Ok(())
}

fn text(value: &str) -> (Value, ValueKind) {
    (Value::Text(value.to_string()), ValueKind::Text)
}

fn optional_text(value: Option<&str>) -> (Value, ValueKind) {
    match value {
        Some(text) => (Value::Text(text.to_string()), ValueKind::Text),
        None => (ValueKind::Text.sentinel(), ValueKind::Text),
    }
}

fn boolean(value: bool) -> (Value, ValueKind) {
    (Value::Boolean(value), ValueKind::Boolean)
}

fn colours(value: lookedit_values::ColourRect) -> (Value, ValueKind) {
    (Value::ColourRect(value), ValueKind::ColourRect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::*;
    use lookedit_values::{ColourRect, FontRef, ImageRef, VerticalAlignment};

    #[test]
    fn test_attribute_order_is_stable() {
        assert_eq!(
            attribute_names(ElementKind::PropertyDefinitionBase),
            &[
                "name",
                "type",
                "initialValue",
                "layoutOnWrite",
                "redrawOnWrite",
                "fireEvent",
                "help"
            ]
        );
        assert_eq!(attribute_names(ElementKind::FrameComponent).len(), 11);
        assert_eq!(
            attribute_names(ElementKind::FrameComponent)[2],
            "TopLeftCorner"
        );
    }

    #[test]
    fn test_every_declared_attribute_is_readable() {
        let elements = [
            FalagardElement::PropertyDefinitionBase(Default::default()),
            FalagardElement::PropertyInitialiser(Default::default()),
            FalagardElement::NamedArea(Default::default()),
            FalagardElement::ImagerySection(Default::default()),
            FalagardElement::StateImagery(Default::default()),
            FalagardElement::WidgetComponent(Default::default()),
            FalagardElement::ImageryComponent(Default::default()),
            FalagardElement::TextComponent(Default::default()),
            FalagardElement::FrameComponent(Default::default()),
            FalagardElement::LayerSpecification(Default::default()),
            FalagardElement::SectionSpecification(Default::default()),
            FalagardElement::ComponentArea(Default::default()),
        ];

        for element in &elements {
            for attribute in attribute_names(element.kind()) {
                let (value, declared) = get_attribute(element, attribute).unwrap();
                assert_eq!(
                    value.kind(),
                    declared,
                    "{}.{attribute} sentinel must match its declared kind",
                    element.kind()
                );
            }
        }
    }

    #[test]
    fn test_same_attribute_name_dispatches_per_kind() {
        // "Colour" is a ColourRect on several kinds but reads different fields
        let mut section = ImagerySection::default();
        section.colours = ColourRect::try_parse("FF112233").unwrap();
        let element = FalagardElement::ImagerySection(section);
        let (value, _) = get_attribute(&element, "Colour").unwrap();
        assert_eq!(value.to_string(), "tl:FF112233 tr:FF112233 bl:FF112233 br:FF112233");

        let frame = FalagardElement::FrameComponent(Default::default());
        let (value, kind) = get_attribute(&frame, "Colour").unwrap();
        assert_eq!(kind, ValueKind::ColourRect);
        assert_eq!(value, ValueKind::ColourRect.sentinel());
    }

    #[test]
    fn test_unset_image_reads_as_typed_sentinel() {
        let frame = FalagardElement::FrameComponent(Default::default());
        let (value, declared) = get_attribute(&frame, "TopLeftCorner").unwrap();
        assert_eq!(declared, ValueKind::Image);
        assert_eq!(value, Value::Image(ImageRef::none()));
    }

    #[test]
    fn test_set_and_read_back_frame_image() {
        let mut frame = FalagardElement::FrameComponent(Default::default());
        set_attribute(
            &mut frame,
            "TopLeftCorner",
            Value::Image(ImageRef::named("SkinImage1")),
        )
        .unwrap();

        let (value, _) = get_attribute(&frame, "TopLeftCorner").unwrap();
        assert_eq!(value, Value::Image(ImageRef::named("SkinImage1")));
    }

    #[test]
    fn test_rename_and_type_change_are_reserved() {
        let mut def = FalagardElement::PropertyDefinitionBase(Default::default());
        let err = set_attribute(&mut def, "name", Value::Text("NewName".into())).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedMutation { .. }));
        let err = set_attribute(&mut def, "type", Value::Text("float".into())).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedMutation { .. }));

        let mut init = FalagardElement::PropertyInitialiser(Default::default());
        let err = set_attribute(&mut init, "name", Value::Text("Other".into())).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedMutation { .. }));
    }

    #[test]
    fn test_type_mismatch_is_rejected_without_state_change() {
        let mut widget = FalagardElement::WidgetComponent(Default::default());
        let err = set_attribute(&mut widget, "autoWindow", Value::Text("yes".into())).unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { .. }));

        let (value, _) = get_attribute(&widget, "autoWindow").unwrap();
        assert_eq!(value, Value::Boolean(true));
    }

    #[test]
    fn test_unknown_attribute_is_contract_violation() {
        let area = FalagardElement::NamedArea(Default::default());
        let err = get_attribute(&area, "Colour").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownAttribute { .. }));
    }

    #[test]
    fn test_initial_value_is_typed_by_declared_data_type() {
        let def = PropertyDefinitionBase {
            name: "NormalTextColour".into(),
            data_type: "ColourRect".into(),
            initial_value: "FFFF0000".into(),
            ..Default::default()
        };
        let element = FalagardElement::PropertyDefinitionBase(def);

        let (value, declared) = get_attribute(&element, "initialValue").unwrap();
        assert_eq!(declared, ValueKind::ColourRect);
        assert!(matches!(value, Value::ColourRect(_)));
    }

    #[test]
    fn test_initialiser_value_falls_back_to_text_without_hint() {
        let init = PropertyInitialiser {
            name: "MouseCursorImage".into(),
            value: "Vanilla/Cursor".into(),
            data_type: None,
        };
        let element = FalagardElement::PropertyInitialiser(init);

        let (value, declared) = get_attribute(&element, "value").unwrap();
        assert_eq!(declared, ValueKind::Text);
        assert_eq!(value.as_text(), Some("Vanilla/Cursor"));
    }

    #[test]
    fn test_alignment_set_round_trip() {
        let mut widget = FalagardElement::WidgetComponent(Default::default());
        set_attribute(
            &mut widget,
            "VertAlignment",
            Value::VertAlignment(VerticalAlignment::Bottom),
        )
        .unwrap();
        let (value, _) = get_attribute(&widget, "VertAlignment").unwrap();
        assert_eq!(value.to_string(), "BottomAligned");
    }

    #[test]
    fn test_text_component_font_sentinel() {
        let component = FalagardElement::TextComponent(Default::default());
        let (value, declared) = get_attribute(&component, "Font").unwrap();
        assert_eq!(declared, ValueKind::Font);
        assert_eq!(value, Value::Font(FontRef::none()));
    }
}
