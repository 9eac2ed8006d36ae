//! # Typed Value Codec
//!
//! The [`Value`] tagged union covers every attribute type a Falagard element
//! can carry, paired with [`ValueKind`] as the parse/dispatch key.
//!
//! Composite kinds decompose into named children for per-component editing;
//! [`Value::recompose`] always rebuilds the full composite, so a half-edited
//! value can never escape to the element it belongs to.

use crate::colour::{Colour, ColourRect};
use crate::dim::{UDim, URect, USize, UVector2};
use crate::enums::*;
use crate::range::NumericRange;
use crate::rotation::{Quaternion, XyzRotation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A font referenced by name; the empty name is the no-value sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FontRef {
    pub name: String,
}

/// An image referenced by name; the empty name is the no-value sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageRef {
    pub name: String,
}

impl FontRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }
}

impl ImageRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }
}

/// Error produced by textual edits that do not parse as their target kind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueFormatError {
    #[error("malformed {kind} value: {text:?}")]
    Malformed { kind: ValueKind, text: String },

    #[error("{kind} has no component named {component:?}")]
    UnknownComponent {
        kind: ValueKind,
        component: String,
    },

    #[error("component {component:?} of {kind} expects a {expected} value")]
    ComponentMismatch {
        kind: ValueKind,
        component: String,
        expected: ValueKind,
    },

    #[error("{kind} is not a composite value")]
    NotComposite { kind: ValueKind },
}

/// Discriminant for [`Value`]; the closed set of editable attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Integer,
    Float,
    Boolean,
    Text,
    Dim,
    Size,
    Vector2,
    Rect,
    Colour,
    ColourRect,
    Rotation,
    Euler,
    HorzAlignment,
    VertAlignment,
    HorzFormatting,
    VertFormatting,
    HorzTextFormatting,
    VertTextFormatting,
    SortMode,
    UpdateMode,
    AspectMode,
    Font,
    Image,
}

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f32),
    Boolean(bool),
    Text(String),
    Dim(UDim),
    Size(USize),
    Vector2(UVector2),
    Rect(URect),
    Colour(Colour),
    ColourRect(ColourRect),
    Rotation(Quaternion),
    Euler(XyzRotation),
    HorzAlignment(HorizontalAlignment),
    VertAlignment(VerticalAlignment),
    HorzFormatting(HorizontalFormatting),
    VertFormatting(VerticalFormatting),
    HorzTextFormatting(HorizontalTextFormatting),
    VertTextFormatting(VerticalTextFormatting),
    SortMode(SortMode),
    UpdateMode(WindowUpdateMode),
    AspectMode(AspectMode),
    Font(FontRef),
    Image(ImageRef),
}

impl ValueKind {
    /// Parse `text` as a value of this kind.
    pub fn parse(&self, text: &str) -> Result<Value, ValueFormatError> {
        let malformed = || ValueFormatError::Malformed {
            kind: *self,
            text: text.to_string(),
        };

        match self {
            ValueKind::Integer => text
                .trim()
                .parse()
                .map(Value::Integer)
                .map_err(|_| malformed()),
            ValueKind::Float => text
                .trim()
                .parse()
                .map(Value::Float)
                .map_err(|_| malformed()),
            // Strict: only the two boolean tokens parse. The former generic
            // constructor treated any non-empty string as true.
            ValueKind::Boolean => match text.trim() {
                t if t.eq_ignore_ascii_case("true") => Ok(Value::Boolean(true)),
                t if t.eq_ignore_ascii_case("false") => Ok(Value::Boolean(false)),
                _ => Err(malformed()),
            },
            ValueKind::Text => Ok(Value::Text(text.to_string())),
            ValueKind::Dim => UDim::try_parse(text).map(Value::Dim).ok_or_else(malformed),
            ValueKind::Size => USize::try_parse(text).map(Value::Size).ok_or_else(malformed),
            ValueKind::Vector2 => UVector2::try_parse(text)
                .map(Value::Vector2)
                .ok_or_else(malformed),
            ValueKind::Rect => URect::try_parse(text).map(Value::Rect).ok_or_else(malformed),
            ValueKind::Colour => Colour::try_parse(text)
                .map(Value::Colour)
                .ok_or_else(malformed),
            ValueKind::ColourRect => ColourRect::try_parse(text)
                .map(Value::ColourRect)
                .ok_or_else(malformed),
            ValueKind::Rotation => Quaternion::try_parse(text)
                .map(Value::Rotation)
                .ok_or_else(malformed),
            ValueKind::Euler => XyzRotation::try_parse(text)
                .map(Value::Euler)
                .ok_or_else(malformed),
            ValueKind::HorzAlignment => HorizontalAlignment::try_parse(text)
                .map(Value::HorzAlignment)
                .ok_or_else(malformed),
            ValueKind::VertAlignment => VerticalAlignment::try_parse(text)
                .map(Value::VertAlignment)
                .ok_or_else(malformed),
            ValueKind::HorzFormatting => HorizontalFormatting::try_parse(text)
                .map(Value::HorzFormatting)
                .ok_or_else(malformed),
            ValueKind::VertFormatting => VerticalFormatting::try_parse(text)
                .map(Value::VertFormatting)
                .ok_or_else(malformed),
            ValueKind::HorzTextFormatting => HorizontalTextFormatting::try_parse(text)
                .map(Value::HorzTextFormatting)
                .ok_or_else(malformed),
            ValueKind::VertTextFormatting => VerticalTextFormatting::try_parse(text)
                .map(Value::VertTextFormatting)
                .ok_or_else(malformed),
            ValueKind::SortMode => SortMode::try_parse(text)
                .map(Value::SortMode)
                .ok_or_else(malformed),
            ValueKind::UpdateMode => WindowUpdateMode::try_parse(text)
                .map(Value::UpdateMode)
                .ok_or_else(malformed),
            ValueKind::AspectMode => AspectMode::try_parse(text)
                .map(Value::AspectMode)
                .ok_or_else(malformed),
            ValueKind::Font => Ok(Value::Font(FontRef::named(text.trim()))),
            ValueKind::Image => Ok(Value::Image(ImageRef::named(text.trim()))),
        }
    }

    /// The default/no-value sentinel for this kind.
    ///
    /// Downstream editors always receive a type-compatible value, never a
    /// null; references use the empty name as "unset".
    pub fn sentinel(&self) -> Value {
        match self {
            ValueKind::Integer => Value::Integer(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Boolean => Value::Boolean(false),
            ValueKind::Text => Value::Text(String::new()),
            ValueKind::Dim => Value::Dim(UDim::default()),
            ValueKind::Size => Value::Size(USize::default()),
            ValueKind::Vector2 => Value::Vector2(UVector2::default()),
            ValueKind::Rect => Value::Rect(URect::default()),
            ValueKind::Colour => Value::Colour(Colour::default()),
            ValueKind::ColourRect => Value::ColourRect(ColourRect::default()),
            ValueKind::Rotation => Value::Rotation(Quaternion::default()),
            ValueKind::Euler => Value::Euler(XyzRotation::default()),
            ValueKind::HorzAlignment => Value::HorzAlignment(Default::default()),
            ValueKind::VertAlignment => Value::VertAlignment(Default::default()),
            ValueKind::HorzFormatting => Value::HorzFormatting(Default::default()),
            ValueKind::VertFormatting => Value::VertFormatting(Default::default()),
            ValueKind::HorzTextFormatting => Value::HorzTextFormatting(Default::default()),
            ValueKind::VertTextFormatting => Value::VertTextFormatting(Default::default()),
            ValueKind::SortMode => Value::SortMode(Default::default()),
            ValueKind::UpdateMode => Value::UpdateMode(Default::default()),
            ValueKind::AspectMode => Value::AspectMode(Default::default()),
            ValueKind::Font => Value::Font(FontRef::none()),
            ValueKind::Image => Value::Image(ImageRef::none()),
        }
    }

    /// Map an engine-declared data type name to a kind, falling back to
    /// [`ValueKind::Text`] for anything unrecognised.
    pub fn from_data_type(name: &str) -> ValueKind {
        match name {
            "int" | "uint" | "ulong" => ValueKind::Integer,
            "float" | "double" => ValueKind::Float,
            "bool" => ValueKind::Boolean,
            "UDim" => ValueKind::Dim,
            "USize" => ValueKind::Size,
            "UVector2" => ValueKind::Vector2,
            "URect" => ValueKind::Rect,
            "Colour" | "colour" => ValueKind::Colour,
            "ColourRect" => ValueKind::ColourRect,
            "Quaternion" => ValueKind::Rotation,
            "HorizontalAlignment" => ValueKind::HorzAlignment,
            "VerticalAlignment" => ValueKind::VertAlignment,
            "HorizontalFormatting" => ValueKind::HorzFormatting,
            "VerticalFormatting" => ValueKind::VertFormatting,
            "HorizontalTextFormatting" => ValueKind::HorzTextFormatting,
            "VerticalTextFormatting" => ValueKind::VertTextFormatting,
            "SortMode" => ValueKind::SortMode,
            "WindowUpdateMode" => ValueKind::UpdateMode,
            "AspectMode" => ValueKind::AspectMode,
            "Font" => ValueKind::Font,
            "Image" => ValueKind::Image,
            _ => ValueKind::Text,
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Text(_) => ValueKind::Text,
            Value::Dim(_) => ValueKind::Dim,
            Value::Size(_) => ValueKind::Size,
            Value::Vector2(_) => ValueKind::Vector2,
            Value::Rect(_) => ValueKind::Rect,
            Value::Colour(_) => ValueKind::Colour,
            Value::ColourRect(_) => ValueKind::ColourRect,
            Value::Rotation(_) => ValueKind::Rotation,
            Value::Euler(_) => ValueKind::Euler,
            Value::HorzAlignment(_) => ValueKind::HorzAlignment,
            Value::VertAlignment(_) => ValueKind::VertAlignment,
            Value::HorzFormatting(_) => ValueKind::HorzFormatting,
            Value::VertFormatting(_) => ValueKind::VertFormatting,
            Value::HorzTextFormatting(_) => ValueKind::HorzTextFormatting,
            Value::VertTextFormatting(_) => ValueKind::VertTextFormatting,
            Value::SortMode(_) => ValueKind::SortMode,
            Value::UpdateMode(_) => ValueKind::UpdateMode,
            Value::AspectMode(_) => ValueKind::AspectMode,
            Value::Font(_) => ValueKind::Font,
            Value::Image(_) => ValueKind::Image,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Ordered named children for composite kinds, `None` for scalars.
    pub fn decompose(&self) -> Option<Vec<(&'static str, Value)>> {
        match self {
            Value::Dim(dim) => Some(vec![
                ("Scale", Value::Float(dim.scale)),
                ("Offset", Value::Float(dim.offset)),
            ]),
            Value::Size(size) => Some(vec![
                ("Width", Value::Dim(size.width)),
                ("Height", Value::Dim(size.height)),
            ]),
            Value::Vector2(vec2) => Some(vec![
                ("X", Value::Dim(vec2.x)),
                ("Y", Value::Dim(vec2.y)),
            ]),
            Value::Rect(rect) => Some(vec![
                ("Left", Value::Dim(rect.left)),
                ("Top", Value::Dim(rect.top)),
                ("Right", Value::Dim(rect.right)),
                ("Bottom", Value::Dim(rect.bottom)),
            ]),
            Value::Colour(colour) => Some(vec![
                ("Alpha", Value::Integer(colour.alpha as i64)),
                ("Red", Value::Integer(colour.red as i64)),
                ("Green", Value::Integer(colour.green as i64)),
                ("Blue", Value::Integer(colour.blue as i64)),
            ]),
            Value::ColourRect(rect) => Some(vec![
                ("TopLeft", Value::Colour(rect.top_left)),
                ("TopRight", Value::Colour(rect.top_right)),
                ("BottomLeft", Value::Colour(rect.bottom_left)),
                ("BottomRight", Value::Colour(rect.bottom_right)),
            ]),
            Value::Rotation(quat) => Some(vec![
                ("W", Value::Float(quat.w)),
                ("X", Value::Float(quat.x)),
                ("Y", Value::Float(quat.y)),
                ("Z", Value::Float(quat.z)),
                ("Degrees", Value::Euler(quat.to_euler())),
            ]),
            Value::Euler(euler) => Some(vec![
                ("X", Value::Float(euler.x)),
                ("Y", Value::Float(euler.y)),
                ("Z", Value::Float(euler.z)),
            ]),
            _ => None,
        }
    }

    /// Rebuild this composite with one named child replaced.
    ///
    /// Editing the `Degrees` child of a rotation recomputes all four
    /// quaternion scalars in one step.
    pub fn recompose(&self, component: &str, child: Value) -> Result<Value, ValueFormatError> {
        let kind = self.kind();
        let unknown = || ValueFormatError::UnknownComponent {
            kind,
            component: component.to_string(),
        };
        let mismatch = |expected: ValueKind| ValueFormatError::ComponentMismatch {
            kind,
            component: component.to_string(),
            expected,
        };

        match self {
            Value::Dim(dim) => {
                let scalar = child.scalar_f32().ok_or_else(|| mismatch(ValueKind::Float))?;
                let mut dim = *dim;
                match component {
                    "Scale" => dim.scale = scalar,
                    "Offset" => dim.offset = scalar,
                    _ => return Err(unknown()),
                }
                Ok(Value::Dim(dim))
            }
            Value::Size(size) => {
                let Value::Dim(child) = child else {
                    return Err(mismatch(ValueKind::Dim));
                };
                let mut size = *size;
                match component {
                    "Width" => size.width = child,
                    "Height" => size.height = child,
                    _ => return Err(unknown()),
                }
                Ok(Value::Size(size))
            }
            Value::Vector2(vec2) => {
                let Value::Dim(child) = child else {
                    return Err(mismatch(ValueKind::Dim));
                };
                let mut vec2 = *vec2;
                match component {
                    "X" => vec2.x = child,
                    "Y" => vec2.y = child,
                    _ => return Err(unknown()),
                }
                Ok(Value::Vector2(vec2))
            }
            Value::Rect(rect) => {
                let Value::Dim(child) = child else {
                    return Err(mismatch(ValueKind::Dim));
                };
                let mut rect = *rect;
                match component {
                    "Left" => rect.left = child,
                    "Top" => rect.top = child,
                    "Right" => rect.right = child,
                    "Bottom" => rect.bottom = child,
                    _ => return Err(unknown()),
                }
                Ok(Value::Rect(rect))
            }
            Value::Colour(colour) => {
                let scalar = child
                    .scalar_f32()
                    .ok_or_else(|| mismatch(ValueKind::Integer))?;
                let channel = NumericRange::COLOUR_CHANNEL.apply(scalar).round() as u8;
                let mut colour = *colour;
                match component {
                    "Alpha" => colour.alpha = channel,
                    "Red" => colour.red = channel,
                    "Green" => colour.green = channel,
                    "Blue" => colour.blue = channel,
                    _ => return Err(unknown()),
                }
                Ok(Value::Colour(colour))
            }
            Value::ColourRect(rect) => {
                let Value::Colour(child) = child else {
                    return Err(mismatch(ValueKind::Colour));
                };
                let mut rect = *rect;
                match component {
                    "TopLeft" => rect.top_left = child,
                    "TopRight" => rect.top_right = child,
                    "BottomLeft" => rect.bottom_left = child,
                    "BottomRight" => rect.bottom_right = child,
                    _ => return Err(unknown()),
                }
                Ok(Value::ColourRect(rect))
            }
            Value::Rotation(quat) => match component {
                "Degrees" => {
                    let Value::Euler(euler) = child else {
                        return Err(mismatch(ValueKind::Euler));
                    };
                    Ok(Value::Rotation(Quaternion::from_euler(euler)))
                }
                "W" | "X" | "Y" | "Z" => {
                    let scalar = child.scalar_f32().ok_or_else(|| mismatch(ValueKind::Float))?;
                    let mut quat = *quat;
                    match component {
                        "W" => quat.w = scalar,
                        "X" => quat.x = scalar,
                        "Y" => quat.y = scalar,
                        _ => quat.z = scalar,
                    }
                    Ok(Value::Rotation(quat))
                }
                _ => Err(unknown()),
            },
            Value::Euler(euler) => {
                let scalar = child.scalar_f32().ok_or_else(|| mismatch(ValueKind::Float))?;
                let degrees = NumericRange::DEGREES.apply(scalar);
                let mut euler = *euler;
                match component {
                    "X" => euler.x = degrees,
                    "Y" => euler.y = degrees,
                    "Z" => euler.z = degrees,
                    _ => return Err(unknown()),
                }
                Ok(Value::Euler(euler))
            }
            _ => Err(ValueFormatError::NotComposite { kind }),
        }
    }

    // Spinner widgets hand back integers for whole numbers; accept both
    // scalar shapes wherever a float component is edited.
    fn scalar_f32(&self) -> Option<f32> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Integer(value) => Some(*value as f32),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Text(value) => f.write_str(value),
            Value::Dim(value) => write!(f, "{value}"),
            Value::Size(value) => write!(f, "{value}"),
            Value::Vector2(value) => write!(f, "{value}"),
            Value::Rect(value) => write!(f, "{value}"),
            Value::Colour(value) => write!(f, "{value}"),
            Value::ColourRect(value) => write!(f, "{value}"),
            Value::Rotation(value) => write!(f, "{value}"),
            Value::Euler(value) => write!(f, "{value}"),
            Value::HorzAlignment(value) => write!(f, "{value}"),
            Value::VertAlignment(value) => write!(f, "{value}"),
            Value::HorzFormatting(value) => write!(f, "{value}"),
            Value::VertFormatting(value) => write!(f, "{value}"),
            Value::HorzTextFormatting(value) => write!(f, "{value}"),
            Value::VertTextFormatting(value) => write!(f, "{value}"),
            Value::SortMode(value) => write!(f, "{value}"),
            Value::UpdateMode(value) => write!(f, "{value}"),
            Value::AspectMode(value) => write!(f, "{value}"),
            Value::Font(value) => f.write_str(&value.name),
            Value::Image(value) => f.write_str(&value.name),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "Integer",
            ValueKind::Float => "Float",
            ValueKind::Boolean => "Boolean",
            ValueKind::Text => "Text",
            ValueKind::Dim => "UDim",
            ValueKind::Size => "USize",
            ValueKind::Vector2 => "UVector2",
            ValueKind::Rect => "URect",
            ValueKind::Colour => "Colour",
            ValueKind::ColourRect => "ColourRect",
            ValueKind::Rotation => "Quaternion",
            ValueKind::Euler => "XYZRotation",
            ValueKind::HorzAlignment => "HorizontalAlignment",
            ValueKind::VertAlignment => "VerticalAlignment",
            ValueKind::HorzFormatting => "HorizontalFormatting",
            ValueKind::VertFormatting => "VerticalFormatting",
            ValueKind::HorzTextFormatting => "HorizontalTextFormatting",
            ValueKind::VertTextFormatting => "VerticalTextFormatting",
            ValueKind::SortMode => "SortMode",
            ValueKind::UpdateMode => "WindowUpdateMode",
            ValueKind::AspectMode => "AspectMode",
            ValueKind::Font => "Font",
            ValueKind::Image => "Image",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_parse_is_strict() {
        assert_eq!(
            ValueKind::Boolean.parse("false").unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            ValueKind::Boolean.parse("TRUE").unwrap(),
            Value::Boolean(true)
        );
        assert!(ValueKind::Boolean.parse("yes").is_err());
        assert!(ValueKind::Boolean.parse("1").is_err());
        assert!(ValueKind::Boolean.parse("").is_err());
    }

    #[test]
    fn test_canonical_round_trips() {
        let cases = [
            (ValueKind::Integer, "42"),
            (ValueKind::Float, "0.25"),
            (ValueKind::Boolean, "true"),
            (ValueKind::Text, "FrameColours"),
            (ValueKind::Dim, "{0.5,10}"),
            (ValueKind::Size, "{{0,32},{1,-4}}"),
            (ValueKind::Vector2, "{{0.5,0},{0,12}}"),
            (ValueKind::Rect, "{{0,0},{0,0},{1,0},{1,0}}"),
            (ValueKind::Colour, "FF12AB00"),
            (
                ValueKind::ColourRect,
                "tl:FF000000 tr:FFFF0000 bl:FF00FF00 br:FF0000FF",
            ),
            (ValueKind::Rotation, "w:1 x:0 y:0 z:0"),
            (ValueKind::Euler, "x:90 y:0 z:0"),
            (ValueKind::HorzAlignment, "RightAligned"),
            (ValueKind::VertAlignment, "BottomAligned"),
            (ValueKind::HorzFormatting, "Stretched"),
            (ValueKind::VertFormatting, "Tiled"),
            (ValueKind::HorzTextFormatting, "WordWrapCentreAligned"),
            (ValueKind::VertTextFormatting, "CentreAligned"),
            (ValueKind::SortMode, "UserSort"),
            (ValueKind::UpdateMode, "Visible"),
            (ValueKind::AspectMode, "Shrink"),
            (ValueKind::Font, "DejaVuSans-10"),
            (ValueKind::Image, "Vanilla/CloseButtonNormal"),
        ];
        for (kind, text) in cases {
            let value = kind.parse(text).unwrap();
            assert_eq!(value.to_string(), text, "format(parse({text:?}))");
            assert_eq!(kind.parse(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn test_sentinels_are_type_compatible() {
        assert_eq!(ValueKind::Image.sentinel(), Value::Image(ImageRef::none()));
        assert_eq!(ValueKind::Boolean.sentinel(), Value::Boolean(false));
        assert_eq!(
            ValueKind::Rotation.sentinel(),
            Value::Rotation(Quaternion::default())
        );
    }

    #[test]
    fn test_decompose_recompose_colour_rect() {
        let value = ValueKind::ColourRect
            .parse("tl:FF000000 tr:FF000000 bl:FF000000 br:FF000000")
            .unwrap();
        let children = value.decompose().unwrap();
        assert_eq!(children[0].0, "TopLeft");

        let red = Value::Colour(Colour::argb(0xFF, 0xFF, 0, 0));
        let updated = value.recompose("TopRight", red).unwrap();
        assert_eq!(
            updated.to_string(),
            "tl:FF000000 tr:FFFF0000 bl:FF000000 br:FF000000"
        );
    }

    #[test]
    fn test_rotation_degrees_recompose_is_whole_quaternion() {
        let value = ValueKind::Rotation.sentinel();
        let updated = value
            .recompose("Degrees", Value::Euler(XyzRotation::new(90.0, 0.0, 0.0)))
            .unwrap();

        let Value::Rotation(quat) = updated else {
            panic!("expected rotation");
        };
        assert!((quat.w - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
        assert!((quat.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
        assert_eq!(quat.y, 0.0);
        assert_eq!(quat.z, 0.0);
    }

    #[test]
    fn test_recompose_rejects_unknown_component() {
        let value = ValueKind::Dim.sentinel();
        let err = value.recompose("Depth", Value::Float(1.0)).unwrap_err();
        assert!(matches!(err, ValueFormatError::UnknownComponent { .. }));
    }

    #[test]
    fn test_recompose_rejects_mismatched_child() {
        let value = ValueKind::Size.sentinel();
        let err = value
            .recompose("Width", Value::Text("nope".into()))
            .unwrap_err();
        assert!(matches!(err, ValueFormatError::ComponentMismatch { .. }));
    }

    #[test]
    fn test_euler_component_wraps_degrees() {
        let value = Value::Euler(XyzRotation::default());
        let updated = value.recompose("X", Value::Float(450.0)).unwrap();
        assert_eq!(updated, Value::Euler(XyzRotation::new(-270.0, 0.0, 0.0)));
    }

    #[test]
    fn test_data_type_mapping_falls_back_to_text() {
        assert_eq!(ValueKind::from_data_type("USize"), ValueKind::Size);
        assert_eq!(ValueKind::from_data_type("bool"), ValueKind::Boolean);
        assert_eq!(ValueKind::from_data_type("SomethingElse"), ValueKind::Text);
    }

    #[test]
    fn test_value_serialization() {
        let value = Value::Size(USize::try_parse("{{0,32},{1,-4}}").unwrap());
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}
