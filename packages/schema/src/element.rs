//! The closed set of Falagard element kinds and their typed fields.
//!
//! Modelled as a sum type rather than a class hierarchy so registry
//! dispatch can match exhaustively over kinds.

use crate::error::SchemaError;
use lookedit_values::{
    ColourRect, FontRef, HorizontalAlignment, HorizontalFormatting, HorizontalTextFormatting,
    ImageRef, VerticalAlignment, VerticalFormatting, VerticalTextFormatting,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for [`FalagardElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementKind {
    PropertyDefinitionBase,
    PropertyInitialiser,
    NamedArea,
    ImagerySection,
    StateImagery,
    WidgetComponent,
    ImageryComponent,
    TextComponent,
    FrameComponent,
    LayerSpecification,
    SectionSpecification,
    ComponentArea,
}

impl ElementKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ElementKind::PropertyDefinitionBase => "PropertyDefinitionBase",
            ElementKind::PropertyInitialiser => "PropertyInitialiser",
            ElementKind::NamedArea => "NamedArea",
            ElementKind::ImagerySection => "ImagerySection",
            ElementKind::StateImagery => "StateImagery",
            ElementKind::WidgetComponent => "WidgetComponent",
            ElementKind::ImageryComponent => "ImageryComponent",
            ElementKind::TextComponent => "TextComponent",
            ElementKind::FrameComponent => "FrameComponent",
            ElementKind::LayerSpecification => "LayerSpecification",
            ElementKind::SectionSpecification => "SectionSpecification",
            ElementKind::ComponentArea => "ComponentArea",
        }
    }

    /// Resolve a kind name, e.g. from property-map configuration.
    pub fn from_name(name: &str) -> Result<Self, SchemaError> {
        match name {
            "PropertyDefinitionBase" => Ok(ElementKind::PropertyDefinitionBase),
            "PropertyInitialiser" => Ok(ElementKind::PropertyInitialiser),
            "NamedArea" => Ok(ElementKind::NamedArea),
            "ImagerySection" => Ok(ElementKind::ImagerySection),
            "StateImagery" => Ok(ElementKind::StateImagery),
            "WidgetComponent" => Ok(ElementKind::WidgetComponent),
            "ImageryComponent" => Ok(ElementKind::ImageryComponent),
            "TextComponent" => Ok(ElementKind::TextComponent),
            "FrameComponent" => Ok(ElementKind::FrameComponent),
            "LayerSpecification" => Ok(ElementKind::LayerSpecification),
            "SectionSpecification" => Ok(ElementKind::SectionSpecification),
            "ComponentArea" => Ok(ElementKind::ComponentArea),
            other => Err(SchemaError::UnknownElementKind(other.to_string())),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property declaration (or link definition) on a widget look.
///
/// `name` and `data_type` are identity: writing them would require
/// recreating the element, so the registry rejects those writes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyDefinitionBase {
    pub name: String,
    pub data_type: String,
    pub initial_value: String,
    pub layout_on_write: bool,
    pub redraw_on_write: bool,
    pub fire_event: String,
    pub help: String,
}

/// Assigns an initial value to a target property of the widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyInitialiser {
    pub name: String,
    pub value: String,
    /// Data type of the target property when the engine knows it; typing
    /// falls back to plain text otherwise.
    pub data_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedArea {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagerySection {
    pub name: String,
    pub colours: ColourRect,
    pub colour_property: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateImagery {
    pub name: String,
    pub clipped: bool,
}

impl Default for StateImagery {
    fn default() -> Self {
        Self {
            name: String::new(),
            clipped: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetComponent {
    pub name_suffix: String,
    pub widget_type: String,
    pub renderer: String,
    pub look: String,
    pub auto_window: bool,
    pub vert_alignment: VerticalAlignment,
    pub horz_alignment: HorizontalAlignment,
}

impl Default for WidgetComponent {
    fn default() -> Self {
        Self {
            name_suffix: String::new(),
            widget_type: String::new(),
            renderer: String::new(),
            look: String::new(),
            auto_window: true,
            vert_alignment: VerticalAlignment::default(),
            horz_alignment: HorizontalAlignment::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageryComponent {
    pub image: ImageRef,
    pub image_property: String,
    pub colours: ColourRect,
    pub colour_property: String,
    pub vert_formatting: VerticalFormatting,
    pub vert_format_property: String,
    pub horz_formatting: HorizontalFormatting,
    pub horz_format_property: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextComponent {
    pub text: String,
    pub text_property: String,
    pub font: FontRef,
    pub font_property: String,
    pub colours: ColourRect,
    pub colour_property: String,
    pub vert_formatting: VerticalTextFormatting,
    pub vert_format_property: String,
    pub horz_formatting: HorizontalTextFormatting,
    pub horz_format_property: String,
}

/// The nine image slots of a frame: four corners, four edges, background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameImagePart {
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
    LeftEdge,
    RightEdge,
    TopEdge,
    BottomEdge,
    Background,
}

impl FrameImagePart {
    pub const ALL: [FrameImagePart; 9] = [
        FrameImagePart::TopLeftCorner,
        FrameImagePart::TopRightCorner,
        FrameImagePart::BottomLeftCorner,
        FrameImagePart::BottomRightCorner,
        FrameImagePart::LeftEdge,
        FrameImagePart::RightEdge,
        FrameImagePart::TopEdge,
        FrameImagePart::BottomEdge,
        FrameImagePart::Background,
    ];

    /// The attribute name is the part name.
    pub fn from_attribute(name: &str) -> Option<Self> {
        match name {
            "TopLeftCorner" => Some(FrameImagePart::TopLeftCorner),
            "TopRightCorner" => Some(FrameImagePart::TopRightCorner),
            "BottomLeftCorner" => Some(FrameImagePart::BottomLeftCorner),
            "BottomRightCorner" => Some(FrameImagePart::BottomRightCorner),
            "LeftEdge" => Some(FrameImagePart::LeftEdge),
            "RightEdge" => Some(FrameImagePart::RightEdge),
            "TopEdge" => Some(FrameImagePart::TopEdge),
            "BottomEdge" => Some(FrameImagePart::BottomEdge),
            "Background" => Some(FrameImagePart::Background),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameComponent {
    pub colours: ColourRect,
    pub colour_property: String,
    images: [ImageRef; 9],
}

impl FrameComponent {
    pub fn image(&self, part: FrameImagePart) -> &ImageRef {
        &self.images[part as usize]
    }

    pub fn set_image(&mut self, part: FrameImagePart, image: ImageRef) {
        self.images[part as usize] = image;
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerSpecification {
    pub priority: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionSpecification {
    pub section: String,
    /// Owner widget look; stored session-qualified while loaded.
    pub look: String,
    pub control_property: String,
    pub control_value: String,
    pub control_widget: String,
    pub colours: ColourRect,
    pub colour_property: String,
}

/// Where a component's area comes from: an explicit property source, a
/// named area reference, or neither (inline dimensions, not edited here).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentArea {
    pub area_property: Option<String>,
    pub named_area_source_look: Option<String>,
    pub named_area_source_name: Option<String>,
}

/// Any node of a widget-look definition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FalagardElement {
    PropertyDefinitionBase(PropertyDefinitionBase),
    PropertyInitialiser(PropertyInitialiser),
    NamedArea(NamedArea),
    ImagerySection(ImagerySection),
    StateImagery(StateImagery),
    WidgetComponent(WidgetComponent),
    ImageryComponent(ImageryComponent),
    TextComponent(TextComponent),
    FrameComponent(FrameComponent),
    LayerSpecification(LayerSpecification),
    SectionSpecification(SectionSpecification),
    ComponentArea(ComponentArea),
}

impl FalagardElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            FalagardElement::PropertyDefinitionBase(_) => ElementKind::PropertyDefinitionBase,
            FalagardElement::PropertyInitialiser(_) => ElementKind::PropertyInitialiser,
            FalagardElement::NamedArea(_) => ElementKind::NamedArea,
            FalagardElement::ImagerySection(_) => ElementKind::ImagerySection,
            FalagardElement::StateImagery(_) => ElementKind::StateImagery,
            FalagardElement::WidgetComponent(_) => ElementKind::WidgetComponent,
            FalagardElement::ImageryComponent(_) => ElementKind::ImageryComponent,
            FalagardElement::TextComponent(_) => ElementKind::TextComponent,
            FalagardElement::FrameComponent(_) => ElementKind::FrameComponent,
            FalagardElement::LayerSpecification(_) => ElementKind::LayerSpecification,
            FalagardElement::SectionSpecification(_) => ElementKind::SectionSpecification,
            FalagardElement::ComponentArea(_) => ElementKind::ComponentArea,
        }
    }

    /// Kind name used as dispatch key and property category.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }
}
