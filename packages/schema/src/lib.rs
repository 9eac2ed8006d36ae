//! # Lookedit Schema
//!
//! Element model and attribute schema registry for Falagard skin
//! definitions.
//!
//! A skin document is a tree of a dozen element kinds, each with a fixed,
//! ordered attribute list. This crate declares those kinds as a sum type
//! ([`FalagardElement`]) and marshals their attributes through a uniform
//! `(kind, name)`-keyed get/set interface returning typed
//! [`lookedit_values::Value`]s.
//!
//! The attribute lists are schema data: their order is positional identity
//! for display and must not change without a schema version bump. The
//! compiler enforces exhaustiveness — adding an element kind without
//! extending the registry dispatch is a build error, not a runtime surprise.

mod element;
mod error;
mod overrides;
mod registry;

pub use element::{
    ComponentArea, ElementKind, FalagardElement, FrameComponent, FrameImagePart, ImageryComponent,
    ImagerySection, LayerSpecification, NamedArea, PropertyDefinitionBase, PropertyInitialiser,
    SectionSpecification, StateImagery, TextComponent, WidgetComponent,
};
pub use error::SchemaError;
pub use overrides::{OverrideEntry, PropertyMap};
pub use registry::{attribute_names, get_attribute, set_attribute};
