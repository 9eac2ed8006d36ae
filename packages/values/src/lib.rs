//! # Lookedit Values
//!
//! Typed value codec for skin-definition attributes.
//!
//! Every attribute of a Falagard element is edited through a closed set of
//! semantic value types: scalars, relative/absolute dimensions, colours,
//! rotations, formatting enumerations and font/image references. This crate
//! converts between the textual representation stored in look-and-feel files
//! and the typed values the editor manipulates.
//!
//! ## Guarantees
//!
//! - **Round trip**: `kind.parse(&value.to_string())` reproduces `value`,
//!   and formatting a parsed canonical string reproduces the string.
//! - **Strict booleans**: only case-insensitive `true`/`false` parse; any
//!   other token is a [`ValueFormatError`], never a silent `false`.
//! - **Composite decomposition**: multi-component values expose named
//!   children that are themselves values; recomposition rebuilds the whole
//!   composite so observers never see a partial state.

mod colour;
mod dim;
mod enums;
mod range;
mod rotation;
mod value;

pub use colour::{Colour, ColourRect};
pub use dim::{UDim, URect, USize, UVector2};
pub use enums::{
    AspectMode, HorizontalAlignment, HorizontalFormatting, HorizontalTextFormatting, SortMode,
    VerticalAlignment, VerticalFormatting, VerticalTextFormatting, WindowUpdateMode,
};
pub use range::NumericRange;
pub use rotation::{Quaternion, XyzRotation};
pub use value::{FontRef, ImageRef, Value, ValueFormatError, ValueKind};
