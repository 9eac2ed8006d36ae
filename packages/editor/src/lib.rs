//! # Lookedit Editor
//!
//! Editing-session core for Falagard widget-look documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editor: shell API (LookEditor)              │
//! │  - Open/reload/close/export sessions        │
//! │  - Route edits into undoable commands       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ session: per-document namespacing           │
//! │  - Qualify/unqualify look names             │
//! │  - Atomic commit against the engine         │
//! │  - Window-mapping bookkeeping               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ engine: flat widget-look registry (trait)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Engine is injected**: the registry is a collaborator passed into
//!    every operation, never a global
//! 2. **Sessions are isolated**: each prefixes its registrations with a
//!    unique id; closing one never disturbs another
//! 3. **Commits are atomic**: a failed parse leaves the registry exactly
//!    as it was, and reload rolls back to the last good text
//! 4. **Edits are commands**: every change is an [`EditCommand`] with a
//!    captured old value, merged and replayed by the [`UndoStack`]

mod commands;
mod editor;
mod engine;
mod errors;
mod properties;
mod session;

pub use commands::{
    EditCommand, EditContext, ElementStore, NullPreview, PreviewSink, UndoStack,
};
pub use editor::LookEditor;
pub use engine::{InMemoryEngine, LookEngine, ParseError};
pub use errors::EditorError;
pub use properties::{AttributeInspector, AttributeProperty, ChangeValueReason};
pub use session::{split_qualified, EditingSession, SessionState};

// Re-export the layers below for convenience
pub use lookedit_schema as schema;
pub use lookedit_values as values;
