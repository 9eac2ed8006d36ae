//! # Edit Commands
//!
//! Undoable operations on an editing session.
//!
//! ## Design
//!
//! - Each command carries both directions of its change: `redo` applies
//!   the new state, `undo` restores the captured old state
//! - `ChangeAttribute` captures its old value by reading the element
//!   through the schema registry at construction time, so undo restores
//!   exactly what the registry reported
//! - Rapid successive edits of the same thing merge into one undo step
//!
//! ## Redo/undo asymmetry
//!
//! Applying an attribute write can invalidate the engine's window mapping
//! for the owning look, so `ChangeAttribute::redo` refreshes the session's
//! mappings after the write. Undo restores a value that was mapped before,
//! so it skips the refresh.

use crate::engine::LookEngine;
use crate::errors::EditorError;
use crate::session::EditingSession;
use lookedit_schema::{get_attribute, set_attribute, ElementKind, FalagardElement};
use lookedit_values::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Receives refresh requests when edits change what the scene should show.
/// Implementations must tolerate redundant calls.
pub trait PreviewSink {
    fn refresh(&mut self);
}

/// Sink for headless use and tests.
#[derive(Debug, Default)]
pub struct NullPreview;

impl PreviewSink for NullPreview {
    fn refresh(&mut self) {}
}

/// Elements under edit, keyed by a shell-assigned id.
#[derive(Debug, Default)]
pub struct ElementStore {
    elements: HashMap<String, FalagardElement>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, element: FalagardElement) {
        self.elements.insert(id.into(), element);
    }

    pub fn get(&self, id: &str) -> Option<&FalagardElement> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut FalagardElement> {
        self.elements.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<FalagardElement> {
        self.elements.remove(id)
    }
}

/// Everything a command touches when it runs.
pub struct EditContext<'a, E: LookEngine> {
    pub session: &'a mut EditingSession,
    pub engine: &'a mut E,
    pub store: &'a mut ElementStore,
    pub preview: &'a mut dyn PreviewSink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditCommand {
    /// Select a different widget look as the editing target.
    ChangeTarget {
        old_target: String,
        new_target: String,
    },

    /// Write one attribute of one element.
    ChangeAttribute {
        element: String,
        element_kind: ElementKind,
        attribute: String,
        old_value: Value,
        new_value: Value,
    },
}

impl EditCommand {
    pub fn change_target(session: &EditingSession, new_target: impl Into<String>) -> Self {
        EditCommand::ChangeTarget {
            old_target: session.target.clone(),
            new_target: new_target.into(),
        }
    }

    /// Build an attribute change, capturing the current value through the
    /// registry.
    pub fn change_attribute(
        store: &ElementStore,
        element: &str,
        attribute: &str,
        new_value: Value,
    ) -> Result<Self, EditorError> {
        let current = store
            .get(element)
            .ok_or_else(|| EditorError::UnknownElement(element.to_string()))?;
        let (old_value, _) = get_attribute(current, attribute)?;

        Ok(EditCommand::ChangeAttribute {
            element: element.to_string(),
            element_kind: current.kind(),
            attribute: attribute.to_string(),
            old_value,
            new_value,
        })
    }

    pub fn redo<E: LookEngine>(&self, ctx: &mut EditContext<'_, E>) -> Result<(), EditorError> {
        match self {
            EditCommand::ChangeTarget { new_target, .. } => {
                ctx.session.target = new_target.clone();
                ctx.preview.refresh();
                Ok(())
            }
            EditCommand::ChangeAttribute {
                element,
                attribute,
                new_value,
                ..
            } => {
                let target = ctx
                    .store
                    .get_mut(element)
                    .ok_or_else(|| EditorError::UnknownElement(element.clone()))?;
                set_attribute(target, attribute, new_value.clone())?;
                ctx.session.refresh_mappings(ctx.engine);
                ctx.preview.refresh();
                Ok(())
            }
        }
    }

    pub fn undo<E: LookEngine>(&self, ctx: &mut EditContext<'_, E>) -> Result<(), EditorError> {
        match self {
            EditCommand::ChangeTarget { old_target, .. } => {
                ctx.session.target = old_target.clone();
                ctx.preview.refresh();
                Ok(())
            }
            EditCommand::ChangeAttribute {
                element,
                attribute,
                old_value,
                ..
            } => {
                let target = ctx
                    .store
                    .get_mut(element)
                    .ok_or_else(|| EditorError::UnknownElement(element.clone()))?;
                set_attribute(target, attribute, old_value.clone())?;
                ctx.preview.refresh();
                Ok(())
            }
        }
    }

    /// Absorb a later command into this one if the pair reads as a single
    /// user action. Returns false when the commands must stay separate.
    pub fn merge_with(&mut self, other: &EditCommand) -> bool {
        match (self, other) {
            (
                EditCommand::ChangeTarget { new_target, .. },
                EditCommand::ChangeTarget {
                    new_target: later, ..
                },
            ) => {
                // Earliest old target survives, latest new target wins
                *new_target = later.clone();
                true
            }
            (
                EditCommand::ChangeAttribute {
                    element,
                    attribute,
                    new_value,
                    ..
                },
                EditCommand::ChangeAttribute {
                    element: later_element,
                    attribute: later_attribute,
                    new_value: later_value,
                    ..
                },
            ) if element == later_element && attribute == later_attribute => {
                *new_value = later_value.clone();
                true
            }
            _ => false,
        }
    }

    pub fn description(&self) -> String {
        match self {
            EditCommand::ChangeTarget { new_target, .. } => {
                format!("select widget look {new_target:?}")
            }
            EditCommand::ChangeAttribute {
                element_kind,
                attribute,
                new_value,
                ..
            } => format!("set {element_kind}.{attribute} to {new_value}"),
        }
    }
}

/// Undo/redo history of one session.
///
/// Pushing executes the command, merges it with the stack top when the
/// pair allows it, and clears the redo stack.
#[derive(Debug, Default)]
pub struct UndoStack {
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
    /// 0 = unlimited
    max_levels: usize,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Execute a command and record it for undo.
    pub fn push<E: LookEngine>(
        &mut self,
        command: EditCommand,
        ctx: &mut EditContext<'_, E>,
    ) -> Result<(), EditorError> {
        command.redo(ctx)?;

        // New action invalidates the redone future
        self.redo_stack.clear();

        if let Some(last) = self.undo_stack.last_mut() {
            if last.merge_with(&command) {
                return Ok(());
            }
        }

        self.undo_stack.push(command);
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }
        Ok(())
    }

    pub fn undo<E: LookEngine>(
        &mut self,
        ctx: &mut EditContext<'_, E>,
    ) -> Result<bool, EditorError> {
        if let Some(command) = self.undo_stack.pop() {
            command.undo(ctx)?;
            self.redo_stack.push(command);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn redo<E: LookEngine>(
        &mut self,
        ctx: &mut EditContext<'_, E>,
    ) -> Result<bool, EditorError> {
        if let Some(command) = self.redo_stack.pop() {
            command.redo(ctx)?;
            self.undo_stack.push(command);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(EditCommand::description)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
