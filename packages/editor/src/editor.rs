//! # Look Editor
//!
//! Shell-facing entry point tying sessions, the engine, the element store,
//! and per-session undo history together.
//!
//! Sessions are isolated: qualified names never collide across sessions,
//! and closing one session never disturbs another's registrations.

use crate::commands::{EditCommand, EditContext, ElementStore, NullPreview, PreviewSink, UndoStack};
use crate::engine::LookEngine;
use crate::errors::EditorError;
use crate::properties::{AttributeInspector, AttributeProperty};
use crate::session::EditingSession;
use lookedit_schema::PropertyMap;
use lookedit_values::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

struct SessionSlot {
    session: EditingSession,
    undo: UndoStack,
}

pub struct LookEditor<E: LookEngine> {
    engine: E,
    sessions: HashMap<String, SessionSlot>,
    pub store: ElementStore,
    pub property_map: PropertyMap,
    preview: Box<dyn PreviewSink>,
}

impl<E: LookEngine> LookEditor<E> {
    pub fn new(engine: E) -> Self {
        Self::with_preview(engine, Box::new(NullPreview))
    }

    pub fn with_preview(engine: E, preview: Box<dyn PreviewSink>) -> Self {
        Self {
            engine,
            sessions: HashMap::new(),
            store: ElementStore::new(),
            property_map: PropertyMap::new(),
            preview,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn session(&self, id: &str) -> Option<&EditingSession> {
        self.sessions.get(id).map(|slot| &slot.session)
    }

    /// Open a new session over `text`. On parse failure no session is
    /// created and the registry is untouched.
    pub fn open_session(&mut self, text: &str) -> Result<String, EditorError> {
        let mut session = EditingSession::new();
        session.commit_parse(&mut self.engine, text)?;

        let id = session.id().to_string();
        self.sessions.insert(
            id.clone(),
            SessionSlot {
                session,
                undo: UndoStack::new(),
            },
        );
        Ok(id)
    }

    /// Replace a session's definitions with `text`. On parse failure the
    /// last good text is re-committed and the error is returned.
    pub fn reload_session(&mut self, id: &str, text: &str) -> Result<(), EditorError> {
        let engine = &mut self.engine;
        let slot = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| EditorError::UnknownSession(id.to_string()))?;

        let last_good = slot.session.source().to_string();
        match slot.session.commit_parse(engine, text) {
            Ok(()) => Ok(()),
            Err(err) => {
                if let Err(rollback_err) = slot.session.commit_parse(engine, &last_good) {
                    warn!(session = id, error = %rollback_err, "rollback re-commit failed");
                }
                Err(err.into())
            }
        }
    }

    /// Close and forget a session. Unknown ids are ignored, so closing
    /// twice is safe.
    pub fn close_session(&mut self, id: &str) {
        if let Some(mut slot) = self.sessions.remove(id) {
            slot.session.close(&mut self.engine);
            slot.undo.clear();
        }
    }

    /// The session's definitions as hand-authorable text, prefixes
    /// stripped.
    pub fn export_session(&self, id: &str) -> Result<String, EditorError> {
        let session = self
            .session(id)
            .ok_or_else(|| EditorError::UnknownSession(id.to_string()))?;
        Ok(session.export(&self.engine))
    }

    /// Record a target selection as an undoable command.
    pub fn on_target_selected(
        &mut self,
        id: &str,
        new_target: &str,
    ) -> Result<EditCommand, EditorError> {
        let engine = &mut self.engine;
        let store = &mut self.store;
        let preview = self.preview.as_mut();
        let slot = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| EditorError::UnknownSession(id.to_string()))?;

        let command = EditCommand::change_target(&slot.session, new_target);
        let mut ctx = EditContext {
            session: &mut slot.session,
            engine,
            store,
            preview,
        };
        slot.undo.push(command.clone(), &mut ctx)?;
        Ok(command)
    }

    /// Parse shell text input against the attribute's effective kind and
    /// record the edit as an undoable command.
    pub fn on_attribute_edited(
        &mut self,
        id: &str,
        element: &str,
        attribute: &str,
        text: &str,
    ) -> Result<EditCommand, EditorError> {
        let current = self
            .store
            .get(element)
            .ok_or_else(|| EditorError::UnknownElement(element.to_string()))?;
        let kind = current.kind();
        let (_, declared) = lookedit_schema::get_attribute(current, attribute)?;
        let effective = self.property_map.effective_kind(kind, attribute, declared);
        let new_value: Value = effective.parse(text)?;

        let command = EditCommand::change_attribute(&self.store, element, attribute, new_value)?;

        let engine = &mut self.engine;
        let store = &mut self.store;
        let preview = self.preview.as_mut();
        let slot = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| EditorError::UnknownSession(id.to_string()))?;
        let mut ctx = EditContext {
            session: &mut slot.session,
            engine,
            store,
            preview,
        };
        slot.undo.push(command.clone(), &mut ctx)?;
        Ok(command)
    }

    pub fn undo(&mut self, id: &str) -> Result<bool, EditorError> {
        let engine = &mut self.engine;
        let store = &mut self.store;
        let preview = self.preview.as_mut();
        let slot = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| EditorError::UnknownSession(id.to_string()))?;
        let mut ctx = EditContext {
            session: &mut slot.session,
            engine,
            store,
            preview,
        };
        slot.undo.undo(&mut ctx)
    }

    pub fn redo(&mut self, id: &str) -> Result<bool, EditorError> {
        let engine = &mut self.engine;
        let store = &mut self.store;
        let preview = self.preview.as_mut();
        let slot = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| EditorError::UnknownSession(id.to_string()))?;
        let mut ctx = EditContext {
            session: &mut slot.session,
            engine,
            store,
            preview,
        };
        slot.undo.redo(&mut ctx)
    }

    pub fn can_undo(&self, id: &str) -> bool {
        self.sessions
            .get(id)
            .map_or(false, |slot| slot.undo.can_undo())
    }

    pub fn can_redo(&self, id: &str) -> bool {
        self.sessions
            .get(id)
            .map_or(false, |slot| slot.undo.can_redo())
    }

    /// Display properties for an element, grouped and sorted.
    pub fn build_property_categories(
        &self,
        id: &str,
        element: &str,
    ) -> Result<BTreeMap<String, BTreeMap<String, AttributeProperty>>, EditorError> {
        let session = self
            .session(id)
            .ok_or_else(|| EditorError::UnknownSession(id.to_string()))?;
        AttributeInspector::build_categories(
            &self.store,
            element,
            &self.property_map,
            Some(session),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InMemoryEngine;

    const DOC: &str = r#"<WidgetLook name="Vanilla/Button">
    <StateImagery name="Normal" />
</WidgetLook>"#;

    #[test]
    fn test_open_close_lifecycle() {
        let mut editor = LookEditor::new(InMemoryEngine::new());
        let id = editor.open_session(DOC).unwrap();
        assert_eq!(editor.engine().list().len(), 1);

        editor.close_session(&id);
        assert!(editor.engine().list().is_empty());
        // Second close of the same id is a no-op
        editor.close_session(&id);
    }

    #[test]
    fn test_open_failure_creates_no_session() {
        let mut editor = LookEditor::new(InMemoryEngine::new());
        let err = editor.open_session("<WidgetLook name=\"Broken\">").unwrap_err();
        assert!(matches!(err, EditorError::Parse(_)));
        assert!(editor.engine().list().is_empty());
        assert!(editor.sessions.is_empty());
    }

    #[test]
    fn test_reload_failure_rolls_back_to_last_good() {
        let mut editor = LookEditor::new(InMemoryEngine::new());
        let id = editor.open_session(DOC).unwrap();

        let err = editor
            .reload_session(&id, "<WidgetLook name=\"Broken\">")
            .unwrap_err();
        assert!(matches!(err, EditorError::Parse(_)));

        // The last good document is registered again
        assert_eq!(editor.engine().list().len(), 1);
        assert_eq!(editor.export_session(&id).unwrap(), DOC);
    }

    #[test]
    fn test_target_selection_is_undoable() {
        let mut editor = LookEditor::new(InMemoryEngine::new());
        let id = editor.open_session(DOC).unwrap();

        editor.on_target_selected(&id, "Vanilla/Button").unwrap();
        assert_eq!(editor.session(&id).unwrap().target, "Vanilla/Button");
        assert!(editor.can_undo(&id));

        editor.undo(&id).unwrap();
        assert_eq!(editor.session(&id).unwrap().target, "");
        assert!(editor.can_redo(&id));
    }
}
