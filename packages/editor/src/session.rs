//! # Editing Session Namespacing
//!
//! Several documents can be open at once, and two of them may define a
//! widget look with the same name. The engine registry is flat, so each
//! session prefixes every name it registers with its own id before the
//! text reaches the engine, and strips the prefix again on export.
//!
//! ## Design
//!
//! - Qualified name = `{session_id}/{original}`; ids come from a
//!   process-wide counter and never repeat within a process
//! - Qualification inserts the prefix after a captured match, so the
//!   matched text (including its original spacing) survives untouched and
//!   unqualification is an exact inverse
//! - `commit_parse` is atomic with respect to the registry: either the new
//!   text fully replaces this session's registrations or none of it stays
//!
//! Known fragility: the reference matcher `look="` is not anchored to its
//! XML attribute context, so it would also fire inside an unrelated
//! string-valued attribute that happens to contain that text. A tokenizer
//! pass over the document is the eventual fix.

use crate::engine::{LookEngine, ParseError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

const SESSION_ID_STEM: &str = "lnf_editor-";

fn next_session_id() -> String {
    format!(
        "{SESSION_ID_STEM}{}",
        NEXT_SESSION.fetch_add(1, Ordering::Relaxed)
    )
}

/// Declaration sites: `<WidgetLook name="`, spacing preserved by capture.
static DECLARATION_SITE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(<\s*WidgetLook\s+name\s*=\s*")"#).unwrap());

/// Reference sites: `look="` attributes on widget/section elements.
static REFERENCE_SITE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(look\s*=\s*")"#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No definitions registered; the state of a fresh or closed session.
    Empty,
    /// A commit is in flight; the registry must not be read through this
    /// session until it settles.
    Loading,
    Loaded,
}

/// One open document's window into the shared engine registry.
#[derive(Debug)]
pub struct EditingSession {
    id: String,
    /// Last raw text that parsed successfully; reload rollback target.
    source: String,
    /// Currently selected widget look (original, unqualified name).
    pub target: String,
    /// `(original, qualified)` pairs of looks this session registered.
    owned: Vec<(String, String)>,
    state: SessionState,
}

impl EditingSession {
    pub fn new() -> Self {
        Self {
            id: next_session_id(),
            source: String::new(),
            target: String::new(),
            owned: Vec::new(),
            state: SessionState::Empty,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// `(original, qualified)` pairs currently registered, sorted by
    /// qualified name.
    pub fn owned(&self) -> &[(String, String)] {
        &self.owned
    }

    pub fn qualified_name(&self, original: &str) -> String {
        format!("{}/{original}", self.id)
    }

    /// Strip this session's prefix from a qualified name.
    pub fn original_name<'a>(&self, qualified: &'a str) -> Option<&'a str> {
        let rest = qualified.strip_prefix(&self.id)?;
        rest.strip_prefix('/')
    }

    /// Insert this session's prefix at every declaration and reference site.
    pub fn qualify(&self, text: &str) -> String {
        let declared = DECLARATION_SITE.replace_all(text, |caps: &regex::Captures| {
            format!("{}{}/", &caps[1], self.id)
        });
        REFERENCE_SITE
            .replace_all(&declared, |caps: &regex::Captures| {
                format!("{}{}/", &caps[1], self.id)
            })
            .into_owned()
    }

    /// Exact inverse of [`qualify`](Self::qualify): removes the inserted
    /// prefix after the same matchers and nothing else.
    pub fn unqualify(&self, text: &str) -> String {
        let sid = regex::escape(&self.id);
        let declared =
            Regex::new(&format!(r#"(<\s*WidgetLook\s+name\s*=\s*"){sid}/"#)).expect("escaped id");
        let referenced = Regex::new(&format!(r#"(look\s*=\s*"){sid}/"#)).expect("escaped id");

        let stripped = declared.replace_all(text, |caps: &regex::Captures| caps[1].to_string());
        referenced
            .replace_all(&stripped, |caps: &regex::Captures| caps[1].to_string())
            .into_owned()
    }

    /// Replace this session's registrations with the definitions in
    /// `raw_text`. On parse failure nothing of this session remains
    /// registered and the caller decides whether to re-commit the last
    /// good source.
    pub fn commit_parse<E: LookEngine>(
        &mut self,
        engine: &mut E,
        raw_text: &str,
    ) -> Result<(), ParseError> {
        self.state = SessionState::Loading;
        self.remove_owned_mappings(engine);
        for (_, qualified) in self.owned.drain(..) {
            engine.erase(&qualified);
        }

        // A document with no definitions is a valid empty session
        if raw_text.trim().is_empty() {
            self.source = raw_text.to_string();
            self.state = SessionState::Empty;
            debug!(session = %self.id, "empty document committed");
            return Ok(());
        }

        let qualified_text = self.qualify(raw_text);
        match engine.parse_and_register(&qualified_text) {
            Ok(()) => {
                self.refresh_owned(engine);
                self.add_owned_mappings(engine);
                self.source = raw_text.to_string();
                self.state = SessionState::Loaded;
                debug!(session = %self.id, looks = self.owned.len(), "session loaded");
                Ok(())
            }
            Err(err) => {
                // Erase anything registered under our prefix before the
                // failure so the registry reads as if the commit never ran
                let prefix = format!("{}/", self.id);
                for name in engine.list() {
                    if name.starts_with(&prefix) {
                        engine.erase(&name);
                    }
                }
                self.state = SessionState::Empty;
                warn!(session = %self.id, error = %err, "parse failed, registrations rolled back");
                Err(err)
            }
        }
    }

    /// Recompute `owned` from what the engine actually holds.
    fn refresh_owned<E: LookEngine>(&mut self, engine: &E) {
        let prefix = format!("{}/", self.id);
        self.owned = engine
            .list()
            .into_iter()
            .filter(|name| name.starts_with(&prefix))
            .map(|qualified| {
                let original = qualified[prefix.len()..].to_string();
                (original, qualified)
            })
            .collect();
        self.owned.sort_by(|a, b| a.1.cmp(&b.1));
    }

    fn add_owned_mappings<E: LookEngine>(&self, engine: &mut E) {
        for (_, qualified) in &self.owned {
            engine.add_window_mapping(qualified);
        }
    }

    fn remove_owned_mappings<E: LookEngine>(&self, engine: &mut E) {
        for (_, qualified) in &self.owned {
            engine.remove_window_mapping(qualified);
        }
    }

    /// Re-register window mappings for every owned look. Called after an
    /// attribute write lands, since the write may invalidate a mapping.
    pub fn refresh_mappings<E: LookEngine>(&self, engine: &mut E) {
        self.remove_owned_mappings(engine);
        self.add_owned_mappings(engine);
    }

    /// Remove every trace of this session from the engine. Safe to call
    /// more than once.
    pub fn close<E: LookEngine>(&mut self, engine: &mut E) {
        self.remove_owned_mappings(engine);
        for (_, qualified) in self.owned.drain(..) {
            engine.erase(&qualified);
        }
        self.target.clear();
        self.state = SessionState::Empty;
        debug!(session = %self.id, "session closed");
    }

    /// Serialize owned definitions and strip this session's prefixes.
    pub fn export<E: LookEngine>(&self, engine: &E) -> String {
        let names: Vec<String> = self
            .owned
            .iter()
            .map(|(_, qualified)| qualified.clone())
            .collect();
        self.unqualify(&engine.serialize(&names))
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a qualified name into its original name and session id. Names
/// without a session prefix come back unchanged with no id.
pub fn split_qualified(name: &str) -> (&str, Option<&str>) {
    match name.split_once('/') {
        Some((sid, original)) if sid.starts_with(SESSION_ID_STEM) => (original, Some(sid)),
        _ => (name, None),
    }
}
