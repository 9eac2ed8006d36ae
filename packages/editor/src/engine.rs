//! # Look Engine Interface
//!
//! The registry that actually holds widget-look definitions is an external
//! collaborator. Sessions talk to it through [`LookEngine`], injected at
//! every call site — never reached through a global.
//!
//! ## Contract
//!
//! - `parse_and_register` is all-or-nothing: on error, no definition from
//!   the offending text may remain registered
//! - `erase` of an unknown name is a no-op
//! - `list` returns every registered qualified name
//!
//! [`InMemoryEngine`] backs tests and standalone use with a text-block
//! registry honoring the same contract.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("no WidgetLook declaration found")]
    NoDeclarations,

    #[error("WidgetLook {0:?} is declared twice")]
    DuplicateLook(String),

    #[error("WidgetLook {0:?} is never closed")]
    UnterminatedLook(String),
}

/// Widget-look registry operations a session needs.
pub trait LookEngine {
    /// Register every definition in `text`, or none of them.
    fn parse_and_register(&mut self, text: &str) -> Result<(), ParseError>;

    /// Serialized text of the named definitions, in the given order.
    fn serialize(&self, names: &[String]) -> String;

    /// Drop a definition. Unknown names are ignored.
    fn erase(&mut self, name: &str);

    /// All registered definition names, sorted.
    fn list(&self) -> Vec<String>;

    /// Register a Falagard window mapping for a look.
    fn add_window_mapping(&mut self, look: &str);

    /// Remove a look's window mapping. Unknown looks are ignored.
    fn remove_window_mapping(&mut self, look: &str);

    /// All mapped looks, sorted.
    fn window_mappings(&self) -> Vec<String>;
}

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<\s*WidgetLook\s+name\s*=\s*"([^"]*)""#).unwrap());
static CLOSING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</\s*WidgetLook\s*>").unwrap());

/// Text-block registry: one stored block per definition name.
#[derive(Debug, Default)]
pub struct InMemoryEngine {
    looks: BTreeMap<String, String>,
    mappings: BTreeSet<String>,
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LookEngine for InMemoryEngine {
    fn parse_and_register(&mut self, text: &str) -> Result<(), ParseError> {
        // Stage everything before inserting anything
        let mut staged: Vec<(String, String)> = Vec::new();

        for caps in DECLARATION.captures_iter(text) {
            let opening = caps.get(0).expect("match has a whole-match group");
            let name = caps[1].to_string();

            let closing = CLOSING_TAG
                .find_at(text, opening.end())
                .ok_or_else(|| ParseError::UnterminatedLook(name.clone()))?;

            if staged.iter().any(|(staged_name, _)| *staged_name == name)
                || self.looks.contains_key(&name)
            {
                return Err(ParseError::DuplicateLook(name));
            }

            staged.push((name, text[opening.start()..closing.end()].to_string()));
        }

        if staged.is_empty() {
            return Err(ParseError::NoDeclarations);
        }

        self.looks.extend(staged);
        Ok(())
    }

    fn serialize(&self, names: &[String]) -> String {
        let blocks: Vec<&str> = names
            .iter()
            .filter_map(|name| self.looks.get(name).map(String::as_str))
            .collect();
        blocks.join("\n\n")
    }

    fn erase(&mut self, name: &str) {
        self.looks.remove(name);
    }

    fn list(&self) -> Vec<String> {
        self.looks.keys().cloned().collect()
    }

    fn add_window_mapping(&mut self, look: &str) {
        self.mappings.insert(look.to_string());
    }

    fn remove_window_mapping(&mut self, look: &str) {
        self.mappings.remove(look);
    }

    fn window_mappings(&self) -> Vec<String> {
        self.mappings.iter().cloned().collect()
    }
}
