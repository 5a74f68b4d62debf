//! Committed template bodies

use std::collections::HashMap;

/// Name → body mapping for one run
///
/// Bodies are stored exactly as captured and never modified afterwards;
/// redefining a name replaces the whole body.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` under `name`, returning the body it replaced
    pub fn insert(&mut self, name: impl Into<String>, body: String) -> Option<String> {
        self.templates.insert(name.into(), body)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
