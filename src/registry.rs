//! Insertion-ordered class registry, one per conversion call.
//!
//! A name is *claimed* the moment the walk enters an object under that name
//! and *finished* once its declaration body is complete. Claim order is
//! what emission ordering is defined over; finishing never moves a key
//! (`IndexMap` keeps the original slot on overwrite). Re-claiming an
//! already-claimed name is a no-op at the call site — the walk checks
//! `is_claimed` first — so same-name/different-shape objects are silently
//! first-wins. That is deliberate; see the conflict note in DESIGN.md.

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: IndexMap<String, String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Reserve a slot for `name` at the current end of the claim order.
    pub fn claim(&mut self, name: &str) {
        self.classes.entry(name.to_string()).or_default();
    }

    /// Store the finished declaration body for a previously claimed name.
    pub fn finish(&mut self, name: &str, body: String) {
        self.classes.insert(name.to_string(), body);
    }

    /// Declaration bodies in reverse claim order: deepest class first, root
    /// class last, so nothing is referenced before it is defined.
    pub fn declarations_newest_first(&self) -> impl Iterator<Item = &str> {
        self.classes.values().rev().map(String::as_str)
    }
}
