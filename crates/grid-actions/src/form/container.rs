// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Named groups of controls.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

use super::{Control, ControlKind, HttpData};

/// An ordered, named group of controls.
///
/// Controls render under the HTML name `container[control]`.
#[derive(Debug, Clone, Serialize)]
pub struct Container {
    name: String,
    controls: IndexMap<String, Control>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controls: IndexMap::new(),
        }
    }

    /// Container name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a control, replacing one with the same name.
    pub fn add_control(&mut self, control: Control) -> &mut Control {
        match self.controls.entry(control.name().to_string()) {
            Entry::Occupied(mut entry) => {
                tracing::warn!("Control '{}' replaced in container '{}'", control.name(), self.name);
                entry.insert(control);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(control),
        }
    }

    /// Adds a submit button.
    pub fn add_submit(&mut self, name: impl Into<String>, caption: impl Into<String>) -> &mut Control {
        self.add_control(Control::new(
            name,
            ControlKind::Submit {
                caption: caption.into(),
            },
        ))
    }

    /// Adds a single-choice dropdown.
    pub fn add_select(
        &mut self,
        name: impl Into<String>,
        items: IndexMap<String, String>,
        prompt: Option<String>,
    ) -> &mut Control {
        self.add_control(Control::new(name, ControlKind::Select { items, prompt }))
    }

    /// Adds a multiple-choice dropdown.
    pub fn add_multi_select(&mut self, name: impl Into<String>, items: IndexMap<String, String>) -> &mut Control {
        self.add_control(Control::new(name, ControlKind::MultiSelect { items }))
    }

    /// Adds a single-line text input.
    pub fn add_text(&mut self, name: impl Into<String>) -> &mut Control {
        self.add_control(Control::new(name, ControlKind::Text))
    }

    /// Adds a multi-line text input.
    pub fn add_text_area(&mut self, name: impl Into<String>) -> &mut Control {
        self.add_control(Control::new(name, ControlKind::TextArea))
    }

    /// Returns a control by name.
    pub fn get(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    /// Returns a control by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.get_mut(name)
    }

    /// Checks whether a control exists.
    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    /// Controls in insertion order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Returns true if the container has no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub(crate) fn load(&mut self, data: &HttpData) {
        let name = self.name.as_str();
        for control in self.controls.values_mut() {
            control.load(name, data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut container = Container::new("group_action");
        container.add_submit("1", "Delete");
        container.add_text("2");
        container.add_submit("submit", "Run");

        let names: Vec<&str> = container.controls().map(Control::name).collect();
        assert_eq!(names, vec!["1", "2", "submit"]);
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let mut container = Container::new("group_action");
        container.add_text("1");
        container.add_submit("1", "Delete");

        assert_eq!(container.len(), 1);
        assert!(container.get("1").unwrap().is_submit());
    }

    #[test]
    fn test_load_uses_container_prefix() {
        let mut container = Container::new("bulk");
        container.add_submit("1", "Delete");
        container.load(&HttpData::from_pairs([("bulk[1]", "Delete")]));
        assert!(container.get("1").unwrap().is_submitted_by());
    }
}
