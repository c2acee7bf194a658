// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Translation of captions and validation messages.

use std::collections::HashMap;

/// Resolves translation keys to display text.
///
/// Any `Fn(&str) -> String` closure is a translator, which is usually the
/// simplest way to bridge an application's own i18n layer.
pub trait Translator {
    /// Translates `key`. Unknown keys should come back in a readable form.
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Translator backed by an in-memory catalog.
///
/// Keys missing from the catalog translate to themselves.
///
/// # Example
///
/// ```rust
/// use grid_actions::{MapTranslator, Translator};
///
/// let translator = MapTranslator::new().with("datagrid.execute", "Run");
/// assert_eq!(translator.translate("datagrid.execute"), "Run");
/// assert_eq!(translator.translate("datagrid.choose"), "datagrid.choose");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    catalog: HashMap<String, String>,
}

impl MapTranslator {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation and returns the catalog.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Adds or replaces a translation.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.catalog.insert(key.into(), text.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapTranslator
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            catalog: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Translator for MapTranslator {
    fn translate(&self, key: &str) -> String {
        self.catalog
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
