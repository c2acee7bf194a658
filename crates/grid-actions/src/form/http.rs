// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Raw submitted form data.

use indexmap::IndexSet;
use serde::Serialize;

/// Raw `name=value` pairs of one form submission, in submission order.
///
/// Keys are the HTML field names exactly as the browser sent them
/// (`group_action[2][]`, `grid_group_action_item[7]`, ...). Repeated keys are
/// kept, which is what multi-selects and checkbox lists rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HttpData {
    pairs: Vec<(String, String)>,
}

impl HttpData {
    /// Decodes an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(bytes: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(bytes).into_owned().collect(),
        }
    }

    /// Builds form data from already decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Returns the first value submitted under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value submitted under `key`, in order.
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Checks whether `key` was submitted at all.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns the bracketed keys submitted under a field list name.
    ///
    /// For `name = "grid_item[]"` the pairs `grid_item[7]=on`, `grid_item[3]=on`
    /// yield `{"7", "3"}`. Order follows the first occurrence of each key and
    /// duplicates collapse.
    ///
    /// Pairs with an empty key (`grid_item[]=x`) are skipped rather than
    /// numbered by position: row checkboxes are always rendered keyed by row
    /// id, and a positional index would be taken for a row id.
    pub fn keys_of(&self, name: &str) -> IndexSet<String> {
        let base = name.strip_suffix("[]").unwrap_or(name);

        self.pairs
            .iter()
            .filter_map(|(k, _)| {
                let rest = k.strip_prefix(base)?.strip_prefix('[')?;
                let end = rest.find(']')?;
                let key = &rest[..end];
                (!key.is_empty()).then(|| key.to_string())
            })
            .collect()
    }

    /// Iterates over all submitted pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of submitted pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencoded_decoding() {
        let data = HttpData::from_urlencoded(b"grid_group_action_item%5B7%5D=on&q=a+b");
        assert_eq!(data.first("grid_group_action_item[7]"), Some("on"));
        assert_eq!(data.first("q"), Some("a b"));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_keys_of_dedupes_in_order() {
        let data = HttpData::from_pairs([
            ("grid_group_action_item[7]", "on"),
            ("grid_group_action_item[7]", "on"),
            ("grid_group_action_item[3]", "on"),
        ]);

        let keys: Vec<String> = data.keys_of("grid_group_action_item[]").into_iter().collect();
        assert_eq!(keys, vec!["7", "3"]);
    }

    #[test]
    fn test_keys_of_ignores_other_fields() {
        let data = HttpData::from_pairs([
            ("grid_group_action_item[1]", "on"),
            ("grid_group_action_items[2]", "on"),
            ("other_group_action_item[3]", "on"),
            ("grid_group_action_item[]", "4"),
            ("grid_group_action_item", "5"),
        ]);

        let keys: Vec<String> = data.keys_of("grid_group_action_item[]").into_iter().collect();
        assert_eq!(keys, vec!["1"]);
    }

    #[test]
    fn test_all_and_contains() {
        let data = HttpData::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(data.all("a"), vec!["1", "3"]);
        assert!(data.contains("b"));
        assert!(!data.contains("c"));
        assert!(data.all("c").is_empty());
    }
}
