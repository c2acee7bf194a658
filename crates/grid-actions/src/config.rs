// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Group action configuration.
//!
//! Field names, html id prefixes and translation keys used when group actions
//! are emitted into a form. Every field has a default, so an empty file (or
//! [`GroupActionConfig::default`]) is a complete configuration.
//!
//! # Example Configuration
//!
//! ```toml
//! container_name = "group_action"
//! chooser_name = "group_action"
//! execute_name = "submit"
//! row_field_suffix = "_group_action_item[]"
//! id_attribute_prefix = "group_action_item_"
//!
//! [translations]
//! prompt_key = "datagrid.choose"
//! execute_caption_key = "datagrid.execute"
//! required_message_key = "datagrid.choose_input_required"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Names and keys used by the form binder and the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupActionConfig {
    /// Name of the form container holding all group action controls.
    #[serde(default = "default_container_name")]
    pub container_name: String,

    /// Name of the chooser select listing every non-button action.
    #[serde(default = "default_chooser_name")]
    pub chooser_name: String,

    /// Name of the execute submit control.
    #[serde(default = "default_execute_name")]
    pub execute_name: String,

    /// Suffix appended to the lowercased grid name to form the row checkbox
    /// field name.
    #[serde(default = "default_row_field_suffix")]
    pub row_field_suffix: String,

    /// Prefix of the html id given to each action's sub-control.
    #[serde(default = "default_id_attribute_prefix")]
    pub id_attribute_prefix: String,

    /// Translation keys.
    #[serde(default)]
    pub translations: TranslationKeys,
}

/// Translation keys resolved through the form's translator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationKeys {
    /// Prompt shown by the chooser when nothing is selected.
    #[serde(default = "default_prompt_key")]
    pub prompt_key: String,

    /// Caption of the execute control.
    #[serde(default = "default_execute_caption_key")]
    pub execute_caption_key: String,

    /// Message for text inputs required by the chosen action.
    #[serde(default = "default_required_message_key")]
    pub required_message_key: String,
}

fn default_container_name() -> String {
    "group_action".to_string()
}

fn default_chooser_name() -> String {
    "group_action".to_string()
}

fn default_execute_name() -> String {
    "submit".to_string()
}

fn default_row_field_suffix() -> String {
    "_group_action_item[]".to_string()
}

fn default_id_attribute_prefix() -> String {
    "group_action_item_".to_string()
}

fn default_prompt_key() -> String {
    "datagrid.choose".to_string()
}

fn default_execute_caption_key() -> String {
    "datagrid.execute".to_string()
}

fn default_required_message_key() -> String {
    "datagrid.choose_input_required".to_string()
}

impl Default for TranslationKeys {
    fn default() -> Self {
        Self {
            prompt_key: default_prompt_key(),
            execute_caption_key: default_execute_caption_key(),
            required_message_key: default_required_message_key(),
        }
    }
}

impl Default for GroupActionConfig {
    fn default() -> Self {
        Self {
            container_name: default_container_name(),
            chooser_name: default_chooser_name(),
            execute_name: default_execute_name(),
            row_field_suffix: default_row_field_suffix(),
            id_attribute_prefix: default_id_attribute_prefix(),
            translations: TranslationKeys::default(),
        }
    }
}

impl GroupActionConfig {
    /// Parses a configuration from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GroupActionError::ConfigParse`] if the source is not
    /// valid TOML or a field has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No group action config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
