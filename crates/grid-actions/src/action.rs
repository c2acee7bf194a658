// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Group action types.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::form::FieldValue;

/// Callback for select, multi-select, text and textarea actions.
///
/// Receives the selected row ids and the value of the action's own control.
pub type SelectCallback = Box<dyn Fn(&[String], Option<&FieldValue>)>;

/// Callback for button actions. Receives the selected row ids.
pub type ClickCallback = Box<dyn Fn(&[String])>;

/// Identifier of a registered action.
///
/// Ids start at 1 and follow registration order. The decimal form is both the
/// action's control name and its value in the chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ActionId(usize);

impl ActionId {
    /// Id of the action stored at `index` in registration order.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Position of the action in registration order.
    pub(crate) fn index(self) -> usize {
        self.0 - 1
    }

    /// The numeric id.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid action id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid action id")]
pub struct ParseActionIdError(String);

impl FromStr for ActionId {
    type Err = ParseActionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ParseActionIdError(s.to_string())),
        }
    }
}

/// The closed set of group action variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// A submit button acting immediately on the selected rows.
    Button,
    /// A choice from `options` (value → label).
    Select {
        /// Choices as value → label.
        options: IndexMap<String, String>,
    },
    /// Several choices from `options` (value → label).
    MultiSelect {
        /// Choices as value → label.
        options: IndexMap<String, String>,
    },
    /// Free single-line text.
    Text,
    /// Free multi-line text.
    Textarea,
}

impl ActionKind {
    /// Returns true for button actions.
    pub fn is_button(&self) -> bool {
        matches!(self, ActionKind::Button)
    }

    /// Options of select and multi-select actions.
    pub fn options(&self) -> Option<&IndexMap<String, String>> {
        match self {
            ActionKind::Select { options } | ActionKind::MultiSelect { options } => Some(options),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ActionKind::Button => "button",
            ActionKind::Select { .. } => "select",
            ActionKind::MultiSelect { .. } => "multi_select",
            ActionKind::Text => "text",
            ActionKind::Textarea => "textarea",
        }
    }
}

/// A bulk operation offered for the selected grid rows.
///
/// Created through the `add_*_action` methods of
/// [`crate::GroupActionCollection`], which hand back a mutable reference so
/// the caller can attach a callback:
///
/// ```rust
/// use grid_actions::{GridInfo, GroupActionCollection};
///
/// let mut actions = GroupActionCollection::new(GridInfo::new("ordersGrid"));
/// actions
///     .add_button_action("Delete", Some("btn btn-danger"))
///     .on_click(|ids| println!("deleting {:?}", ids));
/// actions
///     .add_select_action("Set status", [("open", "Open"), ("closed", "Closed")])
///     .on_select(|ids, status| println!("{:?} -> {:?}", ids, status));
/// ```
pub struct GroupAction {
    title: String,
    class: Option<String>,
    attributes: IndexMap<String, String>,
    kind: ActionKind,
    on_select: Option<SelectCallback>,
    on_click: Option<ClickCallback>,
}

impl GroupAction {
    /// Creates an action without callbacks.
    pub fn new(title: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            title: title.into(),
            class: None,
            attributes: IndexMap::new(),
            kind,
            on_select: None,
            on_click: None,
        }
    }

    /// Display title, also the lookup key for
    /// [`crate::GroupActionCollection::action_by_title`].
    pub fn title(&self) -> &str {
        &self.title
    }

    /// CSS class of the emitted control.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Extra rendering attributes of the emitted control.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Variant and variant data.
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Returns true if a select or multi-select action has options.
    pub fn has_options(&self) -> bool {
        self.kind.options().is_some_and(|options| !options.is_empty())
    }

    /// Sets the CSS class.
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.class = Some(class.into());
        self
    }

    /// Sets one extra rendering attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets several extra rendering attributes.
    pub fn add_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the callback run when this action is executed from the chooser.
    pub fn on_select<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&[String], Option<&FieldValue>) + 'static,
    {
        if self.kind.is_button() {
            tracing::warn!("on_select set on button action '{}'; buttons only fire on_click", self.title);
        }
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Sets the callback run when this button action is pressed.
    pub fn on_click<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&[String]) + 'static,
    {
        if !self.kind.is_button() {
            tracing::warn!(
                "on_click set on {} action '{}'; only buttons fire on_click",
                self.kind.label(),
                self.title
            );
        }
        self.on_click = Some(Box::new(callback));
        self
    }

    pub(crate) fn select(&self, ids: &[String], value: Option<&FieldValue>) {
        match &self.on_select {
            Some(callback) => callback(ids, value),
            None => tracing::debug!("Group action '{}' has no on_select callback", self.title),
        }
    }

    pub(crate) fn click(&self, ids: &[String]) {
        match &self.on_click {
            Some(callback) => callback(ids),
            None => tracing::debug!("Group action '{}' has no on_click callback", self.title),
        }
    }
}

impl fmt::Debug for GroupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupAction")
            .field("title", &self.title)
            .field("class", &self.class)
            .field("attributes", &self.attributes)
            .field("kind", &self.kind)
            .field("on_select", &self.on_select.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
