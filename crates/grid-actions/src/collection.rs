// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The ordered registry of a grid's group actions.

use indexmap::IndexMap;

use crate::action::{ActionId, ActionKind, GroupAction};
use crate::config::GroupActionConfig;
use crate::error::{GroupActionError, Result};
use crate::form::HttpData;

/// Default prefix of icon CSS classes.
pub const DEFAULT_ICON_PREFIX: &str = "fa fa-";

/// What the group actions need to know about their hosting grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInfo {
    full_name: String,
    icon_prefix: String,
}

impl GridInfo {
    /// Describes a grid by its full component name.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            icon_prefix: DEFAULT_ICON_PREFIX.to_string(),
        }
    }

    /// Sets the icon class prefix (e.g. `"bi bi-"`).
    pub fn with_icon_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.icon_prefix = prefix.into();
        self
    }

    /// Full component name of the grid.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Icon class prefix.
    pub fn icon_prefix(&self) -> &str {
        &self.icon_prefix
    }

    /// Full name with ASCII letters lowercased, used to namespace html ids
    /// and field names. Non-ASCII characters are kept as they are.
    pub fn html_name(&self) -> String {
        self.full_name.to_ascii_lowercase()
    }
}

/// Group actions of one grid, in registration order.
///
/// Ids are assigned sequentially from 1 regardless of the action variant.
/// Actions can be added but never removed or reordered, so an id handed out
/// once stays valid for the lifetime of the collection.
///
/// # Example
///
/// ```rust
/// use grid_actions::{GridInfo, GroupActionCollection};
///
/// let mut actions = GroupActionCollection::new(GridInfo::new("usersGrid"));
/// actions.add_button_action("Delete", None);
/// actions.add_text_action("Add note");
///
/// let note = actions.action_by_title("Add note").unwrap();
/// assert_eq!(note.title(), "Add note");
/// assert_eq!(actions.len(), 2);
/// ```
#[derive(Debug)]
pub struct GroupActionCollection {
    grid: GridInfo,
    config: GroupActionConfig,
    actions: Vec<GroupAction>,
}

impl GroupActionCollection {
    /// Creates an empty collection with the default configuration.
    pub fn new(grid: GridInfo) -> Self {
        Self::with_config(grid, GroupActionConfig::default())
    }

    /// Creates an empty collection with a custom configuration.
    pub fn with_config(grid: GridInfo, config: GroupActionConfig) -> Self {
        Self {
            grid,
            config,
            actions: Vec::new(),
        }
    }

    /// The hosting grid.
    pub fn grid(&self) -> &GridInfo {
        &self.grid
    }

    /// Field names and translation keys in use.
    pub fn config(&self) -> &GroupActionConfig {
        &self.config
    }

    fn push(&mut self, action: GroupAction) -> &mut GroupAction {
        self.actions.push(action);
        let index = self.actions.len() - 1;

        tracing::debug!(
            "Registered group action {} '{}' on grid '{}'",
            ActionId::from_index(index),
            self.actions[index].title(),
            self.grid.full_name
        );

        &mut self.actions[index]
    }

    /// Adds a button action.
    pub fn add_button_action(&mut self, title: impl Into<String>, class: Option<&str>) -> &mut GroupAction {
        let mut action = GroupAction::new(title, ActionKind::Button);
        if let Some(class) = class {
            action.set_class(class);
        }
        self.push(action)
    }

    /// Adds a select action offering `options` (value → label).
    pub fn add_select_action<I, K, V>(&mut self, title: impl Into<String>, options: I) -> &mut GroupAction
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let options = collect_options(options);
        self.push(GroupAction::new(title, ActionKind::Select { options }))
    }

    /// Adds a multi-select action offering `options` (value → label).
    pub fn add_multi_select_action<I, K, V>(&mut self, title: impl Into<String>, options: I) -> &mut GroupAction
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let options = collect_options(options);
        self.push(GroupAction::new(title, ActionKind::MultiSelect { options }))
    }

    /// Adds a single-line text action.
    pub fn add_text_action(&mut self, title: impl Into<String>) -> &mut GroupAction {
        self.push(GroupAction::new(title, ActionKind::Text))
    }

    /// Adds a multi-line text action.
    pub fn add_textarea_action(&mut self, title: impl Into<String>) -> &mut GroupAction {
        self.push(GroupAction::new(title, ActionKind::Textarea))
    }

    /// Returns the first action registered under `title`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupActionError::NotFound`] if no action has that title.
    pub fn action_by_title(&self, title: &str) -> Result<&GroupAction> {
        self.actions
            .iter()
            .find(|action| action.title() == title)
            .ok_or_else(|| GroupActionError::NotFound(title.to_string()))
    }

    /// Returns the first action registered under `title`, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`GroupActionError::NotFound`] if no action has that title.
    pub fn action_by_title_mut(&mut self, title: &str) -> Result<&mut GroupAction> {
        self.actions
            .iter_mut()
            .find(|action| action.title() == title)
            .ok_or_else(|| GroupActionError::NotFound(title.to_string()))
    }

    /// Returns the action with the given id.
    pub fn get(&self, id: ActionId) -> Option<&GroupAction> {
        self.actions.get(id.index())
    }

    /// Returns the action with the given id, mutably.
    pub fn get_mut(&mut self, id: ActionId) -> Option<&mut GroupAction> {
        self.actions.get_mut(id.index())
    }

    /// Iterates over `(id, action)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &GroupAction)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| (ActionId::from_index(index), action))
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no action is registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Resolves a submitted id string.
    ///
    /// A string that is not a registered id means the rendered form and the
    /// registry disagree, which is reported as
    /// [`GroupActionError::UnknownAction`].
    pub(crate) fn resolve(&self, raw: &str) -> Result<(ActionId, &GroupAction)> {
        raw.parse::<ActionId>()
            .ok()
            .and_then(|id| self.get(id).map(|action| (id, action)))
            .ok_or_else(|| GroupActionError::UnknownAction(raw.to_string()))
    }

    /// Name of the per-row checkbox field list, e.g. `ordersgrid_group_action_item[]`.
    pub fn row_field_name(&self) -> String {
        format!("{}{}", self.grid.html_name(), self.config.row_field_suffix)
    }

    /// Html id of the execute control, unique per grid.
    pub fn execute_html_id(&self) -> String {
        format!("{}group_action_submit", self.grid.html_name())
    }

    /// Html id of an action's own control.
    pub fn sub_control_html_id(&self, id: ActionId) -> String {
        format!("{}{}", self.config.id_attribute_prefix, id)
    }

    /// Row ids checked in a submission, in order, without duplicates.
    pub fn selected_row_ids(&self, data: &HttpData) -> Vec<String> {
        data.keys_of(&self.row_field_name()).into_iter().collect()
    }
}

fn collect_options<I, K, V>(options: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    options
        .into_iter()
        .map(|(value, label)| (value.into(), label.into()))
        .collect()
}
