// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Form controls and their declarative rules.

use indexmap::IndexMap;
use serde::Serialize;

use super::HttpData;

/// A value loaded from a submitted control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Select, text and text area controls.
    Single(String),
    /// Multi-select controls.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Returns the value of a single-valued control.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Single(value) => Some(value),
            FieldValue::Multiple(_) => None,
        }
    }

    /// Returns all values; a single value is a one-element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            FieldValue::Single(value) => std::slice::from_ref(value),
            FieldValue::Multiple(values) => values,
        }
    }

    /// Returns true for an empty string or an empty selection.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(value) => value.is_empty(),
            FieldValue::Multiple(values) => values.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Multiple(values)
    }
}

/// A condition on another control's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Condition {
    /// The value equals the given string (or contains it, for multi-selects).
    Equal(String),
    /// The value is present and non-empty.
    Filled,
}

impl Condition {
    /// Evaluates the condition against a control value.
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        match (self, value) {
            (_, None) => false,
            (Condition::Equal(expected), Some(value)) => {
                value.as_slice().iter().any(|v| v == expected)
            }
            (Condition::Filled, Some(value)) => !value.is_empty(),
        }
    }
}

/// A validation rule declared on a control.
///
/// Rules are data: the UI layer (or the host framework) evaluates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// The control must be filled while `control` satisfies `condition`.
    RequiredWhen {
        /// Name of the control the condition looks at.
        control: String,
        /// Condition on that control.
        condition: Condition,
        /// Message shown when the rule fails.
        message: String,
    },
}

/// Client-side visibility switch: while the owning control satisfies
/// `condition`, the element with html id `target` is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle {
    /// Condition on the owning control's value.
    pub condition: Condition,
    /// Html id of the element to show.
    pub target: String,
}

/// The kind of a control, with its kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlKind {
    /// Submit button.
    Submit {
        /// Button caption.
        caption: String,
    },
    /// Single-choice dropdown.
    Select {
        /// Items as value → label.
        items: IndexMap<String, String>,
        /// Prompt shown for "no value".
        prompt: Option<String>,
    },
    /// Multiple-choice dropdown.
    MultiSelect {
        /// Items as value → label.
        items: IndexMap<String, String>,
    },
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
}

/// A named control inside a [`super::Container`].
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    name: String,
    #[serde(flatten)]
    kind: ControlKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_id: Option<String>,
    attributes: IndexMap<String, String>,
    rules: Vec<Rule>,
    toggles: Vec<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_scope: Option<Vec<String>>,
    #[serde(skip)]
    value: Option<FieldValue>,
    #[serde(skip)]
    submitted: bool,
}

impl Control {
    /// Creates a control with no attributes or rules.
    pub fn new(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            kind,
            html_id: None,
            attributes: IndexMap::new(),
            rules: Vec::new(),
            toggles: Vec::new(),
            validation_scope: None,
            value: None,
            submitted: false,
        }
    }

    /// Control name, unique within its container.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Control kind.
    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    /// Returns true for submit buttons.
    pub fn is_submit(&self) -> bool {
        matches!(self.kind, ControlKind::Submit { .. })
    }

    /// Html id of the rendered element, if set.
    pub fn html_id(&self) -> Option<&str> {
        self.html_id.as_deref()
    }

    /// Returns a rendering attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All rendering attributes, in the order they were set.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Validation rules.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Visibility toggles driven by this control's value.
    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    /// Containers validated when this submit button is pressed.
    /// `None` means the whole form.
    pub fn validation_scope(&self) -> Option<&[String]> {
        self.validation_scope.as_deref()
    }

    /// Value loaded from the last submission (or set explicitly).
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Returns true if this submit button triggered the last submission.
    pub fn is_submitted_by(&self) -> bool {
        self.submitted
    }

    /// Sets a rendering attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the html id.
    pub fn set_html_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.html_id = Some(id.into());
        self
    }

    /// Adds a validation rule.
    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Adds a visibility toggle.
    pub fn add_toggle(&mut self, condition: Condition, target: impl Into<String>) -> &mut Self {
        self.toggles.push(Toggle {
            condition,
            target: target.into(),
        });
        self
    }

    /// Limits validation on submit to the given containers.
    pub fn set_validation_scope(&mut self, containers: Vec<String>) -> &mut Self {
        self.validation_scope = Some(containers);
        self
    }

    /// Overrides the control value.
    pub fn set_value(&mut self, value: Option<FieldValue>) -> &mut Self {
        self.value = value;
        self
    }

    /// HTML field name of this control inside `container`.
    pub fn html_name(&self, container: &str) -> String {
        match self.kind {
            ControlKind::MultiSelect { .. } => format!("{}[{}][]", container, self.name),
            _ => format!("{}[{}]", container, self.name),
        }
    }

    /// Loads value and submitted state from raw form data.
    ///
    /// Choices outside the item set are dropped, so a select's prompt (or a
    /// forged value) loads as no value.
    pub(crate) fn load(&mut self, container: &str, data: &HttpData) {
        let key = self.html_name(container);

        match &self.kind {
            ControlKind::Submit { .. } => {
                self.submitted = data.contains(&key);
                self.value = None;
            }
            ControlKind::Select { items, .. } => {
                self.submitted = false;
                self.value = data
                    .first(&key)
                    .filter(|v| items.contains_key(*v))
                    .map(FieldValue::from);
            }
            ControlKind::MultiSelect { items } => {
                self.submitted = false;
                let values = data
                    .all(&key)
                    .into_iter()
                    .filter(|v| items.contains_key(*v))
                    .map(str::to_string)
                    .collect::<Vec<_>>();
                self.value = Some(FieldValue::Multiple(values));
            }
            ControlKind::Text | ControlKind::TextArea => {
                self.submitted = false;
                self.value = Some(FieldValue::from(data.first(&key).unwrap_or_default()));
            }
        }
    }
}
