// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Framework-neutral form model.
//!
//! Group actions are emitted into a [`Form`] and read back from it on submit.
//! The model is intentionally small: named [`Container`]s of named
//! [`Control`]s, declarative [`Rule`]s and [`Toggle`]s for the UI layer, the raw
//! [`HttpData`] of a submission, and a submit hook. A host framework adapter
//! maps its own form tree onto it (or renders straight from [`Form::schema`]).
//!
//! # Lifecycle
//!
//! 1. Build the form and attach a [`Translator`].
//! 2. Let components emit controls and register [`SubmitHandler`]s.
//! 3. On a POST, call [`Form::process`] (or [`Form::submit`] with decoded data):
//!    every control loads its value, then every handler runs in registration
//!    order.

mod container;
mod control;
mod http;
mod translator;

pub use container::Container;
pub use control::{Condition, Control, ControlKind, FieldValue, Rule, Toggle};
pub use http::HttpData;
pub use translator::{MapTranslator, Translator};

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::error::{GroupActionError, Result};
use crate::request::FormRequest;

/// A component that reacts to form submission.
pub trait SubmitHandler {
    /// Called once per submission, whichever control triggered it.
    fn submitted(&self, form: &mut Form<'_>) -> Result<()>;
}

/// A form: containers of controls plus submission state.
///
/// `'h` is the lifetime of the translator and of the registered submit
/// handlers, typically the request scope.
pub struct Form<'h> {
    name: String,
    translator: Option<Box<dyn Translator + 'h>>,
    containers: IndexMap<String, Container>,
    http_data: Option<HttpData>,
    on_submit: Vec<&'h dyn SubmitHandler>,
}

#[derive(Serialize)]
struct FormSchema<'a> {
    name: &'a str,
    containers: &'a IndexMap<String, Container>,
}

impl<'h> Form<'h> {
    /// Creates an empty form without a translator.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            translator: None,
            containers: IndexMap::new(),
            http_data: None,
            on_submit: Vec::new(),
        }
    }

    /// Attaches a translator and returns the form.
    pub fn with_translator(mut self, translator: impl Translator + 'h) -> Self {
        self.set_translator(translator);
        self
    }

    /// Attaches or replaces the translator.
    pub fn set_translator(&mut self, translator: impl Translator + 'h) {
        self.translator = Some(Box::new(translator));
    }

    /// The form's translator, if any.
    pub fn translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref().map(|t| t as &dyn Translator)
    }

    /// Form name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the named container, creating it if needed.
    pub fn add_container(&mut self, name: &str) -> &mut Container {
        self.containers
            .entry(name.to_string())
            .or_insert_with(|| Container::new(name))
    }

    /// Returns a container by name.
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    /// Returns a container by name, mutably.
    pub fn container_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.containers.get_mut(name)
    }

    /// Containers in insertion order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.values()
    }

    /// Registers a handler to run on every submission.
    pub fn on_submit(&mut self, handler: &'h dyn SubmitHandler) {
        self.on_submit.push(handler);
    }

    /// Raw data of the current submission.
    pub fn http_data(&self) -> Option<&HttpData> {
        self.http_data.as_ref()
    }

    /// Returns true once [`Form::submit`] has been called.
    pub fn is_submitted(&self) -> bool {
        self.http_data.is_some()
    }

    /// Checks whether the given submit button triggered the submission.
    pub fn is_submitted_by(&self, container: &str, control: &str) -> bool {
        self.container(container)
            .and_then(|c| c.get(control))
            .is_some_and(Control::is_submitted_by)
    }

    /// Current value of a control.
    pub fn value(&self, container: &str, control: &str) -> Option<&FieldValue> {
        self.container(container)
            .and_then(|c| c.get(control))
            .and_then(Control::value)
    }

    /// Overrides the value of a control.
    pub fn set_value(&mut self, container: &str, control: &str, value: Option<FieldValue>) -> Result<()> {
        let target = self
            .containers
            .get_mut(container)
            .ok_or_else(|| GroupActionError::MissingContainer(container.to_string()))?
            .get_mut(control)
            .ok_or_else(|| GroupActionError::MissingControl(format!("{}[{}]", container, control)))?;

        target.set_value(value);
        Ok(())
    }

    /// Submits raw form data.
    ///
    /// Loads every control, then runs the submit handlers in registration
    /// order. The first handler error stops the chain and is returned.
    pub fn submit(&mut self, data: HttpData) -> Result<()> {
        for container in self.containers.values_mut() {
            container.load(&data);
        }
        self.http_data = Some(data);

        tracing::debug!("Form '{}' submitted, running {} handler(s)", self.name, self.on_submit.len());

        let handlers = std::mem::take(&mut self.on_submit);
        let mut result = Ok(());
        for handler in &handlers {
            result = handler.submitted(self);
            if result.is_err() {
                break;
            }
        }
        self.on_submit = handlers;

        result
    }

    /// Submits the form if `request` is a form submission.
    ///
    /// Returns `Ok(false)` for requests that carry no form data (a GET, a
    /// JSON POST).
    pub fn process(&mut self, request: &FormRequest) -> Result<bool> {
        if !request.is_form_submission() {
            return Ok(false);
        }

        let data = request.form_data()?;
        self.submit(data)?;
        Ok(true)
    }

    /// Serializes the containers, controls, rules and toggles for a UI layer.
    pub fn schema(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(FormSchema {
            name: &self.name,
            containers: &self.containers,
        })?)
    }
}

impl fmt::Debug for Form<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.name)
            .field("has_translator", &self.translator.is_some())
            .field("containers", &self.containers)
            .field("http_data", &self.http_data)
            .field("on_submit", &self.on_submit.len())
            .finish()
    }
}
