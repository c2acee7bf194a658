// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Routing of a submitted form to the action that fired.

use crate::collection::GroupActionCollection;
use crate::error::Result;
use crate::form::{Control, FieldValue, Form, SubmitHandler};

impl GroupActionCollection {
    /// Name of the submit control that triggered the submission.
    ///
    /// The execute control wins; otherwise the first submitted button of the
    /// group action container.
    fn form_submitter(&self, form: &Form<'_>) -> Option<String> {
        let config = self.config();
        let container = form.container(&config.container_name)?;

        if container
            .get(&config.execute_name)
            .is_some_and(Control::is_submitted_by)
        {
            return Some(config.execute_name.clone());
        }

        container
            .controls()
            .find(|control| control.is_submit() && control.is_submitted_by())
            .map(|control| control.name().to_string())
    }
}

impl SubmitHandler for GroupActionCollection {
    /// Dispatches the submission to the action that fired.
    ///
    /// - Execute pressed: the chosen action's `on_select` receives the row ids
    ///   and the value of the action's own control, then the chooser is
    ///   cleared so a reload does not run it again.
    /// - A button pressed: its `on_click` receives the row ids.
    ///
    /// Submissions not triggered by a group action control, and execute
    /// presses with nothing chosen, are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GroupActionError::UnknownAction`] if the submitted id
    /// is not registered.
    fn submitted(&self, form: &mut Form<'_>) -> Result<()> {
        let config = self.config();

        let Some(submitter) = self.form_submitter(form) else {
            tracing::debug!("Form '{}' not submitted by a group action control", form.name());
            return Ok(());
        };

        let ids = form
            .http_data()
            .map(|data| self.selected_row_ids(data))
            .unwrap_or_default();

        if submitter == config.execute_name {
            let chosen = form
                .value(&config.container_name, &config.chooser_name)
                .and_then(FieldValue::as_str)
                .map(str::to_string);

            let Some(chosen) = chosen else {
                tracing::debug!("Execute pressed on grid '{}' with no action chosen", self.grid().full_name());
                return Ok(());
            };

            let (id, action) = self.resolve(&chosen)?;
            let value = form.value(&config.container_name, &chosen).cloned();

            tracing::debug!(
                "Group action {} '{}' selected for {} row(s)",
                id,
                action.title(),
                ids.len()
            );
            action.select(&ids, value.as_ref());

            form.set_value(&config.container_name, &config.chooser_name, None)?;
        } else {
            let (id, action) = self.resolve(&submitter)?;

            tracing::debug!(
                "Group action {} '{}' clicked for {} row(s)",
                id,
                action.title(),
                ids.len()
            );
            action.click(&ids);
        }

        Ok(())
    }
}
