// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Emission of group action controls into a form.

use indexmap::IndexMap;

use crate::action::{ActionKind, GroupAction};
use crate::collection::GroupActionCollection;
use crate::error::{GroupActionError, Result};
use crate::form::{Condition, Control, Form, Rule};

impl GroupActionCollection {
    /// Emits the group action controls into `form` and registers the
    /// collection as one of its submit handlers.
    ///
    /// All controls live in the container named by
    /// [`crate::GroupActionConfig::container_name`]:
    ///
    /// - one submit button per button action, named by its id;
    /// - a chooser select listing every other action, if there is any;
    /// - one control per non-button action, named by its id, shown only
    ///   while the chooser points at it (selects without options are skipped);
    /// - an execute button, validating only this container, shown once
    ///   something is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`GroupActionError::Configuration`] if the form has no
    /// translator.
    pub fn add_to_form_container<'h>(&'h self, form: &mut Form<'h>) -> Result<()> {
        let keys = &self.config().translations;

        let translator = form.translator().ok_or_else(|| {
            GroupActionError::Configuration(format!(
                "form '{}' has no translator; group actions need one for prompts and validation messages",
                form.name()
            ))
        })?;
        let prompt = translator.translate(&keys.prompt_key);
        let execute_caption = translator.translate(&keys.execute_caption_key);
        let required_message = translator.translate(&keys.required_message_key);

        let config = self.config();
        let container_name = config.container_name.clone();
        let container = form.add_container(&container_name);

        for (id, action) in self.iter() {
            if action.kind().is_button() {
                let control = container.add_submit(id.to_string(), action.title());
                apply_presentation(control, action);
            }
        }

        let chooser_items: IndexMap<String, String> = self
            .iter()
            .filter(|(_, action)| !action.kind().is_button())
            .map(|(id, action)| (id.to_string(), action.title().to_string()))
            .collect();
        let has_chooser = !chooser_items.is_empty();

        if has_chooser {
            container.add_select(&config.chooser_name, chooser_items, Some(prompt));
        }

        for (id, action) in self.iter() {
            let html_id = self.sub_control_html_id(id);
            let name = id.to_string();

            let control = match action.kind() {
                ActionKind::Button => continue,
                ActionKind::Select { options } => {
                    if options.is_empty() {
                        tracing::debug!("Group action {} '{}' has no options, control skipped", id, action.title());
                        continue;
                    }
                    container.add_select(name, options.clone(), None)
                }
                ActionKind::MultiSelect { options } => {
                    if options.is_empty() {
                        tracing::debug!("Group action {} '{}' has no options, control skipped", id, action.title());
                        continue;
                    }
                    container
                        .add_multi_select(name, options.clone())
                        .set_attribute("data-datagrid-multiselect-id", &html_id)
                        .set_attribute("data-style", "hidden")
                        .set_attribute(
                            "data-selected-icon-check",
                            format!("{}check", self.grid().icon_prefix()),
                        )
                }
                ActionKind::Text => container
                    .add_text(&name)
                    .add_rule(required_when_chosen(&config.chooser_name, &name, &required_message)),
                ActionKind::Textarea => container
                    .add_text_area(&name)
                    .add_rule(required_when_chosen(&config.chooser_name, &name, &required_message)),
            };

            control.set_html_id(html_id);
            apply_presentation(control, action);
        }

        if has_chooser {
            let execute_html_id = self.execute_html_id();

            if let Some(chooser) = container.get_mut(&config.chooser_name) {
                for (id, _) in self.iter() {
                    chooser.add_toggle(Condition::Equal(id.to_string()), self.sub_control_html_id(id));
                }
                chooser.add_toggle(Condition::Filled, execute_html_id.as_str());
            }

            container
                .add_submit(&config.execute_name, execute_caption)
                .set_validation_scope(vec![container_name.clone()])
                .set_html_id(execute_html_id);
        }

        tracing::debug!(
            "Emitted {} group action control(s) for grid '{}' into container '{}'",
            container.len(),
            self.grid().full_name(),
            container_name
        );

        form.on_submit(self);
        Ok(())
    }
}

fn required_when_chosen(chooser: &str, id: &str, message: &str) -> Rule {
    Rule::RequiredWhen {
        control: chooser.to_string(),
        condition: Condition::Equal(id.to_string()),
        message: message.to_string(),
    }
}

/// Copies the action's class and extra attributes onto its control.
fn apply_presentation(control: &mut Control, action: &GroupAction) {
    if let Some(class) = action.class() {
        control.set_attribute("class", class);
    }

    for (name, value) in action.attributes() {
        control.set_attribute(name, value);
    }
}
