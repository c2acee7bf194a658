// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for the render → submit → dispatch cycle.
//!
//! Each test registers actions, emits them into a fresh form (as a page
//! render would), then submits raw request data the way a browser posts it.

use std::cell::RefCell;
use std::rc::Rc;

use grid_actions::{
    FieldValue, Form, FormRequest, GridInfo, GroupActionCollection, GroupActionError, HttpData, MapTranslator,
};

type Calls = Rc<RefCell<Vec<String>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("grid_actions=debug")
        .with_test_writer()
        .try_init();
}

fn translator() -> MapTranslator {
    MapTranslator::new()
        .with("datagrid.choose", "Choose an action")
        .with("datagrid.execute", "Execute")
        .with("datagrid.choose_input_required", "This field is required")
}

/// Delete (button, id 1) and Export (select a/b, id 2), recording every call.
fn delete_and_export(calls: &Calls) -> GroupActionCollection {
    let mut actions = GroupActionCollection::new(GridInfo::new("ordersGrid"));

    let sink = Rc::clone(calls);
    actions
        .add_button_action("Delete", Some("btn btn-danger"))
        .on_click(move |ids| sink.borrow_mut().push(format!("delete {:?}", ids)));

    let sink = Rc::clone(calls);
    actions
        .add_select_action("Export", [("a", "A"), ("b", "B")])
        .on_select(move |ids, value| sink.borrow_mut().push(format!("export {:?} {:?}", ids, value)));

    actions
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_button_press_calls_on_click_only() {
        init_tracing();
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        form.submit(HttpData::from_pairs([
            ("ordersgrid_group_action_item[10]", "on"),
            ("ordersgrid_group_action_item[11]", "on"),
            ("group_action[group_action]", ""),
            ("group_action[1]", "Delete"),
        ]))
        .unwrap();

        assert_eq!(*calls.borrow(), vec![r#"delete ["10", "11"]"#.to_string()]);
    }

    #[test]
    fn test_execute_calls_on_select_and_clears_chooser() {
        init_tracing();
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        form.submit(HttpData::from_pairs([
            ("ordersgrid_group_action_item[10]", "on"),
            ("group_action[group_action]", "2"),
            ("group_action[2]", "b"),
            ("group_action[submit]", "Execute"),
        ]))
        .unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![r#"export ["10"] Some(Single("b"))"#.to_string()]
        );
        assert_eq!(form.value("group_action", "group_action"), None);
        // The action's own control keeps its value.
        assert_eq!(form.value("group_action", "2"), Some(&FieldValue::from("b")));
    }

    #[test]
    fn test_execute_with_nothing_chosen_is_ignored() {
        init_tracing();
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        form.submit(HttpData::from_pairs([
            ("ordersgrid_group_action_item[10]", "on"),
            ("group_action[group_action]", ""),
            ("group_action[submit]", "Execute"),
        ]))
        .unwrap();

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_execute_with_button_id_chosen_is_ignored() {
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        // "1" is a button: it is not a chooser item, so it loads as no choice.
        form.submit(HttpData::from_pairs([
            ("group_action[group_action]", "1"),
            ("group_action[submit]", "Execute"),
        ]))
        .unwrap();

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_submission_from_elsewhere_is_ignored() {
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();
        form.add_container("filter").add_submit("filter", "Filter");

        form.submit(HttpData::from_pairs([
            ("ordersgrid_group_action_item[10]", "on"),
            ("filter[filter]", "Filter"),
        ]))
        .unwrap();

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_registry_out_of_sync_is_an_error() {
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        // The chooser item set was tampered with after render.
        form.container_mut("group_action")
            .unwrap()
            .add_select(
                "group_action",
                [("7".to_string(), "Gone".to_string())].into_iter().collect(),
                None,
            );

        let err = form
            .submit(HttpData::from_pairs([
                ("group_action[group_action]", "7"),
                ("group_action[submit]", "Execute"),
            ]))
            .unwrap_err();

        assert!(matches!(err, GroupActionError::UnknownAction(ref id) if id == "7"));
        assert!(calls.borrow().is_empty());
    }
}

#[cfg(test)]
mod row_selection_tests {
    use super::*;

    #[test]
    fn test_duplicate_row_keys_are_collapsed() {
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        form.submit(HttpData::from_pairs([
            ("ordersgrid_group_action_item[7]", "on"),
            ("ordersgrid_group_action_item[7]", "on"),
            ("ordersgrid_group_action_item[3]", "on"),
            ("group_action[1]", "Delete"),
        ]))
        .unwrap();

        assert_eq!(*calls.borrow(), vec![r#"delete ["7", "3"]"#.to_string()]);
    }

    #[test]
    fn test_other_grids_rows_are_not_selected() {
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        form.submit(HttpData::from_pairs([
            ("usersgrid_group_action_item[5]", "on"),
            ("group_action[1]", "Delete"),
        ]))
        .unwrap();

        assert_eq!(*calls.borrow(), vec!["delete []".to_string()]);
    }

    #[test]
    fn test_empty_row_keys_are_not_selected() {
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        // Row checkboxes are always rendered with the row id as their key.
        form.submit(HttpData::from_pairs([
            ("ordersgrid_group_action_item[]", "5"),
            ("ordersgrid_group_action_item[8]", "on"),
            ("group_action[1]", "Delete"),
        ]))
        .unwrap();

        assert_eq!(*calls.borrow(), vec![r#"delete ["8"]"#.to_string()]);
    }
}

#[cfg(test)]
mod value_tests {
    use super::*;

    #[test]
    fn test_text_and_multi_select_values_reach_callbacks() {
        let values: Rc<RefCell<Vec<Option<FieldValue>>>> = Rc::default();
        let mut actions = GroupActionCollection::new(GridInfo::new("grid"));

        let sink = Rc::clone(&values);
        actions
            .add_multi_select_action("Tag", [("red", "Red"), ("blue", "Blue")])
            .on_select(move |_, value| sink.borrow_mut().push(value.cloned()));

        let sink = Rc::clone(&values);
        actions
            .add_textarea_action("Comment")
            .on_select(move |_, value| sink.borrow_mut().push(value.cloned()));

        let mut form = Form::new("gridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        form.submit(HttpData::from_pairs([
            ("group_action[group_action]", "1"),
            ("group_action[1][]", "red"),
            ("group_action[1][]", "blue"),
            ("group_action[submit]", "Execute"),
        ]))
        .unwrap();

        form.submit(HttpData::from_pairs([
            ("group_action[group_action]", "2"),
            ("group_action[2]", "Checked by QA"),
            ("group_action[submit]", "Execute"),
        ]))
        .unwrap();

        assert_eq!(
            *values.borrow(),
            vec![
                Some(FieldValue::Multiple(vec!["red".into(), "blue".into()])),
                Some(FieldValue::from("Checked by QA")),
            ]
        );
    }

    #[test]
    fn test_select_without_options_gets_no_value() {
        let values: Rc<RefCell<Vec<Option<FieldValue>>>> = Rc::default();
        let mut actions = GroupActionCollection::new(GridInfo::new("grid"));

        let sink = Rc::clone(&values);
        actions
            .add_select_action("Move", Vec::<(String, String)>::new())
            .on_select(move |_, value| sink.borrow_mut().push(value.cloned()));

        let mut form = Form::new("gridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        form.submit(HttpData::from_pairs([
            ("group_action[group_action]", "1"),
            ("group_action[submit]", "Execute"),
        ]))
        .unwrap();

        assert_eq!(*values.borrow(), vec![None]);
    }
}

#[cfg(test)]
mod request_tests {
    use super::*;

    #[test]
    fn test_urlencoded_request_end_to_end() {
        init_tracing();
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        let request = FormRequest::new("POST")
            .with_headers([("Content-Type".into(), "application/x-www-form-urlencoded".into())].into())
            .with_body(
                b"ordersgrid_group_action_item%5B4%5D=on\
                  &group_action%5Bgroup_action%5D=2\
                  &group_action%5B2%5D=a\
                  &group_action%5Bsubmit%5D=Execute"
                    .to_vec(),
            );

        assert!(form.process(&request).unwrap());
        assert_eq!(
            *calls.borrow(),
            vec![r#"export ["4"] Some(Single("a"))"#.to_string()]
        );
    }

    #[test]
    fn test_get_request_does_not_dispatch() {
        let calls = Calls::default();
        let actions = delete_and_export(&calls);

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        assert!(!form.process(&FormRequest::new("GET")).unwrap());
        assert!(calls.borrow().is_empty());
    }
}

#[cfg(test)]
mod schema_tests {
    use super::*;

    #[test]
    fn test_schema_exposes_rule_table() {
        let calls = Calls::default();
        let mut actions = delete_and_export(&calls);
        actions.add_text_action("Note");

        let mut form = Form::new("ordersGridForm").with_translator(translator());
        actions.add_to_form_container(&mut form).unwrap();

        let schema = form.schema().unwrap();
        let controls = &schema["containers"]["group_action"]["controls"];

        assert_eq!(controls["1"]["type"], "submit");
        assert_eq!(controls["1"]["attributes"]["class"], "btn btn-danger");
        assert_eq!(controls["group_action"]["prompt"], "Choose an action");
        assert_eq!(controls["group_action"]["items"]["3"], "Note");
        assert_eq!(controls["group_action"]["toggles"][3]["condition"]["op"], "filled");
        assert_eq!(controls["group_action"]["toggles"][3]["target"], "ordersgridgroup_action_submit");
        assert_eq!(controls["3"]["rules"][0]["rule"], "required_when");
        assert_eq!(controls["3"]["rules"][0]["condition"]["value"], "3");
        assert_eq!(controls["3"]["rules"][0]["message"], "This field is required");
        assert_eq!(controls["submit"]["validation_scope"][0], "group_action");
    }
}
