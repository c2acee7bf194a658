// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # grid-actions
//!
//! Bulk ("group") actions for server-rendered data grids.
//!
//! A grid owner registers actions (buttons, selects, multi-selects, text and
//! textarea inputs) that act on the rows a user has checked. The crate emits
//! the matching controls into a form, with the visibility toggles and
//! conditional validation rules a UI layer needs, and on submission works out
//! which action fired and hands it the selected row ids.
//!
//! ## Features
//!
//! - Ordered action registry with stable, sequential ids
//! - Form emission: buttons, a chooser, per-action inputs, an execute button
//! - Declarative toggles and rules, serializable for any UI layer
//! - Submit dispatch from urlencoded or multipart request bodies
//! - Configurable field names and translation keys (TOML)
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_actions::{Form, FormRequest, GridInfo, GroupActionCollection, MapTranslator};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let deleted = Rc::new(RefCell::new(Vec::new()));
//!
//! let mut actions = GroupActionCollection::new(GridInfo::new("ordersGrid"));
//! let sink = Rc::clone(&deleted);
//! actions
//!     .add_button_action("Delete", Some("btn btn-danger"))
//!     .on_click(move |ids| sink.borrow_mut().extend_from_slice(ids));
//!
//! let mut form = Form::new("ordersGridForm").with_translator(MapTranslator::new());
//! actions.add_to_form_container(&mut form)?;
//!
//! let request = FormRequest::new("POST")
//!     .with_headers([("content-type".into(), "application/x-www-form-urlencoded".into())].into())
//!     .with_body(b"ordersgrid_group_action_item%5B42%5D=on&group_action%5B1%5D=Delete".to_vec());
//! form.process(&request)?;
//!
//! assert_eq!(*deleted.borrow(), vec!["42".to_string()]);
//! # Ok::<(), grid_actions::GroupActionError>(())
//! ```

/// Group action types.
pub mod action;
/// Action registry.
pub mod collection;
/// Configuration of field names and translation keys.
pub mod config;
/// Error types.
pub mod error;
/// Framework-neutral form model.
pub mod form;
/// HTTP request abstraction.
pub mod request;
/// Shared request body parsing helpers.
mod body;
/// Emission of controls into a form.
mod binder;
/// Submission dispatch.
mod dispatch;

pub use action::{ActionId, ActionKind, ClickCallback, GroupAction, ParseActionIdError, SelectCallback};
pub use body::BodyParseError;
pub use collection::{GridInfo, GroupActionCollection, DEFAULT_ICON_PREFIX};
pub use config::{GroupActionConfig, TranslationKeys};
pub use error::*;
pub use form::{
    Condition, Container, Control, ControlKind, FieldValue, Form, HttpData, MapTranslator, Rule,
    SubmitHandler, Toggle, Translator,
};
pub use request::FormRequest;
