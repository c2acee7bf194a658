// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for grid group actions.
//!
//! This module defines [`GroupActionError`], the main error enum.
//!
//! # Error Categories
//!
//! - **Configuration errors**: the form cannot host group actions (no translator)
//! - **Lookup errors**: an action title or id is not registered
//! - **Request errors**: the submitted body could not be decoded
//! - **Config file errors**: `grid-actions.toml` could not be read or parsed
//!
//! Not every unusual submission is an error. A submit that no group action
//! control triggered, or an execute press with nothing chosen, is simply
//! ignored by the dispatcher.

use thiserror::Error;

use crate::body::BodyParseError;

/// The main error type for group action operations.
#[derive(Error, Debug)]
pub enum GroupActionError {
    /// The form is missing a collaborator required to emit controls.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No action with the given title is registered.
    #[error("Group action {0} does not exist.")]
    NotFound(String),

    /// A submitted action id is not present in the registry.
    ///
    /// The rendered form and the registry are out of sync. This is an
    /// integration bug and is never swallowed.
    #[error("Group action id '{0}' is not registered (form and registry out of sync)")]
    UnknownAction(String),

    /// A named form container does not exist.
    #[error("Form container '{0}' does not exist")]
    MissingContainer(String),

    /// A named control does not exist in its container.
    #[error("Form control '{0}' does not exist")]
    MissingControl(String),

    /// The form schema could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request body could not be decoded into form data.
    #[error("Invalid request body: {0}")]
    Body(#[from] BodyParseError),

    /// The configuration file is not valid TOML for [`crate::GroupActionConfig`].
    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with [`GroupActionError`].
pub type Result<T> = std::result::Result<T, GroupActionError>;
