// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced while loading runtime configuration.

use camino::Utf8PathBuf;
use smol_str::SmolStr;
use std::io;
use thiserror::Error;

/// An error that occurs while loading a [`RuntimeConfiguration`](crate::config::RuntimeConfiguration).
///
/// Configuration loading is atomic: any of these errors means no configuration
/// was produced at all. A missing document, section or attribute is never an
/// error -- those are resolved through defaults.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigLoadError {
    /// The host configuration store has an entry for the requested section,
    /// but it could not be read at the storage layer.
    #[error("failed to read configuration section `{section}` from `{path}`")]
    StoreRead {
        /// The section that was being read.
        section: String,

        /// The location the store attempted to read.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: io::Error,
    },

    /// The configuration document is not well-formed XML.
    #[error("failed to parse configuration document at position {position}")]
    Parse {
        /// Byte offset into the document at which parsing failed.
        position: usize,

        /// The underlying error.
        #[source]
        error: quick_xml::Error,
    },

    /// The configuration document contains no root element.
    #[error("configuration document has no root element")]
    NoRootElement,

    /// An attribute value could not be coerced to its declared type.
    #[error("invalid value `{value}` for `{section}.{attribute}`: expected {expected}")]
    InvalidValue {
        /// The section element the attribute belongs to.
        section: &'static str,

        /// The attribute name as it appears in the document.
        attribute: &'static str,

        /// The offending value.
        value: String,

        /// A description of the expected type or format.
        expected: String,
    },

    /// A post-assembly invariant failed for a field.
    #[error("invalid configuration field `{field}`")]
    InvalidField {
        /// The field, as `section.attribute`.
        field: &'static str,

        /// The underlying error.
        #[source]
        error: InvalidIdentifier,
    },
}

/// The reason an identifier failed validation.
///
/// Returned by [`ProviderIdentifier::new`](crate::config::ProviderIdentifier::new).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidIdentifier {
    /// The identifier is empty.
    #[error("identifier is empty")]
    Empty,

    /// The identifier is not of the form (XID_Start)(XID_Continue | `-` | `.`)*.
    #[error("invalid identifier `{0}`")]
    InvalidXid(SmolStr),
}
