// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration resolution for the specrunner test runner.
//!
//! This crate turns a configuration document into a validated, immutable
//! [`RuntimeConfiguration`](config::RuntimeConfiguration). The document can
//! come from the host application's configuration store (see [`source`]) or
//! be supplied directly as an in-memory XML fragment. Everything the document
//! omits -- whole sections or individual attributes -- is filled in from
//! built-in defaults, so loading with no document at all is perfectly valid.
//!
//! Test-framework adapters, trace listeners and other collaborators are
//! referenced by identifier only; resolving those identifiers to
//! implementations happens outside this crate.

pub mod config;
pub mod errors;
mod parse;
pub mod source;
