// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed runtime configuration for the test runner.
//!
//! A configuration document is parsed into raw sections, each section is
//! mapped to its typed counterpart (applying defaults for everything the
//! document omits), the typed sections are assembled into a
//! [`RuntimeConfiguration`], and the result is validated as a whole. Loading
//! either produces a complete, immutable configuration or fails with the
//! first error -- never a partial result.

mod config_impl;
mod generator;
mod helpers;
mod identifier;
mod language;
mod provider;
mod runtime_behavior;
mod trace;

pub use config_impl::*;
pub use generator::*;
pub use identifier::*;
pub use language::*;
pub use provider::*;
pub use runtime_behavior::*;
pub use trace::*;
