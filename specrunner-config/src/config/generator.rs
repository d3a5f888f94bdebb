// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::helpers::parse_bool;
use crate::errors::ConfigLoadError;
use crate::parse::RawSection;

pub(crate) const GENERATOR_TAG: &str = "generator";

/// Type for the `generator` section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Whether generated test-fixture sources are kept on disk for debugging.
    pub allow_debug_generated_files: bool,
}

impl GeneratorConfig {
    pub(crate) fn from_raw(raw: Option<&RawSection>) -> Result<Self, ConfigLoadError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let mut config = Self::default();
        if let Some(value) = raw.get("allowDebugGeneratedFiles") {
            config.allow_debug_generated_files =
                parse_bool(GENERATOR_TAG, "allowDebugGeneratedFiles", value)?;
        }
        Ok(config)
    }
}
