// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::helpers::parse_bool;
use crate::errors::ConfigLoadError;
use crate::parse::RawSection;
use std::{fmt, str::FromStr};

pub(crate) const RUNTIME_TAG: &str = "runtime";

/// The test outcome reported for steps with missing or pending definitions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MissingStepsOutcome {
    /// Report the test as ignored.
    Ignore,

    /// Report the test as inconclusive.
    ///
    /// This is the default.
    #[default]
    Inconclusive,

    /// Report the test as failed.
    Fail,
}

impl MissingStepsOutcome {
    /// The accepted configuration values, in declaration order.
    pub fn variants() -> [&'static str; 3] {
        ["Ignore", "Inconclusive", "Fail"]
    }

    /// Matches a configuration value case-insensitively.
    fn from_config_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "inconclusive" => Some(Self::Inconclusive),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

impl fmt::Display for MissingStepsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => write!(f, "Ignore"),
            Self::Inconclusive => write!(f, "Inconclusive"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

impl FromStr for MissingStepsOutcome {
    type Err = ConfigLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_config_str(s).ok_or_else(|| ConfigLoadError::InvalidValue {
            section: RUNTIME_TAG,
            attribute: "missingOrPendingStepsOutcome",
            value: s.to_owned(),
            expected: format!("one of {}", Self::variants().join(", ")),
        })
    }
}

/// Type for the `runtime` section: policies applied while executing steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeBehaviorConfig {
    /// Whether a step matching more than one definition is reported as an
    /// error instead of picking one arbitrarily.
    pub detect_ambiguous_matches: bool,

    /// Whether execution stops at the first failing step.
    pub stop_at_first_error: bool,

    /// The outcome reported for missing or pending step definitions.
    pub missing_or_pending_steps_outcome: MissingStepsOutcome,
}

impl RuntimeBehaviorConfig {
    pub(crate) fn from_raw(raw: Option<&RawSection>) -> Result<Self, ConfigLoadError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let mut config = Self::default();
        if let Some(value) = raw.get("detectAmbiguousMatches") {
            config.detect_ambiguous_matches =
                parse_bool(RUNTIME_TAG, "detectAmbiguousMatches", value)?;
        }
        if let Some(value) = raw.get("stopAtFirstError") {
            config.stop_at_first_error = parse_bool(RUNTIME_TAG, "stopAtFirstError", value)?;
        }
        if let Some(value) = raw.get("missingOrPendingStepsOutcome") {
            config.missing_or_pending_steps_outcome = value.parse()?;
        }
        Ok(config)
    }
}

impl Default for RuntimeBehaviorConfig {
    fn default() -> Self {
        Self {
            detect_ambiguous_matches: true,
            stop_at_first_error: false,
            missing_or_pending_steps_outcome: MissingStepsOutcome::Inconclusive,
        }
    }
}
