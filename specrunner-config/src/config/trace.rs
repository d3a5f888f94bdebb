// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::helpers::{opt_attr, parse_bool, parse_duration};
use crate::errors::ConfigLoadError;
use crate::parse::RawSection;
use std::time::Duration;

pub(crate) const TRACE_TAG: &str = "trace";

/// The identifier of the built-in trace listener.
pub const DEFAULT_TRACE_LISTENER: &str = "trace.default";

/// Type for the `trace` section: step-execution tracing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceConfig {
    /// Whether successful steps are traced, not just failing ones.
    pub trace_successful_steps: bool,

    /// Whether per-step timings are traced.
    pub trace_timings: bool,

    /// Timing traces for steps faster than this are suppressed.
    pub min_traced_duration: Duration,

    /// The identifier of the trace listener to instantiate.
    pub listener: String,
}

impl TraceConfig {
    pub(crate) fn from_raw(raw: Option<&RawSection>) -> Result<Self, ConfigLoadError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let mut config = Self::default();
        if let Some(value) = raw.get("traceSuccessfulSteps") {
            config.trace_successful_steps = parse_bool(TRACE_TAG, "traceSuccessfulSteps", value)?;
        }
        if let Some(value) = raw.get("traceTimings") {
            config.trace_timings = parse_bool(TRACE_TAG, "traceTimings", value)?;
        }
        if let Some(value) = raw.get("minTracedDuration") {
            config.min_traced_duration = parse_duration(TRACE_TAG, "minTracedDuration", value)?;
        }
        if let Some(listener) = opt_attr(raw, "listener") {
            config.listener = listener.to_owned();
        }
        Ok(config)
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            trace_successful_steps: true,
            trace_timings: false,
            min_traced_duration: Duration::ZERO,
            listener: DEFAULT_TRACE_LISTENER.to_owned(),
        }
    }
}
