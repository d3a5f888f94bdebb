// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attribute coercion helpers shared by the section mappers.

use crate::errors::ConfigLoadError;
use crate::parse::RawSection;
use std::time::Duration;

/// Returns an optional string attribute's value, treating an empty string as
/// absent.
///
/// Only for string and identifier attributes. Bool, duration and enum
/// attributes read the raw value directly so that an empty string fails
/// coercion like any other unacceptable value.
pub(super) fn opt_attr<'a>(raw: &'a RawSection, attribute: &str) -> Option<&'a str> {
    raw.get(attribute).map(String::as_str).filter(|v| !v.is_empty())
}

/// Coerces an attribute to a bool. Only case-insensitive `true` and `false`
/// are accepted.
pub(super) fn parse_bool(
    section: &'static str,
    attribute: &'static str,
    value: &str,
) -> Result<bool, ConfigLoadError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigLoadError::InvalidValue {
            section,
            attribute,
            value: value.to_owned(),
            expected: "`true` or `false`".to_owned(),
        })
    }
}

/// Coerces an attribute to a duration in `H:MM:SS[.fffffff]` form.
pub(super) fn parse_duration(
    section: &'static str,
    attribute: &'static str,
    value: &str,
) -> Result<Duration, ConfigLoadError> {
    duration_from_str(value).ok_or_else(|| ConfigLoadError::InvalidValue {
        section,
        attribute,
        value: value.to_owned(),
        expected: "a non-negative duration in `H:MM:SS[.fff]` form".to_owned(),
    })
}

/// Parses `H:MM:SS` with an optional fractional-seconds suffix of up to seven
/// digits. Minutes and seconds must be in `0..60`. Negative durations are
/// rejected (a leading `-` fails the integer parse).
fn duration_from_str(value: &str) -> Option<Duration> {
    let (clock, frac) = match value.split_once('.') {
        Some((clock, frac)) => (clock, Some(frac)),
        None => (value, None),
    };

    let mut parts = clock.split(':');
    let hours = parse_component(parts.next()?)?;
    let minutes = parse_component(parts.next()?)?;
    let seconds = parse_component(parts.next()?)?;
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }

    let nanos = match frac {
        Some(frac) => {
            if frac.is_empty() || frac.len() > 7 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // Scale the fractional digits up to nanoseconds.
            let digits: u32 = frac.parse().ok()?;
            digits * 10u32.pow(9 - frac.len() as u32)
        }
        None => 0,
    };

    let total_seconds = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)?;
    Some(Duration::new(total_seconds, nanos))
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
