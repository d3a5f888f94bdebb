// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::InvalidIdentifier;
use smol_str::SmolStr;
use std::fmt;

/// An identifier naming a provider implementation: a unit-test framework
/// adapter or a trace listener.
///
/// The configuration core never instantiates providers; identifiers are
/// resolved to factories by the adapter registry elsewhere. An identifier is
/// a comma-separated list of one or more dotted names, each of the form
/// (XID_Start)(XID_Continue | `-` | `.`)* with surrounding whitespace
/// allowed. This admits both plain registry keys such as `nunit.generator`
/// and qualified forms such as
/// `Framework.Integration.NUnitRuntimeProvider, Framework`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProviderIdentifier(SmolStr);

impl ProviderIdentifier {
    /// Validates and creates a new identifier.
    pub fn new(identifier: SmolStr) -> Result<Self, InvalidIdentifier> {
        if identifier.is_empty() {
            return Err(InvalidIdentifier::Empty);
        }

        for segment in identifier.split(',') {
            if !is_dotted_name(segment.trim()) {
                return Err(InvalidIdentifier::InvalidXid(identifier.clone()));
            }
        }

        Ok(Self(identifier))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_dotted_name(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !unicode_ident::is_xid_start(first) {
        return false;
    }
    chars.all(|ch| ch == '-' || ch == '.' || unicode_ident::is_xid_continue(ch))
}
