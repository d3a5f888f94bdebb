// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::helpers::opt_attr;
use crate::errors::ConfigLoadError;
use crate::parse::RawSection;

pub(crate) const UNIT_TEST_PROVIDER_TAG: &str = "unitTestProvider";

/// The display name of the built-in unit-test framework adapter.
pub const DEFAULT_PROVIDER_NAME: &str = "NUnit";

/// The identifier of the built-in generator-side provider.
pub const DEFAULT_GENERATOR_PROVIDER: &str = "nunit.generator";

/// The identifier of the built-in runtime-side provider.
pub const DEFAULT_RUNTIME_PROVIDER: &str = "nunit.runtime";

/// Type for the `unitTestProvider` section.
///
/// Providers are referenced by identifier and instantiated by the adapter
/// registry, never by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitTestProviderConfig {
    /// The display name of the unit-test framework adapter.
    pub name: String,

    /// The identifier of the provider used during code generation.
    pub generator_provider: String,

    /// The identifier of the provider used during test execution.
    pub runtime_provider: String,
}

impl UnitTestProviderConfig {
    pub(crate) fn from_raw(raw: Option<&RawSection>) -> Result<Self, ConfigLoadError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let mut config = Self::default();
        if let Some(name) = opt_attr(raw, "name") {
            config.name = name.to_owned();
        }
        if let Some(generator_provider) = opt_attr(raw, "generatorProvider") {
            config.generator_provider = generator_provider.to_owned();
        }
        if let Some(runtime_provider) = opt_attr(raw, "runtimeProvider") {
            config.runtime_provider = runtime_provider.to_owned();
        }
        Ok(config)
    }
}

impl Default for UnitTestProviderConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROVIDER_NAME.to_owned(),
            generator_provider: DEFAULT_GENERATOR_PROVIDER.to_owned(),
            runtime_provider: DEFAULT_RUNTIME_PROVIDER.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_section_selects_builtin_adapter() {
        let config = UnitTestProviderConfig::from_raw(None).unwrap();
        assert_eq!(config.name, "NUnit");
        assert_eq!(config.generator_provider, DEFAULT_GENERATOR_PROVIDER);
        assert_eq!(config.runtime_provider, DEFAULT_RUNTIME_PROVIDER);
    }

    #[test]
    fn identifiers_pass_through_verbatim() {
        let mut raw = RawSection::new();
        raw.insert("name".to_owned(), "MUnit".to_owned());
        raw.insert("generatorProvider".to_owned(), "munit.generator".to_owned());

        let config = UnitTestProviderConfig::from_raw(Some(&raw)).unwrap();
        assert_eq!(config.name, "MUnit");
        assert_eq!(config.generator_provider, "munit.generator");
        // Unset attributes keep their defaults.
        assert_eq!(config.runtime_provider, DEFAULT_RUNTIME_PROVIDER);
    }
}
