// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::{
    GeneratorConfig, LanguageConfig, ProviderIdentifier, RuntimeBehaviorConfig, TraceConfig,
    UnitTestProviderConfig, GENERATOR_TAG, LANGUAGE_TAG, RUNTIME_TAG, TRACE_TAG,
    UNIT_TEST_PROVIDER_TAG,
};
use crate::errors::{ConfigLoadError, InvalidIdentifier};
use crate::parse::{parse_sections, RawSections};
use crate::source::ConfigStore;
use tracing::debug;

/// The well-known name under which the host configuration store keeps the
/// runner's configuration section.
pub const CONFIG_SECTION_NAME: &str = "specRunner";

/// The complete runtime configuration for a test run.
///
/// Constructed once at session startup through [`RuntimeConfiguration::load`]
/// or [`RuntimeConfiguration::from_xml`], and never mutated afterwards:
/// consumers share it by reference. Every section is always present -- a
/// section missing from the document is replaced by its default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct RuntimeConfiguration {
    /// Feature-file and tool language settings.
    pub language: LanguageConfig,

    /// The unit-test framework adapter to generate and run against.
    pub unit_test_provider: UnitTestProviderConfig,

    /// Code-generation behavior.
    pub generator: GeneratorConfig,

    /// Step-execution policies.
    pub runtime: RuntimeBehaviorConfig,

    /// Step-execution tracing.
    pub trace: TraceConfig,
}

impl RuntimeConfiguration {
    /// Loads the configuration from the host configuration store.
    ///
    /// A store without an entry for [`CONFIG_SECTION_NAME`] yields the
    /// all-defaults configuration; that is the expected common case, not an
    /// error.
    pub fn load(store: &dyn ConfigStore) -> Result<Self, ConfigLoadError> {
        match store.read(CONFIG_SECTION_NAME)? {
            Some(doc) => {
                debug!("loading configuration from the host store");
                Self::from_xml(&doc)
            }
            None => {
                debug!("no configuration document found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration from an explicit XML document, bypassing the
    /// host store. The name of the root element is not significant.
    ///
    /// Loading is atomic: either a complete, validated configuration is
    /// returned, or the first error encountered.
    pub fn from_xml(doc: &str) -> Result<Self, ConfigLoadError> {
        let sections = parse_sections(doc)?;
        let config = Self::assemble(&sections)?;
        config.validate()?;
        Ok(config)
    }

    /// Maps each known section to its typed configuration. Sections the
    /// mappers do not recognize are left untouched. The mappers are
    /// independent of each other, so the order here is immaterial.
    fn assemble(sections: &RawSections) -> Result<Self, ConfigLoadError> {
        Ok(Self {
            language: LanguageConfig::from_raw(sections.get(LANGUAGE_TAG))?,
            unit_test_provider: UnitTestProviderConfig::from_raw(
                sections.get(UNIT_TEST_PROVIDER_TAG),
            )?,
            generator: GeneratorConfig::from_raw(sections.get(GENERATOR_TAG))?,
            runtime: RuntimeBehaviorConfig::from_raw(sections.get(RUNTIME_TAG))?,
            trace: TraceConfig::from_raw(sections.get(TRACE_TAG))?,
        })
    }

    /// Checks cross-field invariants, in fixed order: language, provider,
    /// generator, runtime, trace. Values are never rewritten; the first
    /// violation is returned.
    ///
    /// The `generator` and `runtime` sections carry only bools and a
    /// fieldless enum, and the trace threshold is a `std::time::Duration`,
    /// so their invariants hold by construction and need no checks here.
    fn validate(&self) -> Result<(), ConfigLoadError> {
        check_non_empty("language.feature", &self.language.feature)?;
        check_non_empty("language.tool", &self.language.tool)?;

        check_non_empty("unitTestProvider.name", &self.unit_test_provider.name)?;
        check_identifier(
            "unitTestProvider.generatorProvider",
            &self.unit_test_provider.generator_provider,
        )?;
        check_identifier(
            "unitTestProvider.runtimeProvider",
            &self.unit_test_provider.runtime_provider,
        )?;

        check_identifier("trace.listener", &self.trace.listener)?;

        Ok(())
    }
}

fn check_non_empty(field: &'static str, value: &str) -> Result<(), ConfigLoadError> {
    if value.is_empty() {
        return Err(ConfigLoadError::InvalidField {
            field,
            error: InvalidIdentifier::Empty,
        });
    }
    Ok(())
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ConfigLoadError> {
    ProviderIdentifier::new(value.into())
        .map(drop)
        .map_err(|error| ConfigLoadError::InvalidField { field, error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn assembly_is_pure() {
        let doc = indoc! {r#"
            <specRunner>
                <generator allowDebugGeneratedFiles="true"/>
            </specRunner>
        "#};

        let first = RuntimeConfiguration::from_xml(doc).unwrap();
        let second = RuntimeConfiguration::from_xml(doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sections_are_independent_of_document_order() {
        let forward = indoc! {r#"
            <specRunner>
                <language feature="de"/>
                <trace traceTimings="true"/>
            </specRunner>
        "#};
        let reversed = indoc! {r#"
            <specRunner>
                <trace traceTimings="true"/>
                <language feature="de"/>
            </specRunner>
        "#};

        assert_eq!(
            RuntimeConfiguration::from_xml(forward).unwrap(),
            RuntimeConfiguration::from_xml(reversed).unwrap(),
        );
    }

    #[test]
    fn malformed_provider_identifier_fails_validation() {
        let doc = r#"<specRunner><unitTestProvider generatorProvider="not a provider"/></specRunner>"#;

        let err = RuntimeConfiguration::from_xml(doc).unwrap_err();
        assert!(
            matches!(
                &err,
                ConfigLoadError::InvalidField { field, .. }
                    if *field == "unitTestProvider.generatorProvider"
            ),
            "{err:?}"
        );
    }

    #[test]
    fn present_but_empty_section_equals_absent_section() {
        let explicit = RuntimeConfiguration::from_xml(
            "<specRunner><runtime></runtime><trace/></specRunner>",
        )
        .unwrap();
        assert_eq!(explicit, RuntimeConfiguration::default());
    }
}
