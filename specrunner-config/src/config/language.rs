// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::helpers::opt_attr;
use crate::errors::ConfigLoadError;
use crate::parse::RawSection;

pub(crate) const LANGUAGE_TAG: &str = "language";

/// The default language code for feature files and tooling.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Type for the `language` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageConfig {
    /// The language feature files are written in.
    pub feature: String,

    /// The language used for tooling and step definitions.
    pub tool: String,
}

impl LanguageConfig {
    pub(crate) fn from_raw(raw: Option<&RawSection>) -> Result<Self, ConfigLoadError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let mut config = Self::default();
        if let Some(feature) = opt_attr(raw, "feature") {
            config.feature = feature.to_owned();
        }
        if let Some(tool) = opt_attr(raw, "tool") {
            config.tool = tool.to_owned();
        }
        Ok(config)
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            feature: DEFAULT_LANGUAGE.to_owned(),
            tool: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_section_uses_defaults() {
        let config = LanguageConfig::from_raw(None).unwrap();
        assert_eq!(config, LanguageConfig::default());
    }

    #[test]
    fn attributes_default_independently() {
        let mut raw = RawSection::new();
        raw.insert("feature".to_owned(), "de".to_owned());

        let config = LanguageConfig::from_raw(Some(&raw)).unwrap();
        assert_eq!(config.feature, "de");
        assert_eq!(config.tool, DEFAULT_LANGUAGE);
    }

    #[test]
    fn empty_attribute_falls_back_to_default() {
        let mut raw = RawSection::new();
        raw.insert("feature".to_owned(), String::new());

        let config = LanguageConfig::from_raw(Some(&raw)).unwrap();
        assert_eq!(config, LanguageConfig::default());
    }
}
