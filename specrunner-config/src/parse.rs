// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parse a configuration document into raw, string-keyed sections.

use crate::errors::ConfigLoadError;
use indexmap::IndexMap;
use quick_xml::{events::BytesStart, Reader};

/// The raw attributes of a single configuration section, keyed by attribute
/// name. Produced by [`parse_sections`] and consumed by the typed section
/// mappers.
pub(crate) type RawSection = IndexMap<String, String>;

/// Raw sections keyed by section element name.
pub(crate) type RawSections = IndexMap<String, RawSection>;

/// Parses a configuration document into its sections.
///
/// The direct children of the root element are the sections; each child's
/// attributes become that section's key/value pairs. The root element's own
/// name and attributes carry no information. Anything nested deeper than one
/// level, along with text, comments and processing instructions, is skipped
/// so that newer documents keep loading on older runners.
pub(crate) fn parse_sections(doc: &str) -> Result<RawSections, ConfigLoadError> {
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(doc);
    let mut sections = RawSections::new();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => {
                if depth == 1 {
                    let name = section_name(&tag);
                    let attrs = collect_attributes(&tag, &reader)?;
                    sections.insert(name, attrs);
                }
                saw_root = true;
                depth += 1;
            }
            Ok(Event::Empty(tag)) => {
                if depth == 1 {
                    let name = section_name(&tag);
                    let attrs = collect_attributes(&tag, &reader)?;
                    sections.insert(name, attrs);
                }
                if depth == 0 {
                    // An empty root element: a document with no sections.
                    saw_root = true;
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => {
                return Err(ConfigLoadError::Parse {
                    position: reader.buffer_position(),
                    error,
                });
            }
        }
    }

    if !saw_root {
        return Err(ConfigLoadError::NoRootElement);
    }

    Ok(sections)
}

fn section_name(tag: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(tag.name().as_ref()).into_owned()
}

fn collect_attributes(
    tag: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<RawSection, ConfigLoadError> {
    let mut attrs = RawSection::new();
    for attr in tag.attributes() {
        let attr = attr.map_err(|error| ConfigLoadError::Parse {
            position: reader.buffer_position(),
            error: error.into(),
        })?;
        let value = attr
            .unescape_value()
            .map_err(|error| ConfigLoadError::Parse {
                position: reader.buffer_position(),
                error,
            })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        attrs.insert(key, value.into_owned());
    }
    Ok(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_keyed_by_element_name() {
        let sections = parse_sections(
            r#"<specRunner><language feature="de" tool="en"/><trace traceTimings="true"></trace></specRunner>"#,
        )
        .expect("document should parse");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections["language"]["feature"], "de");
        assert_eq!(sections["language"]["tool"], "en");
        assert_eq!(sections["trace"]["traceTimings"], "true");
    }

    #[test]
    fn nested_elements_are_skipped() {
        let sections = parse_sections(
            r#"<root><runtime stopAtFirstError="true"><extra a="1"/></runtime></root>"#,
        )
        .expect("document should parse");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections["runtime"]["stopAtFirstError"], "true");
    }

    #[test]
    fn empty_root_yields_no_sections() {
        let sections = parse_sections("<specRunner/>").expect("document should parse");
        assert!(sections.is_empty());
    }

    #[test]
    fn root_attributes_are_ignored() {
        let sections =
            parse_sections(r#"<specRunner version="2"><generator/></specRunner>"#)
                .expect("document should parse");
        assert_eq!(sections.len(), 1);
        assert!(sections["generator"].is_empty());
    }

    #[test]
    fn malformed_document_fails() {
        let err = parse_sections("<specRunner><language></specRunner>")
            .expect_err("mismatched end tag should fail");
        assert!(matches!(err, ConfigLoadError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn document_without_root_element_fails() {
        let err = parse_sections("just some text").expect_err("no root element");
        assert!(matches!(err, ConfigLoadError::NoRootElement), "{err:?}");
    }
}
