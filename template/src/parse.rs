// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Tokenizer for template strings.

use crate::model::{Part, Section, VariableType};
use crate::{TemplateError, TemplateResult};

/// Operators defined by RFC 6570 that this implementation does not support.
const UNSUPPORTED_OPERATORS: &str = "+.;=!@|";

/// Returns the section that starts at `ch` when found in a literal while in `section`, if any.
fn section_boundary(section: Section, ch: char) -> Option<Section> {
    match (section, ch) {
        (Section::Base, '?') => Some(Section::Query),
        (Section::Base, '#') | (Section::Query, '#') => Some(Section::Fragment),
        _ => None,
    }
}

/// Appends the literal `text` to `parts`, splitting it wherever a new section starts.
///
/// `section` tracks the section the tokenizer is in and is updated to the section in effect at
/// the end of `text`.  A literal that directly follows a query variable group continues the
/// query only if it starts with `?` or `&`; any other literal goes back to the base.
fn push_literal(
    mut text: &str,
    after_query: bool,
    section: &mut Section,
    parts: &mut Vec<Part>,
) {
    if after_query && *section != Section::Fragment && !text.is_empty() {
        *section =
            if text.starts_with(['?', '&']) { Section::Query } else { Section::Base };
    }

    while !text.is_empty() {
        if let Some(next) = text.chars().next().and_then(|ch| section_boundary(*section, ch)) {
            *section = next;
        }

        let boundary = text
            .char_indices()
            .skip(1)
            .find_map(|(i, ch)| section_boundary(*section, ch).map(|next| (i, next)));
        match boundary {
            Some((i, next)) => {
                parts.push(Part::Literal { text: text[..i].to_owned(), section: *section });
                *section = next;
                text = &text[i..];
            }
            None => {
                parts.push(Part::Literal { text: text.to_owned(), section: *section });
                break;
            }
        }
    }
}

/// Checks that `name` is a valid variable name, as found in the expression `raw`.
fn validate_name(name: &str, raw: &str) -> TemplateResult<()> {
    if name.is_empty() {
        return Err(TemplateError::Parse(format!("Empty variable name in '{}'", raw)));
    }
    for ch in name.chars() {
        if !(ch.is_ascii_alphanumeric() || "_.%".find(ch).is_some()) {
            return Err(TemplateError::Parse(format!(
                "Unsupported character '{}' in variable name in '{}'",
                ch, raw
            )));
        }
    }
    Ok(())
}

/// Parses the contents of an expression, `body`, which was found as `raw` in the template.
fn parse_expression(body: &str, raw: &str) -> TemplateResult<Part> {
    let (var_type, list) = match body.chars().next() {
        Some(op) if UNSUPPORTED_OPERATORS.find(op).is_some() => {
            return Err(TemplateError::Parse(format!(
                "Unsupported operator '{}' in '{}'",
                op, raw
            )));
        }
        Some(op) => match VariableType::from_operator(op) {
            Some(var_type) => (var_type, &body[op.len_utf8()..]),
            None => (VariableType::Simple, body),
        },
        None => (VariableType::Simple, body),
    };

    if list.is_empty() {
        return Err(TemplateError::Parse(format!("No variable names in '{}'", raw)));
    }

    let mut names = vec![];
    for spec in list.split(',') {
        // Modifiers like the `+` in `{city:+}` or the `3` in `{name:3}` do not affect how
        // scalar values are expanded.
        let name = match spec.find(':') {
            Some(i) => &spec[..i],
            None => spec,
        };
        validate_name(name, raw)?;
        names.push(name.to_owned());
    }

    Ok(Part::VariableGroup { var_type, names, raw: raw.to_owned() })
}

/// Splits `template` into its literal and variable parts.
pub(crate) fn tokenize(template: &str) -> TemplateResult<Vec<Part>> {
    if template.is_empty() {
        return Err(TemplateError::Parse("Template cannot be empty".to_owned()));
    }

    let mut parts = vec![];
    let mut section = Section::Base;
    let mut after_query = false;
    let mut pos = 0;
    while pos < template.len() {
        let rest = &template[pos..];
        let start = match rest.find(['{', '}']) {
            Some(i) if rest[i..].starts_with('}') => {
                return Err(TemplateError::Parse(format!(
                    "Unbalanced '}}' at offset {}",
                    pos + i
                )));
            }
            Some(i) => pos + i,
            None => {
                push_literal(rest, after_query, &mut section, &mut parts);
                break;
            }
        };
        push_literal(&template[pos..start], after_query, &mut section, &mut parts);

        let end = match template[start + 1..].find(['{', '}']) {
            Some(i) if template[start + 1 + i..].starts_with('}') => start + 1 + i,
            _ => {
                return Err(TemplateError::Parse(format!(
                    "Unbalanced '{{' at offset {}",
                    start
                )));
            }
        };

        let part = parse_expression(&template[start + 1..end], &template[start..=end])?;
        after_query = matches!(&part, Part::VariableGroup { var_type, .. } if var_type.is_query());
        if let Part::VariableGroup { var_type: VariableType::Fragment, .. } = &part {
            section = Section::Fragment;
        }
        parts.push(part);
        pos = end + 1;
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shorthand to build a literal part.
    fn literal(text: &str, section: Section) -> Part {
        Part::Literal { text: text.to_owned(), section }
    }

    /// Shorthand to build a variable group part.
    fn group(var_type: VariableType, names: &[&str], raw: &str) -> Part {
        Part::VariableGroup {
            var_type,
            names: names.iter().map(|s| (*s).to_owned()).collect(),
            raw: raw.to_owned(),
        }
    }

    /// Joins the raw text of all `parts`.
    fn rejoin(parts: &[Part]) -> String {
        parts.iter().map(Part::raw).collect()
    }

    #[test]
    fn test_tokenize_only_literal() {
        assert_eq!(
            vec![literal("http://example.com/events", Section::Base)],
            tokenize("http://example.com/events").unwrap()
        );
    }

    #[test]
    fn test_tokenize_literal_sections() {
        let template = "http://example.com/e?a=1&b=2?c#frag?x";
        let parts = tokenize(template).unwrap();
        assert_eq!(
            vec![
                literal("http://example.com/e", Section::Base),
                literal("?a=1&b=2?c", Section::Query),
                literal("#frag?x", Section::Fragment),
            ],
            parts
        );
        assert_eq!(template, rejoin(&parts));
    }

    #[test]
    fn test_tokenize_all_operators() {
        let parts = tokenize("/a{b}{/c}{?d,e}{&f}{#g}").unwrap();
        assert_eq!(
            vec![
                literal("/a", Section::Base),
                group(VariableType::Simple, &["b"], "{b}"),
                group(VariableType::PathSegment, &["c"], "{/c}"),
                group(VariableType::QueryParam, &["d", "e"], "{?d,e}"),
                group(VariableType::QueryParamContinued, &["f"], "{&f}"),
                group(VariableType::Fragment, &["g"], "{#g}"),
            ],
            parts
        );
    }

    #[test]
    fn test_tokenize_interleaved_query_literals() {
        let template = "http://example.com/events?eventName={eventName}&location={location}";
        let parts = tokenize(template).unwrap();
        assert_eq!(
            vec![
                literal("http://example.com/events", Section::Base),
                literal("?eventName=", Section::Query),
                group(VariableType::Simple, &["eventName"], "{eventName}"),
                literal("&location=", Section::Query),
                group(VariableType::Simple, &["location"], "{location}"),
            ],
            parts
        );
        assert_eq!(template, rejoin(&parts));
    }

    #[test]
    fn test_tokenize_query_variable_opens_query() {
        let parts = tokenize("/x{?a}&b=c#d").unwrap();
        assert_eq!(
            vec![
                literal("/x", Section::Base),
                group(VariableType::QueryParam, &["a"], "{?a}"),
                literal("&b=c", Section::Query),
                literal("#d", Section::Fragment),
            ],
            parts
        );
    }

    #[test]
    fn test_tokenize_path_after_query_variable_stays_in_base() {
        let parts = tokenize("/a{?x}/b?c=d{&y}/e#f").unwrap();
        assert_eq!(
            vec![
                literal("/a", Section::Base),
                group(VariableType::QueryParam, &["x"], "{?x}"),
                literal("/b", Section::Base),
                literal("?c=d", Section::Query),
                group(VariableType::QueryParamContinued, &["y"], "{&y}"),
                literal("/e", Section::Base),
                literal("#f", Section::Fragment),
            ],
            parts
        );
    }

    #[test]
    fn test_tokenize_query_literal_after_query_variable() {
        let parts = tokenize("/a{?x}?b=1{/y}&c=2").unwrap();
        assert_eq!(
            vec![
                literal("/a", Section::Base),
                group(VariableType::QueryParam, &["x"], "{?x}"),
                literal("?b=1", Section::Query),
                group(VariableType::PathSegment, &["y"], "{/y}"),
                literal("&c=2", Section::Query),
            ],
            parts
        );
    }

    #[test]
    fn test_tokenize_fragment_variable_opens_fragment() {
        let parts = tokenize("/x{#a}?b").unwrap();
        assert_eq!(
            vec![
                literal("/x", Section::Base),
                group(VariableType::Fragment, &["a"], "{#a}"),
                literal("?b", Section::Fragment),
            ],
            parts
        );
    }

    #[test]
    fn test_tokenize_leading_query() {
        assert_eq!(vec![literal("?a=b", Section::Query)], tokenize("?a=b").unwrap());
        assert_eq!(vec![literal("#top", Section::Fragment)], tokenize("#top").unwrap());
    }

    #[test]
    fn test_tokenize_names_with_dots_and_modifiers() {
        let parts = tokenize("/e{?foo1,bar.baz,strings.empty}/{city:+}{max:3}").unwrap();
        assert_eq!(
            vec![
                literal("/e", Section::Base),
                group(
                    VariableType::QueryParam,
                    &["foo1", "bar.baz", "strings.empty"],
                    "{?foo1,bar.baz,strings.empty}"
                ),
                literal("/", Section::Base),
                group(VariableType::Simple, &["city"], "{city:+}"),
                group(VariableType::Simple, &["max"], "{max:3}"),
            ],
            parts
        );
    }

    #[test]
    fn test_tokenize_roundtrip() {
        for template in [
            "http://example.com/events{/city}{?eventName,location}{#section}",
            "http://example.com/events{/city}?eventName=Revo+Tour&location=Schlachthof{#section}",
            "{x}",
            "{?x}{&y}",
            "/v{version}/Wiesbaden",
            "\u{00e9}t\u{00e9}/{saison}?q=\u{00e0}",
        ] {
            assert_eq!(template, rejoin(&tokenize(template).unwrap()));
        }
    }

    #[test]
    fn test_tokenize_empty_template() {
        assert_eq!(
            TemplateError::Parse("Template cannot be empty".to_owned()),
            tokenize("").unwrap_err()
        );
    }

    #[test]
    fn test_tokenize_unbalanced_braces() {
        assert_eq!(
            TemplateError::Parse("Unbalanced '{' at offset 2".to_owned()),
            tokenize("/a{b").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse("Unbalanced '{' at offset 2".to_owned()),
            tokenize("/a{b{c}}").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse("Unbalanced '}' at offset 2".to_owned()),
            tokenize("/a}b").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse("Unbalanced '}' at offset 5".to_owned()),
            tokenize("/a{b}}").unwrap_err()
        );
    }

    #[test]
    fn test_tokenize_empty_names() {
        assert_eq!(
            TemplateError::Parse("No variable names in '{}'".to_owned()),
            tokenize("/a{}").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse("No variable names in '{?}'".to_owned()),
            tokenize("/a{?}").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse("Empty variable name in '{?a,,b}'".to_owned()),
            tokenize("/a{?a,,b}").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse("Empty variable name in '{:3}'".to_owned()),
            tokenize("/a{:3}").unwrap_err()
        );
    }

    #[test]
    fn test_tokenize_bad_names() {
        assert_eq!(
            TemplateError::Parse(
                "Unsupported character ' ' in variable name in '{a b}'".to_owned()
            ),
            tokenize("/x{a b}").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse(
                "Unsupported character '/' in variable name in '{?a/b}'".to_owned()
            ),
            tokenize("/x{?a/b}").unwrap_err()
        );
        assert_eq!(
            TemplateError::Parse("Empty variable name in '{,a}'".to_owned()),
            tokenize("/x{,a}").unwrap_err()
        );
    }

    #[test]
    fn test_tokenize_unsupported_operators() {
        for op in ['+', '.', ';', '='] {
            let template = format!("/x{{{}a}}", op);
            assert_eq!(
                TemplateError::Parse(format!("Unsupported operator '{}' in '{{{}a}}'", op, op)),
                tokenize(&template).unwrap_err()
            );
        }
    }
}
