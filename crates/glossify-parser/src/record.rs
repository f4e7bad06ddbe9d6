//! Glossary source parsing.
//!
//! The source is line-oriented: one term per non-blank line, immediately
//! followed by one or more non-blank definition lines, terminated by a blank
//! line or end of input. Runs of blank lines between records are skipped.

use glossify_core::Glossary;
use tracing::{debug, warn};

use crate::{ParseError, Result};

/// Parse a glossary source into a term store.
///
/// Each definition line is appended with a single leading space, so a
/// definition always starts with a space and joins its physical lines with
/// single spaces. A term with no definition lines before end of input gets
/// an empty definition, which is legal but logged. Defining the same term
/// twice is an error.
pub fn parse(source: &str) -> Result<Glossary> {
    let mut glossary = Glossary::new();
    let mut lines = source.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        if line.is_empty() {
            continue;
        }

        let term = line.to_string();
        let term_line = index + 1;

        let mut definition = String::new();
        for (_, line) in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            definition.push(' ');
            definition.push_str(line);
        }

        if definition.is_empty() {
            warn!(term = %term, line = term_line, "term has an empty definition");
        }

        if glossary.contains(&term) {
            return Err(ParseError::DuplicateTerm {
                term,
                line: term_line,
            });
        }
        glossary.insert(term, definition);
    }

    debug!(terms = glossary.len(), "parsed glossary source");
    Ok(glossary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_records() {
        let glossary =
            parse("apple\nA fruit.\n\nbanana\nA yellow fruit, like apple.\n").expect("parse");

        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary.definition("apple"), Some(" A fruit."));
        assert_eq!(
            glossary.definition("banana"),
            Some(" A yellow fruit, like apple.")
        );
    }

    #[test]
    fn test_parse_multi_line_definition() {
        let glossary = parse("apple\nA fruit\nwith a core.\n").expect("parse");

        assert_eq!(glossary.definition("apple"), Some(" A fruit with a core."));
    }

    #[test]
    fn test_parse_skips_blank_runs_between_records() {
        let glossary = parse("apple\nA fruit.\n\n\n\nbanana\nAnother fruit.\n").expect("parse");

        assert_eq!(glossary.len(), 2);
        assert!(glossary.contains("apple"));
        assert!(glossary.contains("banana"));
    }

    #[test]
    fn test_parse_leading_blank_lines() {
        let glossary = parse("\n\napple\nA fruit.\n").expect("parse");

        assert_eq!(glossary.len(), 1);
        assert_eq!(glossary.definition("apple"), Some(" A fruit."));
    }

    #[test]
    fn test_parse_empty_input() {
        let glossary = parse("").expect("parse");
        assert!(glossary.is_empty());
    }

    #[test]
    fn test_parse_blank_only_input() {
        let glossary = parse("\n\n\n").expect("parse");
        assert!(glossary.is_empty());
    }

    #[test]
    fn test_parse_term_without_definition_at_eof() {
        let glossary = parse("apple\nA fruit.\n\nbanana\n").expect("parse");

        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary.definition("banana"), Some(""));
    }

    #[test]
    fn test_parse_rejects_duplicate_term() {
        let result = parse("apple\nA fruit.\n\napple\nA computer company.\n");

        match result {
            Err(ParseError::DuplicateTerm { term, line }) => {
                assert_eq!(term, "apple");
                assert_eq!(line, 4);
            }
            other => panic!("expected duplicate term error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_trailing_newline() {
        let glossary = parse("apple\nA fruit.").expect("parse");
        assert_eq!(glossary.definition("apple"), Some(" A fruit."));
    }
}
