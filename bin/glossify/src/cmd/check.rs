//! Check command - validates a glossary source without building

use std::{fs, path::Path};

use color_eyre::eyre::{eyre, Result, WrapErr};
use glossify_core::Glossary;
use glossify_generator::order_terms;
use glossify_parser::{tokens, SeparatorSet, Token};

/// Run the check command.
///
/// Parses the source and reports term and cross-reference counts; empty
/// definitions are warnings, fatal under `--strict`. Parse errors
/// (duplicate terms) are always fatal.
pub fn run(input: &Path, strict: bool) -> Result<()> {
    let source = fs::read_to_string(input)
        .wrap_err_with(|| format!("Failed to read glossary source {}", input.display()))?;

    let glossary = glossify_parser::parse(&source).wrap_err("Failed to parse glossary source")?;
    let ordered = order_terms(glossary.terms());
    let references = cross_reference_count(&glossary, &ordered);

    println!();
    println!("  Terms:            {}", glossary.len());
    println!("  Cross-references: {references}");

    let warnings = empty_definition_warnings(&glossary);
    if !warnings.is_empty() {
        println!();
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
    }
    println!();

    if strict && !warnings.is_empty() {
        return Err(eyre!(
            "{} warning(s) treated as errors (--strict)",
            warnings.len()
        ));
    }

    println!("  Source is valid.");
    println!();

    Ok(())
}

/// Warnings for terms whose definitions are empty.
pub fn empty_definition_warnings(glossary: &Glossary) -> Vec<String> {
    let mut terms: Vec<&str> = glossary
        .iter()
        .filter(|(_, definition)| definition.trim().is_empty())
        .map(|(term, _)| term)
        .collect();
    terms.sort_unstable();

    terms
        .into_iter()
        .map(|term| format!("term `{term}` has an empty definition"))
        .collect()
}

/// Count how many definition tokens will become links.
///
/// `ordered` must be sorted ascending, as `order_terms` produces it.
fn cross_reference_count(glossary: &Glossary, ordered: &[String]) -> usize {
    let separators = SeparatorSet::default();

    glossary
        .iter()
        .map(|(_, definition)| {
            tokens(definition, &separators)
                .filter(Token::is_word)
                .filter(|token| {
                    ordered
                        .binary_search_by(|term| term.as_str().cmp(token.text))
                        .is_ok()
                })
                .count()
        })
        .sum()
}
