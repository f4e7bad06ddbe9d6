//! End-to-end tests for Glossify.
//!
//! Build a small glossary into a temp directory and verify the produced
//! site: one page per term, cross-reference links, and index ordering.

use std::fs;

use glossify_core::Config;
use glossify_generator::Builder;
use tempfile::TempDir;

const SAMPLE_SOURCE: &str = "\
meaning
Something that one wishes to convey, especially by language.

term
A word whose definition is of interest in this glossary.

word
A string of characters in a language, which has at least one character.

definition
A sequence of words that gives meaning to a term.

glossary
A list of difficult or specialized terms, with their definitions,
usually near the end of a book.

language
A set of strings of characters, each of which has meaning.

book
A printed or written literary work.
";

fn build_sample(output: &TempDir) {
    let builder = Builder::new(Config::default(), output.path());
    builder.build(SAMPLE_SOURCE).expect("build should succeed");
}

#[test]
fn test_one_page_per_term_plus_index() {
    let output = TempDir::new().unwrap();
    build_sample(&output);

    for term in [
        "meaning",
        "term",
        "word",
        "definition",
        "glossary",
        "language",
        "book",
    ] {
        assert!(
            output.path().join(format!("{term}.html")).exists(),
            "missing page for {term}"
        );
    }
    assert!(output.path().join("index.html").exists());

    let entries = fs::read_dir(output.path()).unwrap().count();
    assert_eq!(entries, 8, "no extra files expected");
}

#[test]
fn test_index_lists_terms_alphabetically() {
    let output = TempDir::new().unwrap();
    build_sample(&output);

    let index = fs::read_to_string(output.path().join("index.html")).unwrap();

    let positions: Vec<usize> = [
        "book.html",
        "definition.html",
        "glossary.html",
        "language.html",
        "meaning.html",
        "term.html",
        "word.html",
    ]
    .iter()
    .map(|href| index.find(href).unwrap_or_else(|| panic!("{href} missing")))
    .collect();

    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "index entries out of order");
    }
}

#[test]
fn test_definitions_cross_reference_known_terms() {
    let output = TempDir::new().unwrap();
    build_sample(&output);

    // "definition" mentions both "words" (plural, no link) and "term".
    let definition = fs::read_to_string(output.path().join("definition.html")).unwrap();
    assert!(definition.contains(r#"<a href="term.html">term</a>"#));
    assert!(!definition.contains(r#"<a href="word.html">words</a>"#));

    // "glossary" has a two-line definition mentioning "definitions" (plural,
    // no link) and "book".
    let glossary = fs::read_to_string(output.path().join("glossary.html")).unwrap();
    assert!(glossary.contains(r#"<a href="book.html">book</a>"#));
    assert!(glossary.contains("usually near the end"));

    // "word" mentions "language" and itself.
    let word = fs::read_to_string(output.path().join("word.html")).unwrap();
    assert!(word.contains(r#"<a href="language.html">language</a>"#));
}

#[test]
fn test_term_pages_link_back_to_index() {
    let output = TempDir::new().unwrap();
    build_sample(&output);

    let page = fs::read_to_string(output.path().join("book.html")).unwrap();
    assert!(page.contains(r#"<a href="index.html">index</a>"#));
    assert!(page.contains("<title>book</title>"));
}

#[test]
fn test_configured_site_title_and_output() {
    let output = TempDir::new().unwrap();

    let mut config = Config::default();
    config.site.title = "Lexicon".to_string();

    let builder = Builder::new(config, output.path());
    builder.build("apple\nA fruit.\n").expect("build");

    let index = fs::read_to_string(output.path().join("index.html")).unwrap();
    assert!(index.contains("<title>Lexicon</title>"));
    assert!(index.contains("<h1>Lexicon</h1>"));
}

#[test]
fn test_rebuild_replaces_site() {
    let output = TempDir::new().unwrap();
    let builder = Builder::new(Config::default(), output.path());

    builder.build("apple\nA fruit.\n").expect("first build");
    assert!(output.path().join("apple.html").exists());

    builder.build("pear\nAnother fruit.\n").expect("second build");
    assert!(!output.path().join("apple.html").exists());
    assert!(output.path().join("pear.html").exists());
}
