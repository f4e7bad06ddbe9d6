//! HTML page generation with cross-reference links.
//!
//! Renders one page per term and the index page. Definition text is scanned
//! token by token: a word token that exactly equals a known term becomes an
//! anchor to that term's page; every other token, separators included,
//! passes through verbatim. Matching is whole-token only, so a term embedded
//! inside a longer word is never linked.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use glossify_core::Config;
use glossify_parser::{tokens, SeparatorSet};
use thiserror::Error;
use tracing::debug;

use crate::template::{Template, TemplateContext, TemplateError, TemplateRegistry};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
    separators: SeparatorSet,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let separators = SeparatorSet::new(&config.build.separators);
        Self {
            templates: TemplateRegistry::new(),
            config,
            separators,
        }
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(config: Config, templates: TemplateRegistry) -> Self {
        let separators = SeparatorSet::new(&config.build.separators);
        Self {
            templates,
            config,
            separators,
        }
    }

    /// Register a custom template.
    pub fn register_template(&mut self, template: Template) {
        self.templates.register(template);
    }

    /// Generate the HTML page for one term.
    ///
    /// `known` is the full ordered term list; it must be sorted ascending,
    /// since link matching binary-searches it.
    pub fn term_page(&self, term: &str, definition: &str, known: &[String]) -> Result<String> {
        debug!(term, "generating term page");

        let body = link_terms(definition, known, &self.separators);

        let ctx = TemplateContext::new()
            .with_var("term", term)
            .with_var("definition", body);
        let inner = self.templates.render("term", &ctx)?;

        self.wrap_in_base(term, &inner)
    }

    /// Generate the index page listing every term in order.
    pub fn index_page(&self, ordered: &[String]) -> Result<String> {
        debug!(terms = ordered.len(), "generating index page");

        let items: String = ordered
            .iter()
            .map(|term| index_item_html(term))
            .collect::<Vec<_>>()
            .join("\n        ");

        let ctx = TemplateContext::new()
            .with_var("title", &self.config.site.title)
            .with_var("items", items);
        let inner = self.templates.render("index", &ctx)?;

        self.wrap_in_base(&self.config.site.title, &inner)
    }

    /// Wrap rendered content in the base HTML shell.
    fn wrap_in_base(&self, title: &str, content: &str) -> Result<String> {
        let mut ctx = TemplateContext::new()
            .with_var("title", title)
            .with_var("content", content)
            .with_var("site_title", &self.config.site.title)
            .with_var("year", Utc::now().year().to_string());

        if let Some(description) = &self.config.site.description {
            ctx.insert("description", description);
        }
        if let Some(author) = &self.config.site.author {
            ctx.insert("author", author);
        }

        Ok(self.templates.render("base", &ctx)?)
    }

    /// Get the output path for a term's page.
    #[must_use]
    pub fn output_path(&self, term: &str, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{term}.html"))
    }
}

/// Rewrite a definition so that every word token naming a known term becomes
/// an anchor to that term's page.
///
/// `known` must be sorted ascending. Substitution is a single pass over the
/// text, never re-scanning inserted anchors, so a self-referential
/// definition links to its own page without recursing.
#[must_use]
pub fn link_terms(definition: &str, known: &[String], separators: &SeparatorSet) -> String {
    let mut out = String::with_capacity(definition.len());

    for token in tokens(definition, separators) {
        let is_term = token.is_word()
            && known
                .binary_search_by(|term| term.as_str().cmp(token.text))
                .is_ok();

        if is_term {
            out.push_str("<a href=\"");
            out.push_str(token.text);
            out.push_str(".html\">");
            out.push_str(token.text);
            out.push_str("</a>");
        } else {
            out.push_str(token.text);
        }
    }

    out
}

/// Generate the index list item for one term.
#[must_use]
pub fn index_item_html(term: &str) -> String {
    format!(r#"<li><a href="{term}.html">{term}</a></li>"#)
}
