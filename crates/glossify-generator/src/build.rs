//! Build orchestration.
//!
//! Drives the full pipeline: parse the source into the term store, order the
//! terms, render one page per term, and render the index. Ordering must
//! finish before any page renders, because every render needs the complete
//! known-terms table for link matching.

use std::{
    fs,
    path::PathBuf,
    time::Instant,
};

use glossify_core::{Config, Glossary};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    html::{HtmlError, HtmlGenerator},
    order::order_terms,
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source parse error.
    #[error("parse error: {0}")]
    Parse(#[from] glossify_parser::ParseError),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// A term in the ordered list has no stored definition.
    #[error("no definition stored for term `{0}`")]
    MissingDefinition(String),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of terms in the glossary.
    pub terms: usize,

    /// Number of HTML pages written, index included.
    pub pages: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
        }
    }

    /// Build the whole site from a glossary source.
    ///
    /// Every error is fatal: a failed page render fails the build.
    pub fn build(&self, source: &str) -> Result<BuildStats> {
        let start = Instant::now();

        info!(output = %self.output_dir.display(), "starting build");

        // 1. Clean output directory
        self.clean_output()?;

        // 2. Parse source into the term store
        let glossary = glossify_parser::parse(source)?;
        info!(terms = glossary.len(), "parsed glossary");

        // 3. Order the terms
        let ordered = order_terms(glossary.terms());

        // 4. Generate term pages
        let generator = HtmlGenerator::new(self.config.clone());
        self.generate_term_pages(&generator, &glossary, &ordered)?;

        // 5. Generate the index
        let index_html = generator.index_page(&ordered)?;
        let index_path = self.output_dir.join("index.html");
        fs::write(&index_path, index_html)?;
        debug!(path = %index_path.display(), "wrote index");

        let stats = BuildStats {
            terms: ordered.len(),
            pages: ordered.len() + 1,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            terms = stats.terms,
            pages = stats.pages,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Generate one HTML page per term.
    ///
    /// Pages render in parallel; the store and the ordered list are shared
    /// as immutable borrows for the duration.
    fn generate_term_pages(
        &self,
        generator: &HtmlGenerator,
        glossary: &Glossary,
        ordered: &[String],
    ) -> Result<()> {
        info!(count = ordered.len(), "generating term pages");

        ordered
            .par_iter()
            .map(|term| {
                let definition = glossary
                    .definition(term)
                    .ok_or_else(|| BuildError::MissingDefinition(term.clone()))?;

                let html = generator.term_page(term, definition, ordered)?;
                let output_path = generator.output_path(term, &self.output_dir);
                fs::write(&output_path, html)?;

                debug!(path = %output_path.display(), "wrote page");
                Ok::<_, BuildError>(())
            })
            .collect::<Result<Vec<()>>>()?;

        Ok(())
    }
}
