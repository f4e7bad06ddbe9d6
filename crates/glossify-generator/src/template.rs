//! HTML template system for page generation.
//!
//! A lightweight string-interpolation system rather than a heavy template
//! engine: `{{ variable }}` placeholders are replaced from a context, and
//! `{{ variable? }}` marks a placeholder optional (rendered empty when the
//! context has no value for it).

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// A `{{` without a matching `}}`.
    #[error("unclosed placeholder in template `{0}`")]
    UnclosedPlaceholder(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with initial variables.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A named template supporting variable interpolation.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or_else(|| TemplateError::UnclosedPlaceholder(self.name.clone()))?;

            let raw = after[..close].trim();
            let (name, optional) = match raw.strip_suffix('?') {
                Some(stripped) => (stripped.trim_end(), true),
                None => (raw, false),
            };

            match context.get(name) {
                Some(value) => out.push_str(value),
                None if optional => {}
                None => return Err(TemplateError::MissingVariable(name.to_string())),
            }

            rest = &after[close + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        registry.register(Template::new("term", DEFAULT_TERM_TEMPLATE));
        registry.register(Template::new("index", DEFAULT_INDEX_TEMPLATE));
        registry
    }

    /// Register a template, replacing any template with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Default base HTML template wrapping every page.
pub const DEFAULT_BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description? }}">
    <meta name="author" content="{{ author? }}">
    <style>
        :root {
            --color-link: #2563EB;
            --color-text: #1E293B;
            --color-muted: #64748B;
            --color-border: #E2E8F0;
        }

        * { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: Georgia, 'Times New Roman', serif;
            line-height: 1.7;
            color: var(--color-text);
            max-width: 640px;
            margin: 0 auto;
            padding: 2rem 1.5rem;
        }

        header {
            border-bottom: 1px solid var(--color-border);
            padding-bottom: 1rem;
            margin-bottom: 2rem;
        }

        header a {
            font-size: 1.125rem;
            font-weight: 600;
            color: var(--color-text);
            text-decoration: none;
        }

        h1 { font-size: 1.75rem; margin-bottom: 1rem; }

        a { color: var(--color-link); }

        ul { padding-left: 1.5rem; }

        li { margin-bottom: 0.25rem; }

        .back { margin-top: 2rem; }

        footer {
            border-top: 1px solid var(--color-border);
            margin-top: 3rem;
            padding-top: 1rem;
            font-size: 0.875rem;
            color: var(--color-muted);
        }
    </style>
</head>
<body>
    <header>
        <a href="index.html">{{ site_title }}</a>
    </header>
    <main>
        {{ content }}
    </main>
    <footer>
        <p>&copy; {{ year }} {{ site_title }}</p>
    </footer>
</body>
</html>"#;

/// Default template for a single term page.
pub const DEFAULT_TERM_TEMPLATE: &str = r#"<article class="term">
    <h1>{{ term }}</h1>
    <p class="definition">{{ definition }}</p>
    <p class="back">Return to <a href="index.html">index</a></p>
</article>"#;

/// Default template for the index page.
pub const DEFAULT_INDEX_TEMPLATE: &str = r#"<section class="index">
    <h1>{{ title }}</h1>
    <ul>
        {{ items }}
    </ul>
</section>"#;
