//! Glossify Generator Library
//!
//! Site generation engine for Glossify.
//!
//! # Modules
//!
//! - [`order`] - Alphabetical term ordering
//! - [`template`] - HTML template system with variable interpolation
//! - [`html`] - HTML page generation with cross-reference links
//! - [`build`] - Build orchestration

pub mod build;
pub mod html;
pub mod order;
pub mod template;

pub use build::{BuildError, BuildStats, Builder};
pub use html::HtmlGenerator;
pub use order::order_terms;
pub use template::{Template, TemplateContext, TemplateRegistry};
