//! Glossify Core Library
//!
//! Core types, configuration, and error handling for the Glossify site
//! generator.

pub mod config;
pub mod error;
pub mod glossary;

pub use config::Config;
pub use error::{CoreError, Result};
pub use glossary::Glossary;
