//! Error types for rule compilation, registration and highlighting

use crate::kit::lexer::TokenCategory;
use thiserror::Error;

/// Authoring error in a rule table, reported when the table is compiled
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid pattern for {category} rule `{pattern}`: {source}")]
    InvalidPattern {
        category: TokenCategory,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("shortcut characters are only allowed on shortcut rules ({category} rule `{pattern}`)")]
    ShortcutOnFallthrough {
        category: TokenCategory,
        pattern: String,
    },
}

/// Error type for the language registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("handler '{handler}' registered without any alias")]
    NoAliases { handler: String },

    #[error("invalid language alias: {alias:?}")]
    InvalidAlias { alias: String },

    #[error("no language handler registered for '{alias}'")]
    UnknownLanguage { alias: String },
}

/// Main highlighter error type
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
