//! Highlighter façade
//!
//! Owns a [`LanguageRegistry`] and the [`HighlightConfig`], resolves an alias
//! (with the configured fallback) and runs the handler.

use crate::error::HighlightError;
use crate::kit::lexer::{decorations, Decoration, Token};
use crate::lang;
use crate::registry::LanguageRegistry;
use hilite_config::HighlightConfig;
use serde::Serialize;
use tracing::{debug, info};

/// Result of highlighting one source text
#[derive(Debug, Clone, Serialize)]
pub struct Highlighted<'s> {
    /// Alias that was requested
    pub language: String,
    /// Name of the handler that ran
    pub handler: String,
    pub tokens: Vec<Token<'s>>,
}

impl<'s> Highlighted<'s> {
    pub fn decorations(&self, merge: bool) -> Vec<Decoration> {
        decorations(self.tokens.iter().cloned(), merge)
    }
}

#[derive(Debug)]
pub struct Highlighter {
    registry: LanguageRegistry,
    config: HighlightConfig,
}

impl Highlighter {
    /// Highlighter with every built-in language registered
    pub fn new(config: HighlightConfig) -> Result<Self, HighlightError> {
        let mut registry = LanguageRegistry::new();
        let bound = lang::register_builtin(&mut registry)?;
        info!(target: "hilite::highlight", aliases = bound, "Built-in languages registered");
        Ok(Self::with_registry(registry, config))
    }

    pub fn with_registry(registry: LanguageRegistry, config: HighlightConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut LanguageRegistry {
        &mut self.registry
    }

    /// Registered aliases, sorted
    pub fn languages(&self) -> Vec<&str> {
        self.registry.aliases()
    }

    pub fn highlight<'s>(
        &self,
        language: &str,
        source: &'s str,
    ) -> Result<Highlighted<'s>, HighlightError> {
        let handler = self
            .registry
            .resolve(language, self.config.fallback_language.as_deref())?;
        let tokens = handler.tokenize(source);

        debug!(
            target: "hilite::highlight",
            language,
            handler = handler.name(),
            tokens = tokens.len(),
            "Highlighted source"
        );

        Ok(Highlighted {
            language: language.to_string(),
            handler: handler.name().to_string(),
            tokens,
        })
    }

    /// Decorations for `source`, merged according to the config
    pub fn decorate(&self, language: &str, source: &str) -> Result<Vec<Decoration>, HighlightError> {
        let highlighted = self.highlight(language, source)?;
        Ok(highlighted.decorations(self.config.merge_decorations))
    }
}
