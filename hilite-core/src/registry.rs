//! Language handler registry
//!
//! Maps language aliases (the `asm` in `lang-asm`) to handlers. The registry
//! is an ordinary value passed by reference; there is no process-wide state.

use crate::error::RegistryError;
use crate::kit::lexer::{decorations, Decoration, Token};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Something that can tokenize source text for one language
pub trait LanguageHandler: Send + Sync {
    /// Handler name, used in logs and listings
    fn name(&self) -> &str;

    /// Split `source` into contiguous categorized tokens
    fn tokenize<'s>(&self, source: &'s str) -> Vec<Token<'s>>;

    /// Decoration list with adjacent same-category runs merged
    fn decorate(&self, source: &str) -> Vec<Decoration> {
        decorations(self.tokenize(source), true)
    }
}

/// Alias-to-handler map
#[derive(Default)]
pub struct LanguageRegistry {
    handlers: HashMap<String, Arc<dyn LanguageHandler>>,
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("aliases", &self.aliases())
            .finish()
    }
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind `handler` to every alias in `aliases`
    ///
    /// An alias that is already bound keeps its existing handler; the clash is
    /// logged and the alias skipped. Returns how many aliases were bound.
    pub fn register(
        &mut self,
        handler: Arc<dyn LanguageHandler>,
        aliases: &[&str],
    ) -> Result<usize, RegistryError> {
        if aliases.is_empty() {
            return Err(RegistryError::NoAliases {
                handler: handler.name().to_string(),
            });
        }
        if let Some(bad) = aliases.iter().find(|a| !is_valid_alias(a)) {
            return Err(RegistryError::InvalidAlias {
                alias: bad.to_string(),
            });
        }

        let mut bound = 0;
        for &alias in aliases {
            if let Some(existing) = self.handlers.get(alias) {
                warn!(
                    target: "hilite::registry",
                    alias,
                    existing = existing.name(),
                    rejected = handler.name(),
                    "cannot override language handler"
                );
                continue;
            }
            self.handlers.insert(alias.to_string(), Arc::clone(&handler));
            bound += 1;
        }

        debug!(
            target: "hilite::registry",
            handler = handler.name(),
            bound,
            requested = aliases.len(),
            "Registered language handler"
        );
        Ok(bound)
    }

    /// Get the handler for an alias
    pub fn get(&self, alias: &str) -> Option<Arc<dyn LanguageHandler>> {
        self.handlers.get(alias).cloned()
    }

    /// Check if an alias is bound
    pub fn contains(&self, alias: &str) -> bool {
        self.handlers.contains_key(alias)
    }

    /// Handler for `alias`, else for `fallback`
    pub fn resolve(
        &self,
        alias: &str,
        fallback: Option<&str>,
    ) -> Result<Arc<dyn LanguageHandler>, RegistryError> {
        if let Some(handler) = self.get(alias) {
            return Ok(handler);
        }
        if let Some(handler) = fallback.and_then(|f| self.get(f)) {
            debug!(
                target: "hilite::registry",
                alias,
                fallback = handler.name(),
                "Using fallback language handler"
            );
            return Ok(handler);
        }
        Err(RegistryError::UnknownLanguage {
            alias: alias.to_string(),
        })
    }

    /// All bound aliases, sorted
    pub fn aliases(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of bound aliases
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty() && !alias.chars().any(char::is_whitespace)
}
