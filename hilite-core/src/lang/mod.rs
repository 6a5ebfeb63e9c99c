//! Built-in language rule sets

pub mod asm;

use crate::error::HighlightError;
use crate::registry::LanguageRegistry;

/// Register every built-in language. Returns the number of aliases bound.
pub fn register_builtin(registry: &mut LanguageRegistry) -> Result<usize, HighlightError> {
    asm::register(registry)
}
