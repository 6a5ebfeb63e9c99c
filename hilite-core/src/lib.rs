//! Hilite Core - rule-table lexer engine, language registry and built-in rule sets
//!
//! ```
//! use hilite_core::{Highlighter, TokenCategory};
//!
//! let highlighter = Highlighter::new(Default::default()).unwrap();
//! let out = highlighter.highlight("asm", "movl %eax, %ebx").unwrap();
//! assert_eq!(out.tokens[0].category, TokenCategory::Keyword);
//! ```

pub mod error;
pub mod highlight;
pub mod kit;
pub mod lang;
pub mod registry;

pub use error::{HighlightError, RegistryError, RuleError};
pub use highlight::{Highlighted, Highlighter};
pub use kit::lexer::{
    Decoration, Rule, RuleSpec, SimpleLexer, SourcePosition, SourceSpan, Token, TokenCategory,
};
pub use registry::{LanguageHandler, LanguageRegistry};

// Re-export config for convenience
pub use hilite_config;
