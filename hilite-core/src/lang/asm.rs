//! Assembly (AT&T flavour) rule set, registered as `asm` and `att`

use crate::error::{HighlightError, RuleError};
use crate::kit::lexer::{RuleSpec, SimpleLexer, TokenCategory};
use crate::registry::LanguageRegistry;
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub const NAME: &str = "asm";

pub const ALIASES: [&str; 2] = ["asm", "att"];

/// Context-independent rules, tried first
pub const SHORTCUT_RULES: &[RuleSpec] = &[
    RuleSpec::new(TokenCategory::Plain, r"^[\t\n\r \xA0]+").with_shortcuts("\t\n\r \u{A0}"),
    // `!"…"`, escapes swallow anything; an unterminated string runs to end of input
    RuleSpec::new(TokenCategory::String, r#"^!?"(?:[^"\\]|\\[\s\S])*(?:"|$)"#).with_shortcuts("\""),
    RuleSpec::new(TokenCategory::Comment, r"^#[^\r\n]*").with_shortcuts("#"),
];

/// Tried only when no shortcut rule matches
pub const FALLTHROUGH_RULES: &[RuleSpec] = &[
    // registers and parameters: %eax, @plt, !1
    RuleSpec::new(
        TokenCategory::Plain,
        r"^[%@!](?:[\-a-zA-Z$._][\-a-zA-Z$._0-9]*|[0-9]+)",
    ),
    RuleSpec::new(TokenCategory::Keyword, r"^[A-Za-z_][0-9A-Za-z_]*"),
    // hex first, otherwise `0x1F` stops at `0`
    RuleSpec::new(TokenCategory::Literal, r"^\$?(?:0[xX][a-fA-F0-9]+|[0-9]+)"),
    // the ellipsis only counts at end of input
    RuleSpec::new(TokenCategory::Punctuation, r"^[()\[\]{},=*<>:]|\.\.\.$"),
];

static SHARED: OnceCell<Arc<SimpleLexer>> = OnceCell::new();

/// Build a fresh lexer from the rule table
pub fn lexer() -> Result<SimpleLexer, RuleError> {
    SimpleLexer::new(NAME, SHORTCUT_RULES, FALLTHROUGH_RULES)
}

/// Process-wide compiled lexer, built on first use
pub fn shared() -> Result<Arc<SimpleLexer>, RuleError> {
    SHARED.get_or_try_init(|| lexer().map(Arc::new)).cloned()
}

/// Register the assembly handler under [`ALIASES`]
pub fn register(registry: &mut LanguageRegistry) -> Result<usize, HighlightError> {
    let handler = shared()?;
    Ok(registry.register(handler, &ALIASES)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::Token;

    fn lex(src: &str) -> Vec<(TokenCategory, &str)> {
        let lexer = shared().unwrap();
        lexer.tokenize(src).map(|t: Token<'_>| (t.category, t.text)).collect()
    }

    #[test]
    fn test_table_compiles() {
        let lexer = lexer().unwrap();
        assert_eq!(lexer.shortcut_rules().len(), 3);
        assert_eq!(lexer.fallthrough_rules().len(), 4);
    }

    #[test]
    fn test_shortcut_chars() {
        let lexer = lexer().unwrap();
        for c in ['\t', '\n', '\r', ' ', '\u{a0}'] {
            assert_eq!(lexer.shortcut_for(c).map(|r| r.category()), Some(TokenCategory::Plain));
        }
        assert_eq!(lexer.shortcut_for('"').map(|r| r.category()), Some(TokenCategory::String));
        assert_eq!(lexer.shortcut_for('#').map(|r| r.category()), Some(TokenCategory::Comment));
        assert!(lexer.shortcut_for('!').is_none());
    }

    #[test]
    fn test_shared_is_reused() {
        let a = shared().unwrap();
        let b = shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_sigil_with_hyphen_and_digits() {
        assert_eq!(lex("@foo-bar"), vec![(TokenCategory::Plain, "@foo-bar")]);
        assert_eq!(lex("!12"), vec![(TokenCategory::Plain, "!12")]);
    }

    #[test]
    fn test_bang_string_beats_sigil() {
        assert_eq!(lex(r#"!"x""#), vec![(TokenCategory::String, r#"!"x""#)]);
    }

    #[test]
    fn test_escaped_quote_and_newline_in_string() {
        let src = "\"a\\\"b\\\nc\"";
        assert_eq!(lex(src), vec![(TokenCategory::String, src)]);
    }

    #[test]
    fn test_comment_stops_before_carriage_return() {
        assert_eq!(
            lex("# x\r\n"),
            vec![(TokenCategory::Comment, "# x"), (TokenCategory::Plain, "\r\n")]
        );
    }

    #[test]
    fn test_instruction_line() {
        assert_eq!(
            lex("movl $0x10, (%esp)"),
            vec![
                (TokenCategory::Keyword, "movl"),
                (TokenCategory::Plain, " "),
                (TokenCategory::Literal, "$0x10"),
                (TokenCategory::Punctuation, ","),
                (TokenCategory::Plain, " "),
                (TokenCategory::Punctuation, "("),
                (TokenCategory::Plain, "%esp"),
                (TokenCategory::Punctuation, ")"),
            ]
        );
    }

    #[test]
    fn test_register_binds_both_aliases() {
        let mut registry = LanguageRegistry::new();
        assert_eq!(register(&mut registry).unwrap(), 2);
        assert_eq!(registry.get("att").unwrap().name(), NAME);
        // second registration is a no-op
        assert_eq!(register(&mut registry).unwrap(), 0);
    }
}
