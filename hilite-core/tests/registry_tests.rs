//! 语言注册与路由测试

mod common;
use hilite_core::hilite_config::HighlightConfig;
use hilite_core::lang::{self, asm};
use hilite_core::{
    Decoration, HighlightError, Highlighter, LanguageHandler, LanguageRegistry, RegistryError,
    RuleSpec, SimpleLexer, TokenCategory,
};
use std::sync::Arc;

fn semicolon_comments() -> Arc<SimpleLexer> {
    const SHORTCUT: &[RuleSpec] = &[
        RuleSpec::new(TokenCategory::Plain, r"^\s+").with_shortcuts(" \t\n"),
        RuleSpec::new(TokenCategory::Comment, r"^;[^\n]*").with_shortcuts(";"),
    ];
    const FALLTHROUGH: &[RuleSpec] = &[RuleSpec::new(TokenCategory::Keyword, r"^[a-z]+")];
    Arc::new(SimpleLexer::new("nasm", SHORTCUT, FALLTHROUGH).unwrap())
}

#[test]
fn test_both_aliases_route_to_same_rules() {
    let mut registry = LanguageRegistry::new();
    lang::register_builtin(&mut registry).unwrap();

    let src = "pushq %rbp # save";
    let via_asm = registry.get("asm").unwrap().tokenize(src);
    let via_att = registry.get("att").unwrap().tokenize(src);
    assert_eq!(via_asm, via_att);
    assert_eq!(via_asm, common::lex(src));
}

#[test]
fn test_builtin_alias_cannot_be_overridden() {
    let mut registry = LanguageRegistry::new();
    asm::register(&mut registry).unwrap();

    let bound = registry
        .register(semicolon_comments(), &["asm", "nasm"])
        .unwrap();
    assert_eq!(bound, 1);
    assert_eq!(registry.get("asm").unwrap().name(), asm::NAME);
    assert_eq!(registry.get("nasm").unwrap().name(), "nasm");
}

#[test]
fn test_custom_language_through_highlighter() {
    let mut hl = Highlighter::new(HighlightConfig::default()).unwrap();
    hl.registry_mut()
        .register(semicolon_comments(), &["nasm"])
        .unwrap();
    assert_eq!(hl.languages(), vec!["asm", "att", "nasm"]);

    let out = hl.highlight("nasm", "mov ; hi").unwrap();
    let cats: Vec<_> = out.tokens.iter().map(|t| t.category).collect();
    assert_eq!(
        cats,
        vec![TokenCategory::Keyword, TokenCategory::Plain, TokenCategory::Comment]
    );
}

#[test]
fn test_hash_is_not_a_comment_in_other_language() {
    let lexer = semicolon_comments();
    let decs = LanguageHandler::decorate(lexer.as_ref(), "#x");
    assert_eq!(
        decs,
        vec![
            Decoration::new(0, TokenCategory::Plain),
            Decoration::new(1, TokenCategory::Keyword),
        ]
    );
}

#[test]
fn test_unknown_language_without_fallback() {
    let hl = Highlighter::new(HighlightConfig::default()).unwrap();
    match hl.highlight("lang-asm", "nop") {
        Err(HighlightError::Registry(RegistryError::UnknownLanguage { alias })) => {
            assert_eq!(alias, "lang-asm")
        }
        other => panic!("expected UnknownLanguage, got {:?}", other.map(|h| h.handler)),
    }
}

#[test]
fn test_highlighted_serializes_to_json() {
    let hl = Highlighter::new(HighlightConfig::default()).unwrap();
    let out = hl.highlight("asm", "ret").unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["handler"], "asm");
    assert_eq!(json["tokens"][0]["category"], "keyword");
    assert_eq!(json["tokens"][0]["text"], "ret");
    assert_eq!(json["tokens"][0]["span"]["end"]["column"], 4);
}
