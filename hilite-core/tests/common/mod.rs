//! 测试辅助工具

use hilite_core::kit::lexer::concat_text;
use hilite_core::lang::asm;
use hilite_core::{Token, TokenCategory};

/// 用内置 asm 规则表切分输入
#[allow(dead_code)]
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let lexer = asm::shared().unwrap();
    lexer.tokenize(source).collect()
}

/// 只保留 (类别, 文本)，便于断言
#[allow(dead_code)]
pub fn kinds(source: &str) -> Vec<(TokenCategory, &str)> {
    lex(source).into_iter().map(|t| (t.category, t.text)).collect()
}

/// 断言 token 首尾相接并覆盖整个输入
#[allow(dead_code)]
pub fn assert_covers(source: &str, tokens: &[Token<'_>]) {
    assert_eq!(concat_text(tokens), source);
    for pair in tokens.windows(2) {
        assert_eq!(pair[0].span.end, pair[1].span.start);
    }
}
