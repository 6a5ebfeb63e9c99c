//! Token 结构

use super::category::TokenCategory;
use super::position::{SourcePosition, SourceSpan};
use serde::Serialize;

/// 一段已分类的源码，`text` 直接借用输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'s> {
    pub category: TokenCategory,
    pub text: &'s str,
    pub span: SourceSpan,
}

impl<'s> Token<'s> {
    pub fn new(category: TokenCategory, text: &'s str, span: SourceSpan) -> Self {
        Self {
            category,
            text,
            span,
        }
    }

    pub fn start(&self) -> SourcePosition {
        self.span.start
    }

    pub fn end(&self) -> SourcePosition {
        self.span.end
    }
}

/// 把 token 序列拼回源码
pub fn concat_text(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}
