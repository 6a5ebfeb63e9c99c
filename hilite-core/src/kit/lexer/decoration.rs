//! 装饰列表
//!
//! 宿主端的输出格式：`(字节偏移, 类别)` 对，标记某个样式从哪里开始，
//! 持续到下一个装饰为止。

use super::category::TokenCategory;
use super::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoration {
    pub offset: usize,
    pub category: TokenCategory,
}

impl Decoration {
    pub fn new(offset: usize, category: TokenCategory) -> Self {
        Self { offset, category }
    }
}

/// 由 token 生成装饰；`merge` 为真时相邻同类 token 合并成一个装饰
pub fn decorations<'s, I>(tokens: I, merge: bool) -> Vec<Decoration>
where
    I: IntoIterator<Item = Token<'s>>,
{
    let mut out: Vec<Decoration> = Vec::new();
    for token in tokens {
        if merge && out.last().is_some_and(|d| d.category == token.category) {
            continue;
        }
        out.push(Decoration::new(token.span.start.byte_offset, token.category));
    }
    out
}
