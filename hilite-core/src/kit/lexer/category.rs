//! Token 类别
//!
//! 类别归宿主所有，规则表只按名字引用。短类名与样式表约定一致。

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// 默认类别，也是无规则匹配时的兜底
    Plain,
    String,
    Keyword,
    Comment,
    Type,
    Literal,
    Punctuation,
    Tag,
    Declaration,
    Source,
    AttribName,
    AttribValue,
    NoCode,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 13] = [
        TokenCategory::Plain,
        TokenCategory::String,
        TokenCategory::Keyword,
        TokenCategory::Comment,
        TokenCategory::Type,
        TokenCategory::Literal,
        TokenCategory::Punctuation,
        TokenCategory::Tag,
        TokenCategory::Declaration,
        TokenCategory::Source,
        TokenCategory::AttribName,
        TokenCategory::AttribValue,
        TokenCategory::NoCode,
    ];

    /// 样式短类名
    pub fn class_name(&self) -> &'static str {
        match self {
            TokenCategory::Plain => "pln",
            TokenCategory::String => "str",
            TokenCategory::Keyword => "kwd",
            TokenCategory::Comment => "com",
            TokenCategory::Type => "typ",
            TokenCategory::Literal => "lit",
            TokenCategory::Punctuation => "pun",
            TokenCategory::Tag => "tag",
            TokenCategory::Declaration => "dec",
            TokenCategory::Source => "src",
            TokenCategory::AttribName => "atn",
            TokenCategory::AttribValue => "atv",
            TokenCategory::NoCode => "nocode",
        }
    }

    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.class_name() == name)
    }
}

impl Default for TokenCategory {
    fn default() -> Self {
        TokenCategory::Plain
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
