//! 源码位置
//!
//! 每个 token 同时携带三种坐标：
//! - line/column：给人看的（1-based，按码点计数）
//! - byte_offset：切片和装饰列表使用（0-based）
//! - utf16_column：编辑器/LSP 对接（0-based）

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
    pub byte_offset: usize,
    pub utf16_column: usize,
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize, utf16_column: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
            utf16_column,
        }
    }

    /// 输入起点
    pub fn start() -> Self {
        Self::new(1, 1, 0, 0)
    }

    /// 越过一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.utf16_column = 0;
        } else {
            self.column += 1;
            self.utf16_column += c.len_utf16();
        }
        self.byte_offset += c.len_utf8();
    }

    /// 越过一段已匹配的文本，返回新位置
    pub fn advanced_by(mut self, text: &str) -> Self {
        for c in text.chars() {
            self.advance(c);
        }
        self
    }
}

/// 半开区间 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// 区间覆盖的字节数
    pub fn len(&self) -> usize {
        self.end.byte_offset - self.start.byte_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
