//! 规则表词法器
//!
//! 设计目标：
//! - 声明式：语言只提供有序的 (类别, 正则) 规则表
//! - 无状态：每条规则只看当前偏移，不维护状态机
//! - 总能前进：无规则匹配时按单字符 `Plain` 处理
//! - 零拷贝：token 文本直接借用输入

pub mod category;
pub mod decoration;
pub mod position;
pub mod rule;
pub mod simple;
pub mod token;

pub use category::TokenCategory;
pub use decoration::{decorations, Decoration};
pub use position::{SourcePosition, SourceSpan};
pub use rule::{Rule, RuleSpec};
pub use simple::{SimpleLexer, Tokens};
pub use token::{concat_text, Token};
