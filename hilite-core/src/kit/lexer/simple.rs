//! 规则表驱动的简单词法器
//!
//! 由两组有序规则构成：
//! - shortcut 组：与上下文无关的规则（空白、字符串、注释），先尝试
//! - fallthrough 组：shortcut 组都不匹配时才尝试
//!
//! 组内顺序即优先级，第一条匹配成功的规则胜出。当前字符若是某条 shortcut
//! 规则的快速分派字符，先单独试这条规则，失败再走完整的有序扫描。
//! 没有任何规则匹配时，吞掉一个字符并归为 `Plain`，保证总能前进。

use super::category::TokenCategory;
use super::decoration::{decorations, Decoration};
use super::position::{SourcePosition, SourceSpan};
use super::rule::{Rule, RuleSpec};
use super::token::Token;
use crate::error::RuleError;
use crate::registry::LanguageHandler;
use std::collections::HashMap;
use tracing::{debug, trace};

pub struct SimpleLexer {
    name: String,
    /// shortcut 组在前，fallthrough 组在后
    rules: Vec<Rule>,
    shortcut_count: usize,
    shortcuts: HashMap<char, usize>,
}

impl std::fmt::Debug for SimpleLexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleLexer")
            .field("name", &self.name)
            .field("shortcut_rules", &self.shortcut_count)
            .field("fallthrough_rules", &(self.rules.len() - self.shortcut_count))
            .field("shortcut_chars", &self.shortcuts.len())
            .finish()
    }
}

impl SimpleLexer {
    /// 编译两组规则
    ///
    /// 同一字符出现在多条 shortcut 规则里时，以先出现的规则为准。
    pub fn new(
        name: impl Into<String>,
        shortcut_rules: &[RuleSpec],
        fallthrough_rules: &[RuleSpec],
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let mut rules = Vec::with_capacity(shortcut_rules.len() + fallthrough_rules.len());
        let mut shortcuts = HashMap::new();

        for (index, spec) in shortcut_rules.iter().enumerate() {
            rules.push(Rule::compile(spec)?);
            for c in spec.shortcuts.unwrap_or("").chars() {
                shortcuts.entry(c).or_insert(index);
            }
        }

        for spec in fallthrough_rules {
            if spec.shortcuts.is_some() {
                return Err(RuleError::ShortcutOnFallthrough {
                    category: spec.category,
                    pattern: spec.pattern.to_string(),
                });
            }
            rules.push(Rule::compile(spec)?);
        }

        debug!(
            target: "hilite::lexer",
            lexer = %name,
            shortcut_rules = shortcut_rules.len(),
            fallthrough_rules = fallthrough_rules.len(),
            shortcut_chars = shortcuts.len(),
            "Compiled rule table"
        );

        Ok(Self {
            name,
            rules,
            shortcut_count: shortcut_rules.len(),
            shortcuts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shortcut_rules(&self) -> &[Rule] {
        &self.rules[..self.shortcut_count]
    }

    pub fn fallthrough_rules(&self) -> &[Rule] {
        &self.rules[self.shortcut_count..]
    }

    /// 快速分派字符对应的规则
    pub fn shortcut_for(&self, c: char) -> Option<&Rule> {
        self.shortcuts.get(&c).map(|&index| &self.rules[index])
    }

    /// 对 `rest` 的起点做一次分类，返回 (类别, 字节长度)
    ///
    /// `rest` 为空时返回 `None`。
    pub fn classify(&self, rest: &str) -> Option<(TokenCategory, usize)> {
        let first = rest.chars().next()?;

        if let Some(rule) = self.shortcut_for(first) {
            if let Some(len) = rule.match_len(rest) {
                return Some((rule.category(), len));
            }
        }

        let matched = self
            .rules
            .iter()
            .find_map(|rule| rule.match_len(rest).map(|len| (rule.category(), len)));

        Some(matched.unwrap_or((TokenCategory::Plain, first.len_utf8())))
    }

    /// 逐个产出 token
    pub fn tokenize<'l, 's>(&'l self, source: &'s str) -> Tokens<'l, 's> {
        trace!(target: "hilite::lexer", lexer = %self.name, bytes = source.len(), "Tokenizing");
        Tokens {
            lexer: self,
            source,
            position: SourcePosition::start(),
        }
    }

    /// 生成装饰列表（相邻同类合并）
    pub fn decorate(&self, source: &str) -> Vec<Decoration> {
        decorations(self.tokenize(source), true)
    }
}

/// `SimpleLexer::tokenize` 返回的迭代器
pub struct Tokens<'l, 's> {
    lexer: &'l SimpleLexer,
    source: &'s str,
    position: SourcePosition,
}

impl<'l, 's> Tokens<'l, 's> {
    /// 下一个 token 的起点
    pub fn position(&self) -> SourcePosition {
        self.position
    }
}

impl<'l, 's> Iterator for Tokens<'l, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.position.byte_offset;
        let rest = &self.source[offset..];
        let (category, len) = self.lexer.classify(rest)?;

        let text = &rest[..len];
        let start = self.position;
        let end = start.advanced_by(text);
        self.position = end;

        trace!(
            target: "hilite::lexer",
            category = category.class_name(),
            ?text,
            line = start.line,
            column = start.column,
            "Produced token"
        );
        Some(Token::new(category, text, SourceSpan::range(start, end)))
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

impl LanguageHandler for SimpleLexer {
    fn name(&self) -> &str {
        &self.name
    }

    fn tokenize<'s>(&self, source: &'s str) -> Vec<Token<'s>> {
        SimpleLexer::tokenize(self, source).collect()
    }
}
