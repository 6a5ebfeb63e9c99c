//! 词法规则
//!
//! `RuleSpec` 是可以写成 `const` 的字面量数据，`Rule` 是编译后的形式。
//! 编译时统一包成 `^(?:pattern)`，保证每个分支都锚定在剩余输入的起点。

use super::category::TokenCategory;
use crate::error::RuleError;
use regex::{Regex, RegexBuilder};

/// 规则的字面描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub category: TokenCategory,
    /// 正则表达式，约定以 `^` 开头
    pub pattern: &'static str,
    /// 大小写覆盖，`None` 表示沿用默认（区分大小写）
    pub case_insensitive: Option<bool>,
    /// 快速分派字符，只允许出现在 shortcut 组
    pub shortcuts: Option<&'static str>,
}

impl RuleSpec {
    pub const fn new(category: TokenCategory, pattern: &'static str) -> Self {
        Self {
            category,
            pattern,
            case_insensitive: None,
            shortcuts: None,
        }
    }

    pub const fn with_shortcuts(mut self, chars: &'static str) -> Self {
        self.shortcuts = Some(chars);
        self
    }

    pub const fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = Some(yes);
        self
    }
}

/// 编译后的规则
#[derive(Debug, Clone)]
pub struct Rule {
    category: TokenCategory,
    pattern: &'static str,
    regex: Regex,
}

impl Rule {
    pub fn compile(spec: &RuleSpec) -> Result<Self, RuleError> {
        let anchored = format!("^(?:{})", spec.pattern);
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(spec.case_insensitive.unwrap_or(false))
            .build()
            .map_err(|source| RuleError::InvalidPattern {
                category: spec.category,
                pattern: spec.pattern.to_string(),
                source,
            })?;

        Ok(Self {
            category: spec.category,
            pattern: spec.pattern,
            regex,
        })
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// 在 `rest` 起点尝试匹配，返回匹配的字节长度
    ///
    /// 空匹配视为失败，否则扫描无法前进。`rest` 的末尾就是整个输入的末尾，
    /// 所以模式里的 `$` 只会在输入结束处成立。
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex
            .find(rest)
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| m.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &'static str) -> Rule {
        Rule::compile(&RuleSpec::new(TokenCategory::Plain, pattern)).unwrap()
    }

    #[test]
    fn test_every_alternative_is_anchored() {
        // 未加括号的 `|` 右侧分支也不能在中途匹配
        let r = rule(r"^a|b");
        assert_eq!(r.match_len("b"), Some(1));
        assert_eq!(r.match_len("xb"), None);
    }

    #[test]
    fn test_empty_match_is_rejected() {
        let r = rule(r"^x*");
        assert_eq!(r.match_len("yyy"), None);
        assert_eq!(r.match_len("xxy"), Some(2));
    }

    #[test]
    fn test_dollar_means_end_of_input() {
        let r = rule(r"^\.\.\.$");
        assert_eq!(r.match_len("..."), Some(3));
        assert_eq!(r.match_len("...\n"), None);
    }

    #[test]
    fn test_case_insensitive_override() {
        let spec = RuleSpec::new(TokenCategory::Keyword, r"^mov").case_insensitive(true);
        let r = Rule::compile(&spec).unwrap();
        assert_eq!(r.match_len("MOVL"), Some(3));

        let strict = rule(r"^mov");
        assert_eq!(strict.match_len("MOV"), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::compile(&RuleSpec::new(TokenCategory::String, r"^[abc")).unwrap_err();
        assert!(matches!(
            err,
            RuleError::InvalidPattern { category: TokenCategory::String, .. }
        ));
    }

    #[test]
    fn test_const_spec_builder() {
        const SPEC: RuleSpec = RuleSpec::new(TokenCategory::Comment, r"^#[^\r\n]*").with_shortcuts("#");
        assert_eq!(SPEC.shortcuts, Some("#"));
        assert_eq!(SPEC.case_insensitive, None);
    }
}
