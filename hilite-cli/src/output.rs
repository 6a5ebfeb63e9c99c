//! CLI 格式化输出

use crate::error::CliError;
use hilite_core::{Decoration, Highlighted};
use serde::Deserialize;
use std::io::Write;

/// 输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 每行一个 token：`行:列  类名  文本`
    Text,
    /// 完整 JSON
    Json,
    /// 装饰列表：`偏移  类名`
    Decorations,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

pub fn write_text<W: Write>(out: &mut W, highlighted: &Highlighted<'_>) -> Result<(), CliError> {
    for token in &highlighted.tokens {
        writeln!(
            out,
            "{}:{}\t{}\t{:?}",
            token.span.start.line,
            token.span.start.column,
            token.category.class_name(),
            token.text
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, highlighted: &Highlighted<'_>) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, highlighted)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_decorations<W: Write>(out: &mut W, decorations: &[Decoration]) -> Result<(), CliError> {
    for decoration in decorations {
        writeln!(out, "{}\t{}", decoration.offset, decoration.category.class_name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilite_core::hilite_config::HighlightConfig;
    use hilite_core::Highlighter;

    fn render(format: OutputFormat, source: &str) -> String {
        let hl = Highlighter::new(HighlightConfig::default()).unwrap();
        let highlighted = hl.highlight("asm", source).unwrap();
        let mut buf = Vec::new();
        match format {
            OutputFormat::Text => write_text(&mut buf, &highlighted).unwrap(),
            OutputFormat::Json => write_json(&mut buf, &highlighted).unwrap(),
            OutputFormat::Decorations => {
                write_decorations(&mut buf, &highlighted.decorations(true)).unwrap()
            }
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            render(OutputFormat::Text, "ret # done"),
            "1:1\tkwd\t\"ret\"\n1:4\tpln\t\" \"\n1:5\tcom\t\"# done\"\n"
        );
    }

    #[test]
    fn test_decorations_output() {
        assert_eq!(render(OutputFormat::Decorations, "...x"), "0\tpln\n3\tkwd\n");
    }

    #[test]
    fn test_json_output_is_valid() {
        let text = render(OutputFormat::Json, "nop");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["language"], "asm");
        assert_eq!(value["tokens"][0]["category"], "keyword");
    }

    #[test]
    fn test_format_deserialize() {
        let f: OutputFormat = serde_json::from_str(r#""decorations""#).unwrap();
        assert_eq!(f, OutputFormat::Decorations);
    }
}
