//! CLI 配置
//!
//! 包含日志配置，以及 `hilite.json` 配置文件的结构

use crate::error::CliError;
use crate::output::OutputFormat;
use hilite_config::{HighlightConfig, LogLevel, Phase};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::Level;

/// 当前目录下默认查找的配置文件
pub const DEFAULT_CONFIG_FILE: &str = "hilite.json";

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub registry: Option<Level>,
    pub highlight: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            lexer: None,
            registry: None,
            highlight: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Registry => self.registry.unwrap_or(self.global),
            Phase::Highlight => self.highlight.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// 按阶段覆盖的日志级别
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhaseLevels {
    pub lexer: Option<LogLevel>,
    pub registry: Option<LogLevel>,
    pub highlight: Option<LogLevel>,
}

/// `hilite.json` 结构
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// 默认语言别名
    pub language: Option<String>,
    /// 默认输出格式
    pub format: Option<OutputFormat>,
    /// 全局日志级别: "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<LogLevel>,
    /// 分阶段日志级别
    pub log: PhaseLevels,
    /// 高亮配置
    pub highlight: HighlightConfig,
}

impl FileConfig {
    /// 构建日志配置，命令行给出的级别优先
    pub fn log_config(&self, cli_level: Option<LogLevel>) -> LogConfig {
        let global = cli_level
            .or(self.log_level)
            .map(to_tracing_level)
            .unwrap_or(LogConfig::default().global);

        LogConfig {
            global,
            lexer: self.log.lexer.map(to_tracing_level),
            registry: self.log.registry.map(to_tracing_level),
            highlight: self.log.highlight.map(to_tracing_level),
        }
    }
}

/// 读取并解析配置文件
pub fn read_config(path: &Path) -> Result<FileConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// 显式路径必须存在；未指定时仅在默认文件存在时读取
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, CliError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                read_config(&default)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}
