//! rsruledit - 文本编辑器查找/替换规则的结构化编辑核心

// 导出全局错误类型
pub use self::error::{RuleditError, RdResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    Rule, RuleDraft, RulesDocument, LegacyRule, PluginSettings, SearchType,
    RuleAssembler, RuleMigrator, SettingsStore,
};

// 导出解析模块核心接口
pub use self::parser::{Assignment, RuleTokenizer, ValueShape, LiteralValue, ValueDecoder};

// 导出编译模块核心接口
pub use self::compiler::PatternCompiler;

// 导出编码模块核心接口
pub use self::encoder::RuleEncoder;

// 导出编辑器集成核心接口
pub use self::editor::{
    TextPanel, SelectionUi, Notifier, SYNTAX_EXTENSIONS,
    PanelSaveCommand, EditRuleCommand, ConvertRulesCommand,
    assign_first_resolving_syntax, syntax_candidates,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod parser;
pub mod compiler;
pub mod encoder;
pub mod editor;
