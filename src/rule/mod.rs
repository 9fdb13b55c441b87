//! 规则模块：数据模型、装配校验、旧版迁移与设置文档存取
pub mod model;
pub mod assemble;
pub mod migrate;
pub mod store;

// 导出核心接口
pub use self::model::{
    LegacyRule, PluginSettings, Rule, RuleDraft, RulesDocument, SearchType,
};
pub use self::assemble::RuleAssembler;
pub use self::migrate::RuleMigrator;
pub use self::store::SettingsStore;
