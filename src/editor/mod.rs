//! 编辑器集成模块：宿主协作方接缝与命令驱动
pub mod host;
pub mod commands;

pub use self::host::{
    Notifier, SelectionUi, TextPanel, SYNTAX_EXTENSIONS,
    assign_first_resolving_syntax, syntax_candidates,
};
pub use self::commands::{ConvertRulesCommand, EditRuleCommand, PanelSaveCommand};
