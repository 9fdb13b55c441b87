//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// 搜索类型（驱动不同的校验与编译路径）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Regex,
    ScopeRegex,
    Literal,
    LiteralNoCase,
}

impl SearchType {
    /// 从文本形式解析（仅接受固定枚举值，其余返回 None）
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "regex" => Some(SearchType::Regex),
            "scope_regex" => Some(SearchType::ScopeRegex),
            "literal" => Some(SearchType::Literal),
            "literal_no_case" => Some(SearchType::LiteralNoCase),
            _ => None,
        }
    }

    /// 文本形式（与序列化形式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Regex => "regex",
            SearchType::ScopeRegex => "scope_regex",
            SearchType::Literal => "literal",
            SearchType::LiteralNoCase => "literal_no_case",
        }
    }

    /// 该搜索类型是否要求 find 字段
    pub fn requires_find(&self) -> bool {
        matches!(
            self,
            SearchType::Regex | SearchType::Literal | SearchType::LiteralNoCase
        )
    }

    /// 该搜索类型是否要求 scope 字段
    pub fn requires_scope(&self) -> bool {
        matches!(self, SearchType::ScopeRegex)
    }

    /// 是否按字面量（转义后）编译
    pub fn is_literal(&self) -> bool {
        matches!(self, SearchType::Literal | SearchType::LiteralNoCase)
    }
}

// ======== 为 SearchType 实现 Display trait（用于面板输出与日志） ========
impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 规则记录（当前模式）
/// 字段为 None 时不写入持久化文档（稀疏编码）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub search_type: SearchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_filter: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greedy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greedy_scope: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_pass: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
}

impl Rule {
    /// 从搜索类型快速创建（其余字段缺省）
    pub fn from_search_type(search_type: SearchType) -> Self {
        Self {
            search_type,
            find: None,
            replace: None,
            scope: None,
            scope_filter: None,
            greedy: None,
            greedy_scope: None,
            multi_pass: None,
            plugin: None,
        }
    }
}

/// 规则装配中间态（校验前，允许任意字段缺失）
/// name 在规则体之外单独跟踪
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDraft {
    pub search_type: Option<SearchType>,
    pub find: Option<String>,
    pub replace: Option<String>,
    pub scope: Option<String>,
    pub scope_filter: Option<Vec<String>>,
    pub greedy: Option<bool>,
    pub greedy_scope: Option<bool>,
    pub multi_pass: Option<bool>,
    pub plugin: Option<String>,
}

// ======== 类型转换：通过校验后的中间态落为正式规则 ========
impl RuleDraft {
    pub fn into_rule(self, search_type: SearchType) -> Rule {
        Rule {
            search_type,
            find: self.find,
            replace: self.replace,
            scope: self.scope,
            scope_filter: self.scope_filter,
            greedy: self.greedy,
            greedy_scope: self.greedy_scope,
            multi_pass: self.multi_pass,
            plugin: self.plugin,
        }
    }
}

/// 规则集合设置文档（整文档读写）
/// 名称作为主键，同名覆盖；BTreeMap 保证选择列表展示顺序稳定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesDocument {
    #[serde(default)]
    pub replacements: BTreeMap<String, Rule>,
}

/// 旧版规则记录（迁移输入，隐式搜索模式标记）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyRule {
    #[serde(default)]
    pub find: Option<String>,
    #[serde(default)]
    pub replace: Option<String>,
    #[serde(default)]
    pub literal: Option<bool>,
    #[serde(default)]
    pub case: Option<bool>,
    #[serde(default)]
    pub dotall: Option<bool>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub scope_filter: Option<Vec<String>>,
    #[serde(default)]
    pub greedy: Option<bool>,
    #[serde(default)]
    pub greedy_replace: Option<bool>,
    #[serde(default)]
    pub greedy_scope: Option<bool>,
    #[serde(default)]
    pub multi_pass_regex: Option<bool>,
    #[serde(default)]
    pub plugin: Option<String>,
}

/// 插件设置文档（整文档读取）
/// 旧版规则集合仍保存在此文档的 replacements 键下，供迁移命令读取
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSettings {
    #[serde(default)]
    pub extended_back_references: bool,
    #[serde(default = "default_python_highlighter")]
    pub python_highlighter: String,
    #[serde(default)]
    pub replacements: BTreeMap<String, LegacyRule>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            extended_back_references: false,
            python_highlighter: default_python_highlighter(),
            replacements: BTreeMap::new(),
        }
    }
}

// ======== 辅助函数：python_highlighter 缺省值 ========
fn default_python_highlighter() -> String {
    "Python/Python".to_string()
}
