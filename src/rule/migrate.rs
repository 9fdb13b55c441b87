//! 旧版规则迁移
//! 将隐式搜索模式标记（literal/case/dotall/scope）的旧版记录逐条映射为当前模式，
//! 纯结构变换，不做任何校验——非法旧规则原样传播，待下次编辑/保存时暴露

use std::collections::BTreeMap;
use tracing::debug;

use super::model::{LegacyRule, Rule, RulesDocument, SearchType};

/// 旧版规则迁移器
pub struct RuleMigrator;

impl RuleMigrator {
    /// 迁移整个旧版集合，合并写入现有新版文档（同名覆盖）
    pub fn migrate_all(legacy: &BTreeMap<String, LegacyRule>, target: &mut RulesDocument) {
        for (name, old) in legacy {
            target
                .replacements
                .insert(name.clone(), Self::migrate_entry(old));
        }
        debug!("旧版规则迁移完成：{} 条", legacy.len());
    }

    /// 迁移单条旧版记录
    ///
    /// - 有 literal 键：literal / literal_no_case（后者要求 case 显式为假）
    /// - 否则有 scope 键：scope_regex（find 可缺失）
    /// - 否则：regex，case 为假 / dotall 为真折叠为单个内联标志组
    ///   （两者同时成立时合并为 (?is)，不得产生两个组），
    ///   且 find 内的字面换行/回车/制表符改写为转义序列文本
    ///
    /// 解析出的缺失字段保持缺失（稀疏编码），不落为显式 null
    pub fn migrate_entry(old: &LegacyRule) -> Rule {
        let (search_type, find) = if old.literal.is_some() {
            let search_type = if old.case == Some(false) {
                SearchType::LiteralNoCase
            } else {
                SearchType::Literal
            };
            (search_type, old.find.clone())
        } else if old.scope.is_some() {
            (SearchType::ScopeRegex, old.find.clone())
        } else {
            let mut flags = String::new();
            if old.case == Some(false) {
                flags.push('i');
            }
            if old.dotall == Some(true) {
                flags.push('s');
            }
            let prefix = if flags.is_empty() {
                String::new()
            } else {
                format!("(?{})", flags)
            };
            let find = old.find.as_ref().map(|f| {
                let escaped = f
                    .replace('\n', "\\n")
                    .replace('\r', "\\r")
                    .replace('\t', "\\t");
                format!("{}{}", prefix, escaped)
            });
            (SearchType::Regex, find)
        };

        Rule {
            search_type,
            find,
            replace: old.replace.clone(),
            scope: old.scope.clone(),
            scope_filter: old.scope_filter.clone(),
            greedy: old.greedy.or(old.greedy_replace),
            greedy_scope: old.greedy_scope,
            multi_pass: old.multi_pass_regex,
            plugin: old.plugin.clone(),
        }
    }
}
