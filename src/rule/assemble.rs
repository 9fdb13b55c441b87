//! 规则装配与校验
//! 消费解码后的键值流装配 RuleDraft，再按固定顺序执行语义校验（遇错即停）

use tracing::debug;

use crate::compiler::PatternCompiler;
use crate::error::{RdResult, RuleditError};
use crate::parser::{LiteralValue, RuleTokenizer, ValueDecoder, ValueShape};
use super::model::{Rule, RuleDraft, SearchType};

// 允许键之外的赋值静默跳过，不报错
const STRING_KEYS: [&str; 4] = ["find", "replace", "scope", "plugin"];
const BOOL_KEYS: [&str; 3] = ["greedy", "greedy_scope", "multi_pass"];

/// 规则装配器
pub struct RuleAssembler;

impl RuleAssembler {
    /// 扫描缓冲文本，装配校验前的中间态
    /// name 在规则体之外单独返回；None 值与空值（键存在但值省略）均视为字段缺失
    pub fn assemble(text: &str) -> (Option<String>, RuleDraft) {
        let mut name = None;
        let mut draft = RuleDraft::default();

        for item in RuleTokenizer::new(text) {
            // None 赋值等同字段缺失；空字符串形态表示值省略
            if item.shape == ValueShape::None || item.raw.is_empty() {
                continue;
            }

            match item.key {
                "name" => {
                    if item.shape == ValueShape::Str {
                        if let LiteralValue::Str(s) = ValueDecoder::decode(item.shape, item.raw) {
                            name = Some(s);
                        }
                    }
                }
                "search_type" => {
                    if item.shape == ValueShape::Str {
                        if let LiteralValue::Str(s) = ValueDecoder::decode(item.shape, item.raw) {
                            // 枚举外的取值不写入，留待校验阶段按缺失报错
                            draft.search_type = SearchType::from_name(&s);
                        }
                    }
                }
                key if STRING_KEYS.contains(&key) => {
                    if item.shape == ValueShape::Str {
                        if let LiteralValue::Str(s) = ValueDecoder::decode(item.shape, item.raw) {
                            match key {
                                "find" => draft.find = Some(s),
                                "replace" => draft.replace = Some(s),
                                "scope" => draft.scope = Some(s),
                                "plugin" => draft.plugin = Some(s),
                                _ => {}
                            }
                        }
                    }
                }
                key if BOOL_KEYS.contains(&key) => {
                    if item.shape == ValueShape::Bool {
                        if let LiteralValue::Bool(b) = ValueDecoder::decode(item.shape, item.raw) {
                            match key {
                                "greedy" => draft.greedy = Some(b),
                                "greedy_scope" => draft.greedy_scope = Some(b),
                                "multi_pass" => draft.multi_pass = Some(b),
                                _ => {}
                            }
                        }
                    }
                }
                "scope_filter" => {
                    if item.shape == ValueShape::Array {
                        if let LiteralValue::Array(v) = ValueDecoder::decode(item.shape, item.raw) {
                            draft.scope_filter = Some(v);
                        }
                    }
                }
                _ => {}
            }
        }

        (name, draft)
    }

    /// 按序校验中间态并落为正式规则
    ///
    /// 顺序：名称 -> 搜索类型 -> find 必填 -> scope 必填 -> 模式编译检查。
    /// 全部通过后返回 (名称, 规则)，由调用方提交持久化。
    pub fn validate(
        name: Option<String>,
        draft: RuleDraft,
        extended: bool,
    ) -> RdResult<(String, Rule)> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(RuleditError::MissingName)?;
        let search_type = draft
            .search_type
            .ok_or(RuleditError::MissingOrInvalidSearchType)?;
        if search_type.requires_find() && draft.find.is_none() {
            return Err(RuleditError::MissingFind);
        }
        if search_type.requires_scope() && draft.scope.is_none() {
            return Err(RuleditError::MissingScope);
        }
        PatternCompiler::check(search_type, draft.find.as_deref(), extended)?;

        debug!("规则校验通过：{}（搜索类型 {}）", name, search_type);
        Ok((name, draft.into_rule(search_type)))
    }
}
