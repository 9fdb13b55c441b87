//! 模式编译检查
//! 保存路径的第五步校验：按搜索类型与正则方言试编译 find 文本，仅验证可编译性

use regex::RegexBuilder;

use crate::error::{RdResult, RuleditError};
use crate::rule::SearchType;

/// 模式编译器
pub struct PatternCompiler;

impl PatternCompiler {
    /// 校验 find 文本在给定搜索类型下可编译
    ///
    /// - literal / literal_no_case：先整体转义为字面子串模式再编译，
    ///   literal_no_case 额外置忽略大小写标志
    /// - regex / scope_regex：原样编译；extended 为真时走扩展反向引用方言
    /// - find 缺失时跳过（scope_regex 允许无 find；其余类型的必填性由前序步骤保证）
    pub fn check(search_type: SearchType, find: Option<&str>, extended: bool) -> RdResult<()> {
        let Some(find) = find else {
            return Ok(());
        };

        if search_type.is_literal() {
            let escaped = regex::escape(find);
            RegexBuilder::new(&escaped)
                .case_insensitive(search_type == SearchType::LiteralNoCase)
                .build()
                .map_err(|e| RuleditError::PatternCompileError(e.to_string()))?;
        } else if extended {
            fancy_regex::Regex::new(find)
                .map_err(|e| RuleditError::PatternCompileError(e.to_string()))?;
        } else {
            regex::Regex::new(find)
                .map_err(|e| RuleditError::PatternCompileError(e.to_string()))?;
        }

        Ok(())
    }
}
