//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RuleditError {
    // 规则校验错误（用户输入类，保存路径按序检查，遇错即停）
    #[error("必须提供有效的规则名称！")]
    MissingName,
    #[error("必须提供有效的搜索类型！")]
    MissingOrInvalidSearchType,
    #[error("必须提供有效的查找模式！")]
    MissingFind,
    #[error("必须提供有效的作用域！")]
    MissingScope,
    #[error("正则编译失败！\n\n{0}")]
    PatternCompileError(String),

    // 设置文档错误
    #[error("设置文档JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

impl RuleditError {
    /// 是否属于用户输入校验错误（经通知协作方提示，不视为内部故障）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RuleditError::MissingName
                | RuleditError::MissingOrInvalidSearchType
                | RuleditError::MissingFind
                | RuleditError::MissingScope
                | RuleditError::PatternCompileError(_)
        )
    }
}

// 全局Result类型
pub type RdResult<T> = Result<T, RuleditError>;
