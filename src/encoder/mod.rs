//! 编码模块：规则记录到可编辑文本方言的渲染
pub mod render;

pub use self::render::RuleEncoder;
