//! 解析模块：编辑面板文本的行文法识别与受限字面量解码
pub mod grammar;
pub mod decode;

pub use self::grammar::{Assignment, RuleTokenizer, ValueShape};
pub use self::decode::{LiteralValue, ValueDecoder};
