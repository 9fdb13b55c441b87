//! 受限字面量解码器
//! 仅覆盖文法接受的五种值形态（None/布尔/字符串数组/字符串），不做通用表达式求值
//! 文法已接受的文本解码必然成功；解码失败属于实现级文法缺陷，直接 panic 而非上报用户

use once_cell::sync::Lazy;
use regex::Regex;

use super::grammar::ValueShape;

// 数组元素模式（无前瞻，标准引擎即可）
static ARRAY_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)'(?:\\.|[^'])*'|"(?:\\.|[^"])*""#).unwrap()
});

/// 解码后的原生值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    None,
    Bool(bool),
    Str(String),
    Array(Vec<String>),
}

/// 字面量解码器
pub struct ValueDecoder;

impl ValueDecoder {
    /// 按形态解码原始字面量文本
    /// 空字符串形态（键存在但值省略）不应传入本方法，由装配器先行过滤
    pub fn decode(shape: ValueShape, raw: &str) -> LiteralValue {
        match shape {
            ValueShape::None => LiteralValue::None,
            ValueShape::Bool => LiteralValue::Bool(raw == "True"),
            ValueShape::Array => LiteralValue::Array(Self::decode_array(raw)),
            ValueShape::Str => LiteralValue::Str(Self::decode_string(raw)),
        }
    }

    /// 解码字符串字面量（四种引号形式，r 前缀表示原样读取）
    pub fn decode_string(raw: &str) -> String {
        let (body, is_raw) = match raw.strip_prefix('r') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        let content = if body.len() >= 6 && (body.starts_with("\"\"\"") || body.starts_with("'''")) {
            &body[3..body.len() - 3]
        } else if body.len() >= 2 && (body.starts_with('"') || body.starts_with('\'')) {
            &body[1..body.len() - 1]
        } else {
            unreachable!("文法缺陷：字符串字面量缺少合法引号包裹：{:?}", raw)
        };

        if is_raw {
            content.to_string()
        } else {
            Self::unescape(content)
        }
    }

    /// 解码数组字面量为字符串序列（保持出现顺序）
    fn decode_array(raw: &str) -> Vec<String> {
        let inner = raw
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or_else(|| unreachable!("文法缺陷：数组字面量缺少方括号：{:?}", raw));

        ARRAY_ELEMENT
            .find_iter(inner)
            .map(|m| Self::decode_string(m.as_str()))
            .collect()
    }

    /// 反转义引号内文本
    /// 未知转义序列保留反斜杠本身（与宿主文本方言一致）
    fn unescape(content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut chars = content.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('0') => out.push('\0'),
                Some('\\') => out.push('\\'),
                Some('\'') => out.push('\''),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                // 文法保证引号内转义成对出现
                None => unreachable!("文法缺陷：字符串内容以孤立反斜杠结尾"),
            }
        }
        out
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_double_quoted_with_escapes() {
        // 测试场景：常见转义序列还原
        let s = ValueDecoder::decode_string(r#""a\tb\nc\"d""#);
        assert_eq!(s, "a\tb\nc\"d");
    }

    #[test]
    fn test_decode_unknown_escape_keeps_backslash() {
        // 测试场景：未知转义 \w 保留反斜杠（宿主方言语义）
        let s = ValueDecoder::decode_string(r#""a\wb""#);
        assert_eq!(s, r"a\wb");
    }

    #[test]
    fn test_decode_raw_triple_keeps_backslashes() {
        // 测试场景：r 前缀三引号原样读取，单反斜杠不被解释
        let s = ValueDecoder::decode_string(r#"r"""\d+\n""""#);
        assert_eq!(s, r"\d+\n");
    }

    #[test]
    fn test_decode_triple_single_quoted() {
        let s = ValueDecoder::decode_string("'''multi\nline'''");
        assert_eq!(s, "multi\nline");
    }

    #[test]
    fn test_decode_bool_and_none() {
        assert_eq!(
            ValueDecoder::decode(ValueShape::Bool, "True"),
            LiteralValue::Bool(true)
        );
        assert_eq!(
            ValueDecoder::decode(ValueShape::Bool, "False"),
            LiteralValue::Bool(false)
        );
        assert_eq!(
            ValueDecoder::decode(ValueShape::None, "None"),
            LiteralValue::None
        );
    }

    #[test]
    fn test_decode_array_elements_in_order() {
        // 测试场景：数组元素解码保持顺序，转义引号元素正确还原
        let v = ValueDecoder::decode(ValueShape::Array, r#"['comment', "it\"s", 'x']"#);
        assert_eq!(
            v,
            LiteralValue::Array(vec![
                "comment".to_string(),
                "it\"s".to_string(),
                "x".to_string()
            ])
        );
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(
            ValueDecoder::decode(ValueShape::Array, "[]"),
            LiteralValue::Array(vec![])
        );
    }
}
