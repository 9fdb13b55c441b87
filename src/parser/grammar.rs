//! 编辑面板行文法识别器
//! 在自由文本缓冲中按行边界识别 `key = value` 赋值，产出 (键, 值形态, 原始字面量) 三元组
//! 每轮迭代只做一次复合模式匹配，不做逐字段回溯解析

use fancy_regex::Regex;
use once_cell::sync::Lazy;

// 复合行模式：值形态按优先级排列（None > 布尔 > 字符串数组 > 字符串）
// 字符串分支内三引号形式优先于单行形式，避免多行内容在首个引号处被截断；
// 末尾空分支匹配"键存在但值省略"（区别于显式 None）。
// 三引号内容依赖 (?!") 前瞻，标准 regex 引擎不支持，故用 fancy-regex 编译。
static EDIT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?ms)^\s*([a-zA-Z\d_]+)\s*=\s*("#,
        r#"(None)"#,
        r#"|(True|False)"#,
        r#"|(\[(?:\s*(?:'(?:\\.|[^'])*'|"(?:\\.|[^"])*")\s*,?\s*)*\])"#,
        r#"|(r?"{3}(?:\\.|"{1,2}(?!")|[^"])*?"{3}"#,
        r#"|r?'{3}(?:\\.|'{1,2}(?!')|[^'])*?'{3}"#,
        r#"|'(?:\\.|[^'])*'"#,
        r#"|"(?:\\.|[^"])*""#,
        r#"|)"#,
        r#")\s*$"#
    ))
    .unwrap()
});

/// 值形态（与复合模式的捕获分支一一对应）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// `None` 关键字（下游按"字段缺失"处理）
    None,
    /// `True` / `False` 关键字
    Bool,
    /// 单/双引号字符串元素组成的方括号数组
    Array,
    /// 四种字符串形式之一；raw 为空串表示"键存在但值省略"
    Str,
}

/// 识别出的一条赋值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'t> {
    pub key: &'t str,
    pub shape: ValueShape,
    pub raw: &'t str,
}

/// 行文法扫描器
/// 每次成功匹配后从匹配末尾继续；剩余缓冲不再出现可匹配行时扫描结束，
/// 已产出的三元组全部保留（缓冲末尾的残缺行不报错）
pub struct RuleTokenizer<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> RuleTokenizer<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }

    /// 一次性收集缓冲内全部赋值
    pub fn scan(text: &'t str) -> Vec<Assignment<'t>> {
        Self::new(text).collect()
    }
}

impl<'t> Iterator for RuleTokenizer<'t> {
    type Item = Assignment<'t>;

    fn next(&mut self) -> Option<Assignment<'t>> {
        if self.pos >= self.text.len() {
            return None;
        }
        // 回溯超限等引擎错误与"无更多匹配"同样终止扫描
        let caps = EDIT_LINE.captures_from_pos(self.text, self.pos).ok()??;
        let whole = caps.get(0)?;
        self.pos = whole.end();

        let key = caps.get(1)?.as_str();
        let raw = caps.get(2)?.as_str();
        let shape = if caps.get(3).is_some() {
            ValueShape::None
        } else if caps.get(4).is_some() {
            ValueShape::Bool
        } else if caps.get(5).is_some() {
            ValueShape::Array
        } else {
            ValueShape::Str
        };

        Some(Assignment { key, shape, raw })
    }
}
