//! 字面量编码器
//! 将规则记录渲染回可人工编辑的文本方言：逐字段选择引号字符避免转义，
//! 无歧义引号不存在时回退为反斜杠转义；编码永不失败

use crate::rule::Rule;

/// 规则编码器
pub struct RuleEncoder;

impl RuleEncoder {
    /// 检查值在给定引号/连续长度下是否需要转义
    /// 反斜杠后的字符整体跳过，不计入连续引号长度
    fn needs_escape(value: &str, quote: char, run: usize) -> bool {
        let mut count = 0usize;
        let mut chars = value.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == quote {
                count += 1;
                if count == run {
                    return true;
                }
            } else {
                count = 0;
            }
        }
        false
    }

    /// 在每段连续引号的第 run 个之前插入反斜杠
    fn fix_escape(value: &str, quote: char, run: usize) -> String {
        let mut count = 0usize;
        let mut fixed = String::with_capacity(value.len() + 2);
        let mut chars = value.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                fixed.push(c);
                if let Some(next) = chars.next() {
                    fixed.push(next);
                }
            } else if c == quote {
                count += 1;
                if count == run {
                    fixed.push('\\');
                    fixed.push(c);
                    count = 0;
                } else {
                    fixed.push(c);
                }
            } else {
                count = 0;
                fixed.push(c);
            }
        }
        fixed
    }

    /// 单行字符串字段：优先双引号；含双引号改单引号；两者皆含回退转义双引号
    fn format_string(name: &str, value: Option<&str>) -> String {
        match value {
            Some(v) => {
                let single = Self::needs_escape(v, '\'', 1);
                let double = Self::needs_escape(v, '"', 1);
                if !double {
                    format!("{} = \"{}\"\n", name, v)
                } else if !single {
                    format!("{} = '{}'\n", name, v)
                } else {
                    format!("{} = \"{}\"\n", name, Self::fix_escape(v, '"', 1))
                }
            }
            None => format!("{} = None\n", name),
        }
    }

    /// find/replace 字段：r 前缀三引号，按三连引号粒度选择引号字符
    /// 单个嵌入引号不触发转义，只有三连同类引号才需要
    fn format_pattern_string(name: &str, value: Option<&str>) -> String {
        match value {
            Some(v) => {
                let single = Self::needs_escape(v, '\'', 3);
                let double = Self::needs_escape(v, '"', 3);
                if !double {
                    format!("{} = r\"\"\"{}\"\"\"\n", name, v)
                } else if !single {
                    format!("{} = r'''{}'''\n", name, v)
                } else {
                    format!("{} = r\"\"\"{}\"\"\"\n", name, Self::fix_escape(v, '"', 3))
                }
            }
            None => format!("{} = None\n", name),
        }
    }

    /// 数组元素：不带键名的单行字符串形式
    fn format_plain_string(value: &str) -> String {
        let single = Self::needs_escape(value, '\'', 1);
        let double = Self::needs_escape(value, '"', 1);
        if !double {
            format!("\"{}\"", value)
        } else if !single {
            format!("'{}'", value)
        } else {
            format!("\"{}\"", Self::fix_escape(value, '"', 1))
        }
    }

    /// 字符串数组字段
    fn format_array(name: &str, value: Option<&[String]>) -> String {
        match value {
            Some(v) => {
                let elements: Vec<String> =
                    v.iter().map(|s| Self::format_plain_string(s)).collect();
                format!("{} = [{}]\n", name, elements.join(", "))
            }
            None => format!("{} = None\n", name),
        }
    }

    /// 布尔字段
    fn format_bool(name: &str, value: Option<bool>) -> String {
        match value {
            Some(true) => format!("{} = True\n", name),
            Some(false) => format!("{} = False\n", name),
            None => format!("{} = None\n", name),
        }
    }

    /// 渲染完整编辑文档：固定字段顺序，逐字段注释标注
    /// rule 为 None（未选中规则）时所有字段渲染为 None
    pub fn render(name: Option<&str>, rule: Option<&Rule>) -> String {
        let mut text = String::new();
        text.push_str("# name: rule name\n");
        text.push_str(&Self::format_string("name", name));
        text.push_str("\n# search_type: search type\n");
        text.push_str(&Self::format_string(
            "search_type",
            rule.map(|r| r.search_type.as_str()),
        ));
        text.push_str("\n# find: regular expression pattern or literal string\n");
        text.push_str(&Self::format_pattern_string(
            "find",
            rule.and_then(|r| r.find.as_deref()),
        ));
        text.push_str("\n# replace: replace pattern\n");
        text.push_str(&Self::format_pattern_string(
            "replace",
            rule.and_then(|r| r.replace.as_deref()),
        ));
        text.push_str("\n# scope: scope to search for (scope_regex)\n");
        text.push_str(&Self::format_string(
            "scope",
            rule.and_then(|r| r.scope.as_deref()),
        ));
        text.push_str("\n# scope_filter: an array of scope qualifiers for the match (regex)\n");
        text.push_str(&Self::format_array(
            "scope_filter",
            rule.and_then(|r| r.scope_filter.as_deref()),
        ));
        text.push_str("\n# greedy: apply action to all instances or first\n");
        text.push_str(&Self::format_bool("greedy", rule.and_then(|r| r.greedy)));
        text.push_str("\n# greedy_scope: apply search to all instances of scope (scope_regex)\n");
        text.push_str(&Self::format_bool(
            "greedy_scope",
            rule.and_then(|r| r.greedy_scope),
        ));
        text.push_str("\n# multi_pass: perform multiple sweeps on the scope region to find and\n");
        text.push_str("#             replace all instances of the regex (scope_regex)\n");
        text.push_str(&Self::format_bool(
            "multi_pass",
            rule.and_then(|r| r.multi_pass),
        ));
        text.push_str("\n# plugin: define replace plugin for more advanced replace logic\n");
        text.push_str(&Self::format_string(
            "plugin",
            rule.and_then(|r| r.plugin.as_deref()),
        ));
        text
    }
}
