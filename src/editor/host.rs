//! 宿主编辑器协作方接口
//! 面板、选择列表、通知均为宿主黑盒，本核心只经由这些接缝调用

/// 显示语法资源的候选扩展名（按优先级尝试）
pub const SYNTAX_EXTENSIONS: [&str; 2] = [".sublime-syntax", ".tmLanguage"];

/// 文本面板协作方：无回滚缓冲的整缓冲读写
pub trait TextPanel {
    /// 以给定文本整体替换面板内容
    fn set_content(&mut self, text: &str);

    /// 报告面板当前全部内容
    fn content(&self) -> String;

    /// 尝试为面板指定显示语法资源，返回是否解析成功
    fn try_assign_syntax(&mut self, resource: &str) -> bool;
}

/// 选择列表协作方：给定有序标签，返回选中下标（None 表示取消）
pub trait SelectionUi {
    fn pick(&mut self, labels: &[String]) -> Option<usize>;
}

/// 通知协作方：单条错误提示，即发即忘
pub trait Notifier {
    fn error(&self, message: &str);
}

/// 由高亮器标识构造优先级排列的语法资源候选列表
pub fn syntax_candidates(highlighter: &str) -> Vec<String> {
    SYNTAX_EXTENSIONS
        .iter()
        .map(|ext| format!("Packages/{}{}", highlighter, ext))
        .collect()
}

/// 逐个尝试候选语法资源，命中即停，返回是否有候选解析成功
pub fn assign_first_resolving_syntax(panel: &mut dyn TextPanel, highlighter: &str) -> bool {
    for candidate in syntax_candidates(highlighter) {
        if panel.try_assign_syntax(&candidate) {
            return true;
        }
    }
    false
}
