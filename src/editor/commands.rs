//! 编辑命令驱动
//! 宿主命令入口的薄封装：保存路径、编辑路径、旧版迁移路径
//! 全部同步执行于单次宿主命令调用内，无后台任务

use tracing::{debug, warn};

use crate::encoder::RuleEncoder;
use crate::error::RdResult;
use crate::rule::{RuleAssembler, RuleMigrator, SettingsStore};
use super::host::{self, Notifier, SelectionUi, TextPanel};

/// 保存命令：解析面板文本，校验通过后提交规则集合
pub struct PanelSaveCommand;

impl PanelSaveCommand {
    /// 执行保存；任何失败仅通过通知协作方提示一次，且不写入任何内容
    /// 返回是否完成提交
    pub fn run(panel: &dyn TextPanel, store: &SettingsStore, notifier: &dyn Notifier) -> bool {
        let text = panel.content();
        let (name, draft) = RuleAssembler::assemble(&text);

        // 校验前读取方言配置；文档损坏同样按单条通知处理
        let settings = match store.load_plugin_settings() {
            Ok(settings) => settings,
            Err(e) => {
                notifier.error(&e.to_string());
                return false;
            }
        };

        let (name, rule) =
            match RuleAssembler::validate(name, draft, settings.extended_back_references) {
                Ok(validated) => validated,
                Err(e) => {
                    notifier.error(&e.to_string());
                    return false;
                }
            };

        // 校验全部通过后才进入读-改-写
        let committed = store.update_rules(|doc| {
            doc.replacements.insert(name.clone(), rule);
        });
        match committed {
            Ok(()) => {
                debug!("规则保存成功：{}", name);
                true
            }
            Err(e) => {
                notifier.error(&e.to_string());
                false
            }
        }
    }
}

/// 编辑命令：选择既有规则，渲染进面板供修改
pub struct EditRuleCommand;

impl EditRuleCommand {
    /// 执行编辑路径；集合为空或用户取消时不动面板
    /// 返回是否已将规则渲染进面板
    pub fn run(
        panel: &mut dyn TextPanel,
        ui: &mut dyn SelectionUi,
        store: &SettingsStore,
    ) -> RdResult<bool> {
        let doc = store.load_rules()?;
        if doc.replacements.is_empty() {
            return Ok(false);
        }

        let names: Vec<String> = doc.replacements.keys().cloned().collect();
        let Some(index) = ui.pick(&names) else {
            return Ok(false);
        };
        let name = &names[index];
        let rule = &doc.replacements[name];

        panel.set_content(&RuleEncoder::render(Some(name), Some(rule)));

        let settings = store.load_plugin_settings()?;
        if !host::assign_first_resolving_syntax(panel, &settings.python_highlighter) {
            warn!("显示语法候选均未解析：{}", settings.python_highlighter);
        }
        Ok(true)
    }
}

/// 迁移命令：旧版规则集合整体转换并合并进当前文档
pub struct ConvertRulesCommand;

impl ConvertRulesCommand {
    /// 执行迁移，返回迁移条目数
    pub fn run(store: &SettingsStore) -> RdResult<usize> {
        let settings = store.load_plugin_settings()?;
        let count = settings.replacements.len();
        store.update_rules(|doc| {
            RuleMigrator::migrate_all(&settings.replacements, doc);
        })?;
        debug!("旧版规则迁移命令完成：{} 条", count);
        Ok(count)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::rule::{Rule, SearchType};
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    struct MockPanel {
        buffer: String,
        syntax: Option<String>,
    }

    impl MockPanel {
        fn with_content(text: &str) -> Self {
            Self {
                buffer: text.to_string(),
                syntax: None,
            }
        }
    }

    impl TextPanel for MockPanel {
        fn set_content(&mut self, text: &str) {
            self.buffer = text.to_string();
        }
        fn content(&self) -> String {
            self.buffer.clone()
        }
        fn try_assign_syntax(&mut self, resource: &str) -> bool {
            self.syntax = Some(resource.to_string());
            true
        }
    }

    struct MockUi {
        choice: Option<usize>,
    }

    impl SelectionUi for MockUi {
        fn pick(&mut self, _labels: &[String]) -> Option<usize> {
            self.choice
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for MockNotifier {
        fn error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn temp_store() -> (TempDir, SettingsStore) {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::custom()
            .rules_settings_path(dir.path().join("replace_rules.json"))
            .plugin_settings_path(dir.path().join("rule_edit.json"))
            .build();
        (dir, SettingsStore::new(config))
    }

    #[test]
    fn test_save_command_commits_valid_rule() {
        // 测试场景：合法面板文本保存后写入规则文档，无任何通知
        let (_dir, store) = temp_store();
        let panel = MockPanel::with_content(concat!(
            "name = \"digits\"\n",
            "search_type = \"regex\"\n",
            "find = r\"\"\"\\d+\"\"\"\n",
            "greedy = True\n",
        ));
        let notifier = MockNotifier::default();

        assert!(PanelSaveCommand::run(&panel, &store, &notifier));
        assert!(notifier.messages.borrow().is_empty());

        let doc = store.load_rules().unwrap();
        let rule = &doc.replacements["digits"];
        assert_eq!(rule.search_type, SearchType::Regex);
        assert_eq!(rule.find.as_deref(), Some(r"\d+"));
    }

    #[test]
    fn test_save_command_notifies_once_and_writes_nothing() {
        // 测试场景：校验失败仅通知一次，规则文档不被创建
        let (_dir, store) = temp_store();
        let panel = MockPanel::with_content("name = \"broken\"\nsearch_type = \"scope_regex\"\n");
        let notifier = MockNotifier::default();

        assert!(!PanelSaveCommand::run(&panel, &store, &notifier));
        assert_eq!(notifier.messages.borrow().len(), 1);
        assert!(notifier.messages.borrow()[0].contains("作用域"));
        assert!(!store.rules_path().exists());
    }

    #[test]
    fn test_save_command_uses_extended_dialect_from_settings() {
        // 测试场景：插件设置开启扩展反向引用后，含 \1 的模式可保存
        let (_dir, store) = temp_store();
        fs::write(
            store_plugin_path(&store),
            r#"{"extended_back_references": true}"#,
        )
        .unwrap();
        let panel = MockPanel::with_content(concat!(
            "name = \"backref\"\n",
            "search_type = \"regex\"\n",
            "find = r\"\"\"(a)\\1\"\"\"\n",
        ));
        let notifier = MockNotifier::default();
        assert!(PanelSaveCommand::run(&panel, &store, &notifier));
    }

    #[test]
    fn test_edit_command_renders_selected_rule() {
        // 测试场景：选中规则渲染进面板并指定显示语法
        let (_dir, store) = temp_store();
        store
            .update_rules(|doc| {
                let mut rule = Rule::from_search_type(SearchType::Literal);
                rule.find = Some("foo".to_string());
                doc.replacements.insert("alpha".to_string(), rule);
            })
            .unwrap();

        let mut panel = MockPanel::with_content("");
        let mut ui = MockUi { choice: Some(0) };
        assert!(EditRuleCommand::run(&mut panel, &mut ui, &store).unwrap());
        assert!(panel.buffer.contains("name = \"alpha\""));
        assert!(panel.buffer.contains("search_type = \"literal\""));
        assert!(panel.buffer.contains("find = r\"\"\"foo\"\"\""));
        assert_eq!(
            panel.syntax.as_deref(),
            Some("Packages/Python/Python.sublime-syntax")
        );
    }

    #[test]
    fn test_edit_command_noop_on_cancel() {
        let (_dir, store) = temp_store();
        store
            .update_rules(|doc| {
                doc.replacements
                    .insert("only".to_string(), Rule::from_search_type(SearchType::Regex));
            })
            .unwrap();

        let mut panel = MockPanel::with_content("untouched");
        let mut ui = MockUi { choice: None };
        assert!(!EditRuleCommand::run(&mut panel, &mut ui, &store).unwrap());
        assert_eq!(panel.buffer, "untouched");
    }

    #[test]
    fn test_edit_command_noop_on_empty_collection() {
        let (_dir, store) = temp_store();
        let mut panel = MockPanel::with_content("untouched");
        let mut ui = MockUi { choice: Some(0) };
        assert!(!EditRuleCommand::run(&mut panel, &mut ui, &store).unwrap());
        assert_eq!(panel.buffer, "untouched");
    }

    #[test]
    fn test_convert_command_migrates_legacy_block() {
        // 测试场景：迁移命令读取旧版块并合并写入规则文档
        let (_dir, store) = temp_store();
        fs::write(
            store_plugin_path(&store),
            r#"{
                "replacements": {
                    "old_literal": {"literal": true, "case": false, "find": "X"},
                    "old_regex": {"find": "a\nb", "case": false}
                }
            }"#,
        )
        .unwrap();

        let count = ConvertRulesCommand::run(&store).unwrap();
        assert_eq!(count, 2);

        let doc = store.load_rules().unwrap();
        assert_eq!(
            doc.replacements["old_literal"].search_type,
            SearchType::LiteralNoCase
        );
        assert_eq!(
            doc.replacements["old_regex"].find.as_deref(),
            Some("(?i)a\\nb")
        );
    }

    // ===== 测试辅助：访问存取器内部路径 =====
    fn store_plugin_path(store: &SettingsStore) -> std::path::PathBuf {
        store.plugin_settings_path().to_path_buf()
    }
}
