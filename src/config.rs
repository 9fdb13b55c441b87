//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 规则集合设置文档路径（键 replacements 下保存 名称->规则 映射）
    pub rules_settings_path: PathBuf,
    // 插件设置文档路径（extended_back_references / python_highlighter / 旧版规则）
    pub plugin_settings_path: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            rules_settings_path: PathBuf::from("replace_rules.json"),
            plugin_settings_path: PathBuf::from("rule_edit.json"),
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn rules_settings_path(mut self, path: PathBuf) -> Self {
        self.config.rules_settings_path = path;
        self
    }

    pub fn plugin_settings_path(mut self, path: PathBuf) -> Self {
        self.config.plugin_settings_path = path;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
