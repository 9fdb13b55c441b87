//! 设置文档存取
//! 负责两份设置文档的整文档读写：规则集合文档与插件设置文档（含旧版规则块）
//! 读-改-写统一收敛到 update_rules，保证"内存内校验通过后一次性写入"的不变量

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::GlobalConfig;
use crate::error::RdResult;
use super::model::{PluginSettings, RulesDocument};

/// 设置文档存取器
pub struct SettingsStore {
    config: GlobalConfig,
}

impl SettingsStore {
    pub fn new(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// 规则集合文档路径
    pub fn rules_path(&self) -> &Path {
        &self.config.rules_settings_path
    }

    /// 插件设置文档路径
    pub fn plugin_settings_path(&self) -> &Path {
        &self.config.plugin_settings_path
    }

    /// 读取规则集合文档（文件不存在视为空集合）
    pub fn load_rules(&self) -> RdResult<RulesDocument> {
        let path = &self.config.rules_settings_path;
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("规则文档不存在，按空集合处理：{}", path.display());
                return Ok(RulesDocument::default());
            }
            Err(e) => return Err(e.into()),
        };

        let doc: RulesDocument = serde_json::from_slice(&data)?;
        debug!("规则文档加载成功，规则总数：{}", doc.replacements.len());
        Ok(doc)
    }

    /// 整文档写回规则集合
    pub fn save_rules(&self, doc: &RulesDocument) -> RdResult<()> {
        let data = serde_json::to_vec_pretty(doc)?;
        fs::write(&self.config.rules_settings_path, data)?;
        debug!("规则文档写回成功，规则总数：{}", doc.replacements.len());
        Ok(())
    }

    /// 事务化读-改-写：加载、内存内变更、一次性写回
    /// 变更闭包执行前不发生任何写入；加载或写回失败均不留下部分状态
    pub fn update_rules<F>(&self, mutate: F) -> RdResult<()>
    where
        F: FnOnce(&mut RulesDocument),
    {
        let mut doc = self.load_rules()?;
        mutate(&mut doc);
        self.save_rules(&doc)
    }

    /// 读取插件设置文档（文件不存在按缺省设置处理）
    pub fn load_plugin_settings(&self) -> RdResult<PluginSettings> {
        let path = &self.config.plugin_settings_path;
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("插件设置文档不存在，使用缺省设置：{}", path.display());
                return Ok(PluginSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings: PluginSettings = serde_json::from_slice(&data)?;
        Ok(settings)
    }
}
