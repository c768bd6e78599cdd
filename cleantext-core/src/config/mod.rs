//! CleanText 配置模块
//!
//! 统一的配置管理，从 ~/.config/cleantext/config.toml 加载

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TextNormError, TextNormResult};

/// 覆盖默认清洗器列表的环境变量（逗号分隔）
pub const CLEANERS_ENV: &str = "CLEANTEXT_CLEANERS";

/// 清洗器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanersConfig {
    /// 按顺序执行的清洗器名称
    pub pipeline: Vec<String>,
    /// 是否记录每个清洗器产生的变更
    pub record_changes: bool,
}

impl Default for CleanersConfig {
    fn default() -> Self {
        let pipeline = std::env::var(CLEANERS_ENV)
            .ok()
            .map(|names| {
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| vec!["english_cleaners".to_string()]);

        Self {
            pipeline,
            record_changes: false,
        }
    }
}

/// CleanText 完整配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanTextConfig {
    /// 清洗器配置
    pub cleaners: CleanersConfig,
}

impl CleanTextConfig {
    /// 加载配置文件，不存在时使用默认配置
    pub fn load() -> TextNormResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载配置文件
    pub fn load_from(path: &Path) -> TextNormResult<Self> {
        if !path.exists() {
            return Err(TextNormError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| TextNormError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?}", path);
        tracing::debug!("清洗器: {:?}", config.cleaners.pipeline);
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> TextNormResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> TextNormResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| TextNormError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> TextNormResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TextNormError::ConfigNotFound("无法获取配置目录".to_string()))?;

        Ok(config_dir.join("cleantext").join("config.toml"))
    }
}
