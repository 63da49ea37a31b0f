//! 配置服务

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub theme: String,
}

impl AppConfig {
    /// 主题索引：0 = Dark, 1 = Light
    pub fn theme_index(&self) -> u8 {
        match self.theme.as_str() {
            "light" => 1,
            _ => 0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务：~/.config/vn-overlay/config.json
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join("vn-overlay").join("config.json")),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(ref path) = self.path else {
            return Ok(AppConfig::default());
        };

        // 配置文件不存在时用默认值
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_dark() {
        let config = AppConfig::default();
        assert_eq!(config.theme_index(), 0);
    }

    #[test]
    fn light_theme_maps_to_index_one() {
        let config = AppConfig {
            theme: "light".to_string(),
        };
        assert_eq!(config.theme_index(), 1);
    }
}
