//! 运行配置

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use crate::storage::AppDir;

/// 默认应用目录
pub const DEFAULT_APP_DIR: &str = ".shogiwars";

/// 默认请求间隔（秒）
pub const DEFAULT_SLEEP_SECS: u64 = 3;

/// 历史页面每页条数
pub const RECORD_ITEMS_PER_PAGE: u32 = 10;

/// HTTP 配置
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// 对局页面地址前缀，后接 `/games/<id>`
    pub game_base_url: String,
    /// 历史页面地址前缀，后接 `/users/history/<user>/web_app`
    pub history_base_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            game_base_url: "https://kif-pona.heroz.jp".to_string(),
            history_base_url: "https://shogiwars.heroz.jp".to_string(),
            timeout_secs: 30,
            user_agent: concat!("shogiwars-tools/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// 全局配置
#[derive(Clone, Debug)]
pub struct Config {
    pub app_dir: AppDir,
    /// 两次请求之间的等待时间
    pub sleep: Duration,
    pub http: HttpConfig,
}

impl Config {
    /// 创建配置，应用目录不能为空
    pub fn new(app_dir: impl Into<PathBuf>) -> Result<Self> {
        let app_dir = app_dir.into();
        if app_dir.as_os_str().is_empty() {
            bail!("config: appdir is required");
        }
        Ok(Self {
            app_dir: AppDir::new(app_dir),
            sleep: Duration::from_secs(DEFAULT_SLEEP_SECS),
            http: HttpConfig::default(),
        })
    }

    /// 设置请求间隔
    pub fn with_sleep_secs(mut self, secs: u64) -> Self {
        self.sleep = Duration::from_secs(secs);
        self
    }
}
