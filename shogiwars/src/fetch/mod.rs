//! 网页获取
//!
//! `Fetcher` 把页面获取与页面解析解耦，测试时可替换为固定内容。

mod game_page;
mod history_page;

pub use game_page::GamePage;
pub use history_page::HistoryPage;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::HttpConfig;

/// 获取错误
#[derive(Error, Debug)]
pub enum FetchError {
    /// 非 200 响应
    #[error("bad status code: {status}")]
    BadStatus { status: u16 },

    /// 页面中找不到指定内容
    #[error("not matched: {pattern}")]
    NotMatched { pattern: String },
}

/// 页面获取抽象
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 获取页面正文
    async fn get(&self, url: &str) -> Result<String>;
}

/// 基于 reqwest 的 HTTP 获取
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// 创建新的获取器
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("请求失败: {}", url))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
            }
            .into());
        }

        resp.text()
            .await
            .with_context(|| format!("读取响应失败: {}", url))
    }
}
