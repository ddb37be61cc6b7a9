//! 对局索引同步
//!
//! 从第 `start` 页开始逐页抓取历史页面，遇到空页或已收录的对局即停止。

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::{HttpConfig, RECORD_ITEMS_PER_PAGE};
use crate::entities::{AppData, AppDataManager, GameType};
use crate::fetch::{Fetcher, HistoryPage};

/// 可以请求的最大页码，超过后起始条目数无法用 `u32` 表示
pub const MAX_PAGE: u32 = u32::MAX / RECORD_ITEMS_PER_PAGE;

/// 页码范围（含两端）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl Default for PageRange {
    fn default() -> Self {
        Self { start: 0, end: 20 }
    }
}

impl FromStr for PageRange {
    type Err = String;

    /// `"<start>"` 或 `"<start>-<end>"`，只给出起始页时只抓取这一页
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut range = PageRange::default();
        for (i, part) in s.split('-').take(2).enumerate() {
            if part.is_empty() {
                break;
            }
            let n: u32 = part
                .trim()
                .parse()
                .map_err(|_| format!("invalid page number: {part:?}"))?;
            if i == 0 {
                range.start = n;
                range.end = n;
            } else {
                range.end = n;
            }
        }
        if range.end > MAX_PAGE {
            return Err(format!("page number too large: {} (max {MAX_PAGE})", range.end));
        }
        if range.end < range.start {
            return Err(format!("invalid page range: {s} (end < start)"));
        }
        Ok(range)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// 同步参数
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub user_name: String,
    pub game_type: GameType,
    pub pages: PageRange,
    /// 两次请求之间的等待时间
    pub sleep: Duration,
}

/// 抓取历史页面并追加到数据中，返回新增条数
pub async fn sync_record_items(
    fetcher: &dyn Fetcher,
    http: &HttpConfig,
    data: &mut AppData,
    opts: &SyncOptions,
) -> Result<usize> {
    let mut mgr = AppDataManager::new(data);
    let mut added = 0;

    for p in opts.pages.start..=opts.pages.end {
        let page = HistoryPage::new(opts.user_name.clone(), opts.game_type, p);
        info!(
            "Fetching... (user: {}, game: {}, page: {})",
            page.user_name, page.game_type, page.page
        );
        info!("# URL: {}", page.build_url(http)?);

        let items = page.fetch_record_items(fetcher, http).await?;
        let fetched = items.len();
        info!("{} items were fetched.", fetched);
        if fetched == 0 {
            break;
        }

        let n = mgr.append_record_items(items);
        added += n;
        if n != fetched {
            info!("No new items.");
            break;
        }
        if p < opts.pages.end {
            tokio::time::sleep(opts.sleep).await;
        }
    }

    Ok(added)
}
