//! 将棋ウォーズ 对局收集工具
//!
//! 包含:
//! - 对局历史页面抓取与对局索引
//! - 对局页面棋谱获取
//! - 本地 JSON 存储
//! - 表格 / TSV 输出

pub mod cli;
pub mod commands;
pub mod config;
pub mod entities;
pub mod fetch;
pub mod html;
pub mod render;
pub mod storage;
pub mod sync;

pub use config::{Config, HttpConfig};
pub use entities::{AppData, AppDataManager, GameType, Player, Players, RecordId, RecordItem};
pub use fetch::{FetchError, Fetcher, GamePage, HistoryPage, HttpFetcher};
pub use render::{Renderer, TableRenderer, TsvRenderer};
pub use storage::AppDir;
pub use sync::{sync_record_items, PageRange, SyncOptions};
