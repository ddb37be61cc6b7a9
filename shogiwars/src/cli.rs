//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_APP_DIR, DEFAULT_SLEEP_SECS, RECORD_ITEMS_PER_PAGE};
use crate::entities::GameType;
use crate::sync::PageRange;

/// 将棋ウォーズ 工具集
#[derive(Debug, Parser)]
#[command(name = "shogiwars-tools", version, about = "Tool set for ShogiWars")]
pub struct Cli {
    /// 应用目录
    #[arg(
        short = 'd',
        long = "appdir",
        value_name = "PATH",
        env = "SHOGIWARS_APP_DIR",
        default_value = DEFAULT_APP_DIR,
        global = true
    )]
    pub app_dir: PathBuf,

    /// 输出调试日志
    #[arg(long, env = "SHOGIWARS_DEBUG", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 抓取历史页面，建立对局索引
    Sync(SyncArgs),
    /// 列出已收录的对局
    List(ListArgs),
    /// 获取并输出一局棋谱
    Get(GetArgs),
}

#[derive(Debug, clap::Args)]
pub struct SyncArgs {
    /// 目标用户名
    #[arg(short, long = "user", value_name = "USERNAME", env = "SHOGIWARS_USER")]
    pub user: String,

    /// 两次请求之间的等待秒数
    #[arg(short, long, value_name = "SECONDS", env = "SHOGIWARS_SLEEP", default_value_t = DEFAULT_SLEEP_SECS)]
    pub sleep: u64,

    #[arg(
        short,
        long,
        value_name = "RANGE",
        default_value_t = PageRange::default(),
        help = format!("\"<start>\" or \"<start>-<end>\". {RECORD_ITEMS_PER_PAGE} items per page.")
    )]
    pub page: PageRange,

    /// 对局类型：10m、3m、10s
    #[arg(long, value_name = "TYPE", default_value_t = GameType::TenMinutes)]
    pub game_type: GameType,
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 100)]
    pub limit: usize,

    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// 按时间倒序
    #[arg(long)]
    pub desc: bool,

    /// 输出 TSV
    #[arg(long)]
    pub tsv: bool,

    /// 不输出表头
    #[arg(long)]
    pub skip_header: bool,
}

/// 棋谱输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// JSON
    #[default]
    Json,
    /// 记号流
    Csa,
    /// 日文棋谱
    Text,
}

#[derive(Debug, clap::Args)]
pub struct GetArgs {
    /// 对局记录 ID
    pub record_id: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
