//! 子命令实现

use std::io::Write;

use anyhow::{Context, Result};
use kifu::{Csa, Notation};
use tracing::info;

use crate::cli::{Cli, Command, GetArgs, ListArgs, OutputFormat, SyncArgs};
use crate::config::Config;
use crate::entities::{AppData, RecordId};
use crate::fetch::{Fetcher, GamePage, HttpFetcher};
use crate::render::{Renderer, TableRenderer, TsvRenderer};
use crate::sync::{sync_record_items, SyncOptions};

/// 列表表头
pub const LIST_HEADER: [&str; 5] = ["Date", "Black", "White", "Winner", "Record ID"];

/// 执行命令
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::new(&cli.app_dir)?;
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Sync(args) => {
            let config = config.with_sleep_secs(args.sleep);
            let fetcher = HttpFetcher::new(&config.http)?;
            sync(&config, &fetcher, &args).await
        }
        Command::List(args) => list(&config, &args, &mut stdout),
        Command::Get(args) => {
            let fetcher = HttpFetcher::new(&config.http)?;
            get(&config, &fetcher, &args, &mut stdout).await
        }
    }
}

/// 同步对局索引并保存
pub async fn sync(config: &Config, fetcher: &dyn Fetcher, args: &SyncArgs) -> Result<()> {
    info!("Initialize application directory...");
    config.app_dir.init()?;

    info!("Load application data...");
    let mut data = config.app_dir.load_data()?;

    let opts = SyncOptions {
        user_name: args.user.clone(),
        game_type: args.game_type,
        pages: args.page,
        sleep: config.sleep,
    };
    let added = sync_record_items(fetcher, &config.http, &mut data, &opts).await?;

    if added > 0 {
        info!("Saving... ({} new items)", added);
        config.app_dir.save_data(&data)?;
    }
    info!("Done.");
    Ok(())
}

/// 输出已收录的对局
pub fn list(config: &Config, args: &ListArgs, w: &mut dyn Write) -> Result<()> {
    let data = config.app_dir.load_data()?;
    render_list(&data, args, w)
}

/// 按参数排序、分页并输出
pub fn render_list(data: &AppData, args: &ListArgs, w: &mut dyn Write) -> Result<()> {
    let mut renderer: Box<dyn Renderer> = if args.tsv {
        Box::new(TsvRenderer::new())
    } else {
        Box::new(TableRenderer::new())
    };
    if !args.skip_header {
        renderer.set_header(LIST_HEADER.iter().map(|s| s.to_string()).collect());
    }

    for item in data
        .sorted_by_date(!args.desc)
        .into_iter()
        .skip(args.offset)
        .take(args.limit)
    {
        renderer.append(vec![
            item.date
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            item.players.black.label(),
            item.players.white.label(),
            item.winner.clone(),
            item.record_id.to_string(),
        ]);
    }

    renderer.render(w).context("输出列表失败")
}

/// 获取并输出一局棋谱
pub async fn get(
    config: &Config,
    fetcher: &dyn Fetcher,
    args: &GetArgs,
    w: &mut dyn Write,
) -> Result<()> {
    let page = GamePage::new(RecordId::from(args.record_id.as_str()));
    info!("# URL: {}", page.build_url(&config.http));

    let record = page.fetch_record(fetcher, &config.http).await?;
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string(&record).context("序列化棋谱失败")?,
        OutputFormat::Csa => Csa::format(&record).context("生成记号流失败")?,
        OutputFormat::Text => Notation::record_to_text(&record).trim_end().to_string(),
    };
    writeln!(w, "{}", output).context("输出棋谱失败")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GameType, Player, RecordItem};
    use crate::fetch::tests::StaticFetcher;
    use chrono::{FixedOffset, TimeZone};

    fn item(id: &str, day: u32) -> RecordItem {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let mut item = RecordItem::new(GameType::TenMinutes);
        item.record_id = RecordId::from(id);
        item.date = Some(jst.with_ymd_and_hms(2018, 3, day, 20, 15, 0).unwrap());
        item.players.black = Player::new("alice", "初段");
        item.players.white = Player::new("bob", "1級");
        item.winner = "alice".to_string();
        item
    }

    fn list_args() -> ListArgs {
        ListArgs {
            limit: 100,
            offset: 0,
            desc: false,
            tsv: true,
            skip_header: false,
        }
    }

    fn render(data: &AppData, args: &ListArgs) -> String {
        let mut buf = Vec::new();
        render_list(data, args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_list_tsv() {
        let data = AppData {
            record_items: vec![item("b", 2), item("a", 1)],
        };
        let out = render(&data, &list_args());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Date\tBlack\tWhite\tWinner\tRecord ID");
        assert_eq!(
            lines[1],
            "2018-03-01 20:15:00\talice (初段)\tbob (1級)\talice\ta"
        );
        assert!(lines[2].ends_with("\tb"));
    }

    #[test]
    fn test_render_list_paging() {
        let data = AppData {
            record_items: (1..=5).map(|d| item(&format!("g{d}"), d)).collect(),
        };
        let args = ListArgs {
            offset: 1,
            limit: 2,
            desc: true,
            skip_header: true,
            ..list_args()
        };
        let out = render(&data, &args);
        let ids: Vec<&str> = out.lines().map(|l| l.rsplit('\t').next().unwrap()).collect();
        assert_eq!(ids, vec!["g4", "g3"]);
    }

    #[test]
    fn test_render_list_table() {
        let data = AppData {
            record_items: vec![item("a", 1)],
        };
        let args = ListArgs {
            tsv: false,
            ..list_args()
        };
        let out = render(&data, &args);
        assert!(out.starts_with("+"));
        assert!(out.contains("| Record ID |"));
        assert!(out.contains("| alice (初段) |"));
    }

    #[tokio::test]
    async fn test_get_formats() {
        let config = Config::new("unused").unwrap();
        let url = GamePage::new(RecordId::from("g1")).build_url(&config.http);
        let fetcher = StaticFetcher::default()
            .with_page(&url, r#"receiveMove("+7776FU,L599 -0055KA,L590 GOTE_WIN")"#);

        let run = |format| {
            let args = GetArgs {
                record_id: "g1".to_string(),
                format,
            };
            let config = &config;
            let fetcher = &fetcher;
            async move {
                let mut buf = Vec::new();
                get(config, fetcher, &args, &mut buf).await.unwrap();
                String::from_utf8(buf).unwrap()
            }
        };

        assert_eq!(run(OutputFormat::Csa).await, "+7776FU -0055KA GOTE_WIN\n");

        let json: serde_json::Value = serde_json::from_str(&run(OutputFormat::Json).await).unwrap();
        assert_eq!(json["events"].as_array().map(|a| a.len()), Some(3));
        assert_eq!(json["events"][1]["srcSquare"], serde_json::Value::Null);

        let text = run(OutputFormat::Text).await;
        assert!(text.contains("▲７六歩"));
        assert!(text.contains("△５五角打"));
    }
}
