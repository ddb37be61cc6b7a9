//! 对局历史页面
//!
//! 每页 10 条对局，每条位于一个 class 含 `contents` 的元素中：
//! - `.game_date`：对局时间 `YYYY/MM/DD hh:mm`
//! - `.players` 内的链接：`<用户名> <段级>`，先手在前
//! - `.hashtag_badge`：战型标签
//! - `.game_replay` 内的链接：对局页面地址
//! - 元素本身带 `winner` 类表示页面用户获胜

use std::sync::LazyLock;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use regex::Regex;
use reqwest::Url;
use tracing::debug;

use super::Fetcher;
use crate::config::{HttpConfig, RECORD_ITEMS_PER_PAGE};
use crate::entities::{GameType, Player, RecordId, RecordItem};
use crate::html::{self, Element};

static DATE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}/\d{2}/\d{2} \d{2}:\d{2}").unwrap());

static RECORD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*//.+/games/([^?]+)").unwrap());

/// 网站使用日本标准时间
const SITE_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// 历史页面
#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub user_name: String,
    pub game_type: GameType,
    /// 页码，从 0 开始
    pub page: u32,
}

impl HistoryPage {
    pub fn new(user_name: impl Into<String>, game_type: GameType, page: u32) -> Self {
        Self {
            user_name: user_name.into(),
            game_type,
            page,
        }
    }

    /// 页面地址，用户名作为单独的路径段编码
    pub fn build_url(&self, http: &HttpConfig) -> Result<String> {
        let mut url = Url::parse(&http.history_base_url)
            .with_context(|| format!("无效的历史页面地址: {}", http.history_base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("历史页面地址不能作为前缀: {}", http.history_base_url))?
            .pop_if_empty()
            .extend(["users", "history", self.user_name.as_str(), "web_app"]);

        let start = u64::from(self.page) * u64::from(RECORD_ITEMS_PER_PAGE);
        url.query_pairs_mut()
            .append_pair("gtype", self.game_type.param_string())
            .append_pair("start", &start.to_string());
        Ok(url.into())
    }

    /// 获取并解析本页的对局列表
    pub async fn fetch_record_items(
        &self,
        fetcher: &dyn Fetcher,
        http: &HttpConfig,
    ) -> Result<Vec<RecordItem>> {
        let content = fetcher.get(&self.build_url(http)?).await?;
        Ok(self.parse_items(&content))
    }

    /// 解析页面内容，缺失的字段保持默认值
    pub fn parse_items(&self, content: &str) -> Vec<RecordItem> {
        let items: Vec<RecordItem> = html::find_by_class(content, "contents")
            .into_iter()
            .map(|block| self.parse_item(&block))
            .collect();
        debug!("解析到 {} 条对局", items.len());
        items
    }

    fn parse_item(&self, block: &Element<'_>) -> RecordItem {
        let mut item = RecordItem::new(self.game_type);
        item.date = parse_date(block);

        let players: Vec<Player> = block
            .find_class("players")
            .iter()
            .flat_map(|p| p.find_tag("a"))
            .filter_map(|a| parse_player(&a.text()))
            .collect();
        let mut opponent = None;
        for (i, player) in players.into_iter().take(2).enumerate() {
            if player.user_name != self.user_name {
                opponent = Some(player.user_name.clone());
            }
            if i == 0 {
                item.players.black = player;
            } else {
                item.players.white = player;
            }
        }
        if let Some(opponent) = opponent {
            item.winner = if block.has_class("winner") {
                self.user_name.clone()
            } else {
                opponent
            };
        }

        item.tags = block
            .find_class("hashtag_badge")
            .iter()
            .map(|b| b.text())
            .collect();

        if let Some(id) = parse_record_id(block) {
            item.record_id = id;
        }
        item
    }
}

fn parse_date(block: &Element<'_>) -> Option<DateTime<FixedOffset>> {
    let text = block.find_class("game_date").first()?.text();
    let m = DATE_TIME.find(&text)?;
    let naive = NaiveDateTime::parse_from_str(m.as_str(), "%Y/%m/%d %H:%M").ok()?;
    let offset = FixedOffset::east_opt(SITE_UTC_OFFSET_SECS)?;
    offset.from_local_datetime(&naive).single()
}

/// 链接文本为 `<用户名> <段级>`
fn parse_player(text: &str) -> Option<Player> {
    let mut fields = text.split_whitespace();
    let user_name = fields.next()?;
    let rank = fields.next().unwrap_or_default();
    Some(Player::new(user_name, rank))
}

fn parse_record_id(block: &Element<'_>) -> Option<RecordId> {
    let replay = block.find_class("game_replay");
    let href = replay.first()?.find_tag("a").first()?.attr("href")?;
    let caps = RECORD_ID.captures(href)?;
    Some(RecordId::from(caps.get(1)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::StaticFetcher;

    const PAGE: &str = r#"
<div class="contents_header">履歴</div>
<div class="contents winner">
  <div class="game_date">対局日時 (2018/03/05 20:15)</div>
  <div class="players">
    <div class="left"><a href="/users/alice">alice 初段</a></div>
    <div class="right"><a href="/users/bob">bob 1級</a></div>
  </div>
  <div class="game_badges">
    <span class="hashtag_badge"> #居飛車 </span>
    <span class="hashtag_badge">#棒銀</span>
  </div>
  <div class="game_replay"><a href="https://kif-pona.heroz.jp/games/alice-bob-20180305_201530?locale=ja">棋譜</a></div>
</div>
<div class="contents">
  <div class="game_date">対局日時 (2018/03/04 09:05)</div>
  <div class="players">
    <div><a href="/users/carol">carol 二段</a></div>
    <div><a href="/users/alice">alice 初段</a></div>
  </div>
  <div class="game_replay"><a href="//kif-pona.heroz.jp/games/carol-alice-20180304_090500">棋譜</a></div>
</div>
<div class="contents">
  <div class="game_date">-</div>
</div>
"#;

    fn page() -> HistoryPage {
        HistoryPage::new("alice", GameType::TenMinutes, 0)
    }

    #[test]
    fn test_build_url() {
        let http = HttpConfig::default();
        let url = HistoryPage::new("alice", GameType::ThreeMinutes, 2)
            .build_url(&http)
            .unwrap();
        assert_eq!(
            url,
            "https://shogiwars.heroz.jp/users/history/alice/web_app?gtype=sb&start=20"
        );
        let url = page().build_url(&http).unwrap();
        assert!(url.ends_with("gtype=&start=0"));
    }

    #[test]
    fn test_build_url_large_page() {
        let http = HttpConfig::default();
        let url = HistoryPage::new("alice", GameType::TenMinutes, u32::MAX)
            .build_url(&http)
            .unwrap();
        assert!(url.ends_with("&start=42949672950"));
    }

    #[test]
    fn test_build_url_escapes_user_name() {
        let http = HttpConfig::default();
        let url = HistoryPage::new("a/b?c#d", GameType::TenMinutes, 0)
            .build_url(&http)
            .unwrap();
        assert_eq!(
            url,
            "https://shogiwars.heroz.jp/users/history/a%2Fb%3Fc%23d/web_app?gtype=&start=0"
        );
    }

    #[test]
    fn test_build_url_trailing_slash_base() {
        let http = HttpConfig {
            history_base_url: "http://127.0.0.1:8080/".to_string(),
            ..HttpConfig::default()
        };
        let url = page().build_url(&http).unwrap();
        assert_eq!(url, "http://127.0.0.1:8080/users/history/alice/web_app?gtype=&start=0");
    }

    #[test]
    fn test_parse_items() {
        let items = page().parse_items(PAGE);
        assert_eq!(items.len(), 3);

        let won = &items[0];
        assert_eq!(won.game_type, GameType::TenMinutes);
        assert_eq!(won.players.black, Player::new("alice", "初段"));
        assert_eq!(won.players.white, Player::new("bob", "1級"));
        assert_eq!(won.winner, "alice");
        assert_eq!(won.tags, vec!["#居飛車", "#棒銀"]);
        assert_eq!(won.record_id.as_str(), "alice-bob-20180305_201530");
        let date = won.date.unwrap();
        assert_eq!(date.to_rfc3339(), "2018-03-05T20:15:00+09:00");

        let lost = &items[1];
        assert_eq!(lost.players.black.user_name, "carol");
        assert_eq!(lost.winner, "carol");
        assert!(lost.tags.is_empty());
        assert_eq!(lost.record_id.as_str(), "carol-alice-20180304_090500");
    }

    #[test]
    fn test_parse_incomplete_item() {
        let items = page().parse_items(PAGE);
        let empty = &items[2];
        assert!(empty.date.is_none());
        assert!(empty.winner.is_empty());
        assert!(empty.record_id.is_empty());
    }

    #[test]
    fn test_no_opponent_no_winner() {
        let html = r#"<div class="contents winner"><div class="players"><div><a>alice 初段</a></div></div></div>"#;
        let items = page().parse_items(html);
        assert_eq!(items.len(), 1);
        assert!(items[0].winner.is_empty());
        assert_eq!(items[0].players.black.user_name, "alice");
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("  bob   3級 "), Some(Player::new("bob", "3級")));
        assert_eq!(parse_player("bob"), Some(Player::new("bob", "")));
        assert_eq!(parse_player("   "), None);
    }

    #[tokio::test]
    async fn test_fetch_record_items() {
        let http = HttpConfig::default();
        let url = page().build_url(&http).unwrap();
        let fetcher = StaticFetcher::default().with_page(&url, PAGE);

        let items = page().fetch_record_items(&fetcher, &http).await.unwrap();
        assert_eq!(items.len(), 3);

        let missing = HistoryPage::new("alice", GameType::TenMinutes, 1);
        assert!(missing.fetch_record_items(&fetcher, &http).await.is_err());
    }
}
