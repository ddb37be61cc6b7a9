//! 对局页面

use std::sync::LazyLock;

use anyhow::{Context, Result};
use kifu::{Csa, Record};
use regex::Regex;
use tracing::debug;

use super::{FetchError, Fetcher};
use crate::config::HttpConfig;
use crate::entities::RecordId;

/// 页面脚本中携带记号流的调用
static RECEIVE_MOVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"receiveMove\("([^"]+)"\)"#).unwrap());

/// 对局页面
#[derive(Debug, Clone)]
pub struct GamePage {
    pub record_id: RecordId,
}

impl GamePage {
    pub fn new(record_id: RecordId) -> Self {
        Self { record_id }
    }

    /// 页面地址
    pub fn build_url(&self, http: &HttpConfig) -> String {
        format!(
            "{}/games/{}",
            http.game_base_url.trim_end_matches('/'),
            self.record_id
        )
    }

    /// 获取并解析棋谱
    pub async fn fetch_record(&self, fetcher: &dyn Fetcher, http: &HttpConfig) -> Result<Record> {
        let url = self.build_url(http);
        let content = fetcher.get(&url).await?;
        let stream = extract_token_stream(&content)?;
        debug!("记号流长度: {} 字节", stream.len());

        Csa::parse(stream).with_context(|| format!("棋谱解析失败: {}", self.record_id))
    }
}

/// 从页面内容中取出记号流
pub fn extract_token_stream(content: &str) -> Result<&str, FetchError> {
    RECEIVE_MOVE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| FetchError::NotMatched {
            pattern: RECEIVE_MOVE.as_str().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::StaticFetcher;
    use kifu::{Color, Event, ParseError};

    const PAGE: &str = r#"<html><script>
        var gamedata = {};
        receiveMove("+7776FU,L599 -3334FU,L597 +2726FU,L595 SENTE_WIN");
    </script></html>"#;

    fn http() -> HttpConfig {
        HttpConfig {
            game_base_url: "https://example.test/".to_string(),
            ..HttpConfig::default()
        }
    }

    #[test]
    fn test_build_url() {
        let page = GamePage::new(RecordId::from("alice-bob-20180305_201530"));
        assert_eq!(
            page.build_url(&http()),
            "https://example.test/games/alice-bob-20180305_201530"
        );
    }

    #[test]
    fn test_extract_token_stream() {
        let stream = extract_token_stream(PAGE).unwrap();
        assert!(stream.starts_with("+7776FU"));
        assert!(stream.ends_with("SENTE_WIN"));

        let err = extract_token_stream("<html></html>").unwrap_err();
        assert!(matches!(err, FetchError::NotMatched { .. }));
    }

    #[tokio::test]
    async fn test_fetch_record() {
        let fetcher = StaticFetcher::default().with_page("https://example.test/games/g1", PAGE);
        let page = GamePage::new(RecordId::from("g1"));

        let record = page.fetch_record(&fetcher, &http()).await.unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(record.outcome().map(|r| r.color), Some(Color::White));
        assert!(matches!(record.events()[0], Event::Move(_)));
        assert_eq!(fetcher.requested(), vec!["https://example.test/games/g1"]);
    }

    #[tokio::test]
    async fn test_fetch_record_parse_error() {
        let body = r#"receiveMove("+7776FU +77")"#;
        let fetcher = StaticFetcher::default().with_page("https://example.test/games/bad", body);
        let page = GamePage::new(RecordId::from("bad"));

        let err = page.fetch_record(&fetcher, &http()).await.unwrap_err();
        assert!(err.to_string().contains("bad"));
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::InvalidTokenLength { .. })
        ));
    }
}
