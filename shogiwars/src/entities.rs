//! 对局索引数据结构

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 对局记录 ID（对局页面 URL 的最后一段）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// 对局类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameType {
    /// 10 分钟切れ負け
    #[default]
    #[serde(rename = "10m")]
    TenMinutes,
    /// 3 分钟切れ負け
    #[serde(rename = "3m")]
    ThreeMinutes,
    /// 每步 10 秒
    #[serde(rename = "10s")]
    TenSecondsPerMove,
}

impl GameType {
    /// 历史页面 URL 中的 `gtype` 参数
    pub fn param_string(&self) -> &'static str {
        match self {
            GameType::TenMinutes => "",
            GameType::ThreeMinutes => "sb",
            GameType::TenSecondsPerMove => "s1",
        }
    }

    /// 显示名称
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::TenMinutes => "10m",
            GameType::ThreeMinutes => "3m",
            GameType::TenSecondsPerMove => "10s",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10m" => Ok(GameType::TenMinutes),
            "3m" => Ok(GameType::ThreeMinutes),
            "10s" => Ok(GameType::TenSecondsPerMove),
            _ => Err(format!("unknown game type: {s} (expected 10m, 3m or 10s)")),
        }
    }
}

/// 玩家
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Player {
    pub user_name: String,
    /// 段级位，如 "三段"
    pub rank: String,
}

impl Player {
    pub fn new(user_name: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            rank: rank.into(),
        }
    }

    /// 列表显示用：`name (rank)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.user_name, self.rank)
    }
}

/// 对局双方
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Players {
    pub black: Player,
    pub white: Player,
}

/// 历史页面中的一条对局
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordItem {
    pub game_type: GameType,
    /// 对局时间，页面上没有时为 None
    pub date: Option<DateTime<FixedOffset>>,
    /// 获胜者用户名，无法判断时为空
    pub winner: String,
    pub players: Players,
    pub tags: Vec<String>,
    pub record_id: RecordId,
}

impl RecordItem {
    /// 创建新的空记录
    pub fn new(game_type: GameType) -> Self {
        Self {
            game_type,
            date: None,
            winner: String::new(),
            players: Players::default(),
            tags: Vec::new(),
            record_id: RecordId::default(),
        }
    }
}

/// 持久化的应用数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub record_items: Vec<RecordItem>,
}

impl AppData {
    /// 按时间排序的记录（无时间的排在最前）
    pub fn sorted_by_date(&self, ascending: bool) -> Vec<&RecordItem> {
        let mut items: Vec<&RecordItem> = self.record_items.iter().collect();
        items.sort_by(|a, b| a.date.cmp(&b.date));
        if !ascending {
            items.reverse();
        }
        items
    }
}

/// 应用数据管理器，按 ID 去重
pub struct AppDataManager<'a> {
    data: &'a mut AppData,
    index: HashMap<RecordId, usize>,
}

impl<'a> AppDataManager<'a> {
    /// 创建管理器
    pub fn new(data: &'a mut AppData) -> Self {
        Self {
            data,
            index: HashMap::new(),
        }
    }

    /// 记录数量与索引不一致时重建索引
    fn update_index(&mut self) {
        if self.index.len() == self.data.record_items.len() {
            return;
        }
        self.index = self
            .data
            .record_items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.record_id.clone(), i))
            .collect();
    }

    /// 按 ID 查找记录
    pub fn get(&mut self, id: &RecordId) -> Option<&RecordItem> {
        self.update_index();
        let idx = *self.index.get(id)?;
        self.data.record_items.get(idx)
    }

    /// 追加未出现过的记录，返回新增数量
    pub fn append_record_items(&mut self, items: Vec<RecordItem>) -> usize {
        self.update_index();
        let mut added = 0;
        for item in items {
            if self.index.contains_key(&item.record_id) {
                continue;
            }
            self.index
                .insert(item.record_id.clone(), self.data.record_items.len());
            self.data.record_items.push(item);
            added += 1;
        }
        added
    }

    /// 记录总数
    pub fn len(&self) -> usize {
        self.data.record_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.record_items.is_empty()
    }
}
