//! 棋谱记录
//!
//! 一局棋的事件序列，构造后不可修改，支持 JSON 存储

use serde::{Deserialize, Serialize};

use crate::constants::TOKEN_SEPARATOR;
use crate::error::{FormatError, ParseError};
use crate::event::{Event, MoveEvent, ResignEvent};

/// 完整的棋谱记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 按记号顺序排列的事件
    events: Vec<Event>,
}

impl Record {
    /// 由事件列表创建
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// 解析以空白分隔的记号流，任一记号出错则整体失败
    pub fn from_csa(stream: &str) -> Result<Self, ParseError> {
        let events = stream
            .split_whitespace()
            .map(Event::from_csa)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { events })
    }

    /// 生成以单个空格分隔的记号流
    pub fn to_csa(&self) -> Result<String, FormatError> {
        let tokens = self
            .events
            .iter()
            .map(Event::to_csa)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tokens.join(TOKEN_SEPARATOR))
    }

    /// 全部事件
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// 事件数量
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// 全部走法
    pub fn moves(&self) -> impl Iterator<Item = &MoveEvent> {
        self.events.iter().filter_map(|e| match e {
            Event::Move(mv) => Some(mv),
            _ => None,
        })
    }

    /// 终局事件（如有）
    pub fn outcome(&self) -> Option<&ResignEvent> {
        self.events.iter().find_map(|e| match e {
            Event::Resign(resign) => Some(resign),
            _ => None,
        })
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
