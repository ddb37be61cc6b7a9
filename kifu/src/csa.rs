//! 棋谱记号流编解码
//!
//! 对外只提供两个操作：解析记号流为 [`Record`]，以及将 [`Record`] 还原为记号流。
//! 纯计算，无 I/O，可在多线程中并发调用。

use crate::error::{FormatError, ParseError};
use crate::record::Record;

/// 记号流格式处理
pub struct Csa;

impl Csa {
    /// 解析记号流
    pub fn parse(stream: &str) -> Result<Record, ParseError> {
        Record::from_csa(stream)
    }

    /// 生成记号流
    pub fn format(record: &Record) -> Result<String, FormatError> {
        record.to_csa()
    }
}
