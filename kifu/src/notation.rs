//! 日文棋谱表示法
//!
//! 格式：<先后手标记><筋（全角数字）><段（汉字数字）><棋子><打>
//! 例：`▲７六歩`、`△５五角打`
//!
//! 不记录棋盘状态，因此不区分"成"与"不成"，也不使用"同"。

use crate::event::{Event, MoveEvent};
use crate::record::Record;

/// 全角数字（筋）
const FILE_NUMBERS: [char; 9] = ['１', '２', '３', '４', '５', '６', '７', '８', '９'];

/// 汉字数字（段）
const RANK_NUMBERS: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 日文表示法
pub struct Notation;

impl Notation {
    /// 将走法转换为日文表示法
    pub fn to_japanese(mv: &MoveEvent) -> String {
        let file = FILE_NUMBERS[(mv.dst_square.file.get() - 1) as usize];
        let rank = RANK_NUMBERS[(mv.dst_square.rank.get() - 1) as usize];
        let drop = if mv.is_drop() { "打" } else { "" };
        format!(
            "{}{}{}{}{}",
            mv.color.mark(),
            file,
            rank,
            mv.piece.display_name(),
            drop
        )
    }

    /// 将事件转换为日文表示法
    pub fn event_to_japanese(event: &Event) -> String {
        match event {
            Event::Move(mv) => Self::to_japanese(mv),
            Event::Resign(resign) => format!("{}投了", resign.color.mark()),
            Event::Draw => "引き分け".to_string(),
        }
    }

    /// 生成带手数的文本棋谱，每行一手
    pub fn record_to_text(record: &Record) -> String {
        let mut output = String::new();
        for (i, event) in record.iter().enumerate() {
            output.push_str(&format!("{:>4} {}\n", i + 1, Self::event_to_japanese(event)));
        }
        output
    }
}
