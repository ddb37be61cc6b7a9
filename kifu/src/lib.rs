//! 将棋棋谱编解码库
//!
//! 包含:
//! - 阵营、格子、棋子等核心数据结构
//! - 定长记号（`+7776FU`、`GOTE_WIN` 等）的解析与生成
//! - 棋谱记录（JSON 存储）
//! - 日文棋谱表示法

mod constants;
mod csa;
mod error;
mod event;
mod notation;
mod piece;
mod record;
mod square;

pub use constants::*;
pub use csa::Csa;
pub use error::{FormatError, ParseError};
pub use event::{Event, MoveEvent, ResignEvent};
pub use notation::Notation;
pub use piece::{Color, Piece};
pub use record::Record;
pub use square::{format_square, Square, SquareNumber};
