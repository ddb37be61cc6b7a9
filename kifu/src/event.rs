//! 棋谱事件
//!
//! 每个记号对应一个事件，按以下优先级分类：
//! 1. `GOTE_WIN` 前缀：后手胜
//! 2. `SENTE_WIN` 前缀：先手胜
//! 3. `DRAW` 前缀：和棋（暂不支持）
//! 4. 其余为定长走法：`[1 阵营][2 起点或 00][2 终点][2 棋子]`

use serde::{Deserialize, Serialize};

use crate::constants::{DRAW, GOTE_WIN, MOVE_TOKEN_LEN, NO_SQUARE, SENTE_WIN};
use crate::error::{FormatError, ParseError};
use crate::piece::{Color, Piece};
use crate::square::{format_square, Square};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEvent {
    /// 走棋方
    pub color: Color,
    /// 起始格，打入时为 None
    #[serde(rename = "srcSquare")]
    pub src_square: Option<Square>,
    /// 目标格
    #[serde(rename = "dstSquare")]
    pub dst_square: Square,
    /// 走后的棋子
    #[serde(rename = "dstPiece")]
    pub piece: Piece,
    /// 消耗时间（秒），预留字段，解析结果始终为 0
    pub time: u32,
}

impl MoveEvent {
    /// 创建盘上走法
    pub fn new(color: Color, from: Square, to: Square, piece: Piece) -> Self {
        Self {
            color,
            src_square: Some(from),
            dst_square: to,
            piece,
            time: 0,
        }
    }

    /// 创建打入走法
    pub fn drop(color: Color, to: Square, piece: Piece) -> Self {
        Self {
            color,
            src_square: None,
            dst_square: to,
            piece,
            time: 0,
        }
    }

    /// 是否为打入
    pub fn is_drop(&self) -> bool {
        self.src_square.is_none()
    }

    fn from_csa(token: &str) -> Result<Self, ParseError> {
        if token.len() < MOVE_TOKEN_LEN {
            return Err(ParseError::InvalidTokenLength {
                token: token.to_string(),
                len: token.len(),
            });
        }
        // 前 7 字节为 ASCII 时，下面的所有切片都落在字符边界上
        let head = match token.get(..MOVE_TOKEN_LEN) {
            Some(head) if head.is_ascii() => head,
            _ => {
                return Err(ParseError::NonAsciiToken {
                    token: token.to_string(),
                })
            }
        };

        let color = Color::from_csa(&head[0..1])?;
        let src_square = match &head[1..3] {
            NO_SQUARE => None,
            src => Some(Square::from_csa(src)?),
        };
        let dst_square = Square::from_csa(&head[3..5])?;
        let piece = Piece::from_csa(&head[5..7])?;

        Ok(Self {
            color,
            src_square,
            dst_square,
            piece,
            time: 0,
        })
    }

    fn to_csa(&self) -> Result<String, FormatError> {
        if self.time != 0 {
            return Err(FormatError::UnrepresentableTime { time: self.time });
        }
        Ok(format!(
            "{}{}{}{}",
            self.color.to_csa(),
            format_square(self.src_square.as_ref()),
            self.dst_square.to_csa(),
            self.piece.to_csa()
        ))
    }
}

/// 终局（认输）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResignEvent {
    /// 认输（落败）的一方：`GOTE_WIN` 记为先手，`SENTE_WIN` 记为后手
    pub color: Color,
}

impl ResignEvent {
    /// 获胜方
    pub fn winner(&self) -> Color {
        self.color.opponent()
    }

    fn to_csa(&self) -> &'static str {
        match self.color {
            Color::Black => GOTE_WIN,
            Color::White => SENTE_WIN,
        }
    }
}

/// 棋谱事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Event {
    /// 走法
    Move(MoveEvent),
    /// 认输
    Resign(ResignEvent),
    /// 和棋（预留，解析器不会产生）
    Draw,
}

impl Event {
    /// 解析单个记号
    pub fn from_csa(token: &str) -> Result<Event, ParseError> {
        if token.starts_with(GOTE_WIN) {
            return Ok(Event::Resign(ResignEvent {
                color: Color::Black,
            }));
        }
        if token.starts_with(SENTE_WIN) {
            return Ok(Event::Resign(ResignEvent {
                color: Color::White,
            }));
        }
        if token.starts_with(DRAW) {
            return Err(ParseError::NotImplemented { feature: "draw" });
        }
        MoveEvent::from_csa(token).map(Event::Move)
    }

    /// 生成单个记号
    pub fn to_csa(&self) -> Result<String, FormatError> {
        match self {
            Event::Move(mv) => mv.to_csa(),
            Event::Resign(resign) => Ok(resign.to_csa().to_string()),
            Event::Draw => Err(FormatError::NotImplemented { feature: "draw" }),
        }
    }

    /// 走棋方或认输方
    pub fn color(&self) -> Option<Color> {
        match self {
            Event::Move(mv) => Some(mv.color),
            Event::Resign(resign) => Some(resign.color),
            Event::Draw => None,
        }
    }
}

impl From<MoveEvent> for Event {
    fn from(mv: MoveEvent) -> Self {
        Event::Move(mv)
    }
}

impl From<ResignEvent> for Event {
    fn from(resign: ResignEvent) -> Self {
        Event::Resign(resign)
    }
}
