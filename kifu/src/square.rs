//! 棋盘格子定义
//!
//! 格子由两位数字表示：`<筋><段>`，各为 1-9。
//! 打入走法没有起始格，记为 `00`，由 [`format_square`] 处理。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, NO_SQUARE, SQUARE_LEN};
use crate::error::ParseError;

/// 格子数字（筋或段），始终在 1-9 之间
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquareNumber(u8);

impl SquareNumber {
    /// 创建新的格子数字
    pub fn new(n: u8) -> Option<Self> {
        if Self::is_valid(n) {
            Some(Self(n))
        } else {
            None
        }
    }

    /// 检查数字是否在棋盘范围内
    pub fn is_valid(n: u8) -> bool {
        (1..=BOARD_SIZE).contains(&n)
    }

    /// 数值
    pub fn get(&self) -> u8 {
        self.0
    }

    /// 从单个数字字符解析，`0` 与非数字一律拒绝
    pub fn from_csa(token: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidSquareNumber {
            token: token.to_string(),
        };
        let mut chars = token.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(invalid()),
        };
        c.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or_else(invalid)
    }
}

impl fmt::Display for SquareNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[u8; 2]", try_from = "[u8; 2]")]
pub struct Square {
    /// 筋（1-9，从右往左）
    pub file: SquareNumber,
    /// 段（1-9，从上往下）
    pub rank: SquareNumber,
}

impl Square {
    /// 创建新格子
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        Some(Self {
            file: SquareNumber::new(file)?,
            rank: SquareNumber::new(rank)?,
        })
    }

    /// 从两位数字解析
    pub fn from_csa(token: &str) -> Result<Self, ParseError> {
        if token.len() != SQUARE_LEN {
            return Err(ParseError::InvalidSquareLength { len: token.len() });
        }
        // 长度为 2 字节但不是两个 ASCII 字符时，`get` 返回 None
        let (file, rank) = match (token.get(..1), token.get(1..)) {
            (Some(file), Some(rank)) => (file, rank),
            _ => {
                return Err(ParseError::InvalidSquareNumber {
                    token: token.to_string(),
                })
            }
        };
        Ok(Self {
            file: SquareNumber::from_csa(file)?,
            rank: SquareNumber::from_csa(rank)?,
        })
    }

    /// 获取两位数字表示
    pub fn to_csa(&self) -> String {
        format!("{}{}", self.file, self.rank)
    }
}

/// 格式化可能为空的格子，空格子（打入）记为 `00`
pub fn format_square(square: Option<&Square>) -> String {
    match square {
        Some(sq) => sq.to_csa(),
        None => NO_SQUARE.to_string(),
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_csa(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl From<Square> for [u8; 2] {
    fn from(sq: Square) -> Self {
        [sq.file.get(), sq.rank.get()]
    }
}

impl TryFrom<[u8; 2]> for Square {
    type Error = String;

    fn try_from([file, rank]: [u8; 2]) -> Result<Self, Self::Error> {
        Square::new(file, rank).ok_or_else(|| format!("Invalid square: ({}, {})", file, rank))
    }
}
