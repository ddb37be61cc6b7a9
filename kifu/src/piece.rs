//! 棋子与阵营定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BLACK_SIGN, PIECE_CODE_LEN, WHITE_SIGN};
use crate::error::ParseError;

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// 先手（记号 `+`）
    Black,
    /// 后手（记号 `-`）
    White,
}

impl Color {
    /// 获取对方阵营
    pub fn opponent(&self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 从阵营符号解析
    pub fn from_csa(token: &str) -> Result<Color, ParseError> {
        match token {
            BLACK_SIGN => Ok(Color::Black),
            WHITE_SIGN => Ok(Color::White),
            _ => Err(ParseError::InvalidColorToken {
                token: token.to_string(),
            }),
        }
    }

    /// 获取阵营符号
    pub fn to_csa(&self) -> &'static str {
        match self {
            Color::Black => BLACK_SIGN,
            Color::White => WHITE_SIGN,
        }
    }

    /// 日文棋谱中的先后手标记
    pub fn mark(&self) -> char {
        match self {
            Color::Black => '▲',
            Color::White => '△',
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_csa(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_csa())
    }
}

/// 棋子（走后的棋子种类，含升变后的种类）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// 歩
    FU,
    /// 香
    KY,
    /// 桂
    KE,
    /// 銀
    GI,
    /// 金
    KI,
    /// 角
    KA,
    /// 飛
    HI,
    /// 玉
    OU,
    /// と（成歩）
    TO,
    /// 成香
    NY,
    /// 成桂
    NK,
    /// 成銀
    NG,
    /// 馬（成角）
    UM,
    /// 龍（成飛）
    RY,
}

impl Piece {
    /// 全部棋子
    pub const ALL: [Piece; 14] = [
        Piece::FU,
        Piece::KY,
        Piece::KE,
        Piece::GI,
        Piece::KI,
        Piece::KA,
        Piece::HI,
        Piece::OU,
        Piece::TO,
        Piece::NY,
        Piece::NK,
        Piece::NG,
        Piece::UM,
        Piece::RY,
    ];

    /// 从两字母代码解析
    pub fn from_csa(code: &str) -> Result<Piece, ParseError> {
        if code.len() != PIECE_CODE_LEN {
            return Err(ParseError::UnknownPieceCode {
                code: code.to_string(),
            });
        }
        Piece::ALL
            .iter()
            .copied()
            .find(|p| p.to_csa() == code)
            .ok_or_else(|| ParseError::UnknownPieceCode {
                code: code.to_string(),
            })
    }

    /// 获取两字母代码
    pub fn to_csa(&self) -> &'static str {
        match self {
            Piece::FU => "FU",
            Piece::KY => "KY",
            Piece::KE => "KE",
            Piece::GI => "GI",
            Piece::KI => "KI",
            Piece::KA => "KA",
            Piece::HI => "HI",
            Piece::OU => "OU",
            Piece::TO => "TO",
            Piece::NY => "NY",
            Piece::NK => "NK",
            Piece::NG => "NG",
            Piece::UM => "UM",
            Piece::RY => "RY",
        }
    }

    /// 是否为升变后的棋子
    pub fn is_promoted(&self) -> bool {
        matches!(
            self,
            Piece::TO | Piece::NY | Piece::NK | Piece::NG | Piece::UM | Piece::RY
        )
    }

    /// 升变后的棋子；金、玉及已升变的棋子返回 None
    pub fn promote(&self) -> Option<Piece> {
        match self {
            Piece::FU => Some(Piece::TO),
            Piece::KY => Some(Piece::NY),
            Piece::KE => Some(Piece::NK),
            Piece::GI => Some(Piece::NG),
            Piece::KA => Some(Piece::UM),
            Piece::HI => Some(Piece::RY),
            _ => None,
        }
    }

    /// 升变前的基础棋子
    pub fn unpromote(&self) -> Piece {
        match self {
            Piece::TO => Piece::FU,
            Piece::NY => Piece::KY,
            Piece::NK => Piece::KE,
            Piece::NG => Piece::GI,
            Piece::UM => Piece::KA,
            Piece::RY => Piece::HI,
            other => *other,
        }
    }

    /// 获取棋子显示的汉字
    pub fn display_name(&self) -> &'static str {
        match self {
            Piece::FU => "歩",
            Piece::KY => "香",
            Piece::KE => "桂",
            Piece::GI => "銀",
            Piece::KI => "金",
            Piece::KA => "角",
            Piece::HI => "飛",
            Piece::OU => "玉",
            Piece::TO => "と",
            Piece::NY => "成香",
            Piece::NK => "成桂",
            Piece::NG => "成銀",
            Piece::UM => "馬",
            Piece::RY => "龍",
        }
    }
}

impl FromStr for Piece {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Piece::from_csa(s)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_csa())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_csa() {
        assert_eq!(Color::from_csa("+"), Ok(Color::Black));
        assert_eq!(Color::from_csa("-"), Ok(Color::White));
        for token in ["+", "-"] {
            assert_eq!(Color::from_csa(token).unwrap().to_csa(), token);
        }
    }

    #[test]
    fn test_color_invalid() {
        for token in ["", "*", "++", "0", "＋"] {
            assert!(matches!(
                Color::from_csa(token),
                Err(ParseError::InvalidColorToken { .. })
            ));
        }
    }

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn test_piece_csa() {
        assert_eq!(Piece::from_csa("FU"), Ok(Piece::FU));
        assert_eq!(Piece::from_csa("RY"), Ok(Piece::RY));
        for piece in Piece::ALL {
            assert_eq!(Piece::from_csa(piece.to_csa()), Ok(piece));
        }
    }

    #[test]
    fn test_piece_unknown() {
        assert_eq!(
            Piece::from_csa("XX"),
            Err(ParseError::UnknownPieceCode {
                code: "XX".to_string()
            })
        );
        // 小写不被接受
        assert!(Piece::from_csa("fu").is_err());
        assert!(Piece::from_csa("F").is_err());
        assert!(Piece::from_csa("FUU").is_err());
    }

    #[test]
    fn test_piece_promotion() {
        assert_eq!(Piece::FU.promote(), Some(Piece::TO));
        assert_eq!(Piece::HI.promote(), Some(Piece::RY));
        assert_eq!(Piece::KI.promote(), None);
        assert_eq!(Piece::OU.promote(), None);
        assert_eq!(Piece::UM.promote(), None);

        let promoted: Vec<Piece> = Piece::ALL.into_iter().filter(|p| p.is_promoted()).collect();
        assert_eq!(promoted.len(), 6);
        for piece in promoted {
            assert_eq!(piece.unpromote().promote(), Some(piece));
        }
    }

    #[test]
    fn test_piece_display_name() {
        assert_eq!(Piece::FU.display_name(), "歩");
        assert_eq!(Piece::NK.display_name(), "成桂");
        assert_eq!(Piece::RY.display_name(), "龍");
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Piece::UM).unwrap(), "\"UM\"");
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"white\"");
        let piece: Piece = serde_json::from_str("\"NG\"").unwrap();
        assert_eq!(piece, Piece::NG);
    }
}
