//! 错误类型定义

use thiserror::Error;

/// 棋谱解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// 无效的阵营符号
    #[error("Invalid color token: {token:?}")]
    InvalidColorToken { token: String },

    /// 无效的格子数字（必须是 1-9）
    #[error("Invalid square number: {token:?}")]
    InvalidSquareNumber { token: String },

    /// 格子坐标长度错误
    #[error("Invalid square length: {len} (expected 2)")]
    InvalidSquareLength { len: usize },

    /// 未知的棋子代码
    #[error("Unknown piece code: {code:?}")]
    UnknownPieceCode { code: String },

    /// 记号过短
    #[error("Invalid token length: {token:?} has {len} bytes (min: 7)")]
    InvalidTokenLength { token: String, len: usize },

    /// 记号的定长字段中含有非 ASCII 字符
    #[error("Non-ASCII characters in token: {token:?}")]
    NonAsciiToken { token: String },

    /// 暂不支持的记号
    #[error("Not implemented: {feature}")]
    NotImplemented { feature: &'static str },
}

impl ParseError {
    /// 是否属于"功能未实现"类错误（而不是输入格式错误）
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ParseError::NotImplemented { .. })
    }
}

/// 棋谱生成错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// 暂不支持的事件
    #[error("Not implemented: {feature}")]
    NotImplemented { feature: &'static str },

    /// 定长记号无法表示消耗时间
    #[error("Elapsed time cannot be represented in a move token: {time}")]
    UnrepresentableTime { time: u32 },
}
