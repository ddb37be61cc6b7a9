//! 棋谱记号常量定义

/// 先手（黑方）符号
pub const BLACK_SIGN: &str = "+";

/// 后手（白方）符号
pub const WHITE_SIGN: &str = "-";

/// 后手胜利标记（先手认输）
pub const GOTE_WIN: &str = "GOTE_WIN";

/// 先手胜利标记（后手认输）
pub const SENTE_WIN: &str = "SENTE_WIN";

/// 和棋标记（暂不支持）
pub const DRAW: &str = "DRAW";

/// 打入走法的起始格哨兵值
pub const NO_SQUARE: &str = "00";

/// 走法记号的最小长度：`[1 阵营][2 起点][2 终点][2 棋子]`
pub const MOVE_TOKEN_LEN: usize = 7;

/// 格子坐标的长度
pub const SQUARE_LEN: usize = 2;

/// 棋子代码的长度
pub const PIECE_CODE_LEN: usize = 2;

/// 棋盘边长
pub const BOARD_SIZE: u8 = 9;

/// 记号之间的分隔符
pub const TOKEN_SEPARATOR: &str = " ";
