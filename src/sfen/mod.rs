mod decode;
mod encode;

pub use self::decode::*;
pub use self::encode::*;

/// 平手初期局面の sfen 文字列。
pub const SFEN_STARTPOS: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";
