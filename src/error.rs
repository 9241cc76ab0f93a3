//! 駒・局面・sfen 処理のエラー。
//!
//! どれも局所的に回復可能なもので、プロセスを終了させる理由にはならない。

use crate::shogi::Piece;

/// 駒・局面・sfen 処理のエラー。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShogiError {
    /// USI の駒文字として解釈できない文字。
    #[error("unknown piece code: {0:?}")]
    UnknownPieceCode(char),

    /// 成れない駒を成らせようとした。
    #[error("not promotable piece: {0:?}")]
    NotPromotable(Piece),

    /// sfen 盤面文字列が不正。
    #[error("malformed board field: {0}")]
    MalformedBoardField(String),

    /// sfen 手駒文字列が不正。
    #[error("malformed hand field: {0}")]
    MalformedHandField(String),

    /// sfen 手数文字列が不正。
    #[error("malformed move number: {0}")]
    MalformedMoveNumber(String),

    /// 必要なフィールドが見つからないまま入力が終わった。
    #[error("unexpected end of input: {0} not found")]
    UnexpectedEndOfInput(&'static str),

    /// 関数の事前条件を満たさない引数。
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// 局面文字列の後ろに余分なトークンがある。
    #[error("trailing input: {0}")]
    TrailingInput(String),
}

pub type ShogiResult<T> = Result<T, ShogiError>;
