use log::warn;

use crate::error::{ShogiError, ShogiResult};
use crate::position::Position;
use crate::shogi::*;

/// sfen 文字列 (盤面、手番、手駒、手数の 4 フィールド) をデコードし、局面を返す。
/// 構文はチェックするが、合法性チェックは一切行わない。
///
/// 文字列の先頭と末尾の空白は無視される。
pub fn sfen_decode(s: impl AsRef<str>) -> ShogiResult<Position> {
    // 先頭と末尾の空白は無視する。
    let s = s.as_ref().trim();

    let mut tokens = s.split_ascii_whitespace();

    let pos = sfen_decode_from_iter(&mut tokens)?;

    if let Some(token) = tokens.next() {
        return Err(ShogiError::TrailingInput(format!(
            "sfen string has redundant token: {}",
            token
        )));
    }

    Ok(pos)
}

/// USI の position コマンドの引数をデコードし、(局面, 指し手文字列の配列) を返す。
///
/// 受け付ける形式は "startpos [moves ...]" または "sfen <sfen> [moves ...]"。
/// 最初のトークンが "position" の場合、それは単に無視される。
/// 指し手は解釈せず、トークンをそのまま返す。
pub fn sfen_decode_position_command(s: impl AsRef<str>) -> ShogiResult<(Position, Vec<String>)> {
    let s = s.as_ref().trim();

    let mut tokens = s.split_ascii_whitespace().peekable();

    // 外部アプリは "position" を付けたり付けなかったりまちまちなので、それへの対処。
    if tokens.peek() == Some(&"position") {
        tokens.next();
    }

    let magic = tokens
        .next()
        .ok_or(ShogiError::UnexpectedEndOfInput("position string"))?;

    let pos = match magic {
        "startpos" => Position::startpos(),
        "sfen" => sfen_decode_from_iter(&mut tokens)?,
        _ => {
            return Err(ShogiError::InvalidArgument(format!(
                "invalid position string magic: {}",
                magic
            )))
        }
    };

    let mvs = match tokens.next() {
        None => vec![],
        Some("moves") => tokens.map(str::to_owned).collect(),
        Some(token) => {
            return Err(ShogiError::TrailingInput(format!(
                r#""moves" expected, but got {}"#,
                token
            )))
        }
    };

    Ok((pos, mvs))
}

impl std::str::FromStr for Position {
    type Err = ShogiError;

    fn from_str(s: &str) -> ShogiResult<Self> {
        sfen_decode(s)
    }
}

fn sfen_decode_from_iter<'a, I>(it: &mut I) -> ShogiResult<Position>
where
    I: Iterator<Item = &'a str>,
{
    let board = sfen_decode_board(it.next().ok_or(ShogiError::UnexpectedEndOfInput("board"))?)?;
    let side_to_move =
        sfen_decode_side(it.next().ok_or(ShogiError::UnexpectedEndOfInput("side to move"))?);
    let hands = sfen_decode_hands(it.next().ok_or(ShogiError::UnexpectedEndOfInput("hands"))?)?;
    let ply = sfen_decode_ply(it.next().ok_or(ShogiError::UnexpectedEndOfInput("move number"))?)?;

    Ok(Position::new(side_to_move, board, hands, ply))
}

/// sfen 盤面文字列をデコードし、その盤面を返す。合法性チェックは一切行わない。
fn sfen_decode_board(s: &str) -> ShogiResult<Board> {
    let mut board = Board::empty();

    let mut it = s.split('/');

    for rank in Rank::iter() {
        let rank_s = it.next().ok_or_else(|| {
            ShogiError::MalformedBoardField("board string must have exactly 9 ranks".to_owned())
        })?;
        sfen_decode_board_rank(rank_s, rank, &mut board)?;
    }

    if let Some(s) = it.next() {
        return Err(ShogiError::MalformedBoardField(format!(
            "board string has redundant rank: {}",
            s
        )));
    }

    Ok(board)
}

fn sfen_decode_board_rank(s: &str, rank: Rank, board: &mut Board) -> ShogiResult<()> {
    fn malformed(msg: impl Into<String>) -> ShogiError {
        ShogiError::MalformedBoardField(msg.into())
    }

    #[derive(Debug)]
    struct State<'a> {
        board: &'a mut Board,
        file: File,
        rank: Rank,
        promo: bool,
    }
    impl<'a> State<'a> {
        fn new(board: &'a mut Board, rank: Rank) -> Self {
            Self {
                board,
                rank,
                file: FILE_9,
                promo: false,
            }
        }
        fn update(&mut self, c: char) -> ShogiResult<()> {
            match c {
                '+' => {
                    if self.promo {
                        return Err(malformed("double '+' is not allowed"));
                    }
                    self.check_rank_overflow(1)?;
                    self.promo = true;
                }
                '1'..='9' => {
                    if self.promo {
                        return Err(malformed("'+' cannot be placed before digit"));
                    }
                    let n = c as i32 - '0' as i32;
                    self.check_rank_overflow(n)?;
                    // 空きマスは盤面作成時点で NO_PIECE になっている。
                    self.file -= n;
                }
                _ => {
                    let mut pc = Piece::from_usi_char(c)
                        .map_err(|_| malformed(format!("invalid board piece char: {}", c)))?;
                    self.check_rank_overflow(1)?;
                    if self.promo {
                        pc = pc.promote()?;
                        self.promo = false;
                    }
                    let sq = Square::from_file_rank(self.file, self.rank);
                    self.board[sq] = pc;
                    self.file -= 1;
                }
            }
            Ok(())
        }
        fn finalize(&self) -> ShogiResult<()> {
            if self.promo {
                return Err(malformed("remaining promotion flag"));
            }
            if self.file + 1 != FILE_1 {
                return Err(malformed(format!(
                    "rank {} must have exactly 9 files",
                    self.rank.inner() + 1
                )));
            }
            Ok(())
        }
        fn check_rank_overflow(&self, file_sub: i32) -> ShogiResult<()> {
            if self.file - file_sub + 1 < FILE_1 {
                return Err(malformed(format!(
                    "rank {} overflows 9 files",
                    self.rank.inner() + 1
                )));
            }
            Ok(())
        }
    }

    let mut state = State::new(board, rank);
    for c in s.chars() {
        state.update(c)?;
    }
    state.finalize()?;

    Ok(())
}

/// sfen 手番文字列をデコードし、手番の陣営を返す。
///
/// "b" 以外は全て後手とみなす。"w" 以外の場合は警告ログを出す。
fn sfen_decode_side(s: &str) -> Color {
    match s {
        "b" => BLACK,
        "w" => WHITE,
        _ => {
            warn!("invalid side string {:?}, treated as white", s);
            WHITE
        }
    }
}

/// sfen 手駒文字列をデコードし、両陣営の手駒を返す。合法性チェックは一切行わない。
fn sfen_decode_hands(s: &str) -> ShogiResult<Hands> {
    fn malformed(msg: impl Into<String>) -> ShogiError {
        ShogiError::MalformedHandField(msg.into())
    }

    if s == "-" {
        return Ok(Hands::default());
    }

    #[derive(Debug)]
    struct State {
        hands: Hands,
        count: Option<u32>,
    }
    impl State {
        fn new() -> Self {
            Self {
                hands: Hands::default(),
                count: None,
            }
        }
        fn update(&mut self, c: char) -> ShogiResult<()> {
            match c {
                '0'..='9' => {
                    let d = c as u32 - '0' as u32;
                    let count = self
                        .count
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(d))
                        .ok_or_else(|| malformed("count is too large"))?;
                    self.count = Some(count);
                }
                _ => {
                    let pc = Piece::from_usi_char(c)
                        .map_err(|_| malformed(format!("invalid hand piece char: {}", c)))?;
                    if !pc.is_hand() {
                        return Err(malformed(format!("{:?} cannot be a hand piece", pc)));
                    }
                    // 枚数指定がない(または 0 の)場合は 1 枚とみなす。
                    let n = self.count.take().unwrap_or(0).max(1);
                    self.hands[pc] = self.hands[pc]
                        .checked_add(n)
                        .ok_or_else(|| malformed("hand overflow"))?;
                }
            }
            Ok(())
        }
        fn finalize(&self) -> ShogiResult<()> {
            if self.count.is_some() {
                return Err(malformed("remaining count specifier"));
            }
            Ok(())
        }
    }

    let mut state = State::new();
    for c in s.chars() {
        state.update(c)?;
    }
    state.finalize()?;

    Ok(state.hands)
}

/// sfen 手数文字列をデコードし、その手数を返す。
fn sfen_decode_ply(s: &str) -> ShogiResult<u32> {
    // 手数は ASCII 数字のみからなる。符号は認めない。
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShogiError::MalformedMoveNumber(format!(
            "ply must be a decimal number: {}",
            s
        )));
    }

    let ply: u32 = s
        .parse()
        .map_err(|e| ShogiError::MalformedMoveNumber(format!("{}: {}", s, e)))?;
    if ply == 0 {
        return Err(ShogiError::MalformedMoveNumber(
            "ply must be positive".to_owned(),
        ));
    }

    Ok(ply)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sfen::SFEN_STARTPOS;

    #[test]
    fn test_startpos() {
        assert_eq!(sfen_decode(SFEN_STARTPOS).unwrap(), Position::startpos());
    }

    #[test]
    fn test_board_digits() {
        for n in 1..=8 {
            let rank = if n == 8 {
                "8P".to_owned()
            } else {
                format!("{}P{}", n, 8 - n)
            };
            let sfen = format!("{}/9/9/9/9/9/9/9/9 b - 1", rank);
            let pos = sfen_decode(&sfen).unwrap();

            let file = File::iter().rev().nth(n).unwrap();
            for sq in Square::iter() {
                let expected = if sq == Square::from_file_rank(file, RANK_1) {
                    B_PAWN
                } else {
                    NO_PIECE
                };
                assert_eq!(pos.board()[sq], expected, "{}", sfen);
            }
        }
    }

    #[test]
    fn test_board_promoted() {
        let pos = sfen_decode("8+r/9/9/9/9/9/9/9/+PK7 w - 10").unwrap();
        assert_eq!(pos.board()[Square::from_file_rank(FILE_1, RANK_1)], W_DRAGON);
        assert_eq!(pos.board()[Square::from_file_rank(FILE_9, RANK_9)], B_PRO_PAWN);
        assert_eq!(pos.board()[Square::from_file_rank(FILE_8, RANK_9)], B_KING);
        assert_eq!(pos.side_to_move(), WHITE);
        assert_eq!(pos.ply(), 10);
    }

    #[test]
    fn test_board_malformed() {
        let cases = [
            // 8 筋しかない。
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPP/1B5R1/LNSGKGSNL b - 1",
            "lnsgkgsnl/1r4b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
            // 10 筋ある。
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/91/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
            // 段数が合わない。
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
            // 未知の駒文字。
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGXGSNL b - 1",
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/0PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
            // '+' の誤用。
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R+/LNSGKGSNL b - 1",
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSN+ b - 1",
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/+1B5R1/LNSGKGSNL b - 1",
            "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1++B5R1/LNSGKGSNL b - 1",
        ];

        for sfen in cases {
            assert!(
                matches!(sfen_decode(sfen), Err(ShogiError::MalformedBoardField(_))),
                "{}",
                sfen
            );
        }
    }

    #[test]
    fn test_board_not_promotable() {
        assert_eq!(
            sfen_decode("4k4/9/9/9/9/9/9/9/3+GK4 b - 1"),
            Err(ShogiError::NotPromotable(B_GOLD))
        );
    }

    #[test]
    fn test_side() {
        let pos = sfen_decode("4k4/9/9/9/9/9/9/9/4K4 w - 1").unwrap();
        assert_eq!(pos.side_to_move(), WHITE);

        // "b" 以外は後手とみなす。
        let pos = sfen_decode("4k4/9/9/9/9/9/9/9/4K4 x - 1").unwrap();
        assert_eq!(pos.side_to_move(), WHITE);
    }

    #[test]
    fn test_hands() {
        let hand_of = |s: &str, pc: Piece| {
            let sfen = format!("4k4/9/9/9/9/9/9/9/4K4 b {} 1", s);
            sfen_decode(sfen).unwrap().hands()[pc]
        };

        assert_eq!(hand_of("P", B_PAWN), 1);
        assert_eq!(hand_of("1P", B_PAWN), 1);
        assert_eq!(hand_of("0P", B_PAWN), 1);
        assert_eq!(hand_of("3P", B_PAWN), 3);
        assert_eq!(hand_of("18P", B_PAWN), 18);
        assert_eq!(hand_of("R2b10p", W_BISHOP), 2);
        assert_eq!(hand_of("R2b10p", W_PAWN), 10);
        assert_eq!(hand_of("R2b10p", B_ROOK), 1);

        let pos = sfen_decode("4k4/9/9/9/9/9/9/9/4K4 b - 1").unwrap();
        assert!(pos.hands().iter().all(|&n| n == 0));
    }

    #[test]
    fn test_hands_malformed() {
        for hands in ["X", "3", "P2", "K", "+P", "99999999999P", "-P"] {
            let sfen = format!("4k4/9/9/9/9/9/9/9/4K4 b {} 1", hands);
            assert!(
                matches!(sfen_decode(&sfen), Err(ShogiError::MalformedHandField(_))),
                "{}",
                sfen
            );
        }
    }

    #[test]
    fn test_ply_malformed() {
        // 手数が不正な場合はデコード全体を失敗させる。
        for ply in ["x", "-1", "0", "1.5", "+5", "5+", "\u{ff15}"] {
            let sfen = format!("4k4/9/9/9/9/9/9/9/4K4 b - {}", ply);
            assert!(
                matches!(sfen_decode(&sfen), Err(ShogiError::MalformedMoveNumber(_))),
                "{}",
                sfen
            );
        }
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            sfen_decode("lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL"),
            Err(ShogiError::UnexpectedEndOfInput("side to move"))
        );
        assert_eq!(
            sfen_decode("lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b -"),
            Err(ShogiError::UnexpectedEndOfInput("move number"))
        );
        assert_eq!(sfen_decode("  "), Err(ShogiError::UnexpectedEndOfInput("board")));
    }

    #[test]
    fn test_trailing() {
        assert!(matches!(
            sfen_decode(format!("{} moves", SFEN_STARTPOS)),
            Err(ShogiError::TrailingInput(_))
        ));
    }

    #[test]
    fn test_position_command() {
        let (pos, mvs) = sfen_decode_position_command("startpos").unwrap();
        assert_eq!(pos, Position::startpos());
        assert!(mvs.is_empty());

        let (pos, mvs) =
            sfen_decode_position_command("position startpos moves 7g7f 3c3d").unwrap();
        assert_eq!(pos, Position::startpos());
        assert_eq!(mvs, ["7g7f", "3c3d"]);

        let (pos, mvs) =
            sfen_decode_position_command("sfen 4k4/9/9/9/9/9/9/9/4K4 w 2P 7 moves").unwrap();
        assert_eq!(pos.side_to_move(), WHITE);
        assert_eq!(pos.hands()[B_PAWN], 2);
        assert_eq!(pos.ply(), 7);
        assert!(mvs.is_empty());
    }

    #[test]
    fn test_position_command_malformed() {
        assert_eq!(
            sfen_decode_position_command("position"),
            Err(ShogiError::UnexpectedEndOfInput("position string"))
        );
        assert!(matches!(
            sfen_decode_position_command("startpos 7g7f"),
            Err(ShogiError::TrailingInput(_))
        ));
        assert!(matches!(
            sfen_decode_position_command("hirate"),
            Err(ShogiError::InvalidArgument(_))
        ));
        assert_eq!(
            sfen_decode_position_command("sfen 4k4/9/9/9/9/9/9/9/4K4 b"),
            Err(ShogiError::UnexpectedEndOfInput("hands"))
        );
    }
}
